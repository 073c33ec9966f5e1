#![allow(clippy::indexing_slicing)] // offsets bounded by block/digest sizes

//! Keyed-hash message authentication (FIPS 198-1 construction).
//!
//! The pad-key helpers here are shared with the PBKDF2 and HKDF modules; all
//! of them hold prepared keys in [`Zeroizing`] buffers so the material is
//! erased on every exit path.

use zeroize::Zeroizing;

use crate::algorithm::{Algorithm, State};
use crate::error::Error;
use crate::hex;
use crate::registry::registry;

pub(crate) const IPAD: u8 = 0x36;

/// 0x6a = 0x36 ^ 0x5c: XORing a prepared inner pad with this yields the
/// outer pad without revisiting the raw key.
pub(crate) const OPAD_FLIP: u8 = 0x6a;

/// Build the inner pad key: the raw key (hashed down first if longer than a
/// block) zero-padded to `block_size`, then XORed with 0x36.
pub(crate) fn prep_key(algo: &Algorithm, state: &mut dyn State, key: &[u8]) -> Zeroizing<Vec<u8>> {
  let mut padded = Zeroizing::new(vec![0u8; algo.block_size()]);
  if key.len() > algo.block_size() {
    state.reset();
    state.update(key);
    state.finalize_into(&mut padded[..algo.digest_size()]);
    state.reset();
  } else {
    padded[..key.len()].copy_from_slice(key);
  }
  for byte in padded.iter_mut() {
    *byte ^= IPAD;
  }
  padded
}

/// Build both pad keys at once.
pub(crate) fn pad_pair(
  algo: &Algorithm,
  state: &mut dyn State,
  key: &[u8],
) -> (Zeroizing<Vec<u8>>, Zeroizing<Vec<u8>>) {
  let ipad = prep_key(algo, state, key);
  let mut opad = Zeroizing::new(vec![0u8; algo.block_size()]);
  for (o, i) in opad.iter_mut().zip(ipad.iter()) {
    *o = *i ^ OPAD_FLIP;
  }
  (ipad, opad)
}

/// One hashing round: digest of `pad || data` written into `out`.
pub(crate) fn round(state: &mut dyn State, pad: &[u8], data: &[u8], out: &mut [u8]) {
  state.reset();
  state.update(pad);
  state.update(data);
  state.finalize_into(out);
}

/// Compute an HMAC in one shot.
///
/// Unlike [`HashContext::new_hmac`](crate::HashContext::new_hmac), a
/// zero-length key is accepted here; it is padded to an all-zero block like
/// any other short key. The two entry points deliberately disagree.
pub fn hmac(algorithm: &str, data: &[u8], key: &[u8]) -> Result<Vec<u8>, Error> {
  let algo = registry().lookup_crypto(algorithm)?;
  let mut state = algo.new_state();
  let (ipad, opad) = pad_pair(algo, state.as_mut(), key);

  let mut inner = Zeroizing::new(vec![0u8; algo.digest_size()]);
  round(state.as_mut(), &ipad, data, &mut inner);

  let mut out = vec![0u8; algo.digest_size()];
  round(state.as_mut(), &opad, &inner, &mut out);
  Ok(out)
}

/// [`hmac`], hex-encoded.
pub fn hmac_hex(algorithm: &str, data: &[u8], key: &[u8]) -> Result<String, Error> {
  Ok(hex::encode(&hmac(algorithm, data, key)?))
}

/// Compute an HMAC over everything a reader yields.
///
/// Read errors surface as [`Error::Io`] after key material has been erased.
pub fn hmac_reader<R: std::io::Read>(algorithm: &str, mut reader: R, key: &[u8]) -> Result<Vec<u8>, Error> {
  let algo = registry().lookup_crypto(algorithm)?;
  let mut state = algo.new_state();
  let (ipad, opad) = pad_pair(algo, state.as_mut(), key);

  state.reset();
  state.update(&ipad);
  let mut buf = [0u8; 1024];
  loop {
    match reader.read(&mut buf) {
      Ok(0) => break,
      Ok(n) => state.update(&buf[..n]),
      Err(err) if err.kind() == std::io::ErrorKind::Interrupted => continue,
      Err(err) => return Err(err.into()),
    }
  }

  let mut inner = Zeroizing::new(vec![0u8; algo.digest_size()]);
  state.finalize_into(&mut inner);

  let mut out = vec![0u8; algo.digest_size()];
  round(state.as_mut(), &opad, &inner, &mut out);
  Ok(out)
}
