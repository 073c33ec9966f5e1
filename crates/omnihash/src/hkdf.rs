#![allow(clippy::indexing_slicing)] // offsets bounded by block arithmetic

//! HKDF (RFC 5869) over the engine's HMAC.

use zeroize::Zeroizing;

use crate::error::Error;
use crate::hmac::{pad_pair, round};
use crate::registry::registry;

/// Extract-then-expand key derivation.
///
/// Extract computes `PRK = HMAC(key = salt, message = ikm)`; an empty salt is
/// still a real HMAC key, zero-padded to the block size, never skipped.
/// Expand produces `T(i) = HMAC(PRK, T(i-1) || info || BYTE(i))` with `T(0)`
/// empty, concatenated and truncated to `length`.
///
/// A `length` of 0 means one digest size; the maximum is 255 digest blocks,
/// which keeps the single-byte block counter exact. The input keying
/// material must be non-empty.
pub fn hkdf(algorithm: &str, ikm: &[u8], salt: &[u8], info: &[u8], length: usize) -> Result<Vec<u8>, Error> {
  let algo = registry().lookup_crypto(algorithm)?;
  if ikm.is_empty() {
    return Err(Error::EmptyKeyMaterial);
  }

  let digest_size = algo.digest_size();
  let max = digest_size * 255;
  let length = if length == 0 { digest_size } else { length };
  if length > max {
    return Err(Error::OutputTooLong { requested: length, max });
  }

  let mut state = algo.new_state();

  // Extract.
  let (salt_inner, salt_outer) = pad_pair(algo, state.as_mut(), salt);
  let mut scratch = Zeroizing::new(vec![0u8; digest_size]);
  let mut prk = Zeroizing::new(vec![0u8; digest_size]);
  round(state.as_mut(), &salt_inner, ikm, &mut scratch);
  round(state.as_mut(), &salt_outer, &scratch, &mut prk);

  // Expand.
  let (k_inner, k_outer) = pad_pair(algo, state.as_mut(), &prk);
  let mut t = Zeroizing::new(vec![0u8; digest_size]);
  let mut out = vec![0u8; length];
  let rounds = length.div_ceil(digest_size);

  for i in 1..=rounds {
    state.reset();
    state.update(&k_inner);
    if i > 1 {
      // The first block has no previous-block prefix.
      state.update(&t);
    }
    state.update(info);
    state.update(&[i as u8]);
    state.finalize_into(&mut scratch);
    round(state.as_mut(), &k_outer, &scratch, &mut t);

    let offset = (i - 1) * digest_size;
    let take = usize::min(digest_size, length - offset);
    out[offset..offset + take].copy_from_slice(&t[..take]);
  }

  Ok(out)
}
