#![allow(clippy::indexing_slicing)] // offsets bounded by read lengths

//! One-shot hashing entry points.

use crate::error::Error;
use crate::hex;
use crate::registry::registry;

/// Hash a byte slice with the named algorithm.
pub fn hash(algorithm: &str, data: &[u8]) -> Result<Vec<u8>, Error> {
  let algo = registry().lookup(algorithm)?;
  let mut state = algo.new_state();
  state.update(data);
  let mut digest = vec![0u8; algo.digest_size()];
  state.finalize_into(&mut digest);
  Ok(digest)
}

/// [`hash`], hex-encoded.
pub fn hash_hex(algorithm: &str, data: &[u8]) -> Result<String, Error> {
  Ok(hex::encode(&hash(algorithm, data)?))
}

/// Hash everything a reader yields.
///
/// Read errors surface as [`Error::Io`]; nothing is finalized on failure.
pub fn hash_reader<R: std::io::Read>(algorithm: &str, mut reader: R) -> Result<Vec<u8>, Error> {
  let algo = registry().lookup(algorithm)?;
  let mut state = algo.new_state();
  let mut buf = [0u8; 1024];
  loop {
    match reader.read(&mut buf) {
      Ok(0) => break,
      Ok(n) => state.update(&buf[..n]),
      Err(err) if err.kind() == std::io::ErrorKind::Interrupted => continue,
      Err(err) => return Err(err.into()),
    }
  }
  let mut digest = vec![0u8; algo.digest_size()];
  state.finalize_into(&mut digest);
  Ok(digest)
}
