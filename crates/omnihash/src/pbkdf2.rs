#![allow(clippy::indexing_slicing)] // offsets bounded by block arithmetic

//! PBKDF2 (RFC 2898) over the engine's HMAC.

use zeroize::Zeroizing;

use crate::error::Error;
use crate::hmac::{pad_pair, round};
use crate::registry::registry;

/// Derive key material from a password.
///
/// For each output block `i`, computes `U_1 = HMAC(password, salt || BE32(i))`
/// and folds `iterations - 1` further rounds `U_j = HMAC(password, U_{j-1})`
/// into it by XOR. Blocks are concatenated and truncated to `length`.
///
/// A `length` of 0 asks for one digest-size block, an engine default, not an
/// RFC convention. `iterations` must be positive. Pad keys, the block
/// accumulators, and the salt+counter buffer are all erased on every exit
/// path.
pub fn pbkdf2(
  algorithm: &str,
  password: &[u8],
  salt: &[u8],
  iterations: u32,
  length: usize,
) -> Result<Vec<u8>, Error> {
  let algo = registry().lookup_crypto(algorithm)?;
  if iterations == 0 {
    return Err(Error::ZeroIterations);
  }
  let Some(salt_block_len) = salt.len().checked_add(4) else {
    return Err(Error::SaltTooLong);
  };

  let digest_size = algo.digest_size();
  let length = if length == 0 { digest_size } else { length };
  let blocks = length.div_ceil(digest_size);

  let mut state = algo.new_state();
  let (k_inner, k_outer) = pad_pair(algo, state.as_mut(), password);

  // salt || BE32(i); the counter bytes are patched per block.
  let mut salt_block = Zeroizing::new(vec![0u8; salt_block_len]);
  salt_block[..salt.len()].copy_from_slice(salt);

  let mut u = Zeroizing::new(vec![0u8; digest_size]);
  let mut scratch = Zeroizing::new(vec![0u8; digest_size]);
  let mut acc = Zeroizing::new(vec![0u8; digest_size]);

  let mut out = vec![0u8; length];
  for block in 1..=blocks {
    salt_block[salt.len()..].copy_from_slice(&(block as u32).to_be_bytes());

    // U_1
    round(state.as_mut(), &k_inner, &salt_block, &mut scratch);
    round(state.as_mut(), &k_outer, &scratch, &mut u);
    acc.copy_from_slice(&u);

    // U_2 .. U_iterations, folded in by XOR. Starting at 1 is intentional:
    // the first round is already in the accumulator.
    for _ in 1..iterations {
      round(state.as_mut(), &k_inner, &u, &mut scratch);
      round(state.as_mut(), &k_outer, &scratch, &mut u);
      for (a, b) in acc.iter_mut().zip(u.iter()) {
        *a ^= *b;
      }
    }

    let offset = (block - 1) * digest_size;
    let take = usize::min(digest_size, length - offset);
    out[offset..offset + take].copy_from_slice(&acc[..take]);
  }

  Ok(out)
}
