#![allow(clippy::indexing_slicing)] // fixed-size arrays + message schedule

use traits::Digest;

const BLOCK_LEN: usize = 64;

const H0: [u32; 5] = [0x6745_2301, 0xefcd_ab89, 0x98ba_dcfe, 0x1032_5476, 0xc3d2_e1f0];

// Round constants, one per 20-round group (FIPS 180-4 §4.2.1).
const K: [u32; 4] = [0x5a82_7999, 0x6ed9_eba1, 0x8f1b_bcdc, 0xca62_c1d6];

/// SHA-1 (FIPS 180-4).
///
/// Collision-broken; kept for interoperability and HMAC-SHA1.
#[derive(Clone)]
pub struct Sha1 {
  state: [u32; 5],
  block: [u8; BLOCK_LEN],
  block_len: usize,
  bytes_hashed: u64,
}

impl Default for Sha1 {
  #[inline]
  fn default() -> Self {
    Self {
      state: H0,
      block: [0u8; BLOCK_LEN],
      block_len: 0,
      bytes_hashed: 0,
    }
  }
}

impl Sha1 {
  fn compress_block(state: &mut [u32; 5], block: &[u8; BLOCK_LEN]) {
    let mut w = [0u32; 80];
    for (i, c) in block.chunks_exact(4).enumerate() {
      w[i] = u32::from_be_bytes([c[0], c[1], c[2], c[3]]);
    }
    for i in 16..80 {
      w[i] = (w[i - 3] ^ w[i - 8] ^ w[i - 14] ^ w[i - 16]).rotate_left(1);
    }

    let mut a = state[0];
    let mut b = state[1];
    let mut c = state[2];
    let mut d = state[3];
    let mut e = state[4];

    for (i, &wi) in w.iter().enumerate() {
      let f = match i / 20 {
        0 => (b & c) | (!b & d),
        2 => (b & c) | (b & d) | (c & d),
        _ => b ^ c ^ d,
      };
      let t = a
        .rotate_left(5)
        .wrapping_add(f)
        .wrapping_add(e)
        .wrapping_add(K[i / 20])
        .wrapping_add(wi);
      e = d;
      d = c;
      c = b.rotate_left(30);
      b = a;
      a = t;
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);
  }

  fn finalize_inner(&self) -> [u8; 20] {
    let mut state = self.state;
    let mut block = self.block;
    let mut block_len = self.block_len;
    let total_len = self.bytes_hashed.wrapping_add(block_len as u64);

    block[block_len] = 0x80;
    block_len += 1;

    if block_len > 56 {
      block[block_len..].fill(0);
      Self::compress_block(&mut state, &block);
      block = [0u8; BLOCK_LEN];
      block_len = 0;
    }

    block[block_len..56].fill(0);

    let bit_len = total_len.wrapping_mul(8);
    block[56..64].copy_from_slice(&bit_len.to_be_bytes());
    Self::compress_block(&mut state, &block);

    let mut out = [0u8; 20];
    for (chunk, word) in out.chunks_exact_mut(4).zip(state) {
      chunk.copy_from_slice(&word.to_be_bytes());
    }
    out
  }
}

impl Digest for Sha1 {
  const OUTPUT_SIZE: usize = 20;
  const BLOCK_SIZE: usize = BLOCK_LEN;
  type Output = [u8; 20];

  #[inline]
  fn new() -> Self {
    Self::default()
  }

  fn update(&mut self, mut data: &[u8]) {
    if data.is_empty() {
      return;
    }

    if self.block_len != 0 {
      let take = core::cmp::min(BLOCK_LEN - self.block_len, data.len());
      self.block[self.block_len..self.block_len + take].copy_from_slice(&data[..take]);
      self.block_len += take;
      data = &data[take..];

      if self.block_len == BLOCK_LEN {
        let block = self.block;
        Self::compress_block(&mut self.state, &block);
        self.bytes_hashed = self.bytes_hashed.wrapping_add(BLOCK_LEN as u64);
        self.block_len = 0;
      }
    }

    let mut blocks = data.chunks_exact(BLOCK_LEN);
    for block in blocks.by_ref() {
      let mut full = [0u8; BLOCK_LEN];
      full.copy_from_slice(block);
      Self::compress_block(&mut self.state, &full);
      self.bytes_hashed = self.bytes_hashed.wrapping_add(BLOCK_LEN as u64);
    }

    let rest = blocks.remainder();
    if !rest.is_empty() {
      self.block[..rest.len()].copy_from_slice(rest);
      self.block_len = rest.len();
    }
  }

  #[inline]
  fn finalize(&self) -> Self::Output {
    self.finalize_inner()
  }

  #[inline]
  fn reset(&mut self) {
    *self = Self::default();
  }
}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::string::String;
  use core::fmt::Write;

  use super::Sha1;
  use traits::Digest as _;

  fn hex(bytes: &[u8]) -> String {
    let mut s = String::new();
    for &b in bytes {
      write!(&mut s, "{b:02x}").unwrap();
    }
    s
  }

  #[test]
  fn known_vectors() {
    // FIPS 180-4 short-message vectors.
    assert_eq!(hex(&Sha1::digest(b"")), "da39a3ee5e6b4b0d3255bfef95601890afd80709");
    assert_eq!(hex(&Sha1::digest(b"abc")), "a9993e364706816aba3e25717850c26c9cd0d89d");
    assert_eq!(
      hex(&Sha1::digest(b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq")),
      "84983e441c3bd26ebaae4aa1f95129e5e54670f1"
    );
  }

  #[test]
  fn streaming_matches_one_shot() {
    let data = [0x5au8; 300];
    let mut h = Sha1::new();
    h.update(&data[..1]);
    h.update(&data[1..77]);
    h.update(&data[77..]);
    assert_eq!(h.finalize(), Sha1::digest(&data));
  }
}
