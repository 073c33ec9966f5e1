#![allow(clippy::indexing_slicing)] // fixed-size arrays + round schedule

use traits::Digest;

const BLOCK_LEN: usize = 64;

const H0: [u32; 4] = [0x6745_2301, 0xefcd_ab89, 0x98ba_dcfe, 0x1032_5476];

// Per-round left-rotation amounts (RFC 1321), one row per round group.
const S: [[u32; 4]; 4] = [[7, 12, 17, 22], [5, 9, 14, 20], [4, 11, 16, 23], [6, 10, 15, 21]];

// K[i] = floor(abs(sin(i + 1)) * 2^32).
const K: [u32; 64] = [
  0xd76a_a478, 0xe8c7_b756, 0x2420_70db, 0xc1bd_ceee, 0xf57c_0faf, 0x4787_c62a, 0xa830_4613, 0xfd46_9501,
  0x6980_98d8, 0x8b44_f7af, 0xffff_5bb1, 0x895c_d7be, 0x6b90_1122, 0xfd98_7193, 0xa679_438e, 0x49b4_0821,
  0xf61e_2562, 0xc040_b340, 0x265e_5a51, 0xe9b6_c7aa, 0xd62f_105d, 0x0244_1453, 0xd8a1_e681, 0xe7d3_fbc8,
  0x21e1_cde6, 0xc337_07d6, 0xf4d5_0d87, 0x455a_14ed, 0xa9e3_e905, 0xfcef_a3f8, 0x676f_02d9, 0x8d2a_4c8a,
  0xfffa_3942, 0x8771_f681, 0x6d9d_6122, 0xfde5_380c, 0xa4be_ea44, 0x4bde_cfa9, 0xf6bb_4b60, 0xbebf_bc70,
  0x289b_7ec6, 0xeaa1_27fa, 0xd4ef_3085, 0x0488_1d05, 0xd9d4_d039, 0xe6db_99e5, 0x1fa2_7cf8, 0xc4ac_5665,
  0xf429_2244, 0x432a_ff97, 0xab94_23a7, 0xfc93_a039, 0x655b_59c3, 0x8f0c_cc92, 0xffef_f47d, 0x8584_5dd1,
  0x6fa8_7e4f, 0xfe2c_e6e0, 0xa301_4314, 0x4e08_11a1, 0xf753_7e82, 0xbd3a_f235, 0x2ad7_d2bb, 0xeb86_d391,
];

/// MD5 (RFC 1321).
///
/// Broken for collision resistance; kept for interoperability and HMAC-MD5.
#[derive(Clone)]
pub struct Md5 {
  state: [u32; 4],
  block: [u8; BLOCK_LEN],
  block_len: usize,
  bytes_hashed: u64,
}

impl Default for Md5 {
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

impl Md5 {
  fn compress_block(state: &mut [u32; 4], block: &[u8; BLOCK_LEN]) {
    let mut m = [0u32; 16];
    for (i, c) in block.chunks_exact(4).enumerate() {
      m[i] = u32::from_le_bytes([c[0], c[1], c[2], c[3]]);
    }

    let mut a = state[0];
    let mut b = state[1];
    let mut c = state[2];
    let mut d = state[3];

    for i in 0..64 {
      let (f, g) = match i / 16 {
        0 => ((b & c) | (!b & d), i),
        1 => ((d & b) | (!d & c), (5 * i + 1) % 16),
        2 => (b ^ c ^ d, (3 * i + 5) % 16),
        _ => (c ^ (b | !d), (7 * i) % 16),
      };
      let sum = a
        .wrapping_add(f)
        .wrapping_add(K[i])
        .wrapping_add(m[g])
        .rotate_left(S[i / 16][i % 4]);
      a = d;
      d = c;
      c = b;
      b = b.wrapping_add(sum);
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
  }

  fn finalize_inner(&self) -> [u8; 16] {
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
    block[56..64].copy_from_slice(&bit_len.to_le_bytes());
    Self::compress_block(&mut state, &block);

    let mut out = [0u8; 16];
    for (chunk, word) in out.chunks_exact_mut(4).zip(state) {
      chunk.copy_from_slice(&word.to_le_bytes());
    }
    out
  }
}

impl Digest for Md5 {
  const OUTPUT_SIZE: usize = 16;
  const BLOCK_SIZE: usize = BLOCK_LEN;
  type Output = [u8; 16];

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

  use super::Md5;
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
    // RFC 1321 appendix A.5.
    assert_eq!(hex(&Md5::digest(b"")), "d41d8cd98f00b204e9800998ecf8427e");
    assert_eq!(hex(&Md5::digest(b"a")), "0cc175b9c0f1b6a831c399e269772661");
    assert_eq!(hex(&Md5::digest(b"abc")), "900150983cd24fb0d6963f7d28e17f72");
    assert_eq!(hex(&Md5::digest(b"message digest")), "f96b697d7cb7938d525a2f31aaf161d0");
    assert_eq!(
      hex(&Md5::digest(b"abcdefghijklmnopqrstuvwxyz")),
      "c3fcd3d76192e4007dfb496cca67e13b"
    );
  }

  #[test]
  fn streaming_matches_one_shot() {
    let data = b"The quick brown fox jumps over the lazy dog";
    let mut h = Md5::new();
    for chunk in data.chunks(7) {
      h.update(chunk);
    }
    assert_eq!(h.finalize(), Md5::digest(data));
    assert_eq!(hex(&Md5::digest(data)), "9e107d9d372bb6826bd81d3542a419d6");
  }
}
