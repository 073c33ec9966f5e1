use traits::Digest;

const MOD_ADLER: u32 = 65521;

// Largest n such that 255n(n+1)/2 + (n+1)(MOD_ADLER-1) fits in u32, so the
// inner loop can defer the modulo (zlib's bound).
const NMAX: usize = 5552;

/// Adler-32 (RFC 1950), digest emitted big-endian.
#[derive(Clone)]
pub struct Adler32 {
  a: u32,
  b: u32,
}

impl Default for Adler32 {
  #[inline]
  fn default() -> Self {
    Self { a: 1, b: 0 }
  }
}

impl Adler32 {
  /// The checksum as an integer.
  #[inline]
  #[must_use]
  pub fn value(&self) -> u32 {
    (self.b << 16) | self.a
  }
}

impl Digest for Adler32 {
  const OUTPUT_SIZE: usize = 4;
  const BLOCK_SIZE: usize = 4;
  type Output = [u8; 4];

  #[inline]
  fn new() -> Self {
    Self::default()
  }

  fn update(&mut self, data: &[u8]) {
    let mut a = self.a;
    let mut b = self.b;
    for chunk in data.chunks(NMAX) {
      for &byte in chunk {
        a += byte as u32;
        b += a;
      }
      a %= MOD_ADLER;
      b %= MOD_ADLER;
    }
    self.a = a;
    self.b = b;
  }

  #[inline]
  fn finalize(&self) -> Self::Output {
    self.value().to_be_bytes()
  }

  #[inline]
  fn reset(&mut self) {
    *self = Self::default();
  }
}

#[cfg(test)]
mod tests {
  use super::Adler32;
  use traits::Digest as _;

  #[test]
  fn check_value() {
    assert_eq!(Adler32::digest(b""), 1u32.to_be_bytes());
    assert_eq!(Adler32::digest(b"Wikipedia"), 0x11e6_0398u32.to_be_bytes());
  }

  #[test]
  fn streaming_matches_one_shot() {
    let data = [7u8; 20_000];
    let mut h = Adler32::new();
    h.update(&data[..9_999]);
    h.update(&data[9_999..]);
    assert_eq!(h.finalize(), Adler32::digest(&data));
  }
}
