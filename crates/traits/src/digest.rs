//! The streaming digest capability interface.

use core::fmt::Debug;

/// Hash function producing a fixed-size digest from a byte stream.
///
/// Implemented by cryptographic digests (MD5, the SHA families) and by
/// non-cryptographic checksums (CRC-32, Adler-32) alike; whether an algorithm
/// may be used for MAC/KDF work is a property of its registry entry, not of
/// this trait.
///
/// # Implementor Requirements
///
/// - `new()` must return the same state as `Default::default()`
/// - `finalize()` must be idempotent (it borrows, never consumes)
/// - `reset()` must restore the initial state
/// - the state must be a self-contained value: cloning it and updating the
///   original and the clone independently must never interact
///
/// # Example
///
/// ```rust
/// use traits::Digest;
///
/// #[derive(Clone, Default)]
/// struct ByteSum(u8);
///
/// impl Digest for ByteSum {
///   const OUTPUT_SIZE: usize = 1;
///   const BLOCK_SIZE: usize = 1;
///   type Output = [u8; 1];
///
///   fn new() -> Self {
///     Self::default()
///   }
///   fn update(&mut self, data: &[u8]) {
///     self.0 = data.iter().fold(self.0, |acc, &b| acc.wrapping_add(b));
///   }
///   fn finalize(&self) -> Self::Output {
///     [self.0]
///   }
///   fn reset(&mut self) {
///     self.0 = 0;
///   }
/// }
///
/// assert_eq!(ByteSum::digest(b"abc"), [b'a'.wrapping_add(b'b').wrapping_add(b'c')]);
/// ```
pub trait Digest: Clone + Default {
  /// Digest size in bytes.
  const OUTPUT_SIZE: usize;

  /// Internal compression block size in bytes.
  ///
  /// Governs HMAC key padding for crypto-capable algorithms.
  const BLOCK_SIZE: usize;

  /// The digest output type.
  ///
  /// Typically `[u8; N]`. The `AsRef<[u8]>` bound lets callers view any
  /// output as bytes without knowing the concrete algorithm.
  type Output: Copy + Eq + Debug + AsRef<[u8]>;

  /// Create a new hasher in its initial state.
  #[must_use]
  fn new() -> Self;

  /// Update the hasher with additional data.
  ///
  /// May be called any number of times, including zero; chunk boundaries
  /// carry no meaning.
  fn update(&mut self, data: &[u8]);

  /// Finalize and return the digest.
  ///
  /// Does not consume the hasher; further updates continue the stream as if
  /// `finalize` had not been called.
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// Reset the hasher to its initial state.
  fn reset(&mut self);

  /// Compute the digest of data in one shot.
  #[inline]
  #[must_use]
  fn digest(data: &[u8]) -> Self::Output {
    let mut h = Self::new();
    h.update(data);
    h.finalize()
  }
}
