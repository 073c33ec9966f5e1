//! Algorithm descriptors and type-erased streaming state.

use core::fmt;

use traits::Digest;

/// Object-safe view of a live digest state.
///
/// Bridges the static [`Digest`] interface into something a context can hold
/// without knowing the concrete algorithm. Implementations are plain value
/// types (the blanket impl requires `Clone + 'static`), which is what makes
/// [`boxed_clone`](State::boxed_clone) unconditionally correct.
pub(crate) trait State: Send {
  fn update(&mut self, data: &[u8]);

  /// Write the digest into `out`, which must be exactly the digest size.
  ///
  /// Leaves the state untouched; callers wanting to reuse it call
  /// [`reset`](State::reset) first.
  fn finalize_into(&mut self, out: &mut [u8]);

  fn reset(&mut self);

  fn boxed_clone(&self) -> Box<dyn State>;
}

impl<D> State for D
where
  D: Digest + Send + 'static,
{
  fn update(&mut self, data: &[u8]) {
    Digest::update(self, data);
  }

  fn finalize_into(&mut self, out: &mut [u8]) {
    let digest = Digest::finalize(self);
    out.copy_from_slice(digest.as_ref());
  }

  fn reset(&mut self) {
    Digest::reset(self);
  }

  fn boxed_clone(&self) -> Box<dyn State> {
    Box::new(self.clone())
  }
}

/// Registry entry describing one hashing algorithm.
///
/// Descriptors are owned by the registry and handed out by reference; all
/// attributes are fixed for the life of the process.
pub struct Algorithm {
  name: &'static str,
  block_size: usize,
  digest_size: usize,
  crypto: bool,
  new_state: fn() -> Box<dyn State>,
}

impl Algorithm {
  pub(crate) fn of<D>(name: &'static str, crypto: bool) -> Self
  where
    D: Digest + Send + 'static,
  {
    Self {
      name,
      block_size: D::BLOCK_SIZE,
      digest_size: D::OUTPUT_SIZE,
      crypto,
      new_state: || Box::new(D::new()),
    }
  }

  /// Canonical (lowercase) algorithm name.
  #[inline]
  #[must_use]
  pub fn name(&self) -> &'static str {
    self.name
  }

  /// Internal compression block size in bytes; governs HMAC key padding.
  #[inline]
  #[must_use]
  pub fn block_size(&self) -> usize {
    self.block_size
  }

  /// Digest size in bytes.
  #[inline]
  #[must_use]
  pub fn digest_size(&self) -> usize {
    self.digest_size
  }

  /// Whether the algorithm may be used for HMAC and key derivation.
  ///
  /// Checksums (CRC, Adler) report `false` and are rejected by those paths.
  #[inline]
  #[must_use]
  pub fn is_crypto(&self) -> bool {
    self.crypto
  }

  pub(crate) fn new_state(&self) -> Box<dyn State> {
    (self.new_state)()
  }
}

impl fmt::Debug for Algorithm {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Algorithm")
      .field("name", &self.name)
      .field("block_size", &self.block_size)
      .field("digest_size", &self.digest_size)
      .field("crypto", &self.crypto)
      .finish()
  }
}
