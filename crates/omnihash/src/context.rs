#![allow(clippy::indexing_slicing)] // offsets bounded by read lengths

//! Streaming hash contexts.

use core::fmt;

use zeroize::Zeroizing;

use crate::algorithm::{Algorithm, State};
use crate::error::Error;
use crate::hex;
use crate::hmac::{prep_key, OPAD_FLIP};
use crate::registry::registry;

/// A live, streaming hash computation.
///
/// Created against a registered algorithm, fed any number of `update` calls,
/// and finished by exactly one `finalize`. A finalized context rejects all
/// further operations with [`Error::InvalidState`]; dropping one erases any
/// key material it held.
///
/// A context is not safe for concurrent use; parallel hashing wants
/// independent contexts, optionally forked from a shared prefix with
/// [`try_clone`](Self::try_clone).
///
/// # Example
///
/// ```rust
/// let mut ctx = omnihash::HashContext::new("sha256")?;
/// ctx.update(b"hello ")?;
/// ctx.update(b"world")?;
/// let digest = ctx.finalize()?;
/// assert_eq!(digest, omnihash::hash("sha256", b"hello world")?);
/// # Ok::<(), omnihash::Error>(())
/// ```
pub struct HashContext {
  algo: &'static Algorithm,
  state: Box<dyn State>,
  /// Inner pad key, present only in HMAC mode while the context is active.
  key: Option<Zeroizing<Vec<u8>>>,
  done: bool,
}

impl HashContext {
  /// Create a plain hashing context.
  pub fn new(algorithm: &str) -> Result<Self, Error> {
    let algo = registry().lookup(algorithm)?;
    Ok(Self {
      algo,
      state: algo.new_state(),
      key: None,
      done: false,
    })
  }

  /// Create an HMAC context.
  ///
  /// Requires a crypto-capable algorithm and a non-empty key; no key is not
  /// a key. (The one-shot [`hmac`](crate::hmac()) accepts an empty key; the
  /// two behaviors are intentionally distinct.)
  pub fn new_hmac(algorithm: &str, key: &[u8]) -> Result<Self, Error> {
    let algo = registry().lookup_crypto(algorithm)?;
    if key.is_empty() {
      return Err(Error::EmptyKey);
    }

    let mut state = algo.new_state();
    let ipad = prep_key(algo, state.as_mut(), key);
    state.update(&ipad);

    Ok(Self {
      algo,
      state,
      key: Some(ipad),
      done: false,
    })
  }

  /// The descriptor this context was created against.
  #[inline]
  #[must_use]
  pub fn algorithm(&self) -> &'static Algorithm {
    self.algo
  }

  fn ensure_active(&self) -> Result<(), Error> {
    if self.done {
      return Err(Error::InvalidState);
    }
    Ok(())
  }

  /// Feed bytes into the computation.
  pub fn update(&mut self, data: &[u8]) -> Result<(), Error> {
    self.ensure_active()?;
    self.state.update(data);
    Ok(())
  }

  /// Feed everything a reader yields, returning the byte count consumed.
  ///
  /// On a read error the context stops consuming and stays active; the
  /// bytes already fed remain part of the stream, and the error is returned
  /// without finalizing.
  pub fn update_reader<R: std::io::Read>(&mut self, mut reader: R) -> Result<u64, Error> {
    self.ensure_active()?;
    let mut buf = [0u8; 1024];
    let mut consumed = 0u64;
    loop {
      match reader.read(&mut buf) {
        Ok(0) => return Ok(consumed),
        Ok(n) => {
          self.state.update(&buf[..n]);
          consumed += n as u64;
        }
        Err(err) if err.kind() == std::io::ErrorKind::Interrupted => {}
        Err(err) => return Err(err.into()),
      }
    }
  }

  /// Finish the computation and return the digest.
  ///
  /// In HMAC mode this runs the outer round transparently and erases the
  /// stored key. The context is terminal afterwards.
  pub fn finalize(&mut self) -> Result<Vec<u8>, Error> {
    self.ensure_active()?;

    let mut digest = vec![0u8; self.algo.digest_size()];
    self.state.finalize_into(&mut digest);

    if let Some(mut ipad) = self.key.take() {
      // Flip the stored inner pad to the outer pad and run the outer round
      // over the inner digest.
      for byte in ipad.iter_mut() {
        *byte ^= OPAD_FLIP;
      }
      self.state.reset();
      self.state.update(&ipad);
      self.state.update(&digest);
      self.state.finalize_into(&mut digest);
    }

    // Keyed intermediate state must not outlive the computation.
    self.state.reset();
    self.done = true;
    Ok(digest)
  }

  /// [`finalize`](Self::finalize), hex-encoded.
  pub fn finalize_hex(&mut self) -> Result<String, Error> {
    Ok(hex::encode(&self.finalize()?))
  }

  /// Fork an independent copy of this context.
  ///
  /// The copy owns its own state and key; updates to either side never
  /// affect the other. Only valid while active.
  pub fn try_clone(&self) -> Result<Self, Error> {
    self.ensure_active()?;
    Ok(Self {
      algo: self.algo,
      state: self.state.boxed_clone(),
      key: self.key.clone(),
      done: false,
    })
  }
}

impl Drop for HashContext {
  fn drop(&mut self) {
    // The pad key zeroizes itself; the state still holds key-derived bytes
    // if the context was abandoned mid-HMAC.
    if self.key.is_some() {
      self.state.reset();
    }
  }
}

impl fmt::Debug for HashContext {
  // Never prints state or key bytes.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("HashContext")
      .field("algorithm", &self.algo.name())
      .field("hmac", &self.key.is_some())
      .field("finalized", &self.done)
      .finish_non_exhaustive()
  }
}
