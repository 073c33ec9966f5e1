//! Name → descriptor lookup table.
//!
//! The global registry is populated exactly once, on first access, and is
//! read-only afterwards; lookups from any number of threads need no locking.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use hashes::crypto::{Md5, Sha1, Sha224, Sha256, Sha384, Sha512};
use hashes::fast::{Adler32, Crc32b};

use crate::algorithm::Algorithm;
use crate::error::Error;

/// Read-only table of registered algorithms, keyed by case-folded name.
pub struct Registry {
  entries: BTreeMap<String, Algorithm>,
}

impl Registry {
  /// Duplicate registration is a programmer error, not a runtime condition.
  fn register(&mut self, algo: Algorithm) {
    let name = algo.name();
    let previous = self.entries.insert(name.to_ascii_lowercase(), algo);
    assert!(previous.is_none(), "algorithm {name:?} registered twice");
  }

  fn with_builtins() -> Self {
    let mut registry = Self {
      entries: BTreeMap::new(),
    };

    registry.register(Algorithm::of::<Md5>("md5", true));
    registry.register(Algorithm::of::<Sha1>("sha1", true));
    registry.register(Algorithm::of::<Sha224>("sha224", true));
    registry.register(Algorithm::of::<Sha256>("sha256", true));
    registry.register(Algorithm::of::<Sha384>("sha384", true));
    registry.register(Algorithm::of::<Sha512>("sha512", true));

    registry.register(Algorithm::of::<Crc32b>("crc32b", false));
    registry.register(Algorithm::of::<Adler32>("adler32", false));

    registry
  }

  /// Look up an algorithm by name, case-insensitively.
  pub fn lookup(&self, name: &str) -> Result<&Algorithm, Error> {
    self
      .entries
      .get(&name.to_ascii_lowercase())
      .ok_or_else(|| Error::UnknownAlgorithm { name: name.into() })
  }

  /// Look up an algorithm that must be crypto-capable.
  pub fn lookup_crypto(&self, name: &str) -> Result<&Algorithm, Error> {
    let algo = self.lookup(name)?;
    if !algo.is_crypto() {
      return Err(Error::NonCryptoAlgorithm { name: name.into() });
    }
    Ok(algo)
  }

  /// All registered names, sorted.
  pub fn names(&self) -> impl Iterator<Item = &str> {
    self.entries.keys().map(String::as_str)
  }

  /// Registered names usable for HMAC and key derivation, sorted.
  pub fn crypto_names(&self) -> impl Iterator<Item = &str> {
    self
      .entries
      .iter()
      .filter(|(_, algo)| algo.is_crypto())
      .map(|(name, _)| name.as_str())
  }
}

/// The process-wide registry of built-in algorithms.
pub fn registry() -> &'static Registry {
  static REGISTRY: OnceLock<Registry> = OnceLock::new();
  REGISTRY.get_or_init(Registry::with_builtins)
}
