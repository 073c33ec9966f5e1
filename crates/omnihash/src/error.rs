//! Engine error type.

use core::fmt;

/// Errors returned by engine entry points.
///
/// Every fallible operation reports through this enum; nothing panics on bad
/// caller input. Allocation failure is the one exception: it aborts via the
/// global allocator and is not representable here.
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
  /// The named algorithm is not in the registry.
  UnknownAlgorithm {
    /// The name as supplied by the caller.
    name: String,
  },
  /// A checksum algorithm was named where a crypto-capable one is required
  /// (HMAC, PBKDF2, HKDF).
  NonCryptoAlgorithm {
    /// The name as supplied by the caller.
    name: String,
  },
  /// An HMAC context was requested with a zero-length key.
  EmptyKey,
  /// HKDF input keying material was empty.
  EmptyKeyMaterial,
  /// PBKDF2 was asked for zero iterations.
  ZeroIterations,
  /// The salt cannot take the 4-byte block counter without overflowing.
  SaltTooLong,
  /// The requested HKDF output exceeds 255 digest blocks.
  OutputTooLong {
    /// Requested output length in bytes.
    requested: usize,
    /// Largest permitted length for the chosen algorithm.
    max: usize,
  },
  /// The context has already been finalized.
  InvalidState,
  /// A reader feeding a context failed; the context was not finalized.
  Io(std::io::Error),
}

impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::UnknownAlgorithm { name } => write!(f, "unknown hashing algorithm: {name}"),
      Self::NonCryptoAlgorithm { name } => write!(f, "non-cryptographic hashing algorithm: {name}"),
      Self::EmptyKey => f.write_str("HMAC requested without a key"),
      Self::EmptyKeyMaterial => f.write_str("input keying material cannot be empty"),
      Self::ZeroIterations => f.write_str("iterations must be a positive integer"),
      Self::SaltTooLong => f.write_str("supplied salt is too long"),
      Self::OutputTooLong { requested, max } => {
        write!(f, "length must be less than or equal to {max}: {requested}")
      }
      Self::InvalidState => f.write_str("hash context has already been finalized"),
      Self::Io(err) => write!(f, "read failed: {err}"),
    }
  }
}

impl std::error::Error for Error {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Self::Io(err) => Some(err),
      _ => None,
    }
  }
}

impl From<std::io::Error> for Error {
  fn from(err: std::io::Error) -> Self {
    Self::Io(err)
  }
}
