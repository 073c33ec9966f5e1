//! Pluggable hashing engine.
//!
//! `omnihash` ties a registry of digest algorithms to a streaming context
//! abstraction, an HMAC construction generic over any crypto-capable entry,
//! two key-derivation functions (PBKDF2, HKDF), and a timing-safe comparator.
//! Algorithms are looked up by name at runtime; the set of built-ins lives in
//! the [`hashes`] crate and is registered once per process.
//!
//! # Quick Start
//!
//! ```
//! // One-shot hashing, raw or hex.
//! let digest = omnihash::hash("sha256", b"hello world")?;
//! assert_eq!(digest.len(), 32);
//! assert_eq!(
//!   omnihash::hash_hex("sha256", b"hello world")?,
//!   "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
//! );
//!
//! // Streaming with a context.
//! let mut ctx = omnihash::HashContext::new("sha256")?;
//! ctx.update(b"hello ")?;
//! ctx.update(b"world")?;
//! assert_eq!(ctx.finalize()?, digest);
//!
//! // Keyed hashing and key derivation.
//! let tag = omnihash::hmac("sha256", b"message", b"key")?;
//! let derived = omnihash::pbkdf2("sha256", b"password", b"salt", 1_000, 32)?;
//! assert!(omnihash::equals(&tag, &tag));
//! # Ok::<(), omnihash::Error>(())
//! ```
//!
//! # Security Notes
//!
//! - HMAC and the KDFs refuse checksum algorithms (`crc32b`, `adler32`).
//! - Prepared pad keys and KDF intermediates are zeroized on every exit path.
//! - [`equals`] compares content in constant time; lengths are not hidden.
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to
//! ensure all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]

mod algorithm;
mod context;
mod equals;
mod error;
mod hash;
mod hkdf;
mod hmac;
mod pbkdf2;
mod registry;

pub mod hex;

pub use algorithm::Algorithm;
pub use context::HashContext;
pub use equals::equals;
pub use error::Error;
pub use hash::{hash, hash_hex, hash_reader};
pub use hkdf::hkdf;
pub use hmac::{hmac, hmac_hex, hmac_reader};
pub use pbkdf2::pbkdf2;
pub use registry::{registry, Registry};

// Re-export the capability trait and the built-in providers so embedders can
// hash statically without going through the registry.
pub use traits::Digest;

pub mod providers {
  //! The built-in algorithm implementations, usable directly.
  pub use hashes::crypto::{Md5, Sha1, Sha224, Sha256, Sha384, Sha512};
  pub use hashes::fast::{Adler32, Crc32b};
}
