//! Checksums (**NOT CRYPTO**).
//!
//! These algorithms detect accidental corruption only. The engine refuses to
//! use them for HMAC or key derivation.

pub mod adler32;
pub mod crc32;

pub use adler32::Adler32;
pub use crc32::Crc32b;
