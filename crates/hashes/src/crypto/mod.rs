//! Cryptographic hash functions.

pub mod md5;
pub mod sha1;
pub mod sha2;
pub mod sha512;

pub use md5::Md5;
pub use sha1::Sha1;
pub use sha2::{Sha224, Sha256};
pub use sha512::{Sha384, Sha512};
