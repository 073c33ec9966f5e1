//! Context state-machine behavior, error taxonomy coverage, and the
//! comparator truth table.

use std::io::{self, Read};

use omnihash::{equals, hash, hash_reader, hkdf, hmac, hmac_reader, pbkdf2, Error, HashContext};

#[test]
fn finalized_context_rejects_everything() {
  let mut ctx = HashContext::new("sha256").unwrap();
  ctx.update(b"data").unwrap();
  let digest = ctx.finalize().unwrap();
  assert_eq!(digest.len(), 32);

  assert!(matches!(ctx.update(b"more").unwrap_err(), Error::InvalidState));
  assert!(matches!(ctx.finalize().unwrap_err(), Error::InvalidState));
  assert!(matches!(ctx.try_clone().unwrap_err(), Error::InvalidState));
  assert!(matches!(ctx.update_reader(&b"x"[..]).unwrap_err(), Error::InvalidState));
}

#[test]
fn zero_updates_is_the_empty_message() {
  let mut ctx = HashContext::new("sha1").unwrap();
  assert_eq!(ctx.finalize().unwrap(), hash("sha1", b"").unwrap());
}

#[test]
fn hmac_context_finalizes_once() {
  let mut ctx = HashContext::new_hmac("sha256", b"key").unwrap();
  ctx.update(b"message").unwrap();
  let tag = ctx.finalize().unwrap();
  assert_eq!(tag, hmac("sha256", b"message", b"key").unwrap());
  assert!(matches!(ctx.finalize().unwrap_err(), Error::InvalidState));
}

#[test]
fn hmac_context_clone_carries_the_key() {
  let mut ctx = HashContext::new_hmac("sha256", b"key").unwrap();
  ctx.update(b"mess").unwrap();
  let mut fork = ctx.try_clone().unwrap();

  ctx.update(b"age").unwrap();
  fork.update(b"age").unwrap();

  let expected = hmac("sha256", b"message", b"key").unwrap();
  assert_eq!(ctx.finalize().unwrap(), expected);
  assert_eq!(fork.finalize().unwrap(), expected);
}

#[test]
fn empty_key_rejected_incrementally_but_not_one_shot() {
  // The two entry points intentionally disagree here.
  assert!(matches!(
    HashContext::new_hmac("sha256", b"").unwrap_err(),
    Error::EmptyKey
  ));
  assert!(hmac("sha256", b"data", b"").is_ok());
}

#[test]
fn unknown_algorithm_from_every_entry_point() {
  let check = |err: Error| {
    assert!(matches!(err, Error::UnknownAlgorithm { name } if name == "nope"));
  };

  check(hash("nope", b"").unwrap_err());
  check(hash_reader("nope", &b""[..]).unwrap_err());
  check(hmac("nope", b"", b"k").unwrap_err());
  check(hmac_reader("nope", &b""[..], b"k").unwrap_err());
  check(HashContext::new("nope").unwrap_err());
  check(HashContext::new_hmac("nope", b"k").unwrap_err());
  check(pbkdf2("nope", b"p", b"s", 1, 8).unwrap_err());
  check(hkdf("nope", b"i", b"", b"", 8).unwrap_err());
}

#[test]
fn non_crypto_rejected_where_crypto_is_required() {
  for name in ["crc32b", "adler32"] {
    assert!(matches!(
      hmac(name, b"", b"k").unwrap_err(),
      Error::NonCryptoAlgorithm { .. }
    ));
    assert!(matches!(
      HashContext::new_hmac(name, b"k").unwrap_err(),
      Error::NonCryptoAlgorithm { .. }
    ));
    assert!(matches!(
      pbkdf2(name, b"p", b"s", 1, 8).unwrap_err(),
      Error::NonCryptoAlgorithm { .. }
    ));
    assert!(matches!(
      hkdf(name, b"i", b"", b"", 8).unwrap_err(),
      Error::NonCryptoAlgorithm { .. }
    ));

    // Plain hashing with checksums is fine.
    assert!(hash(name, b"data").is_ok());
    assert!(HashContext::new(name).is_ok());
  }
}

/// Yields one chunk of data, then fails.
struct FailingReader {
  first: Option<&'static [u8]>,
}

impl Read for FailingReader {
  fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
    match self.first.take() {
      Some(chunk) => {
        buf[..chunk.len()].copy_from_slice(chunk);
        Ok(chunk.len())
      }
      None => Err(io::Error::new(io::ErrorKind::ConnectionReset, "stream died")),
    }
  }
}

#[test]
fn reader_failure_propagates_without_finalizing() {
  let mut ctx = HashContext::new("sha256").unwrap();
  let err = ctx
    .update_reader(FailingReader { first: Some(b"partial ") })
    .unwrap_err();
  assert!(matches!(err, Error::Io(_)));

  // The context is still active; the bytes read before the failure count.
  ctx.update(b"input").unwrap();
  assert_eq!(ctx.finalize().unwrap(), hash("sha256", b"partial input").unwrap());
}

#[test]
fn update_reader_reports_bytes_consumed() {
  let data = vec![3u8; 4096];
  let mut ctx = HashContext::new("md5").unwrap();
  assert_eq!(ctx.update_reader(&data[..]).unwrap(), 4096);
  assert_eq!(ctx.finalize().unwrap(), hash("md5", &data).unwrap());
}

#[test]
fn comparator_truth_table() {
  assert!(equals(b"abc", b"abc"));
  assert!(!equals(b"abc", b"abd"));
  assert!(!equals(b"ab", b"abc"));

  let a = hash("sha256", b"x").unwrap();
  let b = hash("sha256", b"y").unwrap();
  assert!(equals(&a, &a));
  assert!(!equals(&a, &b));
}

#[test]
fn hex_and_raw_agree() {
  let raw = hash("sha384", b"payload").unwrap();
  let mut ctx = HashContext::new("sha384").unwrap();
  ctx.update(b"payload").unwrap();
  assert_eq!(ctx.finalize_hex().unwrap(), omnihash::hex::encode(&raw));
}
