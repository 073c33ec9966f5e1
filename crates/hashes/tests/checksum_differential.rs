use hashes::fast::Crc32b;
use proptest::prelude::*;
use traits::Digest as _;

proptest! {
  #[test]
  fn crc32b_matches_crc32fast(data in proptest::collection::vec(any::<u8>(), 0..4096)) {
    let expected = crc32fast::hash(&data);
    prop_assert_eq!(Crc32b::digest(&data), expected.to_be_bytes());
  }

  #[test]
  fn crc32b_streaming_matches_crc32fast(data in proptest::collection::vec(any::<u8>(), 0..4096), split in any::<prop::sample::Index>()) {
    let at = split.index(data.len() + 1);
    let mut h = Crc32b::new();
    h.update(&data[..at]);
    h.update(&data[at..]);
    prop_assert_eq!(h.finalize(), crc32fast::hash(&data).to_be_bytes());
  }
}
