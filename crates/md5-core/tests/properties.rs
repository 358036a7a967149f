//! Property tests for padding invariants and digest agreement.

use md5::Digest as _;
use md5_core::{BLOCK_LEN, Md5, compute_digest, digest, pad, padded_len};
use proptest::prelude::*;

proptest! {
    #[test]
    fn padded_length_is_block_aligned(data in proptest::collection::vec(any::<u8>(), 0..600)) {
        let padded = pad(&data);
        prop_assert_eq!(padded.len() % BLOCK_LEN, 0);
        prop_assert!(padded.len() >= data.len() + 9);
        prop_assert!(padded.len() < data.len() + 9 + BLOCK_LEN);
        prop_assert_eq!(padded.len(), padded_len(data.len()));
    }

    #[test]
    fn padding_layout_is_exact(data in proptest::collection::vec(any::<u8>(), 0..600)) {
        let padded = pad(&data);
        let trailer_at = padded.len() - 8;

        prop_assert_eq!(&padded[..data.len()], data.as_slice());
        prop_assert_eq!(padded[data.len()], 0x80);
        prop_assert!(padded[data.len() + 1..trailer_at].iter().all(|&byte| byte == 0));

        let mut trailer = [0_u8; 8];
        trailer.copy_from_slice(&padded[trailer_at..]);
        prop_assert_eq!(u64::from_le_bytes(trailer), data.len() as u64 * 8);
    }

    #[test]
    fn digest_matches_reference(data in proptest::collection::vec(any::<u8>(), 0..2048)) {
        let expected: [u8; 16] = md5::Md5::digest(&data).into();
        prop_assert_eq!(digest(&data).into_bytes(), expected);
    }

    #[test]
    fn streaming_any_split_matches_one_shot(
        data in proptest::collection::vec(any::<u8>(), 0..1024),
        cuts in proptest::collection::vec(any::<prop::sample::Index>(), 0..6),
    ) {
        let mut points: Vec<usize> = cuts.iter().map(|cut| cut.index(data.len() + 1)).collect();
        points.sort_unstable();

        let mut hasher = Md5::new();
        let mut start = 0;
        for point in points {
            hasher.update(&data[start..point]);
            start = point;
        }
        hasher.update(&data[start..]);

        prop_assert_eq!(hasher.finalize(), digest(&data));
    }

    #[test]
    fn text_digest_is_hex_of_utf8_bytes(text in "\\PC{1,64}") {
        let hex = compute_digest(&text).unwrap();
        prop_assert_eq!(hex.len(), 32);
        prop_assert_eq!(hex, digest(text.as_bytes()).to_hex());
    }
}
