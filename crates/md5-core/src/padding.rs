//! Message padding (RFC 1321 section 3.1 and 3.2).
//!
//! The padded buffer is the message, a single `0x80` marker byte, zero bytes,
//! and the message bit length as a little-endian `u64` trailer. Its length is
//! the smallest multiple of [`BLOCK_LEN`] that leaves room for the marker and
//! the trailer.

use crate::BLOCK_LEN;

/// First padding byte: a single set bit followed by seven zero bits.
const MARKER: u8 = 0x80;

/// Width of the bit-length trailer in bytes.
const LENGTH_LEN: usize = 8;

/// Returns the padded length for a message of `message_len` bytes.
///
/// ```
/// use md5_core::padded_len;
///
/// assert_eq!(padded_len(0), 64);
/// assert_eq!(padded_len(55), 64);
/// assert_eq!(padded_len(56), 128);
/// ```
#[must_use]
pub const fn padded_len(message_len: usize) -> usize {
    (message_len + 1 + LENGTH_LEN).next_multiple_of(BLOCK_LEN)
}

/// Pads `message` into a freshly allocated buffer of whole blocks.
///
/// The returned buffer never aliases `message`. The bit length is recorded
/// modulo 2^64.
#[must_use]
pub fn pad(message: &[u8]) -> Vec<u8> {
    pad_with_bit_len(message, (message.len() as u64).wrapping_mul(8))
}

/// Pads `tail` but records `bit_len` in the trailer instead of the length of
/// `tail`.
///
/// Streaming hashers compress whole blocks as they arrive and only keep the
/// final partial block; this pads that fragment with the bit length of the
/// complete message.
#[must_use]
pub fn pad_with_bit_len(tail: &[u8], bit_len: u64) -> Vec<u8> {
    let len = padded_len(tail.len());
    let mut padded = vec![0_u8; len];
    padded[..tail.len()].copy_from_slice(tail);
    padded[tail.len()] = MARKER;
    padded[len - LENGTH_LEN..].copy_from_slice(&bit_len.to_le_bytes());
    padded
}
