use std::fmt;

use tracing::trace;

use crate::compress::{State, compress_blocks};
use crate::error::InvalidInputError;
use crate::{DIGEST_LEN, pad};

/// A finished 128-bit MD5 digest.
///
/// Bytes are stored in RFC 1321 output order: each state word contributes its
/// four bytes least significant first. [`Display`](fmt::Display) renders the
/// conventional 32-character lowercase hex form.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    /// Wraps raw digest bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// Borrows the digest bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Returns the digest bytes.
    #[must_use]
    pub const fn into_bytes(self) -> [u8; DIGEST_LEN] {
        self.0
    }

    /// Renders the digest as 32 lowercase hex characters.
    #[must_use]
    pub fn to_hex(&self) -> String {
        self.to_string()
    }
}

impl From<State> for Digest {
    fn from(state: State) -> Self {
        let mut bytes = [0_u8; DIGEST_LEN];
        for (chunk, word) in bytes.chunks_exact_mut(4).zip(state.words()) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        Self(bytes)
    }
}

impl From<Digest> for [u8; DIGEST_LEN] {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({self:x})")
    }
}

/// Computes the MD5 digest of `message`.
///
/// Follows RFC 1321 exactly, including for empty input.
#[must_use]
pub fn digest(message: &[u8]) -> Digest {
    let padded = pad(message);
    trace!(
        target: "md5::digest",
        message_len = message.len(),
        blocks = padded.len() / crate::BLOCK_LEN,
        "compressing padded message"
    );
    compress_blocks(State::INITIAL, &padded).into()
}

/// Computes the hex MD5 digest of a text message.
///
/// The message is encoded as UTF-8 before hashing. Empty messages are
/// rejected with [`InvalidInputError::Empty`].
///
/// ```
/// use md5_core::{compute_digest, InvalidInputError};
///
/// assert_eq!(
///     compute_digest("a").unwrap(),
///     "0cc175b9c0f1b6a831c399e269772661"
/// );
/// assert_eq!(compute_digest(""), Err(InvalidInputError::Empty));
/// ```
pub fn compute_digest(message: &str) -> Result<String, InvalidInputError> {
    if message.is_empty() {
        return Err(InvalidInputError::Empty);
    }
    Ok(digest(message.as_bytes()).to_hex())
}

/// Computes the hex MD5 digest of bytes that must form a UTF-8 message.
///
/// Used where text arrives as raw bytes, such as command-line arguments.
/// Rejects empty input and input that is not valid UTF-8.
pub fn compute_digest_utf8(message: &[u8]) -> Result<String, InvalidInputError> {
    compute_digest(std::str::from_utf8(message)?)
}
