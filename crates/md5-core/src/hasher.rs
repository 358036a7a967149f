//! Streaming MD5 hasher.

use std::fmt;
use std::io::{self, Read};

use tracing::debug;

use crate::compress::{State, compress_blocks};
use crate::{BLOCK_LEN, Digest, pad_with_bit_len};

/// Read buffer size used by [`digest_reader`].
const READ_BUF_LEN: usize = 64 * 1024;

/// Incremental MD5 hasher.
///
/// Whole blocks are compressed as soon as they are available; only the
/// trailing partial block is buffered. Feeding a message in any split yields
/// the same digest as [`crate::digest()`] on the concatenation.
#[derive(Clone)]
pub struct Md5 {
    state: State,
    buffer: [u8; BLOCK_LEN],
    buffer_len: usize,
    /// Total bytes fed so far, modulo 2^64.
    message_len: u64,
}

impl Md5 {
    /// Creates a hasher in the RFC 1321 initial state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: State::INITIAL,
            buffer: [0_u8; BLOCK_LEN],
            buffer_len: 0,
            message_len: 0,
        }
    }

    /// Feeds additional bytes into the digest state.
    pub fn update(&mut self, mut data: &[u8]) {
        self.message_len = self.message_len.wrapping_add(data.len() as u64);

        if self.buffer_len > 0 {
            let needed = BLOCK_LEN - self.buffer_len;
            if data.len() < needed {
                self.buffer[self.buffer_len..self.buffer_len + data.len()].copy_from_slice(data);
                self.buffer_len += data.len();
                return;
            }
            self.buffer[self.buffer_len..].copy_from_slice(&data[..needed]);
            self.state = self.state.compress(&self.buffer);
            self.buffer_len = 0;
            data = &data[needed..];
        }

        let whole = data.len() - data.len() % BLOCK_LEN;
        let (blocks, rest) = data.split_at(whole);
        self.state = compress_blocks(self.state, blocks);

        self.buffer[..rest.len()].copy_from_slice(rest);
        self.buffer_len = rest.len();
    }

    /// Number of bytes fed so far, modulo 2^64.
    #[must_use]
    pub const fn message_len(&self) -> u64 {
        self.message_len
    }

    /// Pads the buffered tail and returns the finished digest.
    #[must_use]
    pub fn finalize(self) -> Digest {
        let tail = pad_with_bit_len(
            &self.buffer[..self.buffer_len],
            self.message_len.wrapping_mul(8),
        );
        compress_blocks(self.state, &tail).into()
    }

    /// Returns the digest so far and resets the hasher for a new message.
    pub fn finalize_reset(&mut self) -> Digest {
        std::mem::take(self).finalize()
    }

    /// Convenience helper that computes the MD5 digest for `data` in one shot.
    #[must_use]
    pub fn digest(data: &[u8]) -> Digest {
        let mut hasher = Self::new();
        hasher.update(data);
        hasher.finalize()
    }
}

impl Default for Md5 {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Md5 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Md5")
            .field("message_len", &self.message_len)
            .field("buffered", &self.buffer_len)
            .finish_non_exhaustive()
    }
}

impl io::Write for Md5 {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Streams `reader` to the end and returns the MD5 digest of its contents.
///
/// Interrupted reads are retried; any other I/O error is returned unchanged.
pub fn digest_reader<R: Read>(mut reader: R) -> io::Result<Digest> {
    let mut hasher = Md5::new();
    let mut buf = vec![0_u8; READ_BUF_LEN];
    loop {
        match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => hasher.update(&buf[..n]),
            Err(error) if error.kind() == io::ErrorKind::Interrupted => {}
            Err(error) => return Err(error),
        }
    }
    debug!(target: "md5::digest", bytes = hasher.message_len(), "reader digested");
    Ok(hasher.finalize())
}
