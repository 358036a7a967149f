//! The MD5 compression function (RFC 1321 section 3.4).

use crate::BLOCK_LEN;

/// Additive constants, `T[i] = floor(2^32 * |sin(i + 1)|)`.
const T: [u32; 64] = [
    0xd76aa478, 0xe8c7b756, 0x242070db, 0xc1bdceee, 0xf57c0faf, 0x4787c62a, 0xa8304613, 0xfd469501,
    0x698098d8, 0x8b44f7af, 0xffff5bb1, 0x895cd7be, 0x6b901122, 0xfd987193, 0xa679438e, 0x49b40821,
    0xf61e2562, 0xc040b340, 0x265e5a51, 0xe9b6c7aa, 0xd62f105d, 0x02441453, 0xd8a1e681, 0xe7d3fbc8,
    0x21e1cde6, 0xc33707d6, 0xf4d50d87, 0x455a14ed, 0xa9e3e905, 0xfcefa3f8, 0x676f02d9, 0x8d2a4c8a,
    0xfffa3942, 0x8771f681, 0x6d9d6122, 0xfde5380c, 0xa4beea44, 0x4bdecfa9, 0xf6bb4b60, 0xbebfbc70,
    0x289b7ec6, 0xeaa127fa, 0xd4ef3085, 0x04881d05, 0xd9d4d039, 0xe6db99e5, 0x1fa27cf8, 0xc4ac5665,
    0xf4292244, 0x432aff97, 0xab9423a7, 0xfc93a039, 0x655b59c3, 0x8f0ccc92, 0xffeff47d, 0x85845dd1,
    0x6fa87e4f, 0xfe2ce6e0, 0xa3014314, 0x4e0811a1, 0xf7537e82, 0xbd3af235, 0x2ad7d2bb, 0xeb86d391,
];

/// Left-rotate amounts, indexed by round then by step within the round modulo 4.
const SHIFTS: [[u32; 4]; 4] = [
    [7, 12, 17, 22],
    [5, 9, 14, 20],
    [4, 11, 16, 23],
    [6, 10, 15, 21],
];

/// Number of 32-bit words in one block.
const WORDS_PER_BLOCK: usize = BLOCK_LEN / 4;

/// Running MD5 state: the four 32-bit accumulators A, B, C and D.
///
/// A state is owned by exactly one digest computation and threaded by value
/// from block to block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct State {
    words: [u32; 4],
}

impl State {
    /// Initial chaining values defined by RFC 1321.
    pub const INITIAL: Self = Self::from_words([0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476]);

    /// Builds a state from the A, B, C and D words.
    #[must_use]
    pub const fn from_words(words: [u32; 4]) -> Self {
        Self { words }
    }

    /// Returns the A, B, C and D words.
    #[must_use]
    pub const fn words(self) -> [u32; 4] {
        self.words
    }

    /// Folds one 64-byte block into the state.
    ///
    /// # Panics
    ///
    /// Panics when `block` is not exactly [`BLOCK_LEN`] bytes long.
    #[must_use]
    pub fn compress(self, block: &[u8]) -> Self {
        assert_eq!(block.len(), BLOCK_LEN, "MD5 blocks are 64 bytes");

        let x: [u32; WORDS_PER_BLOCK] = std::array::from_fn(|i| {
            u32::from_le_bytes([
                block[4 * i],
                block[4 * i + 1],
                block[4 * i + 2],
                block[4 * i + 3],
            ])
        });

        let [mut a, mut b, mut c, mut d] = self.words;

        for step in 0..64 {
            let round = step / 16;
            let (mixed, k) = match round {
                // F(X,Y,Z) = XY v not(X) Z
                0 => ((b & c) | (!b & d), step),
                // G(X,Y,Z) = XZ v Y not(Z)
                1 => ((b & d) | (c & !d), (1 + 5 * step) % 16),
                // H(X,Y,Z) = X xor Y xor Z
                2 => (b ^ c ^ d, (5 + 3 * step) % 16),
                // I(X,Y,Z) = Y xor (X v not(Z))
                _ => (c ^ (b | !d), (7 * step) % 16),
            };

            let rotated = a
                .wrapping_add(mixed)
                .wrapping_add(x[k])
                .wrapping_add(T[step])
                .rotate_left(SHIFTS[round][step % 4]);

            // The updated register becomes B; the others shift one role along.
            (a, b, c, d) = (d, b.wrapping_add(rotated), b, c);
        }

        let [h0, h1, h2, h3] = self.words;
        Self::from_words([
            h0.wrapping_add(a),
            h1.wrapping_add(b),
            h2.wrapping_add(c),
            h3.wrapping_add(d),
        ])
    }
}

impl Default for State {
    fn default() -> Self {
        Self::INITIAL
    }
}

/// Folds one 64-byte block into `state` and returns the next state.
///
/// Equivalent to [`State::compress`].
#[must_use]
pub fn compress(state: State, block: &[u8]) -> State {
    state.compress(block)
}

/// Folds every block of an already padded buffer, left to right.
pub(crate) fn compress_blocks(state: State, padded: &[u8]) -> State {
    debug_assert_eq!(padded.len() % BLOCK_LEN, 0);
    padded
        .chunks_exact(BLOCK_LEN)
        .fold(state, State::compress)
}
