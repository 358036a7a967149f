//! RFC 1321 MD5 message digests.
//!
//! This crate computes the 128-bit MD5 fingerprint of arbitrary byte input. It
//! exposes the two halves of the algorithm separately, the [`pad`] procedure
//! and the per-block [`compress()`] transform, together with the one-shot
//! [`digest()`] helper, the streaming [`Md5`] hasher and the text entry point
//! [`compute_digest`].
//!
//! MD5 is broken for collision resistance. Use it for format and legacy
//! compatibility only, never as a security primitive.
//!
//! # Example
//!
//! ```
//! use md5_core::{compute_digest, digest, Md5};
//!
//! // Text entry point, rejects empty input
//! assert_eq!(
//!     compute_digest("abc").unwrap(),
//!     "900150983cd24fb0d6963f7d28e17f72"
//! );
//! assert!(compute_digest("").is_err());
//!
//! // Byte entry point
//! let one_shot = digest(b"message digest");
//!
//! // Streaming
//! let mut hasher = Md5::new();
//! hasher.update(b"message ");
//! hasher.update(b"digest");
//! assert_eq!(hasher.finalize(), one_shot);
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod compress;
mod digest;
mod error;
mod hasher;
mod padding;

#[cfg(feature = "parallel")]
#[cfg_attr(docsrs, doc(cfg(feature = "parallel")))]
pub mod parallel;

pub use compress::{State, compress};
pub use digest::{Digest, compute_digest, compute_digest_utf8, digest};
pub use error::InvalidInputError;
pub use hasher::{Md5, digest_reader};
pub use padding::{pad, pad_with_bit_len, padded_len};

#[cfg(feature = "parallel")]
pub use parallel::{ParallelMd5, digest_batch, digest_files};

/// Size of one MD5 message block in bytes (512 bits).
pub const BLOCK_LEN: usize = 64;

/// Size of an MD5 digest in bytes (128 bits).
pub const DIGEST_LEN: usize = 16;
