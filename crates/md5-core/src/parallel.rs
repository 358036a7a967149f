//! Rayon integration for hashing independent inputs in parallel.
//!
//! Each input is still a strictly sequential fold over its own blocks; only
//! separate inputs are spread across rayon's thread pool.

use std::fs::File;
use std::io;
use std::path::Path;

use rayon::prelude::*;
use tracing::debug;

use crate::{Digest, digest, digest_reader};

/// Extension trait for collecting MD5 digests from a parallel iterator.
///
/// # Example
///
/// ```
/// use rayon::prelude::*;
/// use md5_core::ParallelMd5;
///
/// let data: Vec<Vec<u8>> = vec![b"hello".to_vec(), b"world".to_vec()];
/// let digests = data.par_iter().md5_digest();
/// assert_eq!(digests.len(), 2);
/// ```
pub trait ParallelMd5 {
    /// Computes one digest per item, preserving iteration order.
    fn md5_digest(self) -> Vec<Digest>;
}

impl<I, T> ParallelMd5 for I
where
    I: IndexedParallelIterator<Item = T>,
    T: AsRef<[u8]> + Send,
{
    fn md5_digest(self) -> Vec<Digest> {
        self.map(|item| digest(item.as_ref())).collect()
    }
}

/// Computes MD5 digests for multiple inputs in parallel.
///
/// Returns digests in the same order as `inputs`.
pub fn digest_batch<T: AsRef<[u8]> + Sync>(inputs: &[T]) -> Vec<Digest> {
    debug!(target: "md5::parallel", inputs = inputs.len(), "hashing batch");
    inputs.par_iter().md5_digest()
}

/// Computes MD5 digests for multiple files in parallel.
///
/// Files are streamed rather than loaded whole. Results are returned in the
/// same order as `paths`; a failure on one file does not affect the others.
///
/// ```no_run
/// use md5_core::digest_files;
///
/// let paths = ["file1.txt", "file2.txt"];
/// for (path, result) in paths.iter().zip(digest_files(&paths)) {
///     match result {
///         Ok(digest) => println!("{digest}  {path}"),
///         Err(e) => eprintln!("{path}: {e}"),
///     }
/// }
/// ```
pub fn digest_files<P: AsRef<Path> + Sync>(paths: &[P]) -> Vec<io::Result<Digest>> {
    debug!(target: "md5::parallel", files = paths.len(), "hashing files");
    paths
        .par_iter()
        .map(|path| {
            let file = File::open(path.as_ref())?;
            digest_reader(io::BufReader::new(file))
        })
        .collect()
}
