//! Install size accounting.
//!
//! PCM reports the uncompressed footprint of a package as `install_size`.

use super::walk::collect_files;
use crate::error::{PackagerError, Result};
use camino::Utf8Path;
use std::fs;

/// Sum the byte lengths of every regular file reachable from `inputs`.
///
/// Inputs may be files or directories. Inputs that do not exist contribute
/// zero. The total does not depend on the order of `inputs`.
///
/// # Errors
///
/// Returns [`PackagerError::Io`] naming the directory that cannot be walked
/// or the file whose metadata cannot be read.
pub fn install_size<P: AsRef<Utf8Path>>(inputs: &[P]) -> Result<u64> {
    let mut total = 0u64;
    for input in inputs {
        for file in collect_files(input.as_ref())? {
            total += fs::metadata(&file)
                .map_err(|e| PackagerError::io(&file, e))?
                .len();
        }
    }
    Ok(total)
}
