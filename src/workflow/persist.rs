//! Saving the finished order

use crate::codec;
use crate::error::{ErrorCode, Result, TakeawayError};
use crate::order::Order;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::Builder;
use tracing::{debug, info};

pub const FILE_PREFIX: &str = "order";
pub const FILE_SUFFIX: &str = ".yml";

/// Write `order` as YAML to a new, uniquely named file in `dir`
///
/// The file is named `order<random>.yml` and is kept after the process exits.
/// Returns its path.
pub fn save_order(order: &Order, dir: &Path) -> Result<PathBuf> {
    let yaml = codec::encode(order)?;

    let mut file = Builder::new()
        .prefix(FILE_PREFIX)
        .suffix(FILE_SUFFIX)
        .tempfile_in(dir)
        .map_err(|e| {
            TakeawayError::persist_with_code(
                ErrorCode::PERSIST_CREATE_FAILED,
                "failed to create order file",
                Some(dir.to_path_buf()),
            )
            .with_source(e)
        })?;
    debug!(path = %file.path().display(), "created order file");

    let write_error = |path: &Path, e: std::io::Error| {
        TakeawayError::persist_with_code(
            ErrorCode::PERSIST_WRITE_FAILED,
            "failed to write to file",
            Some(path.to_path_buf()),
        )
        .with_source(e)
    };
    file.write_all(&yaml)
        .and_then(|()| file.flush())
        .map_err(|e| write_error(file.path(), e))?;

    let (_, path) = file.keep().map_err(|e| {
        let path = e.file.path().to_path_buf();
        write_error(&path, e.error)
    })?;
    info!(path = %path.display(), "order saved");
    Ok(path)
}
