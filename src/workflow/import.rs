//! Resuming a saved order

use crate::codec;
use crate::error::{common, ErrorCode, Result, TakeawayError};
use crate::interaction::Chooser;
use crate::order::Order;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const IMPORT_LABEL: &str =
    "Please select whether to continue an existing order or create a new one";
pub const CONTINUE_EXISTING: &str = "Continue an existing order";
pub const CREATE_NEW: &str = "Create a new order";
pub const PATH_LABEL: &str = "Please enter the filename of an existing order";

/// Ask whether to resume a saved order
///
/// An answer that is neither of the two offered labels is an error.
pub fn ask_to_import<C: Chooser + ?Sized>(chooser: &mut C) -> Result<bool> {
    let step = "choosing whether to import";
    let items = vec![CONTINUE_EXISTING.to_string(), CREATE_NEW.to_string()];
    let answer = chooser
        .select_one(IMPORT_LABEL, &items)
        .map_err(|e| common::no_answer(step, e))?;

    match answer.value.as_str() {
        CONTINUE_EXISTING => Ok(true),
        CREATE_NEW => Ok(false),
        other => Err(common::unexpected_answer(step, other)),
    }
}

/// Check that `input` names an existing, readable file, relative paths
/// against `base`
pub fn validate_order_path(base: &Path, input: &str) -> std::result::Result<(), String> {
    if input.is_empty() {
        return Err("please enter a path".to_string());
    }
    let path = resolve(base, input);
    let metadata =
        std::fs::metadata(&path).map_err(|e| format!("failed to stat file: {}", e))?;
    if metadata.is_dir() {
        return Err("provided path is a dir, not a file".to_string());
    }
    File::open(&path).map_err(|e| format!("failed to open file: {}", e))?;
    Ok(())
}

/// Prompt for a saved order file and load it
pub fn import_order<C: Chooser + ?Sized>(chooser: &mut C, base: &Path) -> Result<Order> {
    let validate = |input: &str| validate_order_path(base, input);
    let input = chooser
        .prompt_text(PATH_LABEL, &validate)
        .map_err(|e| common::no_answer("entering the order file name", e))?;

    let path = resolve(base, &input);
    let order = read_order_file(&path)?;
    info!(path = %path.display(), "imported order");
    Ok(order)
}

/// Read and decode an order file, format chosen by its extension
pub fn read_order_file(path: &Path) -> Result<Order> {
    debug!(path = %path.display(), "reading order file");
    let bytes = {
        let mut file = File::open(path).map_err(|e| {
            let code = match e.kind() {
                io::ErrorKind::NotFound => ErrorCode::INPUT_NOT_FOUND,
                _ => ErrorCode::INPUT_OPEN_FAILED,
            };
            TakeawayError::input_with_code(code, "failed to open file", Some(path.to_path_buf()))
                .with_source(e)
        })?;
        if file.metadata().is_ok_and(|m| m.is_dir()) {
            return Err(TakeawayError::input_with_code(
                ErrorCode::INPUT_IS_DIRECTORY,
                "provided path is a dir, not a file",
                Some(path.to_path_buf()),
            ));
        }
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(|e| {
            TakeawayError::input_with_code(
                ErrorCode::INPUT_READ_FAILED,
                "failed to read file",
                Some(path.to_path_buf()),
            )
            .with_source(e)
        })?;
        bytes
    };

    codec::decode_path(path, &bytes).map_err(|e| match e {
        // format errors already carry the path
        TakeawayError::Decode { .. } => e.with_context(path.display()),
        other => other,
    })
}

fn resolve(base: &Path, input: &str) -> PathBuf {
    let path = Path::new(input);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
