//! Plain filesystem path detection.

use std::path::{Path, PathBuf};

use super::error::DetectError;
use super::paths;

/// Rewrite a bare filesystem path to a `file:///` URI.
///
/// Absolute paths are used as-is; relative paths are joined against `pwd`.
/// Resolution is lexical — nothing is stat'ed, and the path need not exist.
/// This is the chain's catch-all, so it accepts any non-empty string.
pub(super) fn detect(src: &str, pwd: Option<&Path>) -> Result<Option<String>, DetectError> {
    if src.is_empty() {
        return Ok(None);
    }

    let path = if Path::new(src).is_absolute() {
        PathBuf::from(src)
    } else {
        let Some(pwd) = pwd else {
            return Err(DetectError::MalformedAddress(
                "relative paths require a working directory".to_string(),
            ));
        };
        pwd.join(src)
    };

    let url = paths::file_url(&paths::to_slash(&paths::normalize(&path)))?;
    Ok(Some(url.to_string()))
}
