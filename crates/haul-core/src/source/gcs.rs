//! Google Cloud Storage address detection.

use url::Url;

use super::error::DetectError;

/// Rewrite `www.googleapis.com/storage/<version>/<bucket>/<object>` addresses
/// to `gcs::https://` form.
pub(super) fn detect(src: &str) -> Result<Option<String>, DetectError> {
    if src.is_empty() || !src.contains("googleapis.com/") {
        return Ok(None);
    }

    let parts: Vec<&str> = src.split('/').collect();
    if parts.len() < 5 {
        return Err(DetectError::MalformedAddress(
            "URL is not a valid GCS URL".to_string(),
        ));
    }

    let version = parts[2];
    let bucket = parts[3];
    let object = parts[4..].join("/");

    let base = format!("https://www.googleapis.com/storage/{version}/{bucket}/{object}");
    let url = Url::parse(&base).map_err(|source| DetectError::UrlConstruction {
        input: base,
        source,
    })?;

    Ok(Some(format!("gcs::{url}")))
}
