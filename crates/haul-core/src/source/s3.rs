//! Amazon S3 address detection.

use url::Url;

use super::error::DetectError;

/// Rewrite path-style (`s3[-<region>].amazonaws.com/bucket/key`) and
/// virtual-hosted-style (`bucket.s3[-<region>].amazonaws.com/key`) addresses
/// to `s3::https://` form.
pub(super) fn detect(src: &str) -> Result<Option<String>, DetectError> {
    if src.is_empty() || !src.contains(".amazonaws.com/") {
        return Ok(None);
    }

    let parts: Vec<&str> = src.split('/').collect();
    if parts.len() < 2 {
        return Err(DetectError::MalformedAddress(
            "URL is not a valid S3 URL".to_string(),
        ));
    }

    let host_parts: Vec<&str> = parts[0].split('.').collect();
    match host_parts.len() {
        3 => rewrite(host_parts[0], None, &parts[1..]),
        4 => rewrite(host_parts[1], Some(host_parts[0]), &parts[1..]),
        _ => Err(DetectError::MalformedAddress(
            "URL is not a valid S3 URL".to_string(),
        )),
    }
}

/// Reassemble the bucket and key under the regional endpoint. Vhost-style
/// addresses put the bucket in the hostname; it moves into the path so both
/// styles come out uniform.
fn rewrite(region: &str, bucket: Option<&str>, parts: &[&str]) -> Result<Option<String>, DetectError> {
    let rest = parts.join("/");
    let base = match bucket {
        Some(bucket) => format!("https://{region}.amazonaws.com/{bucket}/{rest}"),
        None => format!("https://{region}.amazonaws.com/{rest}"),
    };

    let url = Url::parse(&base).map_err(|source| DetectError::UrlConstruction {
        input: base,
        source,
    })?;

    Ok(Some(format!("s3::{url}")))
}
