//! GitHub shorthand detection.

use url::Url;

use super::error::DetectError;

/// Rewrite `github.com/owner/repo[/sub/dir]` shorthand to a forced Git HTTPS
/// address, carrying any trailing path segments as an embedded `//` subdir.
pub(super) fn detect(src: &str) -> Result<Option<String>, DetectError> {
    if src.is_empty() || !src.starts_with("github.com/") {
        return Ok(None);
    }

    let parts: Vec<&str> = src.split('/').collect();
    if parts.len() < 3 {
        return Err(DetectError::MalformedAddress(
            "GitHub URLs should be github.com/username/repo".to_string(),
        ));
    }

    let base = format!("https://{}", parts[..3].join("/"));
    let mut url = Url::parse(&base).map_err(|source| DetectError::UrlConstruction {
        input: base,
        source,
    })?;

    if !url.path().ends_with(".git") {
        let path = format!("{}.git", url.path());
        url.set_path(&path);
    }

    if parts.len() > 3 {
        let path = format!("{}//{}", url.path(), parts[3..].join("/"));
        url.set_path(&path);
    }

    Ok(Some(format!("git::{url}")))
}
