//! BitBucket shorthand detection.
//!
//! BitBucket retired Mercurial hosting in 2020, so unlike older tooling there
//! is nothing to ask the API: every `bitbucket.org` repository is Git, and
//! detection stays a pure string rewrite.

use url::Url;

use super::error::DetectError;

/// Rewrite `bitbucket.org/owner/repo[/sub/dir]` shorthand to a forced Git
/// HTTPS address.
pub(super) fn detect(src: &str) -> Result<Option<String>, DetectError> {
    if src.is_empty() || !src.starts_with("bitbucket.org/") {
        return Ok(None);
    }

    let parts: Vec<&str> = src.split('/').collect();
    if parts.len() < 3 {
        return Err(DetectError::MalformedAddress(
            "BitBucket URLs should be bitbucket.org/username/repo".to_string(),
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
