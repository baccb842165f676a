//! Git source detection.
//!
//! Two shapes of shorthand resolve to Git:
//!
//! - SCP-like SSH addresses (`git@host.com:dir1/dir2`), rewritten to proper
//!   `ssh://` URLs;
//! - filesystem paths explicitly forced with `git::`, rewritten to `file://`
//!   URIs. A bare filepath is never assumed to be a Git repository — the same
//!   syntax is ambiguous across backends — so this path only runs when the
//!   caller wrote the forcing token.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::error::DetectError;
use super::{paths, ssh};

/// The parsed form of the `git::` forcing token.
pub(super) const FORCE_TOKEN: &str = "git";

/// Detect SCP-like Git SSH addresses.
pub(super) fn detect(src: &str) -> Result<Option<String>, DetectError> {
    if src.is_empty() {
        return Ok(None);
    }

    let Some(url) = ssh::parse_scp_like(src) else {
        return Ok(None);
    };

    // Only a "git" username marks the address as a Git remote. Other
    // usernames may belong to other hosts' SCP shorthands, so leave those for
    // the rest of the chain.
    if url.username() != FORCE_TOKEN {
        return Ok(None);
    }

    Ok(Some(format!("git::{url}")))
}

/// Contextual Git detection.
///
/// Handles everything [`detect`] does, plus `git::`-forced filepaths resolved
/// against `resolve_from` (preferred) or `pwd`. When the caller forced
/// `git::`, declining is not an option: an address explicitly flagged for Git
/// that still cannot be parsed is reported as an error rather than passed
/// down the chain.
pub(super) fn detect_with_context(
    src: &str,
    pwd: Option<&Path>,
    forced: Option<&str>,
    resolve_from: Option<&Path>,
) -> Result<Option<String>, DetectError> {
    let must_handle = forced == Some(FORCE_TOKEN);

    if src.is_empty() {
        if must_handle {
            return Err(DetectError::ForcedGit {
                src: src.to_string(),
                reason: "source string must be non-empty".to_string(),
            });
        }
        return Ok(None);
    }

    if let Some(forced) = forced {
        if let Some(result) = force_filepath(src, pwd, forced, resolve_from)? {
            return Ok(Some(result));
        }
    }

    let Some(url) = ssh::parse_scp_like(src) else {
        if must_handle {
            return Err(DetectError::ForcedGit {
                src: src.to_string(),
                reason: "not a filepath and not an SSH-style address".to_string(),
            });
        }
        return Ok(None);
    };

    if url.username() != FORCE_TOKEN {
        if must_handle {
            return Err(DetectError::ForcedGit {
                src: src.to_string(),
                reason: format!("ssh username is not 'git'; got: {}", url.username()),
            });
        }
        return Ok(None);
    }

    Ok(Some(format!("git::{url}")))
}

/// Resolve a `git::`-forced filesystem path to a `git::file://` URI.
///
/// Only runs for the `git::` token, and only on addresses that are
/// recognizably filepath-shaped: absolute, or relative starting with `./` or
/// `../` (or the Windows equivalents), or exactly `.`/`..`. Shorthand like
/// `foo/bar` may or may not be a filepath, so it is declined and left to the
/// rest of the chain.
///
/// Relative paths resolve against `resolve_from` when provided, else `pwd`.
/// Either base must itself be absolute — resolving against the process's
/// implicit current directory would make the result depend on ambient state,
/// so a missing or non-rooted base is an error, not a fallback.
///
/// The resolved path is emitted in `file:///` form even when it did not
/// resolve to a rooted path; the caller asked for exactly this address, and
/// the slash is still needed to separate the empty authority from the path.
/// Query parameters in `src` (e.g. `?ref=v1.2.3`) become the URI's query
/// component, which is what lets the Git fetcher select a tag or commit.
pub(super) fn force_filepath(
    src: &str,
    pwd: Option<&Path>,
    forced: &str,
    resolve_from: Option<&Path>,
) -> Result<Option<String>, DetectError> {
    if forced != FORCE_TOKEN {
        return Ok(None);
    }
    if src.is_empty() {
        return Ok(None);
    }

    let resolved: PathBuf = if Path::new(src).is_absolute() {
        PathBuf::from(src)
    } else {
        if !is_local_source(src) {
            return Ok(None);
        }

        if let Some(base) = resolve_from {
            if !base.is_absolute() {
                return Err(DetectError::ForcedGit {
                    src: src.to_string(),
                    reason: format!(
                        "provided resolution base ({}) is not rooted",
                        base.display()
                    ),
                });
            }
            base.join(src)
        } else if let Some(base) = pwd {
            if !base.is_absolute() {
                return Err(DetectError::ForcedGit {
                    src: src.to_string(),
                    reason: format!("provided pwd ({}) is not rooted", base.display()),
                });
            }
            base.join(src)
        } else {
            return Err(DetectError::ForcedGit {
                src: src.to_string(),
                reason: "neither pwd nor a resolution base was provided".to_string(),
            });
        }
    };

    let cleaned = paths::to_slash(&paths::normalize(&resolved));
    let url = paths::file_url(&cleaned)?;
    debug!(src, %url, "resolved forced git filepath");

    Ok(Some(format!("{forced}::{url}")))
}

const LOCAL_SOURCE_PREFIXES: [&str; 4] = ["./", "../", ".\\", "..\\"];

/// Whether an address is unambiguously a relative filepath reference.
fn is_local_source(addr: &str) -> bool {
    addr == "." || addr == ".." || LOCAL_SOURCE_PREFIXES.iter().any(|p| addr.starts_with(p))
}
