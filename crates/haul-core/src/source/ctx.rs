//! Context-aware detection.
//!
//! The plain [`Detector`](super::Detector) contract cannot see the forcing
//! token or anchor relative paths anywhere but `pwd`. Contextual detection
//! widens the contract: every chain member receives the parsed forcing
//! token, the already-extracted subdir, and an optional alternate resolution
//! base. That is what lets a relative `git::` filepath resolve against, say,
//! the directory of the manifest that referenced it rather than wherever the
//! process happens to be running.
//!
//! The two entry points are deliberately not unified: [`detect`](super::detect)
//! resolves forced filepaths against `pwd` only, while [`detect_with_context`]
//! honors `resolve_from` first.

use std::path::Path;

use tracing::{debug, trace};
use url::Url;

use super::error::DetectError;
use super::{address, assemble, file, git};

/// A chain member for context-aware detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextualDetector {
    Git,
    File,
}

/// The default contextual chain. Only the Git member is enabled; the others
/// gain nothing from the extra context yet.
pub const DEFAULT_CONTEXTUAL_DETECTORS: &[ContextualDetector] = &[ContextualDetector::Git];

impl ContextualDetector {
    /// Try to recognize `src`, with full call context.
    ///
    /// `subdir` is the `//subdir` already parsed off the address. It is
    /// provided for awareness only — the dispatcher reattaches it, so
    /// implementations must not fold it into their result.
    pub fn detect(
        &self,
        src: &str,
        pwd: Option<&Path>,
        forced: Option<&str>,
        subdir: &str,
        resolve_from: Option<&Path>,
    ) -> Result<Option<String>, DetectError> {
        let _ = subdir;
        match self {
            Self::Git => git::detect_with_context(src, pwd, forced, resolve_from),
            Self::File => file::detect(src, pwd),
        }
    }
}

/// Normalize a source address, anchoring relative filepaths at `resolve_from`.
///
/// Like [`detect`](super::detect), but `resolve_from` — when provided —
/// takes precedence over `pwd` for resolving relative filesystem references.
/// For `file://` URIs to come out RFC-legal, the provided base should be an
/// absolute path; the Git member rejects a relative one with an error.
///
/// # Errors
///
/// [`DetectError::UnrecognizedSource`] when the chain is exhausted; detector
/// errors are fatal to the call, exactly as in [`detect`](super::detect).
pub fn detect_with_context(
    src: &str,
    pwd: Option<&Path>,
    resolve_from: Option<&Path>,
    detectors: &[ContextualDetector],
) -> Result<String, DetectError> {
    let (forced, body) = address::split_forced(src);
    let (body, subdir) = address::split_subdir(body);

    if Url::parse(&body).is_ok() {
        trace!(src, "source is already a valid URL");
        return Ok(src.to_string());
    }

    for detector in detectors {
        let Some(found) = detector.detect(&body, pwd, forced, &subdir, resolve_from)? else {
            continue;
        };
        debug!(src, ?detector, %found, "source address detected");
        return assemble(&found, forced, &subdir);
    }

    Err(DetectError::UnrecognizedSource(src.to_string()))
}
