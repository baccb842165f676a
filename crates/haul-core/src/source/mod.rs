//! Source address detection and normalization.
//!
//! Callers hand haul a source address that may be shorthand
//! (`github.com/org/repo`), an SCP-like SSH reference
//! (`git@host.com:org/repo.git`), a bare filesystem path, or an already-valid
//! URL. Detection normalizes all of them into one canonical form that a
//! fetch backend can act on:
//!
//! ```text
//! [token::]url[//subdir][?query]
//! ```
//!
//! The leading `token::` selects the backend explicitly; the `//subdir`
//! picks a directory out of the fetched artifact. [`detect`] walks an
//! ordered detector chain, first match wins, and an already-valid URL passes
//! through untouched. [`detect_with_context`] additionally threads an
//! alternate base directory through the chain so relative filepaths can be
//! anchored somewhere other than the process working directory.

mod address;
mod bitbucket;
mod ctx;
mod error;
mod file;
mod gcs;
mod git;
mod github;
mod paths;
mod s3;
mod ssh;

pub use ctx::{ContextualDetector, DEFAULT_CONTEXTUAL_DETECTORS, detect_with_context};
pub use error::DetectError;

use std::path::Path;

use tracing::{debug, trace};
use url::Url;

/// A chain member that can recognize one backend's shorthand.
///
/// Detection is a fixed set of variants rather than open-ended dynamic
/// dispatch: adding a backend means adding a variant and deciding its place
/// in the chain, and callers can reorder or subset the chain freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detector {
    GitHub,
    Git,
    BitBucket,
    S3,
    Gcs,
    File,
}

/// The default detector chain, in priority order. First match wins.
pub const DEFAULT_DETECTORS: &[Detector] = &[
    Detector::GitHub,
    Detector::Git,
    Detector::BitBucket,
    Detector::S3,
    Detector::Gcs,
    Detector::File,
];

impl Detector {
    /// Try to recognize `src` as this backend's shorthand.
    ///
    /// `Ok(None)` means "not mine, try the next detector"; an error aborts
    /// the whole detection call. `src` arrives with any forcing token and
    /// `//subdir` suffix already stripped.
    pub fn detect(&self, src: &str, pwd: Option<&Path>) -> Result<Option<String>, DetectError> {
        match self {
            Self::GitHub => github::detect(src),
            Self::Git => git::detect(src),
            Self::BitBucket => bitbucket::detect(src),
            Self::S3 => s3::detect(src),
            Self::Gcs => gcs::detect(src),
            Self::File => file::detect(src, pwd),
        }
    }
}

/// Normalize a source address into canonical, backend-tagged form.
///
/// Safe to call on an already-valid URL: the input comes back unchanged.
/// `pwd` anchors relative filesystem references; detection itself never
/// touches the filesystem.
///
/// # Errors
///
/// [`DetectError::UnrecognizedSource`] when no detector claims the address;
/// whatever error a detector reports is returned as-is and ends the call (a
/// detector error is fatal, not a cue to try the next one).
pub fn detect(
    src: &str,
    pwd: Option<&Path>,
    detectors: &[Detector],
) -> Result<String, DetectError> {
    let (forced, body) = address::split_forced(src);
    let (body, subdir) = address::split_subdir(body);

    if Url::parse(&body).is_ok() {
        trace!(src, "source is already a valid URL");
        return Ok(src.to_string());
    }

    // `git::` forced onto a filepath is handled before the chain runs: the
    // plain detector contract has no way to pass the forcing token through,
    // and without it no detector may safely claim a bare filepath for Git.
    if forced == Some(git::FORCE_TOKEN) {
        if let Some(found) = git::force_filepath(&body, pwd, git::FORCE_TOKEN, None)? {
            return assemble(&found, forced, &subdir);
        }
    }

    for detector in detectors {
        let Some(found) = detector.detect(&body, pwd)? else {
            continue;
        };
        debug!(src, ?detector, %found, "source address detected");
        return assemble(&found, forced, &subdir);
    }

    Err(DetectError::UnrecognizedSource(src.to_string()))
}

/// Reassemble a detector's result with the caller's forcing token and subdir.
///
/// A detector may itself return a forced token and an embedded `//subdir`
/// (the GitHub detector does both). The detector's subdir is the parent of
/// the caller's, so the two merge as `detected/requested`; the caller's
/// forcing token beats the detector's.
fn assemble(
    detected: &str,
    forced: Option<&str>,
    subdir: &str,
) -> Result<String, DetectError> {
    let (detected_forced, detected_body) = address::split_forced(detected);
    let (mut result, detected_subdir) = address::split_subdir(detected_body);

    let subdir = if detected_subdir.is_empty() {
        subdir.to_string()
    } else if subdir.is_empty() {
        detected_subdir
    } else {
        paths::join_slash(&detected_subdir, subdir)
    };

    if !subdir.is_empty() {
        let mut url = Url::parse(&result).map_err(|source| DetectError::UrlConstruction {
            input: result.clone(),
            source,
        })?;
        // set_path escapes what the path grammar requires and nothing more,
        // so wildcard characters in the subdir stay literal.
        let path = format!("{}//{}", url.path(), subdir);
        url.set_path(&path);
        result = url.to_string();
    }

    Ok(match forced.or(detected_forced) {
        Some(token) => format!("{token}::{result}"),
        None => result,
    })
}
