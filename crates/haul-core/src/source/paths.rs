//! Lexical path helpers for URI construction.
//!
//! Detection never touches the filesystem, so everything here operates on the
//! path as written: `.`/`..` segments collapse without resolving symlinks and
//! nothing is required to exist.

use std::path::{Component, MAIN_SEPARATOR, Path, PathBuf};

use url::Url;

use super::error::DetectError;

/// Lexically normalize a path by resolving `.` and `..` components.
///
/// Unlike `canonicalize()`, this doesn't require the path to exist and doesn't
/// follow symlinks. `..` never climbs above the root.
pub(super) fn normalize(path: &Path) -> PathBuf {
    let mut components = Vec::new();

    for component in path.components() {
        match component {
            Component::ParentDir => {
                if !components.is_empty() && !matches!(components.last(), Some(Component::RootDir))
                {
                    components.pop();
                }
            }
            Component::CurDir => {}
            c => {
                components.push(c);
            }
        }
    }

    components.iter().collect()
}

/// Render a path with forward-slash separators.
///
/// A no-op on platforms whose native separator is already `/`, so Unix
/// filenames that happen to contain backslashes come through untouched.
pub(super) fn to_slash(path: &Path) -> String {
    let s = path.to_string_lossy();
    if MAIN_SEPARATOR == '/' {
        s.into_owned()
    } else {
        s.replace(MAIN_SEPARATOR, "/")
    }
}

/// Join two slash-form subdir fragments and normalize the result.
///
/// Plain concatenation rather than [`Path::join`]: a `rest` with a stray
/// leading slash must not discard `base`.
pub(super) fn join_slash(base: &str, rest: &str) -> String {
    to_slash(&normalize(Path::new(&format!("{base}/{rest}"))))
}

/// Build a `file://` URL from a slash-form path.
///
/// Git only accepts the `file:///path` triple-slash form, and RFC 1738/8089
/// both require a `/` to delimit the empty authority from the path, so one is
/// prepended when the path is not rooted. Parsing through [`Url`] rather than
/// concatenating keeps path escaping correct and splits any trailing
/// `?query` into the query component instead of escaping it into the path.
pub(super) fn file_url(path: &str) -> Result<Url, DetectError> {
    let candidate = if path.starts_with('/') {
        format!("file://{path}")
    } else {
        format!("file:///{path}")
    };
    Url::parse(&candidate).map_err(|source| DetectError::UrlConstruction {
        input: candidate,
        source,
    })
}
