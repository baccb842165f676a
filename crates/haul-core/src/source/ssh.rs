//! SCP-like SSH pseudo-URL parsing.

use url::Url;

/// Parse an SCP-like address (`user@host:path[?query]`) into an `ssh://` URL.
///
/// The host must be free of `:` and `/` up to the separating colon, and user
/// and path must be non-empty. Addresses that already parse as
/// scheme-qualified URLs are not SCP-like and yield `None` — in URL form the
/// part after a colon is a port number, not a path. Whether the username
/// means anything for a given backend is the calling detector's business.
pub(super) fn parse_scp_like(src: &str) -> Option<Url> {
    if Url::parse(src).is_ok() {
        return None;
    }

    let (user, rest) = src.split_once('@')?;
    let (host, path) = rest.split_once(':')?;
    if user.is_empty() || user.contains('/') || host.is_empty() || host.contains('/') {
        return None;
    }

    let (path, query) = match path.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (path, None),
    };
    // `host:/abs/path` and `host:rel/path` address the same thing over SSH.
    let path = path.strip_prefix('/').unwrap_or(path);
    if path.is_empty() {
        return None;
    }

    let mut url = Url::parse(&format!("ssh://{user}@{host}")).ok()?;
    url.set_path(path);
    url.set_query(query);
    Some(url)
}
