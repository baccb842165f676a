//! Source address grammar.
//!
//! A raw address has the shape `[token::]body[//subdir][?query]`. The forcing
//! token pins the backend regardless of what the body looks like; the `//`
//! subdir selects a directory inside the fetched artifact. Both are peeled off
//! before detection and reattached afterwards, so splitting must be lossless.

/// Split a leading `token::` forcing token off an address.
///
/// Only a non-empty ASCII-alphanumeric prefix followed by `::` and a
/// non-empty remainder counts; anything else leaves the address whole. A
/// `::`-free address, `git::` alone, or a path like `a/b::c` all come back
/// with no token.
pub fn split_forced(src: &str) -> (Option<&str>, &str) {
    if let Some((token, rest)) = src.split_once("::") {
        if !token.is_empty()
            && !rest.is_empty()
            && token.chars().all(|c| c.is_ascii_alphanumeric())
        {
            return (Some(token), rest);
        }
    }
    (None, src)
}

/// Split a `//subdir` suffix off an address.
///
/// The first `//` that is neither the `//` of a scheme's `://` nor inside the
/// query string marks the subdir. A query string trailing the subdir belongs
/// to the address proper and is moved back onto the base.
pub fn split_subdir(src: &str) -> (String, String) {
    let stop = src.find('?').unwrap_or(src.len());

    // Skip over "scheme://" so its slashes aren't mistaken for a subdir.
    let offset = match src[..stop].find("://") {
        Some(idx) => idx + 3,
        None => 0,
    };

    let Some(idx) = src[offset..stop].find("//").map(|i| i + offset) else {
        return (src.to_string(), String::new());
    };

    let mut base = src[..idx].to_string();
    let mut subdir = src[idx + 2..].to_string();

    if let Some(qidx) = subdir.find('?') {
        base.push_str(&subdir[qidx..]);
        subdir.truncate(qidx);
    }

    (base, subdir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_forced_token() {
        assert_eq!(split_forced("git::https://x.com/r"), (Some("git"), "https://x.com/r"));
        assert_eq!(split_forced("s3::bucket/key"), (Some("s3"), "bucket/key"));
    }

    #[test]
    fn split_forced_none_without_separator() {
        assert_eq!(split_forced("https://x.com/r"), (None, "https://x.com/r"));
    }

    #[test]
    fn split_forced_rejects_non_token_prefixes() {
        // Slashes and empty sides disqualify the prefix as a token.
        assert_eq!(split_forced("a/b::c"), (None, "a/b::c"));
        assert_eq!(split_forced("::rest"), (None, "::rest"));
        assert_eq!(split_forced("git::"), (None, "git::"));
    }

    #[test]
    fn split_subdir_plain() {
        assert_eq!(
            split_subdir("github.com/org/repo//module/a"),
            ("github.com/org/repo".to_string(), "module/a".to_string())
        );
    }

    #[test]
    fn split_subdir_ignores_scheme_slashes() {
        assert_eq!(
            split_subdir("https://x.com/r"),
            ("https://x.com/r".to_string(), String::new())
        );
        assert_eq!(
            split_subdir("https://x.com/r//sub"),
            ("https://x.com/r".to_string(), "sub".to_string())
        );
    }

    #[test]
    fn split_subdir_reattaches_query_to_base() {
        assert_eq!(
            split_subdir("git@x.com:r.git//sub?ref=v1"),
            ("git@x.com:r.git?ref=v1".to_string(), "sub".to_string())
        );
    }

    #[test]
    fn split_subdir_ignores_slashes_inside_query() {
        assert_eq!(
            split_subdir("https://x.com/r?u=https://y.com//z"),
            ("https://x.com/r?u=https://y.com//z".to_string(), String::new())
        );
    }
}
