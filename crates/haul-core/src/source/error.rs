//! Detection error types.

use thiserror::Error;

/// Errors produced while normalizing a source address.
///
/// A detector that simply does not recognize an address is not an error; the
/// dispatcher moves on to the next chain member. These variants are the fatal
/// outcomes that abort a detection call.
#[derive(Debug, Error)]
pub enum DetectError {
    /// Every detector in the chain declined the address.
    #[error("invalid source string: {0}")]
    UnrecognizedSource(String),

    /// An address inside a detector's namespace does not fit the shape that
    /// backend requires.
    #[error("{0}")]
    MalformedAddress(String),

    /// A source explicitly forced with `git::` could not be handled, e.g. a
    /// relative filepath with no absolute directory to resolve against.
    #[error("unable to handle forced 'git::' source {src}: {reason}")]
    ForcedGit {
        /// The address body, without its forcing token.
        src: String,
        reason: String,
    },

    /// A rewritten address failed to reassemble as a URL. Detectors only emit
    /// URL-shaped strings, so this indicates a bug rather than bad input.
    #[error("error parsing URL {input}")]
    UrlConstruction {
        input: String,
        #[source]
        source: url::ParseError,
    },
}
