//! Haul Core Library
//!
//! Address-resolution front end for haul's multi-backend artifact retrieval.
//! Turns shorthand source addresses (provider shorthands, SCP-like SSH
//! references, bare filesystem paths) into canonical backend-tagged URLs
//! that a fetcher can act on unambiguously.

pub mod source;

/// Re-exports of commonly used types
pub mod prelude {
    pub use crate::source::{
        ContextualDetector, DEFAULT_CONTEXTUAL_DETECTORS, DEFAULT_DETECTORS, DetectError,
        Detector, detect, detect_with_context,
    };
}
