//! Errors for everything fallible on the input side. The core transforms
//! (`trim_value`, `infer_value`, `merge`) are total and define none.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parse failure; `message` carries the failure point's JSON path.
    #[error("parse error in {path}: {message}")]
    Parse { path: String, message: String },

    #[error("bad glob pattern {pattern}: {source}")]
    BadGlob {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("unreadable glob entry: {source}")]
    GlobEntry {
        #[source]
        source: glob::GlobError,
    },

    #[error("glob pattern matched no files: {pattern}")]
    EmptyGlob { pattern: String },

    #[error("no value at JSON pointer {pointer} in {path}")]
    PointerMiss { pointer: String, path: String },

    #[error("jq filter failed on {path}: {message}")]
    Jq { path: String, message: String },
}
