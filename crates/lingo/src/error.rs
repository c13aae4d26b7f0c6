//! Error types shared across the crate.
//!
//! Translation itself never fails: missing translations, malformed rule
//! expressions, and variant/rule count mismatches all degrade to a
//! displayable string. The types here cover the places where an error is a
//! genuine contract: catalog I/O, parameter shape at the dynamic boundary,
//! and formatter type tags.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that occur while loading a message catalog.
#[derive(Debug, Error)]
pub enum SourceError {
    /// File I/O error when reading a catalog file.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A catalog file exists but does not parse.
    #[error("invalid catalog '{path}': {message}")]
    Parse { path: PathBuf, message: String },
}

/// A caller-supplied parameter value of an unsupported shape.
///
/// This is programmer error at the call site, not data content, so it is
/// surfaced rather than degraded.
#[derive(Debug, Error)]
pub enum ParamsError {
    /// Parameters must be a scalar, a list of scalars, or a map of scalars.
    #[error("invalid parameter shape: expected scalar, list, or map, found {found}")]
    InvalidShape { found: String },
}

/// An unknown formatter type tag.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The tag does not name a known format type.
    #[error("unknown format type '{name}'")]
    UnknownType { name: String },
}
