//! Error types for the Swatch theme mapper.

use crate::types::{BlockKind, ModeKind};
use thiserror::Error;

/// Top-level error type for the Swatch theme mapper.
#[derive(Debug, Error)]
pub enum SwatchError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

/// Errors raised while parsing a CSS theme file.
///
/// The parser fails fast: the first violation aborts the whole parse and no
/// partial mapping list is ever returned alongside an error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("missing required {block} block")]
    MissingBlock { block: BlockKind },

    #[error("value is neither a var() nor an --alpha() reference: {value:?}")]
    UnresolvableReference { value: String },

    #[error("opacity must be an integer between 0 and 100, got {value:?}")]
    InvalidOpacity { value: String },

    #[error("theme entry {intermediate} has no {mode} mode value")]
    IncompleteMapping {
        intermediate: String,
        mode: ModeKind,
    },

    #[error("no usable variable mappings found in the @theme block")]
    EmptyTheme,
}

/// Errors raised while preparing host-side lookups.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("invalid token manifest: {reason}")]
    InvalidManifest { reason: String },

    #[error(
        "filename {filename:?} must be one of: danger.css, warning.css, \
         success.css, info.css, brand.css, or neutral.css"
    )]
    UnrecognizedFilename { filename: String },
}
