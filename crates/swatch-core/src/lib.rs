//! Core types and error taxonomy for the Swatch theme mapper.
//!
//! This crate provides the foundational types used across all other swatch crates:
//! - Reference paths (slash-delimited variable names with optional opacity steps)
//! - The final variable-mapping record handed to the host
//! - Sentiment classification for theme files
//! - Error types

pub mod errors;
pub mod types;

pub use errors::*;
pub use types::*;
