//! Host-side lookup contracts and session bookkeeping for the Swatch theme
//! mapper.
//!
//! The variable collections themselves belong to the host; this crate holds
//! the pure half of that conversation:
//! - the candidate-name fallback chain consumers must walk when resolving a
//!   reference against a variable table
//! - uploaded token manifests (JSON key shortcuts)
//! - Light/Dark mode planning for a target collection
//! - sentiment-scoped orphan detection
//! - the per-operation session context

mod candidates;
mod manifest;
mod modes;
mod orphans;
mod session;

pub use candidates::candidate_names;
pub use manifest::{ManifestEntry, TokenManifest};
pub use modes::{plan_modes, ModeInfo, ModePlan, ModeRename, ModeTarget};
pub use orphans::orphaned_sentiment_variables;
pub use session::{MappingSession, WriteMode};
