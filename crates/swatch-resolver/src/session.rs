//! Session context for one user-initiated mapping operation.
//!
//! Everything the host glue needs to remember between messages lives here,
//! scoped to a single operation rather than to the process: the detected
//! sentiment, the uploaded manifest, the chosen write mode, and the ids of
//! library variables imported along the way (so they can be cleaned up when
//! the session ends).

use swatch_core::{ResolveError, Sentiment};

use crate::manifest::TokenManifest;
use crate::orphans::orphaned_sentiment_variables;

/// How incoming mappings combine with the target collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Keep existing variables, add or update the incoming ones.
    #[default]
    Merge,
    /// Additionally remove sentiment variables the incoming set no longer
    /// declares.
    Replace,
}

/// State for one mapping operation.
#[derive(Debug, Clone, Default)]
pub struct MappingSession {
    sentiment: Option<Sentiment>,
    write_mode: WriteMode,
    manifest: Option<TokenManifest>,
    imported: Vec<String>,
}

impl MappingSession {
    pub fn new(write_mode: WriteMode) -> Self {
        Self {
            write_mode,
            ..Self::default()
        }
    }

    /// Classify the uploaded file's name and remember the sentiment.
    ///
    /// A missing filename clears the label; a present filename that matches
    /// no sentiment tag is an error, since sentiment-scoped cleanup would
    /// otherwise operate on the wrong variables.
    pub fn classify_file(&mut self, filename: Option<&str>) -> Result<Option<Sentiment>, ResolveError> {
        self.sentiment = match filename {
            None => None,
            Some(name) => Some(Sentiment::from_filename(name).ok_or_else(|| {
                ResolveError::UnrecognizedFilename {
                    filename: name.to_string(),
                }
            })?),
        };
        Ok(self.sentiment)
    }

    pub fn sentiment(&self) -> Option<Sentiment> {
        self.sentiment
    }

    pub fn write_mode(&self) -> WriteMode {
        self.write_mode
    }

    pub fn set_write_mode(&mut self, write_mode: WriteMode) {
        self.write_mode = write_mode;
    }

    /// Parse and attach an uploaded manifest, returning its entry count.
    pub fn load_manifest(&mut self, json: &str) -> Result<usize, ResolveError> {
        let manifest = TokenManifest::from_json(json)?;
        let count = manifest.len();
        self.manifest = Some(manifest);
        Ok(count)
    }

    pub fn manifest(&self) -> Option<&TokenManifest> {
        self.manifest.as_ref()
    }

    /// Manifest lookup through the candidate-name chain, when a manifest is
    /// loaded.
    pub fn find_key(&self, name: &str) -> Option<&str> {
        self.manifest.as_ref()?.find_key(name)
    }

    /// Remember a library variable imported during this session.
    pub fn record_import(&mut self, id: impl Into<String>) {
        self.imported.push(id.into());
    }

    /// Hand the imported-variable ids to the host for cleanup, emptying the
    /// session's list.
    pub fn take_imports(&mut self) -> Vec<String> {
        std::mem::take(&mut self.imported)
    }

    /// Existing variables that the incoming set orphans.
    ///
    /// Only a `Replace` session with a known sentiment performs cleanup;
    /// anything else returns no orphans.
    pub fn orphans(&self, existing: &[String], incoming: &[String]) -> Vec<String> {
        match (self.write_mode, self.sentiment) {
            (WriteMode::Replace, Some(sentiment)) => {
                orphaned_sentiment_variables(existing, incoming, sentiment)
            }
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_file() {
        let mut session = MappingSession::default();
        assert_eq!(
            session.classify_file(Some("danger.css")).unwrap(),
            Some(Sentiment::Danger)
        );
        assert_eq!(session.sentiment(), Some(Sentiment::Danger));

        assert_eq!(session.classify_file(None).unwrap(), None);
        assert_eq!(session.sentiment(), None);
    }

    #[test]
    fn test_classify_rejects_unknown_filename() {
        let mut session = MappingSession::default();
        let err = session.classify_file(Some("palette.css")).unwrap_err();
        assert_eq!(
            err,
            ResolveError::UnrecognizedFilename {
                filename: "palette.css".to_string()
            }
        );
    }

    #[test]
    fn test_manifest_lookup() {
        let mut session = MappingSession::default();
        assert_eq!(session.find_key("color/red/500"), None);

        let count = session
            .load_manifest(r#"{ "color/red/500": { "key": "k1" } }"#)
            .unwrap();
        assert_eq!(count, 1);
        assert_eq!(session.find_key("red/500"), Some("k1"));
    }

    #[test]
    fn test_import_bookkeeping() {
        let mut session = MappingSession::default();
        session.record_import("VariableID:1:2");
        session.record_import("VariableID:1:3");

        let imports = session.take_imports();
        assert_eq!(imports, vec!["VariableID:1:2", "VariableID:1:3"]);
        assert!(session.take_imports().is_empty());
    }

    #[test]
    fn test_orphans_require_replace_and_sentiment() {
        let existing = vec!["color/fill/danger".to_string()];

        let mut session = MappingSession::new(WriteMode::Replace);
        assert!(session.orphans(&existing, &[]).is_empty());

        session.classify_file(Some("danger.css")).unwrap();
        assert_eq!(session.orphans(&existing, &[]), existing);

        session.set_write_mode(WriteMode::Merge);
        assert!(session.orphans(&existing, &[]).is_empty());
    }
}
