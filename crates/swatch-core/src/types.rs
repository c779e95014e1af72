//! Core value types for the Swatch theme mapper.

use std::fmt;
use std::str::FromStr;

use smallvec::SmallVec;

/// A canonical variable name in the target system: slash-delimited path
/// segments plus an optional opacity step (e.g. `color/red/500_90`).
///
/// Opacity is stored as an integer percentage in `0..=99`; full opacity is
/// represented as `None` and never rendered as a suffix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReferencePath {
    segments: SmallVec<[String; 4]>,
    opacity: Option<u8>,
}

impl ReferencePath {
    /// Build a path from pre-split segments.
    pub fn new<I, S>(segments: I, opacity: Option<u8>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
            opacity,
        }
    }

    /// Build a path from a CSS custom-property identifier (without the `--`
    /// prefix), splitting on hyphens: `color-red-500` becomes `color/red/500`.
    pub fn from_css_ident(ident: &str, opacity: Option<u8>) -> Self {
        Self {
            segments: ident.split('-').map(str::to_string).collect(),
            opacity,
        }
    }

    /// The path segments, in order.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The opacity step, if any.
    pub fn opacity(&self) -> Option<u8> {
        self.opacity
    }

    /// The final path segment (e.g. `500` in `color/red/500`).
    pub fn last_segment(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Whether this path names a stepless palette color (`black` or `white`),
    /// which has no intermediate numeric step between its base and opacity
    /// variants.
    pub fn is_stepless(&self) -> bool {
        self.last_segment()
            .map(|s| s.eq_ignore_ascii_case("black") || s.eq_ignore_ascii_case("white"))
            .unwrap_or(false)
    }

    /// Render the canonical name, e.g. `color/red/500` or `color/red/500_05`.
    pub fn canonical(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ReferencePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("/"))?;
        if let Some(opacity) = self.opacity {
            write!(f, "_{:02}", opacity)?;
        }
        Ok(())
    }
}

/// Final output unit of a parse: one target variable and the reference it
/// aliases in each mode.
///
/// Both sides are always present. A theme entry that cannot be completed in
/// both modes either fails the whole parse or is dropped entirely, depending
/// on [`IncompleteEntryPolicy`]; a partial mapping is never produced.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VariableMapping {
    /// Destination name in the target system (e.g. `color/fill/danger`).
    pub target: String,
    /// Reference to alias in light mode.
    pub light: ReferencePath,
    /// Reference to alias in dark mode.
    pub dark: ReferencePath,
}

/// Sentiment tag carried by a theme file, derived from its filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sentiment {
    Danger,
    Warning,
    Success,
    Info,
    Brand,
    Neutral,
}

impl Sentiment {
    /// All recognized tags, in display order.
    pub const ALL: [Sentiment; 6] = [
        Sentiment::Danger,
        Sentiment::Warning,
        Sentiment::Success,
        Sentiment::Info,
        Sentiment::Brand,
        Sentiment::Neutral,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Danger => "danger",
            Sentiment::Warning => "warning",
            Sentiment::Success => "success",
            Sentiment::Info => "info",
            Sentiment::Brand => "brand",
            Sentiment::Neutral => "neutral",
        }
    }

    /// Classify a filename by exact match against `<tag>.css`.
    ///
    /// Returns `None` for anything else, including paths with directory
    /// components or extra extensions.
    pub fn from_filename(filename: &str) -> Option<Self> {
        filename
            .strip_suffix(".css")
            .and_then(|stem| stem.parse().ok())
    }
}

impl FromStr for Sentiment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "danger" => Ok(Sentiment::Danger),
            "warning" => Ok(Sentiment::Warning),
            "success" => Ok(Sentiment::Success),
            "info" => Ok(Sentiment::Info),
            "brand" => Ok(Sentiment::Brand),
            "neutral" => Ok(Sentiment::Neutral),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the three required CSS blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BlockKind {
    Theme,
    Light,
    Dark,
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BlockKind::Theme => "@theme",
            BlockKind::Light => ":root/.light",
            BlockKind::Dark => ".dark",
        })
    }
}

/// One of the two color-scheme modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ModeKind {
    Light,
    Dark,
}

impl fmt::Display for ModeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ModeKind::Light => "Light",
            ModeKind::Dark => "Dark",
        })
    }
}

/// What to do when a theme entry has no counterpart in one of the mode blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IncompleteEntryPolicy {
    /// Fail the whole parse on the first incomplete entry.
    #[default]
    Abort,
    /// Drop the incomplete entry and continue.
    Skip,
}

/// Options controlling a parse call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParseOptions {
    pub on_incomplete: IncompleteEntryPolicy,
}

impl ParseOptions {
    /// The strict default: abort on the first incomplete entry.
    pub fn strict() -> Self {
        Self {
            on_incomplete: IncompleteEntryPolicy::Abort,
        }
    }

    /// Drop incomplete entries instead of failing.
    pub fn lenient() -> Self {
        Self {
            on_incomplete: IncompleteEntryPolicy::Skip,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_path_display() {
        let path = ReferencePath::from_css_ident("color-red-500", None);
        assert_eq!(path.to_string(), "color/red/500");

        let path = ReferencePath::from_css_ident("color-red-500", Some(5));
        assert_eq!(path.to_string(), "color/red/500_05");

        let path = ReferencePath::from_css_ident("color-red-500", Some(90));
        assert_eq!(path.to_string(), "color/red/500_90");
    }

    #[test]
    fn test_reference_path_segments() {
        let path = ReferencePath::from_css_ident("fill-danger", None);
        assert_eq!(path.segments(), &["fill".to_string(), "danger".to_string()]);
        assert_eq!(path.last_segment(), Some("danger"));
    }

    #[test]
    fn test_stepless_detection() {
        assert!(ReferencePath::from_css_ident("color-black", Some(50)).is_stepless());
        assert!(ReferencePath::from_css_ident("color-white", None).is_stepless());
        assert!(!ReferencePath::from_css_ident("color-red-500", None).is_stepless());
    }

    #[test]
    fn test_sentiment_from_filename() {
        assert_eq!(
            Sentiment::from_filename("danger.css"),
            Some(Sentiment::Danger)
        );
        assert_eq!(
            Sentiment::from_filename("neutral.css"),
            Some(Sentiment::Neutral)
        );
        assert_eq!(Sentiment::from_filename("danger.scss"), None);
        assert_eq!(Sentiment::from_filename("theme.css"), None);
        assert_eq!(Sentiment::from_filename("tokens/danger.css"), None);
        assert_eq!(Sentiment::from_filename("Danger.css"), None);
    }

    #[test]
    fn test_parse_options_default_is_strict() {
        assert_eq!(
            ParseOptions::default().on_incomplete,
            IncompleteEntryPolicy::Abort
        );
        assert_eq!(
            ParseOptions::lenient().on_incomplete,
            IncompleteEntryPolicy::Skip
        );
    }
}
