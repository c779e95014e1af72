//! Mapping assembly: joining the theme block with the mode blocks.

use indexmap::IndexMap;

use swatch_core::{
    IncompleteEntryPolicy, ModeKind, ParseError, ParseOptions, Sentiment, VariableMapping,
};

use crate::blocks::extract_blocks;
use crate::declarations::{mode_declarations, parse_declarations};
use crate::reference::{resolve_reference, var_ident};

/// Result of parsing a named theme file: the mapping table plus the
/// pass-through sentiment label derived from the filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeFile {
    pub sentiment: Option<Sentiment>,
    pub mappings: Vec<VariableMapping>,
}

/// Parse a CSS theme source into its variable-mapping table.
///
/// Runs the full pipeline: block extraction, declaration parsing, reference
/// resolution, and mapping assembly. The call either returns the complete
/// table or fails with the first violation encountered; under the default
/// strict policy no partial output exists.
pub fn parse_theme(
    source: &str,
    options: &ParseOptions,
) -> Result<Vec<VariableMapping>, ParseError> {
    let blocks = extract_blocks(source)?;

    let theme = theme_entries(&parse_declarations(&blocks.theme))?;
    let light = mode_declarations(&blocks.light);
    let dark = mode_declarations(&blocks.dark);

    assemble(&theme, &light, &dark, options)
}

/// Parse a theme file, classifying its filename into a sentiment label.
///
/// Classification is a pass-through: the parser attaches the label without
/// consuming it. Callers that require a recognized filename enforce that
/// policy themselves.
pub fn parse_theme_file(
    filename: Option<&str>,
    source: &str,
    options: &ParseOptions,
) -> Result<ThemeFile, ParseError> {
    Ok(ThemeFile {
        sentiment: filename.and_then(Sentiment::from_filename),
        mappings: parse_theme(source, options)?,
    })
}

/// One usable `@theme` entry: the target name and the `--`-prefixed
/// intermediate custom property it points at.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ThemeEntry {
    target: String,
    intermediate: String,
}

/// Interpret the raw `@theme` declarations.
///
/// The declared name loses its `--` prefix and its hyphens become path
/// separators; the value must be a plain `var(--x)` reference naming the
/// intermediate property. Entries whose value is anything else are skipped;
/// a theme block with no usable entry at all fails the parse.
fn theme_entries(declarations: &IndexMap<String, String>) -> Result<Vec<ThemeEntry>, ParseError> {
    let mut entries = Vec::new();

    for (name, value) in declarations {
        let stripped = name.strip_prefix("--").unwrap_or(name);
        let target = stripped.replace('-', "/");

        if let Ok((rest, ident)) = var_ident(value.trim()) {
            if rest.trim().is_empty() {
                entries.push(ThemeEntry {
                    target,
                    intermediate: format!("--{ident}"),
                });
            }
        }
    }

    if entries.is_empty() {
        return Err(ParseError::EmptyTheme);
    }

    Ok(entries)
}

/// Join theme entries with the mode declarations and resolve each side.
///
/// Lookup is by exact match on the `--`-prefixed property name, light mode
/// first. A missing side either aborts the whole assembly or drops the entry,
/// per the configured policy; a reference that fails to resolve is fatal
/// regardless of policy. Output order follows theme declaration order.
fn assemble(
    theme: &[ThemeEntry],
    light: &IndexMap<String, String>,
    dark: &IndexMap<String, String>,
    options: &ParseOptions,
) -> Result<Vec<VariableMapping>, ParseError> {
    let mut mappings = Vec::new();

    for entry in theme {
        let sides = light
            .get(&entry.intermediate)
            .ok_or(ModeKind::Light)
            .and_then(|l| dark.get(&entry.intermediate).ok_or(ModeKind::Dark).map(|d| (l, d)));

        let (light_raw, dark_raw) = match sides {
            Ok(pair) => pair,
            Err(mode) => match options.on_incomplete {
                IncompleteEntryPolicy::Abort => {
                    return Err(ParseError::IncompleteMapping {
                        intermediate: entry.intermediate.clone(),
                        mode,
                    })
                }
                IncompleteEntryPolicy::Skip => continue,
            },
        };

        mappings.push(VariableMapping {
            target: entry.target.clone(),
            light: resolve_reference(light_raw)?,
            dark: resolve_reference(dark_raw)?,
        });
    }

    Ok(mappings)
}
