//! Block extraction: locating the `@theme`, light, and dark regions.

use swatch_core::{BlockKind, ParseError};

/// Raw bodies of the three required blocks, captured verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeBlocks {
    pub theme: String,
    pub light: String,
    pub dark: String,
}

/// Locate the three required blocks in a theme file.
///
/// The document is scanned with an explicit brace-depth counter rather than
/// a non-greedy `{...}` pattern, so a block body containing nested braces is
/// still bounded correctly. For each category only the first matching block
/// is kept. A missing block fails the whole extraction; there is no partial
/// result.
pub fn extract_blocks(source: &str) -> Result<ThemeBlocks, ParseError> {
    let mut theme: Option<&str> = None;
    let mut light: Option<&str> = None;
    let mut dark: Option<&str> = None;

    let mut cursor = 0;
    while let Some(rel) = source[cursor..].find('{') {
        let open = cursor + rel;

        // The selector is whatever sits between the previous block (or any
        // trailing top-level statement) and this opening brace.
        let selector = source[cursor..open]
            .rsplit(';')
            .next()
            .unwrap_or("")
            .trim();

        let Some(close) = matching_close(source, open) else {
            // Unterminated block: nothing past this point can be captured.
            break;
        };
        let body = &source[open + 1..close];

        if selector.starts_with("@theme") {
            theme.get_or_insert(body);
        } else if selector.contains(".dark") {
            dark.get_or_insert(body);
        } else if selector.contains(":root") || selector.contains(".light") {
            light.get_or_insert(body);
        }

        cursor = close + 1;
    }

    let theme = theme.ok_or(ParseError::MissingBlock {
        block: BlockKind::Theme,
    })?;
    let light = light.ok_or(ParseError::MissingBlock {
        block: BlockKind::Light,
    })?;
    let dark = dark.ok_or(ParseError::MissingBlock {
        block: BlockKind::Dark,
    })?;

    Ok(ThemeBlocks {
        theme: theme.to_string(),
        light: light.to_string(),
        dark: dark.to_string(),
    })
}

/// Byte index of the `}` closing the brace at `open`, tracking nesting depth.
fn matching_close(source: &str, open: usize) -> Option<usize> {
    let mut depth = 1usize;
    for (i, ch) in source[open + 1..].char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + 1 + i);
                }
            }
            _ => {}
        }
    }
    None
}
