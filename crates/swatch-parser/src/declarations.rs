//! Declaration parsing: turning a block body into a name/value map.

use indexmap::IndexMap;

/// Parse the declarations of a block body.
///
/// Segments are split on `;`, trimmed, and dropped when empty; each remaining
/// segment is split at its first `:` into a trimmed property name and value.
/// Segments without a `:` are ignored. The map preserves source order; a
/// duplicate property name within one block is undefined behavior and no
/// particular outcome is guaranteed.
pub fn parse_declarations(body: &str) -> IndexMap<String, String> {
    let mut declarations = IndexMap::new();

    for segment in body.split(';') {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }
        if let Some((name, value)) = segment.split_once(':') {
            declarations.insert(name.trim().to_string(), value.trim().to_string());
        }
    }

    declarations
}

/// Parse the declarations of a mode block (`:root`/`.light`/`.dark`).
///
/// Only custom properties participate in mode joins; names that do not start
/// with `--` are silently skipped.
pub fn mode_declarations(body: &str) -> IndexMap<String, String> {
    let mut declarations = parse_declarations(body);
    declarations.retain(|name, _| name.starts_with("--"));
    declarations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_declarations() {
        let decls = parse_declarations("--a: var(--x);\n  --b: var(--y);");
        assert_eq!(decls.len(), 2);
        assert_eq!(decls["--a"], "var(--x)");
        assert_eq!(decls["--b"], "var(--y)");
    }

    #[test]
    fn test_value_keeps_everything_after_first_colon() {
        let decls = parse_declarations("--a: url(data:image/png)");
        assert_eq!(decls["--a"], "url(data:image/png)");
    }

    #[test]
    fn test_empty_segments_are_dropped() {
        let decls = parse_declarations(";;  ;\n--a: 1;;");
        assert_eq!(decls.len(), 1);
    }

    #[test]
    fn test_segments_without_colon_are_ignored() {
        let decls = parse_declarations("--a: 1; stray token; --b: 2");
        assert_eq!(decls.len(), 2);
    }

    #[test]
    fn test_mode_declarations_skip_non_custom_properties() {
        let decls = mode_declarations("color: red; --fill-danger: var(--color-red-500);");
        assert_eq!(decls.len(), 1);
        assert!(decls.contains_key("--fill-danger"));
    }

    #[test]
    fn test_source_order_is_preserved() {
        let decls = parse_declarations("--z: 1; --a: 2; --m: 3;");
        let names: Vec<_> = decls.keys().map(String::as_str).collect();
        assert_eq!(names, ["--z", "--a", "--m"]);
    }
}
