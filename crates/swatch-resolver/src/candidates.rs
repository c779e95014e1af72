//! Candidate-name generation for host-side variable lookups.

/// The ordered list of names a consumer should try when resolving a
/// reference against the host's variable table.
///
/// A trailing `_100` step is normalized away first, then the chain runs:
/// exact name, with a `color/` prefix, without the prefix, and — for the
/// stepless palette colors — the bare `color/black` / `color/white` form.
/// Duplicates are dropped while preserving order, so a name that already
/// carries the prefix yields a shorter chain.
pub fn candidate_names(name: &str) -> Vec<String> {
    let normalized = name.strip_suffix("_100").unwrap_or(name);
    let bare = normalized.strip_prefix("color/").unwrap_or(normalized);

    let mut candidates = Vec::with_capacity(4);
    push_unique(&mut candidates, normalized.to_string());
    push_unique(&mut candidates, format!("color/{bare}"));
    push_unique(&mut candidates, bare.to_string());

    if let Some(simple) = stepless_segment(normalized) {
        push_unique(&mut candidates, format!("color/{simple}"));
    }

    candidates
}

/// The lowercased final segment when it names a stepless palette color.
fn stepless_segment(name: &str) -> Option<String> {
    let last = name.rsplit('/').next()?;
    if last.eq_ignore_ascii_case("black") || last.eq_ignore_ascii_case("white") {
        Some(last.to_ascii_lowercase())
    } else {
        None
    }
}

fn push_unique(candidates: &mut Vec<String>, name: String) {
    if !candidates.contains(&name) {
        candidates.push(name);
    }
}
