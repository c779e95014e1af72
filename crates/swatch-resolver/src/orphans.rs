//! Sentiment cleanup: finding variables a replacement import leaves behind.

use std::collections::HashSet;

use swatch_core::Sentiment;

/// Names in `existing` that belong to `sentiment` but are not re-declared by
/// the incoming mapping set.
///
/// A name belongs to a sentiment when it has the shape
/// `color/<family>/<sentiment>` or `color/<family>/<sentiment>/...` — the
/// sentiment must be the whole third segment, so `color/fill/danger-hover`
/// does not match `danger`. Input order is preserved.
pub fn orphaned_sentiment_variables(
    existing: &[String],
    incoming: &[String],
    sentiment: Sentiment,
) -> Vec<String> {
    let incoming: HashSet<&str> = incoming.iter().map(String::as_str).collect();

    existing
        .iter()
        .filter(|name| belongs_to_sentiment(name, sentiment) && !incoming.contains(name.as_str()))
        .cloned()
        .collect()
}

fn belongs_to_sentiment(name: &str, sentiment: Sentiment) -> bool {
    let mut segments = name.split('/');
    segments.next() == Some("color")
        && segments.next().is_some()
        && segments.next() == Some(sentiment.as_str())
}
