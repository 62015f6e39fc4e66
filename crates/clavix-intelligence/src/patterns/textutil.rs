//! Small text helpers shared by the concrete patterns.

/// Split into trimmed, non-empty sentences on `.`, `!`, `?`, `\n`.
pub(crate) fn sentences(text: &str) -> Vec<&str> {
    text.split(|c| matches!(c, '.' | '!' | '?' | '\n'))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

pub(crate) fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

pub(crate) fn contains_any(lower: &str, table: &[&str]) -> bool {
    table.iter().any(|kw| lower.contains(kw))
}

pub(crate) fn hit_count(lower: &str, table: &[&str]) -> usize {
    table.iter().filter(|kw| lower.contains(*kw)).count()
}

/// How many of the fixed markdown-structure indicator families appear:
/// headers, bullets, numbered lists, code fences, paragraph breaks and
/// labeled sections.
pub(crate) fn structure_indicator_count(text: &str) -> usize {
    let mut count = 0;
    if text.contains('#') {
        count += 1;
    }
    if text
        .lines()
        .any(|l| l.trim_start().starts_with("- ") || l.trim_start().starts_with("* "))
    {
        count += 1;
    }
    if text.lines().any(|l| {
        let t = l.trim_start();
        t.len() > 2 && t.as_bytes()[0].is_ascii_digit() && t.as_bytes()[1] == b'.'
    }) {
        count += 1;
    }
    if text.contains("```") {
        count += 1;
    }
    if text.contains("\n\n") {
        count += 1;
    }
    if text
        .lines()
        .any(|l| l.trim_end().ends_with(':') && word_count(l) <= 4 && !l.trim().is_empty())
    {
        count += 1;
    }
    count
}

/// Whether the text contains bullet list lines.
pub(crate) fn has_bullets(text: &str) -> bool {
    text.lines()
        .any(|l| l.trim_start().starts_with("- ") || l.trim_start().starts_with("* "))
}

/// Deduplicate case-insensitively, keeping first occurrence order.
pub(crate) fn dedup_keep_order(items: Vec<String>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    let mut result = Vec::new();
    for item in items {
        let key = item.to_lowercase();
        if !seen.contains(&key) {
            seen.push(key);
            result.push(item);
        }
    }
    result
}
