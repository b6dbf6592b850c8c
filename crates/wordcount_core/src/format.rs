use std::collections::HashMap;
use std::fmt::Write;

/// Report printed when nothing is counted.
pub const NO_ENTRIES: &str = "-- no entries --";

/// Renders counts as one `word: count` line per word, most frequent first and
/// ties in ascending word order. Counts are right-aligned so every line has
/// the same length. No trailing newline.
///
/// ```text
/// hello: 500
/// world:  50
/// how:    10
/// are:     5
/// you:     5
/// ```
pub fn format_counts(counts: &HashMap<String, usize>) -> String {
    if counts.is_empty() {
        return NO_ENTRIES.to_string();
    }

    let mut rows: Vec<(&str, usize)> = counts
        .iter()
        .map(|(word, count)| (word.as_str(), *count))
        .collect();
    rows.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    let max_word = rows.iter().map(|(word, _)| word.len()).max().unwrap_or(0);
    let max_digits = rows.iter().map(|(_, count)| digits(*count)).max().unwrap_or(1);

    let mut report = String::with_capacity(rows.len() * (max_word + max_digits + 3));
    for (word, count) in rows {
        let width = max_digits + max_word - word.len();
        let _ = writeln!(report, "{word}: {count:>width$}");
    }
    report.pop();
    report
}

fn digits(count: usize) -> usize {
    count.checked_ilog10().map_or(1, |log| log as usize + 1)
}

#[cfg(test)]
mod tests {
    use super::digits;

    #[test]
    fn digit_widths() {
        assert_eq!(digits(0), 1);
        assert_eq!(digits(9), 1);
        assert_eq!(digits(10), 2);
        assert_eq!(digits(500), 3);
        assert_eq!(digits(1_000_000), 7);
    }
}
