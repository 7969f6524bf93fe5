//! Line model shared by the engines.
//!
//! Content is a sequence of lines delimited by `\n`. A trailing newline
//! produces a final empty line, so the line count is always the number of
//! `\n` characters plus one. Caller-facing line numbers are 1-indexed.

/// Marker appended to views cut at the character budget.
pub const TRUNCATION_MARKER: &str = "\n... (truncated)";

/// Split content on `\n`, keeping the empty line after a trailing newline.
pub fn split_lines(content: &str) -> Vec<&str> {
    content.split('\n').collect()
}

/// Number of lines under the `\n`-count-plus-one rule.
pub fn line_count(content: &str) -> usize {
    content.bytes().filter(|&b| b == b'\n').count() + 1
}

/// Render the 1-indexed inclusive range `[start, end]` of `lines`.
///
/// Each line becomes its number right-aligned in six columns, a tab, then
/// the raw text. An empty range renders as an empty string.
pub fn render_numbered(lines: &[&str], start: usize, end: usize) -> String {
    if start == 0 || start > end {
        return String::new();
    }
    lines
        .iter()
        .enumerate()
        .skip(start - 1)
        .take(end + 1 - start)
        .map(|(i, line)| format!("{:>6}\t{}", i + 1, line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Cut `text` to `max_chars` characters and append the truncation marker.
///
/// Text within budget is returned untouched.
pub fn truncate_chars(text: String, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => {
            let mut truncated = text;
            truncated.truncate(cut);
            truncated.push_str(TRUNCATION_MARKER);
            truncated
        }
        None => text,
    }
}

/// 1-indexed numbers of the lines containing `needle` at least once.
pub fn lines_containing(content: &str, needle: &str) -> Vec<usize> {
    content
        .split('\n')
        .enumerate()
        .filter(|(_, line)| line.contains(needle))
        .map(|(i, _)| i + 1)
        .collect()
}

/// First `max_chars` characters of `text`, with `...` when anything was cut.
pub fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_newline_counts_as_line() {
        assert_eq!(line_count("line1\nline2\nline3\n"), 4);
        assert_eq!(split_lines("line1\nline2\nline3\n"), vec!["line1", "line2", "line3", ""]);
        assert_eq!(line_count(""), 1);
        assert_eq!(line_count("no newline"), 1);
    }

    #[test]
    fn test_render_numbered_format() {
        let lines = split_lines("alpha\nbeta\ngamma");
        assert_eq!(render_numbered(&lines, 2, 3), "     2\tbeta\n     3\tgamma");
        assert_eq!(render_numbered(&lines, 1, 1), "     1\talpha");
    }

    #[test]
    fn test_render_numbered_empty_ranges() {
        let lines = split_lines("a\nb");
        assert_eq!(render_numbered(&lines, 3, 2), "");
        assert_eq!(render_numbered(&lines, 0, 2), "");
    }

    #[test]
    fn test_truncate_chars() {
        let long = "x".repeat(20);
        assert_eq!(truncate_chars(long, 5), format!("xxxxx{}", TRUNCATION_MARKER));
        assert_eq!(truncate_chars("short".to_string(), 5), "short");
    }

    #[test]
    fn test_truncate_chars_respects_char_boundaries() {
        let text = "é".repeat(10);
        let truncated = truncate_chars(text, 3);
        assert_eq!(truncated, format!("ééé{}", TRUNCATION_MARKER));
    }

    #[test]
    fn test_lines_containing_counts_each_line_once() {
        let content = "foo foo\nbar\nfoo\n";
        assert_eq!(lines_containing(content, "foo"), vec![1, 3]);
    }

    #[test]
    fn test_preview() {
        assert_eq!(preview("short", 100), "short");
        let long = "a".repeat(150);
        let p = preview(&long, 100);
        assert_eq!(p.len(), 103);
        assert!(p.ends_with("..."));
    }
}
