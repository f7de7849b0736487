//! Zeroing comment indentation
//!
//! Comments are often indented along with the code around them. Markdown treats four
//! leading spaces as a code block, so the indentation must be removed before parsing.
//!
//! With [IndentationStrategy::FirstLine] the leading whitespace of the first non-blank
//! line is taken as the indentation of the whole comment. Blank lines are skipped when
//! looking for it since they say nothing about indentation. Only leading whitespace is
//! ever removed: a line indented less than the first one loses its whitespace but keeps
//! all of its content. [IndentationStrategy::Minimum] uses the smallest indentation
//! among non-blank lines instead.

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IndentationStrategy {
    #[default]
    FirstLine,
    Minimum,
}

fn leading_whitespace(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// The indentation to remove, in characters
pub fn indentation_width(text: &str, strategy: IndentationStrategy) -> usize {
    let mut widths = text
        .split('\n')
        .filter(|line| !is_blank(line))
        .map(leading_whitespace);

    match strategy {
        IndentationStrategy::FirstLine => widths.next().unwrap_or(0),
        IndentationStrategy::Minimum => widths.min().unwrap_or(0),
    }
}

/// Remove up to `width` leading whitespace characters from a line
fn dedent_line(line: &str, width: usize) -> &str {
    let cut = line
        .char_indices()
        .take(width)
        .take_while(|(_, c)| c.is_whitespace())
        .last()
        .map(|(offset, c)| offset + c.len_utf8())
        .unwrap_or(0);
    &line[cut..]
}

/// De-indent a comment body. The number of lines is always preserved.
pub fn normalize_indentation(text: &str, strategy: IndentationStrategy) -> String {
    let width = indentation_width(text, strategy);
    if width == 0 {
        return text.to_string();
    }

    text.split('\n')
        .map(|line| dedent_line(line, width))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_removes_first_line_indentation() {
        let text = "\n    # Title\n\n    Body\n      nested\n  ";
        assert_eq!(
            normalize_indentation(text, IndentationStrategy::FirstLine),
            "\n# Title\n\nBody\n  nested\n"
        );
    }

    #[test]
    fn test_shorter_line_keeps_content() {
        let text = "    # Title\n  short\nflush";
        assert_eq!(
            normalize_indentation(text, IndentationStrategy::FirstLine),
            "# Title\nshort\nflush"
        );
    }

    #[test]
    fn test_minimum_strategy() {
        let text = "    # Title\n  short\n      deep";
        assert_eq!(
            normalize_indentation(text, IndentationStrategy::Minimum),
            "  # Title\nshort\n    deep"
        );
    }

    #[rstest]
    #[case::all_blank("\n   \n\t\n")]
    #[case::empty("")]
    #[case::flush("# Title\n  indented")]
    fn test_unchanged(#[case] text: &str) {
        assert_eq!(normalize_indentation(text, IndentationStrategy::FirstLine), text);
        assert_eq!(normalize_indentation(text, IndentationStrategy::Minimum), text);
    }

    #[test]
    fn test_tabs_count_as_one_character() {
        assert_eq!(
            normalize_indentation("\t\t# Title\n\t\tBody", IndentationStrategy::FirstLine),
            "# Title\nBody"
        );
    }

    #[test]
    fn test_line_count_preserved() {
        let text = "\n  a\n\n    b\n c\n";
        let normalized = normalize_indentation(text, IndentationStrategy::FirstLine);
        assert_eq!(normalized.split('\n').count(), text.split('\n').count());
    }
}
