//! Documentation comment filter

use crate::docs::ast::RawComment;

/// Character that opts a single-line comment into documentation
pub const DEFAULT_SIGIL: char = '>';

/// Keeps multi-line comments, and single-line comments starting with the sigil
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentFilter {
    pub sigil: char,
}

impl CommentFilter {
    pub fn new(sigil: char) -> Self {
        Self { sigil }
    }

    pub fn keep(&self, comment: &RawComment) -> bool {
        if comment.is_multi_line {
            return true;
        }
        comment.text.starts_with(self.sigil)
    }
}

impl Default for CommentFilter {
    fn default() -> Self {
        Self::new(DEFAULT_SIGIL)
    }
}

/// Check a comment against the default sigil
pub fn is_documentation(comment: &RawComment) -> bool {
    CommentFilter::default().keep(comment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("> included", true)]
    #[case(">", true)]
    #[case(" > leading space", false)]
    #[case(" not docs", false)]
    #[case("", false)]
    #[case("\n# Title\n", true)]
    #[case("no heading\nbut two lines", true)]
    fn test_default_filter(#[case] text: &str, #[case] expected: bool) {
        assert_eq!(is_documentation(&RawComment::new(text, 1, 0)), expected);
    }

    #[test]
    fn test_custom_sigil() {
        let filter = CommentFilter::new('!');
        assert!(filter.keep(&RawComment::new("! docs", 1, 0)));
        assert!(!filter.keep(&RawComment::new("> docs", 1, 0)));
    }
}
