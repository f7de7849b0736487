//! Property-based tests for the pure pipeline stages

use comdoc::docs::ast::{DocItem, MarkdownToken, RawComment};
use comdoc::docs::extraction::{is_documentation, normalize_indentation, IndentationStrategy};
use comdoc::docs::heading_gate::exclude_pre_heading_tokens;
use comdoc::docs::links::extract_link_bodies;
use proptest::prelude::*;

/// Lines with no leading whitespace (blank lines allowed)
fn flush_text() -> impl Strategy<Value = String> {
    prop::collection::vec("([^\\s\\n][^\\n]{0,20})?", 0..8).prop_map(|lines| lines.join("\n"))
}

fn indented_text() -> impl Strategy<Value = String> {
    prop::collection::vec("[ \\t]{0,6}[^\\n]{0,20}", 0..8).prop_map(|lines| lines.join("\n"))
}

fn token() -> impl Strategy<Value = MarkdownToken> {
    prop_oneof![
        (1u8..=3, "[a-z]{1,8}").prop_map(|(depth, text)| MarkdownToken::heading(depth, text)),
        "[a-z ]{0,12}".prop_map(MarkdownToken::paragraph),
        Just(MarkdownToken::Rule),
    ]
}

fn doc_items() -> impl Strategy<Value = Vec<DocItem>> {
    prop::collection::vec(
        (0usize..500, prop::collection::vec(token(), 0..5))
            .prop_map(|(line, tokens)| DocItem::new(line, tokens)),
        0..6,
    )
}

proptest! {
    #[test]
    fn normalizing_flush_text_is_a_no_op(text in flush_text()) {
        prop_assert_eq!(normalize_indentation(&text, IndentationStrategy::FirstLine), text.clone());
        prop_assert_eq!(normalize_indentation(&text, IndentationStrategy::Minimum), text);
    }

    #[test]
    fn normalizing_keeps_line_count(text in indented_text()) {
        for strategy in [IndentationStrategy::FirstLine, IndentationStrategy::Minimum] {
            let normalized = normalize_indentation(&text, strategy);
            prop_assert_eq!(normalized.split('\n').count(), text.split('\n').count());
        }
    }

    #[test]
    fn normalizing_only_removes_leading_whitespace(text in indented_text()) {
        let normalized = normalize_indentation(&text, IndentationStrategy::FirstLine);
        for (before, after) in text.split('\n').zip(normalized.split('\n')) {
            prop_assert!(before.ends_with(after));
            prop_assert_eq!(before.trim_start(), after.trim_start());
        }
    }

    #[test]
    fn normalizing_is_idempotent(text in indented_text()) {
        let once = normalize_indentation(&text, IndentationStrategy::Minimum);
        let twice = normalize_indentation(&once, IndentationStrategy::Minimum);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn heading_gate_returns_empty_or_titled_suffix(items in doc_items()) {
        let gated = exclude_pre_heading_tokens(items.clone());
        if let Some(first) = gated.first() {
            prop_assert!(first.tokens.first().is_some_and(|token| token.is_heading(1)));
            // Every item after the first is an untouched suffix of the input
            let rest = &gated[1..];
            prop_assert_eq!(rest, &items[items.len() - rest.len()..]);
            // The first item is a tail of its input item
            let source = &items[items.len() - gated.len()];
            prop_assert_eq!(source.line, first.line);
            prop_assert!(source.tokens.ends_with(&first.tokens));
        } else {
            prop_assert!(items.iter().all(|item| !item.tokens.iter().any(|t| t.is_heading(1))));
        }
    }

    #[test]
    fn single_line_comments_need_the_sigil(text in "[^\\n]{0,30}") {
        let comment = RawComment::new(text.clone(), 1, 0);
        prop_assert_eq!(is_documentation(&comment), text.starts_with('>'));
    }

    #[test]
    fn multi_line_comments_are_always_kept(first in "[^\\n]{0,20}", second in "[^\\n]{0,20}") {
        let comment = RawComment::new(format!("{first}\n{second}"), 1, 0);
        prop_assert!(is_documentation(&comment));
    }

    #[test]
    fn link_bodies_survive_surrounding_prose(
        before in "[^\\[\\]]{0,20}",
        between in "[^\\[\\]]{0,20}",
        after in "[^\\[\\]]{0,20}",
    ) {
        let text = format!("{before}[[A]]{between}[[B][C]]{after}");
        prop_assert_eq!(extract_link_bodies(&text), vec!["A", "B][C"]);
    }
}
