//! Exclude pre-heading markdown tokens
//!
//!     Every document is expected to begin with a depth-1 heading, so anything before it is
//!     ignored. Metadata comments near the top of a file are common and have no place in the
//!     docs. Requiring a depth-1 heading also gives authors a natural way to opt in, so files
//!     never written with documentation in mind don't produce nonsense documents.
//!
//!     The gate runs over all items of a file at once: a heading in a later comment still
//!     opens the document even when earlier comments have none.

use crate::docs::ast::DocItem;

/// Position of the first depth-1 heading as (item index, token index)
pub fn find_first_title(items: &[DocItem]) -> Option<(usize, usize)> {
    items.iter().enumerate().find_map(|(item_index, item)| {
        item.tokens
            .iter()
            .position(|token| token.is_heading(1))
            .map(|token_index| (item_index, token_index))
    })
}

/// Drop every item and token that precedes the first depth-1 heading.
///
/// Returns an empty sequence when there is no depth-1 heading at all. Otherwise the
/// first token of the first returned item is that heading, and all later items are
/// returned as they were.
pub fn exclude_pre_heading_tokens(items: Vec<DocItem>) -> Vec<DocItem> {
    let Some((item_index, token_index)) = find_first_title(&items) else {
        return Vec::new();
    };

    items
        .into_iter()
        .skip(item_index)
        .enumerate()
        .map(|(offset, item)| {
            if offset == 0 {
                DocItem::new(item.line, item.tokens.into_iter().skip(token_index).collect())
            } else {
                item
            }
        })
        .collect()
}
