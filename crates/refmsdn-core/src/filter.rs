//! Exact-match tag filtering.

use crate::item::Item;

/// Keeps the items whose tag equals `tag`, in input order.
///
/// An empty `tag` requests no filtering and returns `items` unchanged.
/// Matching is case-sensitive with no normalization beyond the trim applied
/// at extraction time.
pub fn filter_by_tag(items: Vec<Item>, tag: &str) -> Vec<Item> {
    if tag.is_empty() {
        return items;
    }
    items.into_iter().filter(|item| item.tag == tag).collect()
}
