//! Catalog navigation: turns parsed pages into tagged links.
//!
//! The source site has three structurally distinct page shapes, one per
//! drill-down depth:
//! - the catalog root's category headings (no links),
//! - the members listed in the block following each heading,
//! - the authored definition list of a navigation page.
//!
//! Only this module knows about page structure; targeting another site means
//! another [`SelectorTable`] or another [`Navigator`] implementation.

mod selectors;

pub use selectors::SelectorTable;

use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;

use crate::error::FetchError;
use crate::item::Item;

pub trait Navigator {
    /// Level 0: one link-less item per category heading.
    fn categories(&self, doc: &Html) -> Vec<Item>;

    /// Level 1: members of every category whose tag is in `accepted`.
    /// An empty `accepted` set accepts every category, and a heading with no
    /// text is accepted whenever `accepted` is non-empty.
    fn category_items(&self, doc: &Html, accepted: &HashSet<String>) -> Vec<Item>;

    /// Level 2 and deeper: topic links on a navigation page.
    fn nav_links(&self, doc: &Html) -> Vec<Item>;
}

/// [`Navigator`] driven by a compiled [`SelectorTable`].
#[derive(Debug, Clone)]
pub struct SelectorNavigator {
    category_heading: Selector,
    nav_term: Selector,
    anchor: Selector,
}

impl SelectorNavigator {
    pub fn new(table: &SelectorTable) -> Result<Self, FetchError> {
        Ok(Self {
            category_heading: compile(table.category_heading)?,
            nav_term: compile(table.nav_term)?,
            anchor: compile(table.anchor)?,
        })
    }

    pub fn msdn() -> Result<Self, FetchError> {
        Self::new(&SelectorTable::MSDN)
    }

    fn member(&self, el: ElementRef<'_>) -> Item {
        let link = el
            .select(&self.anchor)
            .next()
            .and_then(|a| a.value().attr("href"))
            .unwrap_or_default();
        Item::new(trimmed_text(el), link)
    }

    /// One item per direct element child of `container`.
    fn members_of(&self, container: ElementRef<'_>) -> Vec<Item> {
        container
            .children()
            .filter_map(ElementRef::wrap)
            .map(|child| self.member(child))
            .collect()
    }
}

impl Navigator for SelectorNavigator {
    fn categories(&self, doc: &Html) -> Vec<Item> {
        doc.select(&self.category_heading)
            .map(|h| Item::category(trimmed_text(h)))
            .collect()
    }

    fn category_items(&self, doc: &Html, accepted: &HashSet<String>) -> Vec<Item> {
        let mut items = Vec::new();
        for heading in doc.select(&self.category_heading) {
            let tag = trimmed_text(heading);
            if !tag.is_empty() && !accepted.is_empty() && !accepted.contains(&tag) {
                continue;
            }
            // Members live in the heading's next element sibling.
            let Some(block) = heading.next_siblings().find_map(ElementRef::wrap) else {
                continue;
            };
            items.extend(self.members_of(block));
        }
        items
    }

    fn nav_links(&self, doc: &Html) -> Vec<Item> {
        doc.select(&self.nav_term)
            .flat_map(|term| self.members_of(term))
            .collect()
    }
}

fn compile(selector: &str) -> Result<Selector, FetchError> {
    Selector::parse(selector).map_err(|e| FetchError::Selector {
        selector: selector.to_string(),
        message: e.to_string(),
    })
}

fn trimmed_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}
