//! The single entity flowing through every drill-down stage.

use std::fmt;

/// A tagged, optionally linked entry extracted from a catalog or navigation page.
///
/// `tag` is trimmed at extraction time. `link` is empty for level-0 category
/// markers and for members that carry no anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub tag: String,
    pub link: String,
}

impl Item {
    pub fn new(tag: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            link: link.into(),
        }
    }

    /// Category marker without a link.
    pub fn category(tag: impl Into<String>) -> Self {
        Self::new(tag, String::new())
    }

    pub fn has_link(&self) -> bool {
        !self.link.is_empty()
    }
}

/// Renders as `&{<tag> <link>}`, the item format of `--debug` traces.
impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "&{{{} {}}}", self.tag, self.link)
    }
}
