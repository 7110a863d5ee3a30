//! Structural selector paths for each drill-down stage.

/// CSS selector paths that locate the three page shapes of a catalog site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectorTable {
    /// Category headings on the catalog root. The element that follows each
    /// heading holds the category's members as direct children.
    pub category_heading: &'static str,
    /// Containers on a navigation page whose direct children are topic links.
    pub nav_term: &'static str,
    /// Anchor searched for inside each member to obtain its link.
    pub anchor: &'static str,
}

impl SelectorTable {
    /// MSDN library layout.
    pub const MSDN: SelectorTable = SelectorTable {
        category_heading: "div.catalog > h2",
        nav_term: "div.topic div.sectionblock dl.authored > dt",
        anchor: "a",
    };
}
