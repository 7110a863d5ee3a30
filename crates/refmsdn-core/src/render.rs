//! Plain-text listing of the final items.

use std::io::{self, Write};

use crate::item::Item;

/// One `tag=<tag>, link=<link>` line per item. Empty input renders nothing.
pub fn render(items: &[Item]) -> String {
    items
        .iter()
        .map(|item| format!("tag={}, link={}\n", item.tag, item.link))
        .collect()
}

pub fn write_items<W: Write>(out: &mut W, items: &[Item]) -> io::Result<()> {
    out.write_all(render(items).as_bytes())?;
    out.flush()
}
