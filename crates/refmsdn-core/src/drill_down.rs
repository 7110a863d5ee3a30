//! Level-by-level narrowing of the catalog.
//!
//! Each query term consumes one level: categories on the catalog root, then
//! the members of the surviving categories, then the navigation pages behind
//! every surviving member, repeated for each further term.

use scraper::Html;
use std::collections::HashSet;
use std::io::{self, Write};
use url::Url;

use crate::error::FetchError;
use crate::fetch::{PageFetcher, Transport};
use crate::filter::filter_by_tag;
use crate::item::Item;
use crate::navigator::Navigator;

/// Diagnostic output of intermediate item lists (`--debug`, `--debug-filter`).
pub struct Trace<W> {
    out: W,
    steps: bool,
    matches: bool,
}

impl Trace<io::Sink> {
    pub fn off() -> Self {
        Trace::new(io::sink(), false, false)
    }
}

impl<W: Write> Trace<W> {
    pub fn new(out: W, steps: bool, matches: bool) -> Self {
        Self { out, steps, matches }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    // Trace output is best-effort; write errors are ignored.
    // Levels 0 and 1 show the extracted items, deeper levels the items about
    // to be followed.
    fn step(&mut self, level: usize, query: &str, items: &[Item]) {
        if self.steps {
            let _ = match level {
                0 | 1 => writeln!(self.out, "-- Query{}={}", level, query),
                _ => writeln!(self.out, "-- Query={}", query),
            };
            self.items(items);
        }
    }

    fn after_filter(&mut self, items: &[Item]) {
        if self.steps {
            let _ = writeln!(self.out, "-- After filter");
            self.items(items);
        }
    }

    fn items(&mut self, items: &[Item]) {
        for item in items {
            let _ = writeln!(self.out, "---- item={}", item);
        }
    }

    fn filter(&mut self, items: Vec<Item>, tag: &str) -> Vec<Item> {
        if self.matches && !tag.is_empty() {
            for item in &items {
                let _ = writeln!(
                    self.out,
                    "------ matching ({} == {}) => {}",
                    item.tag,
                    tag,
                    item.tag == tag
                );
            }
        }
        filter_by_tag(items, tag)
    }
}

/// Runs one drill-down step per entry of `queries` and returns the survivors
/// of the last step. An empty query term keeps the whole level.
///
/// The catalog root is fetched at most once. At level 1, an empty level-0
/// result yields no members. From level 2 on, items without a link are
/// skipped; relative links are resolved against `root_url` before fetching.
pub fn drill_down<T, N, W>(
    fetcher: &PageFetcher<T>,
    navigator: &N,
    root_url: &str,
    queries: &[String],
    trace: &mut Trace<W>,
) -> Result<Vec<Item>, FetchError>
where
    T: Transport,
    N: Navigator,
    W: Write,
{
    let mut root: Option<Html> = None;
    let mut items: Vec<Item> = Vec::new();

    for (level, query) in queries.iter().enumerate() {
        let extracted = match level {
            0 => navigator.categories(root_doc(&mut root, fetcher, root_url)?),
            1 if items.is_empty() => Vec::new(),
            1 => {
                let accepted: HashSet<String> = items.iter().map(|i| i.tag.clone()).collect();
                navigator.category_items(root_doc(&mut root, fetcher, root_url)?, &accepted)
            }
            _ => {
                trace.step(level, query, &items);
                let mut next = Vec::new();
                for item in &items {
                    if !item.has_link() {
                        tracing::debug!(tag = %item.tag, "no link, skipping");
                        continue;
                    }
                    let url = resolve_link(root_url, &item.link)?;
                    let doc = fetcher.fetch(&url)?;
                    next.extend(navigator.nav_links(&doc));
                }
                next
            }
        };

        if level < 2 {
            trace.step(level, query, &extracted);
        }
        let found = extracted.len();
        items = trace.filter(extracted, query);
        trace.after_filter(&items);
        tracing::debug!(level, query = %query, found, kept = items.len(), "drill-down step");
    }

    Ok(items)
}

fn root_doc<'r, T: Transport>(
    slot: &'r mut Option<Html>,
    fetcher: &PageFetcher<T>,
    root_url: &str,
) -> Result<&'r Html, FetchError> {
    let doc = match slot.take() {
        Some(doc) => doc,
        None => fetcher.fetch(root_url)?,
    };
    Ok(slot.insert(doc))
}

/// Absolute URL for a link found on the catalog; absolute links pass through.
pub fn resolve_link(base: &str, link: &str) -> Result<String, FetchError> {
    Url::parse(base)
        .and_then(|b| b.join(link))
        .map(String::from)
        .map_err(|source| FetchError::InvalidLink {
            base: base.to_string(),
            link: link.to_string(),
            source,
        })
}
