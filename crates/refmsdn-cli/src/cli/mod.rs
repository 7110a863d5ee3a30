//! CLI for the ref-msdn catalog browser.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use refmsdn_core::config::{self, BrowseConfig, FileConfig, Overrides};
use refmsdn_core::drill_down::{drill_down, Trace};
use refmsdn_core::fetch::PageFetcher;
use refmsdn_core::navigator::SelectorNavigator;
use refmsdn_core::render::write_items;
use std::io::{self, Write};
use std::path::PathBuf;
use thiserror::Error;

/// Browse the MSDN library catalog by drilling down through its levels.
///
/// Each QUERY narrows one level: category, category member, then navigation
/// pages. The level after the last query is listed in full.
#[derive(Debug, Parser)]
#[command(name = "ref-msdn", version)]
#[command(about = "Browse the MSDN library catalog from the command line", long_about = None)]
pub struct Cli {
    /// Exact tags to select at each level (category, member, page, ...).
    #[arg(value_name = "QUERY")]
    pub queries: Vec<String>,

    /// Print list of content. Reserved; currently has no effect.
    #[arg(short = 'l')]
    pub list: bool,

    /// Clear cache data: ignore cached pages for this run and refetch them.
    #[arg(short = 'C')]
    pub clear_cache: bool,

    /// The cache directory path [default: config file value, else the system temp dir].
    #[arg(short = 'c', value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// The user agent [default: config file value, else "ref-msdn - <version>"].
    #[arg(short = 'U', value_name = "AGENT")]
    pub user_agent: Option<String>,

    /// Catalog root page [default: config file value, else the MSDN library].
    #[arg(long, value_name = "URL")]
    pub root_url: Option<String>,

    /// Print intermediate item lists of each level to stdout.
    #[arg(long, hide = true)]
    pub debug: bool,

    /// Print every tag comparison made while filtering to stdout.
    #[arg(long, hide = true)]
    pub debug_filter: bool,
}

/// No query was given; carries the usage text to print on stderr.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct UsageError(String);

impl UsageError {
    fn new() -> Self {
        UsageError(Cli::command().render_help().to_string())
    }
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        if cli.queries.is_empty() {
            return Err(UsageError::new().into());
        }
        let file_cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", file_cfg);
        cli.run(&file_cfg, &mut io::stdout().lock())
    }

    /// Merge flags over the file configuration.
    pub fn browse_config(&self, file_cfg: &FileConfig) -> BrowseConfig {
        BrowseConfig::resolve(
            file_cfg,
            Overrides {
                root_url: self.root_url.clone(),
                user_agent: self.user_agent.clone(),
                cache_dir: self.cache_dir.clone(),
                clear_cache: self.clear_cache,
                debug: self.debug,
                debug_filter: self.debug_filter,
            },
        )
    }

    /// Query terms for the drill-down: the user's terms plus one empty term
    /// so the level after the last query is listed unfiltered.
    pub fn drill_down_queries(&self) -> Vec<String> {
        let mut queries = self.queries.clone();
        queries.push(String::new());
        queries
    }

    pub fn run<W: Write>(&self, file_cfg: &FileConfig, out: &mut W) -> Result<()> {
        if self.queries.is_empty() {
            return Err(UsageError::new().into());
        }
        if self.list {
            tracing::debug!("-l is reserved and has no effect");
        }

        let cfg = self.browse_config(file_cfg);
        tracing::debug!("browse config: {:?}", cfg);

        let fetcher = PageFetcher::from_config(&cfg);
        let navigator = SelectorNavigator::msdn()?;
        let queries = self.drill_down_queries();
        let mut trace = Trace::new(io::stdout(), cfg.debug, cfg.debug_filter);
        let items = drill_down(&fetcher, &navigator, &cfg.root_url, &queries, &mut trace)
            .with_context(|| format!("drill-down from {} failed", cfg.root_url))?;

        tracing::info!(queries = ?self.queries, results = items.len(), "listing");
        write_items(out, &items).context("failed to write listing")?;
        Ok(())
    }
}
