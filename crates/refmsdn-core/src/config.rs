use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Application name used for the XDG prefix and the default User-Agent.
pub const APP_NAME: &str = "ref-msdn";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
/// Root of the MSDN library catalog.
pub const DEFAULT_ROOT_URL: &str = "https://msdn.microsoft.com/library";

pub fn default_user_agent() -> String {
    format!("{} - {}", APP_NAME, APP_VERSION)
}

/// How a URL is turned into a cache file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheKeyScheme {
    /// Replace filesystem-unsafe characters with `_`. Readable, but distinct
    /// URLs may alias to the same file.
    #[default]
    Sanitized,
    /// Lowercase hex SHA-256 of the URL. Collision-free.
    Sha256,
}

/// Persistent settings loaded from `~/.config/ref-msdn/config.toml`.
///
/// Every field is optional; command-line flags take precedence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    /// Catalog root page.
    #[serde(default)]
    pub root_url: Option<String>,
    /// User-Agent header sent with every GET.
    #[serde(default)]
    pub user_agent: Option<String>,
    /// Cache directory (None = platform temp dir).
    #[serde(default)]
    pub cache_dir: Option<PathBuf>,
    /// Cache file naming scheme: "sanitized" (default) or "sha256".
    #[serde(default)]
    pub cache_key: Option<CacheKeyScheme>,
    /// Whole-request timeout in seconds (None = transport default, i.e. none).
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

/// Command-line values that override the file configuration.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub root_url: Option<String>,
    pub user_agent: Option<String>,
    pub cache_dir: Option<PathBuf>,
    pub clear_cache: bool,
    pub debug: bool,
    pub debug_filter: bool,
}

/// Immutable settings for one run, handed to the cache store and fetcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseConfig {
    pub root_url: String,
    pub user_agent: String,
    pub cache_dir: PathBuf,
    pub cache_key: CacheKeyScheme,
    /// Ignore existing cache entries for reads (they are overwritten, not deleted).
    pub clear_cache: bool,
    pub timeout: Option<Duration>,
    pub debug: bool,
    pub debug_filter: bool,
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self::resolve(&FileConfig::default(), Overrides::default())
    }
}

impl BrowseConfig {
    /// Merge file settings with command-line overrides.
    pub fn resolve(file: &FileConfig, overrides: Overrides) -> Self {
        Self {
            root_url: overrides
                .root_url
                .or_else(|| file.root_url.clone())
                .unwrap_or_else(|| DEFAULT_ROOT_URL.to_string()),
            user_agent: overrides
                .user_agent
                .or_else(|| file.user_agent.clone())
                .unwrap_or_else(default_user_agent),
            cache_dir: overrides
                .cache_dir
                .or_else(|| file.cache_dir.clone())
                .unwrap_or_else(std::env::temp_dir),
            cache_key: file.cache_key.unwrap_or_default(),
            clear_cache: overrides.clear_cache,
            timeout: file.timeout_secs.map(Duration::from_secs),
            debug: overrides.debug,
            debug_filter: overrides.debug_filter,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix(APP_NAME)?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FileConfig> {
    load_or_init_at(&config_path()?)
}

pub fn load_or_init_at(path: &Path) -> Result<FileConfig> {
    if !path.exists() {
        let default_cfg = FileConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)?;
    let cfg: FileConfig = toml::from_str(&data)?;
    Ok(cfg)
}
