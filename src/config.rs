//! Configuration for folio.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (FOLIO_CATALOG, FOLIO_TICK_MS)
//! 2. Config file (.folio/config.yaml)
//! 3. Defaults (built-in catalog, 1s ticks, the site's two launch timers)
//!
//! Config file discovery:
//! - Searches current directory and parents for .folio/config.yaml
//! - Falls back to ~/.folio/config.yaml
//! - Paths in config file are relative to the directory holding .folio/

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::countdown::{CountdownConfig, LaunchTimer, DEFAULT_TICK_MS};

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

const DEFAULT_TOP_CATEGORIES: usize = 6;

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    /// Catalog file (relative to the project root)
    pub catalog: Option<String>,
    #[serde(default)]
    pub discovery: Option<DiscoveryConfig>,
    #[serde(default)]
    pub countdown: Option<CountdownFileConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DiscoveryConfig {
    pub top_categories: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CountdownFileConfig {
    pub tick_interval_ms: Option<u64>,
    pub timers: Option<Vec<LaunchTimer>>,
}

/// Resolved configuration
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Catalog file to load instead of the built-in articles
    pub catalog: Option<PathBuf>,
    /// Number of category chips offered
    pub top_categories: usize,
    /// Scheduler settings
    pub countdown: CountdownConfig,
    /// Timers shown by `folio countdown`
    pub timers: Vec<LaunchTimer>,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            catalog: None,
            top_categories: DEFAULT_TOP_CATEGORIES,
            countdown: CountdownConfig::default(),
            timers: default_timers(),
            config_file: None,
        }
    }
}

/// The launch timers on the landing page
pub fn default_timers() -> Vec<LaunchTimer> {
    vec![
        LaunchTimer::new("Projects Showcase", 15).with_description(
            "Detailed case studies of DevOps implementations, infrastructure automation projects, \
             and cloud migration success stories.",
        ),
        LaunchTimer::new("DevOps Blog", 12).with_description(
            "In-depth technical articles, tutorials, and insights on cloud infrastructure, \
             automation, and CI/CD best practices.",
        ),
    ]
}

/// Find config file by searching current directory and parents, then home
fn find_config_file() -> Option<PathBuf> {
    if let Ok(mut current) = std::env::current_dir() {
        loop {
            let config_path = current.join(".folio").join("config.yaml");
            if config_path.exists() {
                return Some(config_path);
            }

            if !current.pop() {
                break;
            }
        }
    }

    let home_config = dirs::home_dir()?.join(".folio").join("config.yaml");
    home_config.exists().then_some(home_config)
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Resolve a path that may be relative to the project root
fn resolve_path(base: &Path, path_str: &str) -> PathBuf {
    let path = PathBuf::from(path_str);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
            .canonicalize()
            .unwrap_or_else(|_| base.join(path_str))
    }
}

/// Tick cadence, rejecting zero
fn tick_interval_ms(value: Option<u64>, source: &str) -> u64 {
    match value {
        Some(0) => {
            tracing::warn!("Ignoring zero tick interval from {}", source);
            DEFAULT_TICK_MS
        }
        Some(ms) => ms,
        None => DEFAULT_TICK_MS,
    }
}

/// Apply a parsed config file on top of the defaults
fn apply_config_file(mut resolved: ResolvedConfig, config: ConfigFile, config_path: &Path) -> ResolvedConfig {
    // Base directory is the parent of .folio/ (i.e., grandparent of config.yaml)
    let base_dir = config_path
        .parent() // .folio/
        .and_then(|p| p.parent()) // project root
        .unwrap_or(Path::new("."));

    if let Some(ref catalog) = config.catalog {
        resolved.catalog = Some(resolve_path(base_dir, catalog));
    }

    if let Some(top) = config.discovery.as_ref().and_then(|d| d.top_categories) {
        resolved.top_categories = top;
    }

    if let Some(countdown) = config.countdown {
        resolved.countdown.tick_interval_ms = tick_interval_ms(countdown.tick_interval_ms, "config file");
        if let Some(timers) = countdown.timers {
            resolved.timers = timers;
        }
    }

    resolved.config_file = Some(config_path.to_path_buf());
    resolved
}

/// Environment overrides win over everything else
fn apply_env(mut resolved: ResolvedConfig) -> ResolvedConfig {
    if let Ok(catalog) = std::env::var("FOLIO_CATALOG") {
        resolved.catalog = Some(PathBuf::from(catalog));
    }

    if let Ok(raw) = std::env::var("FOLIO_TICK_MS") {
        match raw.parse::<u64>() {
            Ok(ms) => resolved.countdown.tick_interval_ms = tick_interval_ms(Some(ms), "FOLIO_TICK_MS"),
            Err(_) => tracing::warn!("Ignoring invalid FOLIO_TICK_MS: {}", raw),
        }
    }

    resolved
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    let mut resolved = ResolvedConfig::default();

    if let Some(config_path) = find_config_file() {
        let config = load_config_file(&config_path)?;
        resolved = apply_config_file(resolved, config, &config_path);
    }

    Ok(apply_env(resolved))
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| e.to_string()));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}

/// Force reload configuration (useful for testing)
pub fn reload_config() -> Result<ResolvedConfig> {
    load_config()
}
