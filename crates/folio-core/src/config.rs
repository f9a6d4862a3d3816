//! Configuration types for folio.
//!
//! [`Config::load`] layers the embedded defaults, an optional TOML file
//! (`--config` or `~/.config/folio/config.toml`) and `FOLIO__SECTION__KEY`
//! environment variables. [`Config::defaults`] returns the built-in
//! defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::response::ResponseShape;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[server]
bind  = "127.0.0.1:8080"
route = "/api/content-feed"

[remote]
url        = "https://medium.com/feed/@example"
timeout_ms = 10000
user_agent = "folio/0.1"

[library]
draft_marker = "draft_"
extension    = "html"

[library.selectors]
title          = "h1.p-name"
title_fallback = "title"
published      = "time.dt-published"
link           = "a.p-canonical"
thumbnail      = "img.graf-image"
body           = "section[data-field=\"body\"]"
category       = ".p-category"
tag_list       = "ul.tags li"
tag_link       = "a[href*=\"/tag/\"]"

[classifier]
technical = ["automat", "script", "python", "data", "sql", "excel", "dashboard", "code", "programming", "software", "api", "machine learning", "tech"]
education = ["learn", "study", "student", "school", "university", "course", "education", "teach", "exam", "scholarship"]
personal  = ["life", "thought", "reflection", "journey", "growth", "mindset", "story", "personal", "gratitude", "habit"]

[response]
shape = "dual"

[cache]
ttl_secs = 3600
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level service configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub remote: RemoteConfig,
    pub library: LibraryConfig,
    pub classifier: ClassifierConfig,
    pub response: ResponseConfig,
    pub cache: CacheConfig,
}

/// `[server]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub bind: String,
    pub route: String,
}

/// `[remote]` section: the syndicated feed to pull.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteConfig {
    /// Feed URL. An empty string disables the remote source.
    pub url: String,
    pub timeout_ms: u64,
    pub user_agent: String,
}

/// `[library]` section: locally stored supplementary entries.
#[derive(Debug, Clone, Deserialize)]
pub struct LibraryConfig {
    /// JSON array of entries maintained by hand.
    #[serde(default)]
    pub static_file: Option<PathBuf>,
    /// Flat directory of exported markup documents.
    #[serde(default)]
    pub documents_dir: Option<PathBuf>,
    pub draft_marker: String,
    pub extension: String,
    pub selectors: SelectorConfig,
}

/// `[library.selectors]`: the CSS selectors that act as the parsing contract
/// for local documents.
#[derive(Debug, Clone, Deserialize)]
pub struct SelectorConfig {
    pub title: String,
    /// Consulted only when `title` matches nothing.
    pub title_fallback: String,
    /// Element carrying a `datetime` attribute (text content as fallback).
    pub published: String,
    /// Element carrying the canonical `href`.
    pub link: String,
    pub thumbnail: String,
    pub body: String,
    pub category: String,
    pub tag_list: String,
    pub tag_link: String,
}

/// `[classifier]`: keyword sets for the title fallback, in priority order.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassifierConfig {
    pub technical: Vec<String>,
    pub education: Vec<String>,
    pub personal: Vec<String>,
}

/// `[response]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseConfig {
    pub shape: ResponseShape,
}

/// `[cache]` section. `ttl_secs = 0` disables reuse.
#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    pub ttl_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load the layered configuration. `path` overrides the default location;
    /// a missing file is not an error.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(config_path);

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path.as_path()).required(false))
            .add_source(
                config::Environment::with_prefix("FOLIO")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    /// Parse a TOML snippet layered over the defaults.
    pub fn from_toml(overrides: &str) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from_str(overrides, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("folio")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
