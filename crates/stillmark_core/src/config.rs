//! Immutable site configuration.
//!
//! # Responsibility
//! - Define the site metadata the hosting shell passes at startup: title,
//!   description, header/footer settings, social links.
//! - Load configuration from JSON without partial-failure states.
//!
//! # Invariants
//! - Configuration is read once at startup and never mutated afterwards.
//! - Every field has a default, so a missing key never fails the load.

use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Configuration load error.
#[derive(Debug)]
pub enum ConfigError {
    /// Filesystem failure while reading the config file.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Config text is not valid JSON for `SiteConfig`.
    Parse(serde_json::Error),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid site config: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Top-level site metadata.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site title shown in the header and page metadata.
    pub title: String,
    /// One-line site description.
    pub description: String,
    pub header: HeaderConfig,
    pub footer: FooterConfig,
    /// Social links in display order.
    pub socials: Vec<SocialLink>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Stillmark".to_string(),
            description: String::new(),
            header: HeaderConfig::default(),
            footer: FooterConfig::default(),
            socials: Vec::new(),
        }
    }
}

/// Header placement settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    /// Navigation placement: `left` or `right`.
    pub position: String,
    /// Whether the header renders a logo image.
    pub logo: bool,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            position: "right".to_string(),
            logo: false,
        }
    }
}

/// Footer settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FooterConfig {
    pub credits: FooterCredits,
}

/// Footer credits line.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FooterCredits {
    pub enabled: bool,
    /// Credit text, usually the site owner's name.
    pub text: String,
    /// Optional repository link backing the credit.
    pub repository: Option<String>,
}

impl Default for FooterCredits {
    fn default() -> Self {
        Self {
            enabled: true,
            text: String::new(),
            repository: None,
        }
    }
}

/// One social link.
///
/// Simple accounts carry only `network` + `handle`; custom links override
/// `href`, `icon` and `label` explicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SocialLink {
    /// Network key, e.g. `github`, `linkedin`.
    pub network: String,
    /// Account handle on that network.
    pub handle: Option<String>,
    /// Explicit target URL; wins over a handle-derived one.
    pub href: Option<String>,
    /// Explicit icon name.
    pub icon: Option<String>,
    /// Explicit accessible label.
    pub label: Option<String>,
}

impl SiteConfig {
    /// Parses configuration from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Loads configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}
