use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const LOGO_ASSET: &str = "logo.png";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssetConfigError {
    #[error("asset base URL is empty")]
    Empty,
    #[error("asset base URL must not contain whitespace")]
    Whitespace,
    #[error("unsupported scheme in asset base URL: {0}")]
    UnsupportedScheme(String),
    #[error("asset base URL must start with '/' or be an absolute http(s) URL: {0}")]
    NotRooted(String),
    #[error("asset base URL has no host: {0}")]
    MissingHost(String),
    #[error("asset base URL must not carry a query or fragment: {0}")]
    QueryOrFragment(String),
}

/// Where static assets such as the logo are served from.
///
/// The base is stored with exactly one trailing `/`, so joining never
/// produces `//` between the base and the asset path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AssetConfig {
    base_url: String,
}

impl AssetConfig {
    pub const DEFAULT_BASE: &'static str = "/";

    pub fn new(base: impl AsRef<str>) -> Result<Self, AssetConfigError> {
        let base = base.as_ref().trim();
        if base.is_empty() {
            return Err(AssetConfigError::Empty);
        }
        if base.chars().any(char::is_whitespace) {
            return Err(AssetConfigError::Whitespace);
        }
        if base.contains(['?', '#']) {
            return Err(AssetConfigError::QueryOrFragment(base.to_string()));
        }

        if !base.starts_with('/') {
            match base.split_once("://") {
                Some((scheme, rest)) => {
                    if !matches!(scheme.to_ascii_lowercase().as_str(), "http" | "https") {
                        return Err(AssetConfigError::UnsupportedScheme(scheme.to_string()));
                    }
                    if rest.split('/').next().unwrap_or_default().is_empty() {
                        return Err(AssetConfigError::MissingHost(base.to_string()));
                    }
                }
                // Catches `javascript:`, `data:` and friends before the relative-path case.
                None => {
                    return match base.split_once(':') {
                        Some((scheme, _)) if !scheme.contains('/') => {
                            Err(AssetConfigError::UnsupportedScheme(scheme.to_string()))
                        }
                        _ => Err(AssetConfigError::NotRooted(base.to_string())),
                    };
                }
            }
        }

        let trimmed = base.trim_end_matches('/');
        let base_url = if trimmed.is_empty() {
            Self::DEFAULT_BASE.to_string()
        } else {
            format!("{}/", trimmed)
        };

        Ok(Self { base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins `asset` onto the base, ignoring any leading `/` on the asset.
    pub fn resolve(&self, asset: &str) -> String {
        format!("{}{}", self.base_url, asset.trim_start_matches('/'))
    }

    pub fn logo_url(&self) -> String {
        self.resolve(LOGO_ASSET)
    }
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            base_url: Self::DEFAULT_BASE.to_string(),
        }
    }
}

impl TryFrom<String> for AssetConfig {
    type Error = AssetConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AssetConfig> for String {
    fn from(config: AssetConfig) -> Self {
        config.base_url
    }
}
