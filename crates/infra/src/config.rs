//! Configuration loading and representation.
//!
//! Configuration is a TOML file where every section is optional, followed by
//! a small set of `UPCYCLE_*` environment overrides.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use upcycle_catalog::{
    Currency, DEFAULT_STORE_DESCRIPTION, DEFAULT_STORE_NAME, DEFAULT_STORE_WEBSITE, Store,
};
use upcycle_marketplace::SalePolicy;
use upcycle_observability::LogFormat;

pub const ENV_SALE_POLICY: &str = "UPCYCLE_SALE_POLICY";
pub const ENV_RATES_PROVIDER: &str = "UPCYCLE_RATES_PROVIDER";
pub const ENV_RATES_BASE_URL: &str = "UPCYCLE_RATES_BASE_URL";
pub const ENV_LOG_FORMAT: &str = "UPCYCLE_LOG_FORMAT";

pub const DEFAULT_RATES_BASE_URL: &str = "https://api.frankfurter.app";
pub const DEFAULT_RATES_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config value: {0}")]
    Invalid(String),
}

impl ConfigError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::Invalid(msg.into())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarketplaceConfig {
    pub sale_policy: SalePolicy,
    pub log_format: LogFormat,
    pub store: StoreConfig,
    pub rates: RatesConfig,
}

/// Store header. The listing book always starts empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    pub name: String,
    pub description: String,
    pub website_url: Option<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_STORE_NAME.to_string(),
            description: DEFAULT_STORE_DESCRIPTION.to_string(),
            website_url: Some(DEFAULT_STORE_WEBSITE.to_string()),
        }
    }
}

impl StoreConfig {
    pub fn to_store(&self) -> Store {
        Store::new(
            self.name.clone(),
            self.description.clone(),
            self.website_url.clone(),
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RateProviderKind {
    /// Rates listed in `[[rates.pairs]]`.
    #[default]
    Static,
    /// Live rates from an HTTP service at `rates.base_url`.
    Http,
}

impl core::str::FromStr for RateProviderKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "static" => Ok(Self::Static),
            "http" => Ok(Self::Http),
            other => Err(ConfigError::invalid(format!(
                "rates.provider must be 'static' or 'http' (got '{other}')"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RatesConfig {
    pub provider: RateProviderKind,
    pub base_url: String,
    pub timeout_secs: u64,
    pub pairs: Vec<RatePair>,
}

impl Default for RatesConfig {
    fn default() -> Self {
        Self {
            provider: RateProviderKind::default(),
            base_url: DEFAULT_RATES_BASE_URL.to_string(),
            timeout_secs: DEFAULT_RATES_TIMEOUT_SECS,
            pairs: Vec::new(),
        }
    }
}

/// One configured conversion rate: `1 from == rate to`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RatePair {
    pub from: Currency,
    pub to: Currency,
    pub rate: f64,
}

impl MarketplaceConfig {
    /// Read and validate a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loading config");
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `UPCYCLE_*` overrides from the process environment.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup (the environment, in
    /// production).
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup(ENV_SALE_POLICY) {
            self.sale_policy = v
                .parse()
                .map_err(|e| ConfigError::invalid(format!("{ENV_SALE_POLICY}: {e}")))?;
        }
        if let Some(v) = lookup(ENV_RATES_PROVIDER) {
            self.rates.provider = v.parse()?;
        }
        if let Some(v) = lookup(ENV_RATES_BASE_URL) {
            self.rates.base_url = v;
        }
        if let Some(v) = lookup(ENV_LOG_FORMAT) {
            self.log_format = v
                .parse()
                .map_err(|e| ConfigError::invalid(format!("{ENV_LOG_FORMAT}: {e}")))?;
        }
        self.validate()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.store.name.trim().is_empty() {
            return Err(ConfigError::invalid("store.name must not be empty"));
        }
        if self.rates.timeout_secs == 0 {
            return Err(ConfigError::invalid("rates.timeout_secs must be positive"));
        }
        if self.rates.provider == RateProviderKind::Http && self.rates.base_url.trim().is_empty() {
            return Err(ConfigError::invalid(
                "rates.base_url is required for the http provider",
            ));
        }
        for pair in &self.rates.pairs {
            if !pair.rate.is_finite() || pair.rate <= 0.0 {
                return Err(ConfigError::invalid(format!(
                    "rate {}->{} must be a positive number (got {})",
                    pair.from, pair.to, pair.rate
                )));
            }
        }
        Ok(())
    }
}
