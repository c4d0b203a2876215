//! External service clients/adapters.
//!
//! Every adapter implements `upcycle_marketplace::RateProvider`.

pub mod http_rates;
pub mod static_rates;

pub use http_rates::HttpRateProvider;
pub use static_rates::StaticRateTable;

use std::time::Duration;

use upcycle_catalog::Currency;
use upcycle_core::DomainResult;
use upcycle_marketplace::RateProvider;

use crate::config::{ConfigError, RateProviderKind, RatesConfig};

/// The rate provider selected by configuration.
#[derive(Debug)]
pub enum AnyRateProvider {
    Static(StaticRateTable),
    Http(HttpRateProvider),
}

impl AnyRateProvider {
    pub fn from_config(config: &RatesConfig) -> Result<Self, ConfigError> {
        match config.provider {
            RateProviderKind::Static => {
                let table = StaticRateTable::from_pairs(&config.pairs)
                    .map_err(|e| ConfigError::invalid(e.to_string()))?;
                Ok(Self::Static(table))
            }
            RateProviderKind::Http => {
                let provider = HttpRateProvider::new(
                    config.base_url.clone(),
                    Duration::from_secs(config.timeout_secs),
                )?;
                Ok(Self::Http(provider))
            }
        }
    }
}

impl RateProvider for AnyRateProvider {
    fn rate(&self, from: Currency, to: Currency) -> DomainResult<f64> {
        let result = match self {
            Self::Static(table) => table.rate(from, to),
            Self::Http(http) => http.rate(from, to),
        };
        if let Err(err) = &result {
            tracing::warn!(from = %from, to = %to, error = %err, "rate lookup failed");
        }
        result
    }
}
