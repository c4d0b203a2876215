use std::collections::HashMap;
use std::time::Duration;

use serde::Deserialize;

use upcycle_catalog::Currency;
use upcycle_core::{DomainError, DomainResult};
use upcycle_marketplace::RateProvider;

use crate::config::ConfigError;

/// Response body of `GET /latest?from=XXX&to=YYY`.
#[derive(Debug, Deserialize)]
struct LatestRates {
    rates: HashMap<String, f64>,
}

/// Rate provider backed by an HTTP exchange-rate service.
///
/// Blocking: each lookup finishes (or times out) before `rate` returns.
#[derive(Debug, Clone)]
pub struct HttpRateProvider {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpRateProvider {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ConfigError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ConfigError::invalid(format!("failed to build http client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn fetch(&self, from: Currency, to: Currency) -> Result<LatestRates, reqwest::Error> {
        self.client
            .get(format!("{}/latest", self.base_url))
            .query(&[("from", from.code()), ("to", to.code())])
            .send()?
            .error_for_status()?
            .json::<LatestRates>()
    }
}

impl RateProvider for HttpRateProvider {
    fn rate(&self, from: Currency, to: Currency) -> DomainResult<f64> {
        if from == to {
            return Ok(1.0);
        }

        tracing::debug!(from = from.code(), to = to.code(), "fetching conversion rate");
        let body = self.fetch(from, to).map_err(|e| {
            DomainError::rate_unavailable(format!("{}->{}: {e}", from.code(), to.code()))
        })?;

        match body.rates.get(to.code()) {
            Some(rate) if rate.is_finite() && *rate > 0.0 => Ok(*rate),
            Some(rate) => Err(DomainError::rate_unavailable(format!(
                "{}->{}: service returned unusable rate {rate}",
                from.code(),
                to.code()
            ))),
            None => Err(DomainError::rate_unavailable(format!(
                "{}->{}: rate missing from response",
                from.code(),
                to.code()
            ))),
        }
    }
}
