use std::collections::HashMap;

use upcycle_catalog::Currency;
use upcycle_core::{DomainError, DomainResult};
use upcycle_marketplace::RateProvider;

use crate::config::RatePair;

/// Fixed table of conversion rates.
///
/// A pair configured only in one direction also answers the reverse lookup
/// with the reciprocal rate. Anything else is `RateUnavailable`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticRateTable {
    rates: HashMap<(Currency, Currency), f64>,
}

impl StaticRateTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs(pairs: &[RatePair]) -> DomainResult<Self> {
        let mut table = Self::new();
        for pair in pairs {
            table.insert(pair.from, pair.to, pair.rate)?;
        }
        Ok(table)
    }

    /// Set the rate for `from -> to`, replacing any previous value.
    pub fn insert(&mut self, from: Currency, to: Currency, rate: f64) -> DomainResult<()> {
        if !rate.is_finite() || rate <= 0.0 {
            return Err(DomainError::validation(format!(
                "rate {from}->{to} must be a positive number (got {rate})"
            )));
        }
        self.rates.insert((from, to), rate);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl RateProvider for StaticRateTable {
    fn rate(&self, from: Currency, to: Currency) -> DomainResult<f64> {
        if from == to {
            return Ok(1.0);
        }
        if let Some(rate) = self.rates.get(&(from, to)) {
            return Ok(*rate);
        }
        if let Some(reverse) = self.rates.get(&(to, from)) {
            return Ok(1.0 / reverse);
        }
        Err(DomainError::rate_unavailable(format!(
            "no rate configured for {}->{}",
            from.code(),
            to.code()
        )))
    }
}
