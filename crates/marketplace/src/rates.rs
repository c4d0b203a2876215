//! Conversion rate boundary.

use std::sync::Arc;

use upcycle_catalog::Currency;
use upcycle_core::DomainResult;

/// Source of currency conversion rates.
///
/// `rate(from, to)` is the multiplier such that `amount_in_from * rate` is
/// the amount in `to`. Implementations must fail with
/// `DomainError::RateUnavailable` rather than fall back to a default rate.
pub trait RateProvider {
    fn rate(&self, from: Currency, to: Currency) -> DomainResult<f64>;
}

impl<P> RateProvider for &P
where
    P: RateProvider + ?Sized,
{
    fn rate(&self, from: Currency, to: Currency) -> DomainResult<f64> {
        (**self).rate(from, to)
    }
}

impl<P> RateProvider for Arc<P>
where
    P: RateProvider + ?Sized,
{
    fn rate(&self, from: Currency, to: Currency) -> DomainResult<f64> {
        (**self).rate(from, to)
    }
}

impl<P> RateProvider for Box<P>
where
    P: RateProvider + ?Sized,
{
    fn rate(&self, from: Currency, to: Currency) -> DomainResult<f64> {
        (**self).rate(from, to)
    }
}
