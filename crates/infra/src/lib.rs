//! Infrastructure layer: configuration and external rate services.

pub mod config;
pub mod external;

pub use config::{ConfigError, MarketplaceConfig, RateProviderKind, RatesConfig, StoreConfig};
pub use external::{AnyRateProvider, HttpRateProvider, StaticRateTable};

use upcycle_marketplace::Marketplace;

/// Build a marketplace from configuration: store header, sale policy and
/// the configured rate provider.
pub fn build_marketplace(
    config: &MarketplaceConfig,
) -> Result<Marketplace<AnyRateProvider>, ConfigError> {
    let rates = AnyRateProvider::from_config(&config.rates)?;
    let market = Marketplace::new(config.store.to_store(), rates).with_sale_policy(config.sale_policy);

    tracing::info!(
        store = %market.store().name(),
        sale_policy = ?config.sale_policy,
        rate_provider = ?config.rates.provider,
        "marketplace initialized"
    );
    Ok(market)
}
