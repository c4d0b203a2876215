use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use upcycle_catalog::Currency;
use upcycle_infra::{MarketplaceConfig, build_marketplace};

#[derive(Debug, Parser)]
#[command(name = "upcycle", about = "Upcycle marketplace tools", version)]
struct Cli {
    /// Path to a TOML config file. Defaults apply when omitted.
    #[arg(long, env = "UPCYCLE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Convert an amount between currencies using the configured rate provider.
    Convert {
        amount: f64,
        #[arg(value_parser = Currency::parse_code)]
        from: Currency,
        #[arg(value_parser = Currency::parse_code)]
        to: Currency,
    },
    /// Print the configured store header as JSON.
    Store,
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<MarketplaceConfig> {
    let mut config = match path {
        Some(path) => MarketplaceConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => MarketplaceConfig::default(),
    };
    config
        .apply_env_overrides()
        .context("applying UPCYCLE_* environment overrides")?;
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;
    upcycle_observability::init(config.log_format);

    let market = build_marketplace(&config)?;

    match cli.command {
        Command::Convert { amount, from, to } => {
            let converted = market
                .convert(amount, from, to)
                .with_context(|| format!("converting {amount} {} to {}", from.code(), to.code()))?;
            println!("{converted} {}", to.code());
        }
        Command::Store => {
            let store = market.store();
            let header = serde_json::json!({
                "name": store.name(),
                "description": store.description(),
                "website_url": store.website_url(),
                "listings": store.listings().len(),
            });
            println!("{}", serde_json::to_string_pretty(&header)?);
        }
    }

    tracing::debug!("done");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_decodes_currency_codes() {
        let cli = Cli::try_parse_from(["upcycle", "convert", "12.5", "USD", "eur"]).unwrap();
        match cli.command {
            Command::Convert { amount, from, to } => {
                assert_eq!(amount, 12.5);
                assert_eq!(from, Currency::Usd);
                assert_eq!(to, Currency::Eur);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn unknown_currency_is_rejected_at_parse_time() {
        let err = Cli::try_parse_from(["upcycle", "convert", "1", "usd", "yen"]).unwrap_err();
        assert!(err.to_string().contains("invalid currency value: 'yen'"));
    }

    #[test]
    fn config_flag_is_optional() {
        let cli = Cli::try_parse_from(["upcycle", "store"]).unwrap();
        assert!(matches!(cli.command, Command::Store));
    }
}
