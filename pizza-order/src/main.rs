//! Pizza storefront order CLI.
//!
//! Each invocation starts a fresh checkout session from `pizza-order.toml`
//! (or built-in defaults), replays the given selections, and prints the
//! result. Nothing is persisted between runs.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::warn;

use pizza_order::checkout::{Checkout, PickupChoice, Selection};
use pizza_order::core::error::OrderError;
use pizza_order::core::pricing::{PriceBreakdown, format_price};
use pizza_order::core::types::Order;
use pizza_order::exit_codes;
use pizza_order::io::clock::SystemClock;
use pizza_order::io::config::{OrderConfig, load_config, write_config};
use pizza_order::logging;

#[derive(Parser)]
#[command(
    name = "pizza-order",
    version,
    about = "Price and summarize a pizza storefront order"
)]
struct Cli {
    /// Config file; built-in defaults apply when it does not exist.
    #[arg(long, global = true, default_value = "pizza-order.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List flavor ids, names and base prices.
    Flavors,
    /// List the pickup dates offered today, soonest first.
    Dates,
    /// Apply selections and print the resulting price.
    Quote {
        #[command(flatten)]
        selection: SelectionArgs,
        /// Print the full order snapshot and price breakdown as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Apply selections and print the share subject and body.
    Summary {
        #[command(flatten)]
        selection: SelectionArgs,
    },
    /// Write the effective configuration to the config path.
    InitConfig {
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Args, Debug, Default)]
struct SelectionArgs {
    /// Flavor id (see `flavors`).
    #[arg(long)]
    flavor: Option<String>,
    /// Diameter in cm: 25, 32 or 40.
    #[arg(long)]
    size: Option<String>,
    /// Number of pizzas: 1, 2 or 3.
    #[arg(long)]
    quantity: Option<String>,
    /// Pickup date label exactly as listed by `dates`.
    #[arg(long, conflicts_with = "pickup_day")]
    pickup: Option<String>,
    /// Pickup date by position in `dates` (0 = today).
    #[arg(long)]
    pickup_day: Option<usize>,
}

impl SelectionArgs {
    fn to_selection(&self) -> Selection {
        let pickup = match (&self.pickup, self.pickup_day) {
            (Some(label), _) => Some(PickupChoice::Label(label.clone())),
            (None, Some(index)) => Some(PickupChoice::Index(index)),
            (None, None) => None,
        };
        Selection {
            flavor: self.flavor.clone(),
            size: self.size.clone(),
            quantity: self.quantity.clone(),
            pickup,
        }
    }
}

#[derive(Serialize)]
struct QuoteOutput<'a> {
    #[serde(flatten)]
    order: &'a Order,
    breakdown: PriceBreakdown,
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        let code = if err.downcast_ref::<OrderError>().is_some() {
            exit_codes::REJECTED
        } else {
            exit_codes::INVALID
        };
        std::process::exit(code);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Flavors => cmd_flavors(&cli.config),
        Command::Dates => cmd_dates(&cli.config),
        Command::Quote { selection, json } => cmd_quote(&cli.config, &selection, json),
        Command::Summary { selection } => cmd_summary(&cli.config, &selection),
        Command::InitConfig { force } => cmd_init_config(&cli.config, force),
    }
}

fn cmd_flavors(config: &Path) -> Result<()> {
    let cfg = load_config(config)?;
    let catalog = cfg.catalog();
    for flavor in catalog.flavors() {
        println!(
            "{}\t{}\t{}",
            flavor.id,
            flavor.name,
            format_price(flavor.price, catalog.currency_suffix())
        );
    }
    Ok(())
}

fn cmd_dates(config: &Path) -> Result<()> {
    let checkout = Checkout::open(config, Box::new(SystemClock))?;
    for label in &checkout.state.snapshot().pickup_options {
        println!("{}", label);
    }
    Ok(())
}

fn cmd_quote(config: &Path, args: &SelectionArgs, json: bool) -> Result<()> {
    let mut checkout = Checkout::open(config, Box::new(SystemClock))?;
    checkout.apply(&args.to_selection())?;
    let order = checkout.state.snapshot();
    if json {
        let output = QuoteOutput {
            order,
            breakdown: checkout.state.price_breakdown()?,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", order.price);
    }
    Ok(())
}

fn cmd_summary(config: &Path, args: &SelectionArgs) -> Result<()> {
    let mut checkout = Checkout::open(config, Box::new(SystemClock))?;
    checkout.apply(&args.to_selection())?;
    let message = checkout.share()?;
    println!("{}", message.subject);
    println!();
    println!("{}", message.body);
    Ok(())
}

fn cmd_init_config(config: &Path, force: bool) -> Result<()> {
    if !force && config.exists() {
        bail!(
            "{} already exists (use --force to overwrite)",
            config.display()
        );
    }
    let cfg = if force && config.exists() {
        load_config(config).unwrap_or_else(|err| {
            warn!(error = %format!("{err:#}"), "existing config invalid, writing defaults");
            OrderConfig::default()
        })
    } else {
        OrderConfig::default()
    };
    write_config(config, &cfg)?;
    println!("{}", config.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_quote_with_selection() {
        let cli = Cli::parse_from([
            "pizza-order",
            "quote",
            "--flavor",
            "bbq",
            "--size",
            "32",
            "--pickup-day",
            "0",
            "--json",
        ]);
        let Command::Quote { selection, json } = cli.command else {
            panic!("expected quote");
        };
        assert!(json);
        assert_eq!(
            selection.to_selection(),
            Selection {
                flavor: Some("bbq".to_string()),
                size: Some("32".to_string()),
                quantity: None,
                pickup: Some(PickupChoice::Index(0)),
            }
        );
        assert_eq!(cli.config, PathBuf::from("pizza-order.toml"));
    }

    #[test]
    fn parse_global_config_after_subcommand() {
        let cli = Cli::parse_from(["pizza-order", "dates", "--config", "custom.toml"]);
        assert!(matches!(cli.command, Command::Dates));
        assert_eq!(cli.config, PathBuf::from("custom.toml"));
    }

    #[test]
    fn pickup_label_and_index_conflict() {
        let result = Cli::try_parse_from([
            "pizza-order",
            "quote",
            "--pickup",
            "today",
            "--pickup-day",
            "1",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_init_config_force() {
        let cli = Cli::parse_from(["pizza-order", "init-config", "--force"]);
        assert!(matches!(cli.command, Command::InitConfig { force: true }));
    }
}
