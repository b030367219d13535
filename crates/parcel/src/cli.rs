//! Command line interface

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use parcel_domain::Order;
use parcel_infrastructure::{AppConfig, AppContext, ConfigLoader};

/// Order number used when none is given
pub const DEFAULT_ORDER_NUMBER: &str = "ABC-555-0001";

/// Command line interface for Parcel
#[derive(Parser, Debug)]
#[command(name = "parcel")]
#[command(about = "Parcel - ship orders through configurable carriers")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Ship one order
    Ship {
        /// Carrier key; defaults to `shipping.default_shipper`
        #[arg(short, long)]
        shipper: Option<String>,

        /// Order number
        #[arg(long, default_value = DEFAULT_ORDER_NUMBER)]
        order_number: String,

        /// Order id
        #[arg(long, default_value_t = 1)]
        id: u64,

        /// Route through the shipping controller
        #[arg(long)]
        via_controller: bool,

        /// Print the shipment as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the enabled carriers
    Providers,
}

impl Cli {
    /// Load configuration for this invocation
    pub fn load_config(&self) -> Result<AppConfig> {
        let mut loader = ConfigLoader::new();
        if let Some(path) = &self.config {
            loader = loader.with_config_path(path);
        }
        loader.load().context("Failed to load configuration")
    }
}

/// Execute `command` against a wired context, writing results to `out`
pub fn run<W: Write>(command: &Command, context: &AppContext, out: &mut W) -> Result<()> {
    match command {
        Command::Ship {
            shipper,
            order_number,
            id,
            via_controller,
            json,
        } => {
            let shipper = shipper
                .clone()
                .unwrap_or_else(|| context.config.shipping.default_shipper.clone());
            let order = Order::new(*id, order_number.as_str(), shipper);

            let processor = context
                .order_processor(*via_controller)
                .context("Failed to wire order processor")?;
            let shipment = processor
                .process_order(&order)
                .with_context(|| format!("Failed to ship order {}", order.order_number))?;

            if *json {
                writeln!(out, "{}", serde_json::to_string_pretty(&shipment)?)?;
            } else {
                writeln!(out, "{}", shipment)?;
            }
        }
        Command::Providers => {
            for carrier in context.shipping_services()?.iter() {
                writeln!(out, "{:<6} {}", carrier.key(), carrier.name())?;
            }
        }
    }
    Ok(())
}
