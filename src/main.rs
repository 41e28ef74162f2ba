mod account;
mod activity;
mod cli;
mod hyperliquid;
mod report;
mod scaling;
mod types;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use dotenvy::dotenv;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::account::snapshot::AccountSnapshot;
use crate::activity::last_activity::LastActivity;
use crate::cli::args::Args;
use crate::cli::prompt::{prompt_direction, prompt_size};
use crate::hyperliquid::hyperliquid_client::HyperliquidClient;
use crate::hyperliquid::hyperliquid_config::HyperliquidConfig;
use crate::report::report_printer::{
    print_banner, print_failure, print_no_pending_orders, print_report,
};
use crate::scaling::pipeline::{ScaleOutcome, ScaleRequest, evaluate};
use crate::types::instrument_rules::InstrumentRules;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("order_scaler=info".parse()?),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mut config = HyperliquidConfig::from_env()?;
    if let Some(address) = &args.address {
        config = config.with_address(address.clone());
    }

    let mut out = io::stdout();
    let coin = args.coin.to_uppercase();

    print_banner(&mut out, &format!("HYPERLIQUID {coin} ORDER SCALING TOOL"))?;
    writeln!(out, "\nTracking address: {}", config.address)?;

    match run(&config, &args, &coin, &mut out).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            error!(error = %format!("{e:#}"), "order scaling failed");
            print_failure(&mut out, &e)?;
            Ok(ExitCode::FAILURE)
        }
    }
}

async fn run(
    config: &HyperliquidConfig,
    args: &Args,
    coin: &str,
    out: &mut impl Write,
) -> Result<()> {
    let direction = match args.direction {
        Some(direction) => direction,
        None => prompt_direction(&mut io::stdin().lock(), out)?,
    };
    let desired_size = match args.size {
        Some(size) => size,
        None => prompt_size(&mut io::stdin().lock(), out, coin)?,
    };

    writeln!(out, "\nYour selection: {direction} position")?;
    writeln!(out, "Your {coin} size: {desired_size} {coin}")?;

    let rules = InstrumentRules::for_coin(coin)?;

    writeln!(out, "\nFetching account data from Hyperliquid...")?;
    let client = HyperliquidClient::new(config)?;
    let snapshot = AccountSnapshot::fetch(&client, &config.address).await?;

    let activity = LastActivity::from_snapshots(&snapshot.orders, &snapshot.fills);
    writeln!(out, "Last account activity: {}", activity.describe(Utc::now()))?;

    let request = ScaleRequest {
        coin: coin.to_string(),
        direction,
        desired_size,
        size_decimals: rules.size_decimals,
    };

    match evaluate(&snapshot, &request)? {
        ScaleOutcome::NoPendingOrders { coin } => {
            print_no_pending_orders(out, &coin)?;
        }
        ScaleOutcome::Scaled(report) => {
            print_report(out, &report)?;
            writeln!(out)?;
            print_banner(out, "Done!")?;
            info!(orders = report.orders.len(), "scaled report printed");
        }
    }

    Ok(())
}
