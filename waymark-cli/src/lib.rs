//! Command-line interface for planning routes through a venue.
#![cfg_attr(not(test), forbid(unsafe_code))]
#![cfg_attr(test, deny(unsafe_code))]

use std::{env, io::Write};

use clap::{Parser, Subcommand};

mod catalog;
mod error;
mod logging;
mod route;

pub use error::CliError;

use catalog::{CouponsArgs, StoresArgs};
use logging::LogLevel;
use route::RouteArgs;

const ARG_VENUE: &str = "venue";
const ARG_START: &str = "start";
const ARG_STOP: &str = "stop";
const ARG_MODE: &str = "mode";
const ARG_UNITS_PER_MINUTE: &str = "units-per-minute";
const ARG_MAX_PASSES: &str = "max-passes";
const ARG_JSON: &str = "json";
const ARG_QUERY: &str = "query";
const ARG_STORE: &str = "store";
const ENV_ROUTE_VENUE: &str = "WAYMARK_CMDS_ROUTE_VENUE";
const ENV_STORES_VENUE: &str = "WAYMARK_CMDS_STORES_VENUE";
const ENV_COUPONS_VENUE: &str = "WAYMARK_CMDS_COUPONS_VENUE";
const ENV_COUPONS_STORE: &str = "WAYMARK_CMDS_COUPONS_STORE";

/// Run the Waymark CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let env_level = env::var(logging::ENV_LOG_LEVEL).ok();
    let level = logging::resolve_level(cli.log_level, env_level.as_deref());
    logging::init_logger(level).map_err(CliError::Logging)?;

    let mut stdout = std::io::stdout().lock();
    dispatch(cli.command, &mut stdout)
}

fn dispatch(command: Command, writer: &mut dyn Write) -> Result<(), CliError> {
    match command {
        Command::Route(args) => route::run_route_with(args, writer),
        Command::Stores(args) => catalog::run_stores_with(args, writer),
        Command::Coupons(args) => catalog::run_coupons_with(args, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "waymark",
    about = "Plan short walking routes between stores in a venue",
    version
)]
struct Cli {
    /// Log verbosity written to stderr (overrides WAYMARK_LOG_LEVEL).
    #[arg(long = "log-level", value_name = "level", value_enum, global = true)]
    log_level: Option<LogLevel>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Order the selected stores into a walking route from an entrance.
    Route(RouteArgs),
    /// List stores, optionally filtered by name or zone.
    Stores(StoresArgs),
    /// Show the coupons a store currently offers.
    Coupons(CouponsArgs),
}

#[cfg(test)]
mod tests;
