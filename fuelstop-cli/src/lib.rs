//! Command-line interface for planning fuel stops along a saved route.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod plan;

pub use error::CliError;

pub(crate) const ARG_ROUTE: &str = "route";
pub(crate) const ARG_STATIONS: &str = "stations";
pub(crate) const ARG_TANK_RANGE: &str = "tank-range";
pub(crate) const ARG_MPG: &str = "mpg";
pub(crate) const ARG_SEARCH_RADIUS: &str = "search-radius";
pub(crate) const ARG_CHECKPOINT_MARGIN: &str = "checkpoint-margin";
pub(crate) const ENV_ROUTE: &str = "FUELSTOP_CMDS_PLAN_ROUTE";
pub(crate) const ENV_STATIONS: &str = "FUELSTOP_CMDS_PLAN_STATIONS";

/// Run the fuelstop CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Plan(args) => plan::run_plan(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "fuelstop",
    about = "Plan cost-efficient fuel stops along a driving route",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Choose fuel stops for a saved OSRM route and print the plan as JSON.
    Plan(plan::PlanArgs),
}

#[cfg(test)]
mod tests;
