//! Plan command implementation for the fuelstop CLI.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use fuelstop_core::{Plan, PlanRequest, StopPlanner, VehicleProfile};
use fuelstop_data::{JsonStationCatalog, load_route};
use fuelstop_planner::{GreedyPlanner, GreedyPlannerConfig};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::{
    ARG_CHECKPOINT_MARGIN, ARG_MPG, ARG_ROUTE, ARG_SEARCH_RADIUS, ARG_STATIONS, ARG_TANK_RANGE,
    CliError, ENV_ROUTE, ENV_STATIONS,
};

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "plan",
    long_about = "Choose fuel stops along a saved OSRM route response \
                 (requested with geometries=geojson) using a JSON station \
                 catalog, and print the plan with its total cost as JSON.",
    about = "Plan fuel stops for a route"
)]
#[ortho_config(prefix = "FUELSTOP")]
pub(crate) struct PlanArgs {
    /// Path to a saved OSRM route response.
    #[arg(long = ARG_ROUTE, value_name = "path")]
    #[serde(default)]
    pub(crate) route: Option<Utf8PathBuf>,
    /// Path to the JSON station catalog.
    #[arg(long = ARG_STATIONS, value_name = "path")]
    #[serde(default)]
    pub(crate) stations: Option<Utf8PathBuf>,
    /// Distance in miles a full tank sustains (default 500).
    #[arg(long = ARG_TANK_RANGE, value_name = "miles")]
    #[serde(default)]
    pub(crate) tank_range: Option<f64>,
    /// Fuel economy in miles per gallon (default 10).
    #[arg(long = ARG_MPG, value_name = "mpg")]
    #[serde(default)]
    pub(crate) mpg: Option<f64>,
    /// Maximum distance between the route and a station (default 30).
    #[arg(long = ARG_SEARCH_RADIUS, value_name = "miles")]
    #[serde(default)]
    pub(crate) search_radius: Option<f64>,
    /// How far before an empty tank to look for stations (default 50).
    #[arg(long = ARG_CHECKPOINT_MARGIN, value_name = "miles")]
    #[serde(default)]
    pub(crate) checkpoint_margin: Option<f64>,
}

impl PlanArgs {
    pub(crate) fn into_config(self) -> Result<PlanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PlanConfig::try_from(merged)
    }
}

/// Resolved `plan` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PlanConfig {
    /// Path to the OSRM route response.
    pub(crate) route: Utf8PathBuf,
    /// Path to the station catalog.
    pub(crate) stations: Utf8PathBuf,
    /// Vehicle range and economy.
    pub(crate) vehicle: VehicleProfile,
    /// Station search settings.
    pub(crate) planner: GreedyPlannerConfig,
}

impl PlanConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.route, ARG_ROUTE)?;
        Self::require_existing(&self.stations, ARG_STATIONS)?;
        Ok(())
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match fuelstop_data::fs::file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<PlanArgs> for PlanConfig {
    type Error = CliError;

    fn try_from(args: PlanArgs) -> Result<Self, Self::Error> {
        let route = args.route.ok_or(CliError::MissingArgument {
            field: ARG_ROUTE,
            env: ENV_ROUTE,
        })?;
        let stations = args.stations.ok_or(CliError::MissingArgument {
            field: ARG_STATIONS,
            env: ENV_STATIONS,
        })?;

        let default_vehicle = VehicleProfile::default();
        let vehicle = VehicleProfile {
            tank_range_miles: args.tank_range.unwrap_or(default_vehicle.tank_range_miles),
            mpg: args.mpg.unwrap_or(default_vehicle.mpg),
        };
        let default_planner = GreedyPlannerConfig::default();
        let planner = GreedyPlannerConfig {
            search_radius_miles: args
                .search_radius
                .unwrap_or(default_planner.search_radius_miles),
            checkpoint_margin_miles: args
                .checkpoint_margin
                .unwrap_or(default_planner.checkpoint_margin_miles),
        };

        Ok(Self {
            route,
            stations,
            vehicle,
            planner,
        })
    }
}

pub(crate) fn run_plan(args: PlanArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_plan_with(args, &mut stdout)
}

pub(crate) fn run_plan_with(args: PlanArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = resolve_plan_config(args)?;
    let plan = execute_plan(&config)?;
    write_plan(writer, &plan)
}

fn resolve_plan_config(args: PlanArgs) -> Result<PlanConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

pub(crate) fn execute_plan(config: &PlanConfig) -> Result<Plan, CliError> {
    let route = load_route(&config.route)?;
    let catalog = JsonStationCatalog::open(&config.stations)?;
    let planner = GreedyPlanner::with_config(catalog, config.planner);
    Ok(planner.plan(&PlanRequest::new(route, config.vehicle))?)
}

fn write_plan(writer: &mut dyn Write, plan: &Plan) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(plan).map_err(CliError::SerialisePlan)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WritePlanOutput)?;
    writer
        .write_all(b"\n")
        .map_err(CliError::WritePlanOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<PlanConfig, CliError> {
    let merged = PlanArgs::merge_from_layers(layers).map_err(CliError::from)?;
    PlanConfig::try_from(merged)
}
