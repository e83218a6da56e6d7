//! Route command implementation for the Waymark CLI.

use std::io::Write;
use std::num::NonZeroUsize;

use camino::Utf8PathBuf;
use clap::Parser;
use log::{info, warn};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use waymark_core::{RouteMode, RoutePlanner, RouteRequest, RouteSummary, Toggle, WalkingPace};
use waymark_data::{Start, Venue};
use waymark_solver::{DEFAULT_MAX_PASSES, GreedyPlanner, PlannerConfig};

use crate::catalog::load_venue;
use crate::{
    ARG_JSON, ARG_MAX_PASSES, ARG_MODE, ARG_START, ARG_STOP, ARG_UNITS_PER_MINUTE, ARG_VENUE,
    CliError, ENV_ROUTE_VENUE,
};

/// CLI arguments for the `route` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "route",
    long_about = "Order the selected stores into a short walking route. \
                 Stores are visited nearest-first from the chosen entrance; \
                 the two-opt mode then untangles crossing legs. Unknown \
                 store ids are ignored.",
    about = "Plan a walking route through selected stores"
)]
#[ortho_config(prefix = "WAYMARK")]
pub(crate) struct RouteArgs {
    /// Path to the venue JSON document.
    #[arg(long = ARG_VENUE, value_name = "path")]
    #[serde(default)]
    pub(crate) venue: Option<Utf8PathBuf>,
    /// Entrance to start from (defaults to "Entrance A" or the first entrance).
    #[arg(long = ARG_START, value_name = "id")]
    #[serde(default)]
    pub(crate) start: Option<String>,
    /// Store to visit; repeat to select several. Naming a store twice
    /// deselects it.
    #[arg(long = ARG_STOP, value_name = "id")]
    #[serde(default)]
    pub(crate) stops: Vec<String>,
    /// Routing mode: nearest-neighbor or nearest-neighbor+2opt.
    #[arg(long = ARG_MODE, value_name = "mode")]
    #[serde(default)]
    pub(crate) mode: Option<RouteMode>,
    /// Venue units walked per minute, used for the time estimate.
    #[arg(long = ARG_UNITS_PER_MINUTE, value_name = "units")]
    #[serde(default)]
    pub(crate) units_per_minute: Option<f64>,
    /// Upper bound on two-opt passes.
    #[arg(long = ARG_MAX_PASSES, value_name = "n")]
    #[serde(default)]
    pub(crate) max_passes: Option<NonZeroUsize>,
    /// Print the route summary as JSON instead of text.
    #[arg(long = ARG_JSON)]
    #[serde(default)]
    pub(crate) json: bool,
}

impl RouteArgs {
    pub(crate) fn into_config(self) -> Result<RouteConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RouteConfig::try_from(merged)
    }
}

/// Resolved `route` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RouteConfig {
    pub(crate) venue: Utf8PathBuf,
    pub(crate) start: Option<String>,
    pub(crate) stops: Vec<String>,
    pub(crate) mode: RouteMode,
    pub(crate) planner: PlannerConfig,
    pub(crate) json: bool,
}

impl TryFrom<RouteArgs> for RouteConfig {
    type Error = CliError;

    fn try_from(args: RouteArgs) -> Result<Self, Self::Error> {
        let venue = args.venue.ok_or(CliError::MissingArgument {
            field: ARG_VENUE,
            env: ENV_ROUTE_VENUE,
        })?;
        let walking_pace = args
            .units_per_minute
            .map(WalkingPace::new)
            .transpose()?
            .unwrap_or_default();
        let planner = PlannerConfig {
            walking_pace,
            max_passes: args.max_passes.unwrap_or(DEFAULT_MAX_PASSES),
        };

        Ok(Self {
            venue,
            start: args.start,
            stops: args.stops,
            mode: args.mode.unwrap_or_default(),
            planner,
            json: args.json,
        })
    }
}

pub(crate) fn run_route_with(args: RouteArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let venue = load_venue(&config.venue)?;
    let summary = plan_route(&config, &venue)?;
    if config.json {
        write_route_json(writer, &summary)
    } else {
        write_route_text(writer, &summary, config.planner.walking_pace)
    }
}

/// Select the configured stores and plan a route through them.
pub(crate) fn plan_route(config: &RouteConfig, venue: &Venue) -> Result<RouteSummary, CliError> {
    let start = resolve_start(config, venue)?;

    let mut selection = venue.selection();
    for stop in &config.stops {
        if selection.toggle(stop) == Toggle::Ignored {
            warn!("ignoring unknown store {stop:?}");
        }
    }

    let request = RouteRequest {
        start: start.waypoint(),
        stops: venue.selected_waypoints(&selection),
        mode: config.mode,
    };
    let summary = GreedyPlanner::with_config(config.planner).plan(&request)?;
    info!(
        "planned {} route through {} stores: {:.0} units",
        config.mode,
        summary.tour().stops().len(),
        summary.total_distance()
    );
    Ok(summary)
}

fn resolve_start<'a>(config: &RouteConfig, venue: &'a Venue) -> Result<&'a Start, CliError> {
    match config.start.as_deref() {
        Some(id) => venue.start(id).ok_or_else(|| CliError::UnknownStart { id: id.to_owned() }),
        None => venue.default_start().ok_or_else(|| CliError::NoStarts {
            path: config.venue.clone(),
        }),
    }
}

/// Venue units are feet, so a pace in feet per minute converts to miles per
/// hour with this factor.
const FEET_PER_MINUTE_PER_MPH: f64 = 5280.0 / 60.0;

fn write_route_text(
    writer: &mut dyn Write,
    summary: &RouteSummary,
    pace: WalkingPace,
) -> Result<(), CliError> {
    for (step, leg) in summary.legs().iter().enumerate() {
        writeln!(
            writer,
            "{}. {} → {} ({:.0} ft est.)",
            step + 1,
            leg.from.display_name(),
            leg.to.display_name(),
            leg.distance
        )
        .map_err(CliError::WriteOutput)?;
    }
    writeln!(
        writer,
        "Estimated walking: {:.0} ft • ~{:.0} min (at ~{:.0} mph)",
        summary.total_distance(),
        summary.rounded_minutes(),
        pace.units_per_minute() / FEET_PER_MINUTE_PER_MPH
    )
    .map_err(CliError::WriteOutput)
}

fn write_route_json(writer: &mut dyn Write, summary: &RouteSummary) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(summary).map_err(CliError::SerialiseSummary)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RouteConfig, CliError> {
    let merged = RouteArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RouteConfig::try_from(merged)
}
