//! Error types emitted by the Waymark CLI.

use std::{io, sync::Arc};

use camino::Utf8PathBuf;
use thiserror::Error;
use waymark_core::{PaceError, RouteError};
use waymark_data::VenueError;

/// Errors emitted by the Waymark CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// The logger could not be installed.
    #[error("failed to initialise logging: {0}")]
    Logging(#[source] io::Error),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// The venue document could not be loaded.
    #[error("failed to load venue from {path:?}: {source}")]
    LoadVenue {
        path: Utf8PathBuf,
        #[source]
        source: VenueError,
    },
    /// The venue defines no entrances to start from.
    #[error("venue {path:?} defines no starts")]
    NoStarts { path: Utf8PathBuf },
    /// The requested start is not part of the venue.
    #[error("unknown start {id:?}")]
    UnknownStart { id: String },
    /// The requested store is not part of the venue.
    #[error("unknown store {id:?}")]
    UnknownStore { id: String },
    /// No known store was selected for the route.
    #[error("Select at least one store.")]
    NoStopsSelected,
    /// The configured walking pace is unusable.
    #[error("invalid walking pace: {0}")]
    InvalidWalkingPace(#[from] PaceError),
    /// Planning failed for a reason other than an empty selection.
    #[error("route planning failed: {0}")]
    Route(#[source] RouteError),
    /// Serialising the route summary failed.
    #[error("failed to serialise route summary: {0}")]
    SerialiseSummary(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] io::Error),
}

impl From<RouteError> for CliError {
    fn from(err: RouteError) -> Self {
        match err {
            RouteError::EmptySelection => Self::NoStopsSelected,
            other => Self::Route(other),
        }
    }
}
