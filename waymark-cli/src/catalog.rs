//! Store listing and coupon lookup commands.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use waymark_data::Venue;

use crate::{
    ARG_QUERY, ARG_STORE, ARG_VENUE, CliError, ENV_COUPONS_STORE, ENV_COUPONS_VENUE,
    ENV_STORES_VENUE,
};

const NO_COUPONS: &str = "No coupons currently available for this store.";

/// CLI arguments for the `stores` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "stores",
    about = "List stores, optionally filtered by name or zone"
)]
#[ortho_config(prefix = "WAYMARK")]
pub(crate) struct StoresArgs {
    /// Path to the venue JSON document.
    #[arg(long = ARG_VENUE, value_name = "path")]
    #[serde(default)]
    pub(crate) venue: Option<Utf8PathBuf>,
    /// Case-insensitive text matched against "name zone".
    #[arg(long = ARG_QUERY, value_name = "text")]
    #[serde(default)]
    pub(crate) query: Option<String>,
}

/// CLI arguments for the `coupons` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(name = "coupons", about = "Show the coupons a store currently offers")]
#[ortho_config(prefix = "WAYMARK")]
pub(crate) struct CouponsArgs {
    /// Path to the venue JSON document.
    #[arg(long = ARG_VENUE, value_name = "path")]
    #[serde(default)]
    pub(crate) venue: Option<Utf8PathBuf>,
    /// Identifier of the store to look up.
    #[arg(long = ARG_STORE, value_name = "id")]
    #[serde(default)]
    pub(crate) store: Option<String>,
}

pub(crate) fn load_venue(path: &Utf8Path) -> Result<Venue, CliError> {
    Venue::load(path).map_err(|source| CliError::LoadVenue {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn run_stores_with(args: StoresArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let path = merged.venue.ok_or(CliError::MissingArgument {
        field: ARG_VENUE,
        env: ENV_STORES_VENUE,
    })?;
    let venue = load_venue(&path)?;
    write_stores(writer, &venue, merged.query.as_deref().unwrap_or_default())
}

pub(crate) fn run_coupons_with(args: CouponsArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let path = merged.venue.ok_or(CliError::MissingArgument {
        field: ARG_VENUE,
        env: ENV_COUPONS_VENUE,
    })?;
    let store_id = merged.store.ok_or(CliError::MissingArgument {
        field: ARG_STORE,
        env: ENV_COUPONS_STORE,
    })?;
    let venue = load_venue(&path)?;
    write_coupons(writer, &venue, &store_id)
}

pub(crate) fn write_stores(
    writer: &mut dyn Write,
    venue: &Venue,
    query: &str,
) -> Result<(), CliError> {
    for store in venue.search(query) {
        writeln!(
            writer,
            "{}: {} ({} • {})",
            store.id, store.name, store.zone, store.category
        )
        .map_err(CliError::WriteOutput)?;
    }
    Ok(())
}

pub(crate) fn write_coupons(
    writer: &mut dyn Write,
    venue: &Venue,
    store_id: &str,
) -> Result<(), CliError> {
    let store = venue.store(store_id).ok_or_else(|| CliError::UnknownStore {
        id: store_id.to_owned(),
    })?;
    writeln!(writer, "{} • Coupons", store.name).map_err(CliError::WriteOutput)?;
    if store.coupons.is_empty() {
        return writeln!(writer, "{NO_COUPONS}").map_err(CliError::WriteOutput);
    }
    for coupon in &store.coupons {
        writeln!(
            writer,
            "- {}: {} (Code: {} • Expires: {})",
            coupon.title, coupon.desc, coupon.code, coupon.expires
        )
        .map_err(CliError::WriteOutput)?;
    }
    Ok(())
}
