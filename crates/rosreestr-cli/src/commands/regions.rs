//! Region listing commands.

use anyhow::{Context, Result};
use clap::Args;

use super::{print_json, GlobalArgs};

/// Arguments for the region-types command.
#[derive(Args, Debug)]
pub struct RegionTypesArgs {
    /// Region id
    pub region_id: String,
}

/// Arguments for the regions command.
#[derive(Args, Debug)]
pub struct RegionsArgs {
    /// Macro region name as listed by `macro-regions`
    pub macro_region_name: String,
}

/// Runs the region-types command.
///
/// # Errors
///
/// Returns an error if the registry request fails.
pub fn run_region_types(args: &RegionTypesArgs, global: &GlobalArgs) -> Result<()> {
    let types = global
        .registry_client()?
        .get_region_types(&args.region_id)
        .with_context(|| format!("Failed to fetch region types of {}", args.region_id))?;

    print_json(&types)
}

/// Runs the macro-regions command.
///
/// # Errors
///
/// Returns an error if the registry request fails.
pub fn run_macro_regions(global: &GlobalArgs) -> Result<()> {
    let mut client = global.registry_client()?;
    let macro_regions = client
        .macro_regions()
        .context("Failed to download macro regions")?;

    print_json(&macro_regions)
}

/// Runs the regions command.
///
/// # Errors
///
/// Returns an error if the macro region is unknown or a registry request fails.
pub fn run_regions(args: &RegionsArgs, global: &GlobalArgs) -> Result<()> {
    let regions = global
        .registry_client()?
        .regions_of(&args.macro_region_name)
        .with_context(|| format!("Failed to fetch regions of {}", args.macro_region_name))?;

    print_json(&regions)
}
