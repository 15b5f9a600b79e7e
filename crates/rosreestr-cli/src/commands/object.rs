//! Object lookup commands: by id and by right number.

use anyhow::{Context, Result};
use clap::Args;

use super::{print_json, GlobalArgs};

/// Arguments for the object command.
#[derive(Args, Debug)]
pub struct ObjectArgs {
    /// Object id or cadastral number, e.g. "77:05:0007007:4926"
    pub id: String,
}

/// Arguments for the right command.
#[derive(Args, Debug)]
pub struct RightArgs {
    /// Region number, e.g. "77"
    pub region_number: String,

    /// Right registration number, e.g. "77-77-09/088/2012-638"
    pub right_number: String,
}

/// Runs the object command.
///
/// # Errors
///
/// Returns an error if the registry request fails.
pub fn run_object(args: &ObjectArgs, global: &GlobalArgs) -> Result<()> {
    let object = global
        .registry_client()?
        .get_object(&args.id)
        .with_context(|| format!("Failed to fetch object {}", args.id))?;

    print_json(&object)
}

/// Runs the right command.
///
/// # Errors
///
/// Returns an error if the registry request fails.
pub fn run_right(args: &RightArgs, global: &GlobalArgs) -> Result<()> {
    let objects = global
        .registry_client()?
        .get_objects_by_right(&args.region_number, &args.right_number)
        .with_context(|| format!("Failed to search objects by right {}", args.right_number))?;

    print_json(&objects)
}
