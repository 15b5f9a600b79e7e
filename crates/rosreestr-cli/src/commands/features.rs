//! Cadastral map search commands.

use anyhow::{bail, Context, Result};
use clap::Args;
use rosreestr_client::{FeatureQuery, FeatureSearchOptions, ObjectKind};

use super::{print_json, GlobalArgs};

/// Arguments for the parcel and building commands.
#[derive(Args, Debug)]
pub struct FeatureArgs {
    /// Cadastral number, e.g. "77:17:0:11471"
    #[arg(long, conflicts_with_all = ["lat", "long"])]
    pub cadastral_id: Option<String>,

    /// Latitude
    #[arg(long, requires = "long", allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Longitude
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    pub long: Option<f64>,

    /// Maximum number of results
    #[arg(long, default_value_t = 11)]
    pub limit: u32,

    /// Search tolerance
    #[arg(long, default_value_t = 2)]
    pub tolerance: u32,
}

impl FeatureArgs {
    fn query(&self) -> Result<FeatureQuery> {
        match (&self.cadastral_id, self.lat, self.long) {
            (Some(cadastral_id), _, _) => Ok(FeatureQuery::CadastralId(cadastral_id.clone())),
            (None, Some(lat), Some(long)) => Ok(FeatureQuery::Coordinates { lat, long }),
            _ => bail!("Provide --cadastral-id or both --lat and --long"),
        }
    }
}

/// Runs the parcel or building command.
///
/// # Errors
///
/// Returns an error if no search target is given or the request fails.
pub fn run(args: &FeatureArgs, global: &GlobalArgs, kind: ObjectKind) -> Result<()> {
    let query = args.query()?;
    let options = FeatureSearchOptions::new(args.limit, args.tolerance);

    let features = global
        .cadastral_client()?
        .search_features(kind, &query, options)
        .with_context(|| format!("Failed to search {kind} features"))?;

    print_json(&features)
}
