//! Address search command.

use anyhow::{Context, Result};
use clap::Args;
use rosreestr_core::AddressInput;
use tracing::info;

use super::{print_json, GlobalArgs};

/// Arguments for the address command.
///
/// A macro region and a region are both required, each either by id or by
/// name.
#[derive(Args, Debug)]
pub struct AddressArgs {
    /// Street name
    #[arg(long)]
    pub street: String,

    /// House number
    #[arg(long)]
    pub house: String,

    /// Macro region id (skips name resolution)
    #[arg(long)]
    pub macro_region_id: Option<String>,

    /// Macro region name, e.g. "Москва" or "Московская"
    #[arg(long)]
    pub macro_region_name: Option<String>,

    /// Region id (skips name resolution)
    #[arg(long)]
    pub region_id: Option<String>,

    /// Region name, e.g. "Южное Бутово"
    #[arg(long)]
    pub region_name: Option<String>,

    /// Macro region type, e.g. "республика"
    #[arg(long)]
    pub macro_region_type: Option<String>,

    /// Building qualifier
    #[arg(long)]
    pub building: Option<String>,

    /// Structure qualifier
    #[arg(long)]
    pub structure: Option<String>,

    /// Apartment number
    #[arg(long)]
    pub apartment: Option<String>,
}

impl AddressArgs {
    fn to_address(&self) -> Result<AddressInput> {
        let field = |value: &Option<String>| value.clone().unwrap_or_default();

        AddressInput::builder(&self.street, &self.house)
            .macro_region_id(field(&self.macro_region_id))
            .macro_region_name(field(&self.macro_region_name))
            .region_id(field(&self.region_id))
            .region_name(field(&self.region_name))
            .macro_region_type(field(&self.macro_region_type))
            .house_building(field(&self.building))
            .house_structure(field(&self.structure))
            .apartment(field(&self.apartment))
            .build()
            .context("Invalid address")
    }
}

/// Runs the address command.
///
/// # Errors
///
/// Returns an error if:
/// - The address lacks a macro region or a region
/// - A name cannot be resolved
/// - The registry request fails
pub fn run(args: &AddressArgs, global: &GlobalArgs) -> Result<()> {
    let address = args.to_address()?;
    info!(?address, "Searching objects by address");

    let mut client = global.registry_client()?;
    let objects = client
        .get_objects_by_address(&address)
        .context("Failed to search objects by address")?;

    print_json(&objects)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use crate::commands::{Cli, Commands};

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["rosreestr", "address"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_address_from_names() {
        let cli = parse(&[
            "--street",
            "Красного маяка",
            "--house",
            "22",
            "--macro-region-name",
            "Москва",
            "--region-name",
            "Южное Бутово",
            "--apartment",
            "187",
        ]);
        let Commands::Address(args) = cli.command else {
            panic!("expected address command");
        };

        let address = args.to_address().unwrap();
        assert_eq!(address.macro_region_name(), Some("Москва"));
        assert_eq!(address.region_id(), None);
        assert_eq!(address.apartment(), "187");
        assert_eq!(address.house_building(), "");
    }

    #[test]
    fn test_address_without_region_is_rejected() {
        let cli = parse(&["--street", "a", "--house", "1", "--macro-region-id", "145000000000"]);
        let Commands::Address(args) = cli.command else {
            panic!("expected address command");
        };

        assert!(args.to_address().is_err());
    }
}
