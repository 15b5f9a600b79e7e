//! Rosreestr CLI - query the Rosreestr online registry and cadastral map.

use anyhow::Result;
use clap::Parser;
use rosreestr_client::ObjectKind;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::{Cli, Commands};

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rosreestr=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Address(args) => commands::address::run(&args, &cli.global),
        Commands::Object(args) => commands::object::run_object(&args, &cli.global),
        Commands::Right(args) => commands::object::run_right(&args, &cli.global),
        Commands::RegionTypes(args) => commands::regions::run_region_types(&args, &cli.global),
        Commands::MacroRegions => commands::regions::run_macro_regions(&cli.global),
        Commands::Regions(args) => commands::regions::run_regions(&args, &cli.global),
        Commands::Parcel(args) => commands::features::run(&args, &cli.global, ObjectKind::Parcel),
        Commands::Building(args) => {
            commands::features::run(&args, &cli.global, ObjectKind::Building)
        }
        Commands::Version => {
            println!("rosreestr {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
