//! CLI commands and argument parsing.

pub mod address;
pub mod features;
pub mod object;
pub mod regions;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rosreestr_client::{
    CadastralClient, ClientConfig, RegistryClient, CADASTRAL_BASE_URL, REGISTRY_BASE_URL,
};
use serde::Serialize;

/// Rosreestr - query the Russian real estate registry
#[derive(Parser)]
#[command(name = "rosreestr")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Connection options shared by every command.
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Request timeout in seconds
    #[arg(long, global = true, env = "ROSREESTR_TIMEOUT", default_value_t = 5)]
    pub timeout: u64,

    /// Reuse one HTTP session for all requests
    #[arg(long, global = true, env = "ROSREESTR_KEEP_ALIVE")]
    pub keep_alive: bool,

    /// Online registry API base URL
    #[arg(long, global = true, env = "ROSREESTR_BASE_URL", default_value = REGISTRY_BASE_URL)]
    pub base_url: String,

    /// Cadastral map API base URL
    #[arg(long, global = true, env = "ROSREESTR_PKK_URL", default_value = CADASTRAL_BASE_URL)]
    pub pkk_url: String,

    /// User-Agent header value
    #[arg(long, global = true, env = "ROSREESTR_USER_AGENT")]
    pub user_agent: Option<String>,
}

impl GlobalArgs {
    fn config(&self, base_url: &str) -> ClientConfig {
        let config = ClientConfig::new(base_url)
            .with_timeout(Duration::from_secs(self.timeout))
            .with_keep_alive(self.keep_alive);

        match self.user_agent {
            Some(ref user_agent) => config.with_user_agent(user_agent),
            None => config,
        }
    }

    /// Creates a client for the online registry.
    ///
    /// # Errors
    ///
    /// Returns an error if the options do not form a valid configuration.
    pub fn registry_client(&self) -> Result<RegistryClient> {
        RegistryClient::new(self.config(&self.base_url)).context("Failed to create registry client")
    }

    /// Creates a client for the cadastral map.
    ///
    /// # Errors
    ///
    /// Returns an error if the options do not form a valid configuration.
    pub fn cadastral_client(&self) -> Result<CadastralClient> {
        CadastralClient::new(self.config(&self.pkk_url))
            .context("Failed to create cadastral map client")
    }
}

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Search registry objects by postal address
    Address(address::AddressArgs),

    /// Show the detailed record of one object
    Object(object::ObjectArgs),

    /// Search objects by right registration number
    Right(object::RightArgs),

    /// List the settlement types of a region
    RegionTypes(regions::RegionTypesArgs),

    /// List all macro regions
    MacroRegions,

    /// List the regions of a macro region
    Regions(regions::RegionsArgs),

    /// Search land parcels on the cadastral map
    Parcel(features::FeatureArgs),

    /// Search buildings on the cadastral map
    Building(features::FeatureArgs),

    /// Print version information
    Version,
}

/// Prints `value` to stdout as pretty JSON.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
pub fn print_json(value: &impl Serialize) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}
