//! # Rosreestr Client
//!
//! Clients for the Rosreestr online registry and the public cadastral map.
//!
//! - [`RegistryClient`] searches registry objects by address, right number or
//!   object id, resolving macro region and region names to registry ids
//!   through lookup tables downloaded on first use.
//! - [`CadastralClient`] searches parcels and buildings on the cadastral map
//!   by cadastral number or coordinates.
//!
//! Both clients send requests through a [`rosreestr_http::Executor`], which
//! may be shared between them.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use rosreestr_client::{
//!     CadastralClient, ClientConfig, FeatureSearchOptions, RegistryClient, CADASTRAL_BASE_URL,
//!     REGISTRY_BASE_URL,
//! };
//! use rosreestr_core::AddressInput;
//! use rosreestr_http::HttpExecutor;
//!
//! let config = ClientConfig::registry().with_keep_alive(true);
//! let executor = Arc::new(HttpExecutor::new(config.executor_config())?);
//!
//! let mut registry = RegistryClient::with_executor(REGISTRY_BASE_URL, executor.clone());
//! let cadastral = CadastralClient::with_executor(CADASTRAL_BASE_URL, executor);
//!
//! let address = AddressInput::builder("Красного маяка", "22")
//!     .macro_region_name("Москва")
//!     .region_name("Южное Бутово")
//!     .build()?;
//! let objects = registry.get_objects_by_address(&address)?;
//!
//! let parcel = cadastral.get_parcel_by_cadastral_id("77:17:0:11471", FeatureSearchOptions::default())?;
//! println!("{} objects, parcel {parcel}", objects.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────┐   ┌──────────────────────┐
//! │        RegistryClient        │   │   CadastralClient    │
//! │  ┌────────────┐ ┌─────────┐  │   │                      │
//! │  │ RegionCache│ │  urls   │  │   │        urls          │
//! │  └────────────┘ └─────────┘  │   │                      │
//! └──────────────┬───────────────┘   └──────────┬───────────┘
//!                └──────────┬───────────────────┘
//!                           ▼
//!                 Arc<dyn Executor>
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod cache;
mod cadastral;
mod config;
mod error;
mod registry;
mod response;
mod urls;

#[cfg(test)]
mod fake;

pub use cache::{Memo, RegionCache, RegionSource};
pub use cadastral::{CadastralClient, FeatureQuery, FeatureSearchOptions, ObjectKind};
pub use config::{ClientConfig, CADASTRAL_BASE_URL, DEFAULT_TIMEOUT, REGISTRY_BASE_URL};
pub use error::ClientError;
pub use registry::{expand_macro_region_name, RegistryClient};
pub use response::{into_objects, is_empty_result};
