//! # Rosreestr Core
//!
//! Value types shared by the Rosreestr registry clients:
//!
//! - [`AddressInput`] - validated postal address used for object searches
//! - [`MacroRegion`] / [`Region`] - region records as listed by the registry
//! - [`RegistryId`] - registry identifier (numeric or textual)
//! - [`normalize_cadastral_id`] - compact form of cadastral numbers
//!
//! This crate performs no I/O.
//!
//! ## Example
//!
//! ```rust
//! use rosreestr_core::AddressInput;
//!
//! let address = AddressInput::builder("Красного маяка", "22")
//!     .macro_region_id("145000000000")
//!     .region_id("145296000000")
//!     .house_building("2")
//!     .build()
//!     .expect("ids for both levels were given");
//!
//! assert_eq!(address.region_id(), Some("145296000000"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod address;
pub mod cadastral;
pub mod region;
pub mod validation;

#[cfg(test)]
mod proptest_tests;

pub use address::{AddressInput, AddressInputBuilder, REPUBLIC};
pub use cadastral::normalize_cadastral_id;
pub use region::{find_id_by_name, MacroRegion, Named, Region, RegistryId};
pub use validation::{ValidationError, ValidationErrorKind};
