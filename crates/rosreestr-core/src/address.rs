//! Postal address input for registry object searches.
//!
//! An [`AddressInput`] carries the street and house of a property together
//! with either pre-resolved registry identifiers or human-readable names for
//! the macro region (subject of the federation) and the region inside it.

use serde::{Deserialize, Serialize};

use crate::validation::ValidationError;

/// Classifier marking a macro region as a republic.
pub const REPUBLIC: &str = "республика";

/// A validated, immutable postal address.
///
/// Construct it with [`AddressInput::builder`]. Construction fails unless a
/// macro region (id or name) and a region (id or name) are both present.
///
/// # Examples
///
/// ```
/// use rosreestr_core::AddressInput;
///
/// let address = AddressInput::builder("Ленина", "5")
///     .macro_region_name("москва")
///     .region_name("южное бутово")
///     .build()?;
///
/// assert_eq!(address.macro_region_name(), Some("москва"));
/// assert_eq!(address.macro_region_id(), None);
/// # Ok::<(), rosreestr_core::ValidationError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AddressInputBuilder")]
pub struct AddressInput {
    street_name: String,
    house_number: String,
    macro_region_id: String,
    region_id: String,
    macro_region_name: String,
    region_name: String,
    macro_region_type: String,
    house_building: String,
    house_structure: String,
    apartment: String,
}

fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

impl AddressInput {
    /// Starts building an address for the given street and house number.
    #[must_use]
    pub fn builder(
        street_name: impl Into<String>,
        house_number: impl Into<String>,
    ) -> AddressInputBuilder {
        AddressInputBuilder {
            street_name: street_name.into(),
            house_number: house_number.into(),
            ..AddressInputBuilder::default()
        }
    }

    /// Street name.
    #[must_use]
    pub fn street_name(&self) -> &str {
        &self.street_name
    }

    /// House number.
    #[must_use]
    pub fn house_number(&self) -> &str {
        &self.house_number
    }

    /// Pre-resolved macro region identifier, if one was supplied.
    #[must_use]
    pub fn macro_region_id(&self) -> Option<&str> {
        non_empty(&self.macro_region_id)
    }

    /// Pre-resolved region identifier, if one was supplied.
    #[must_use]
    pub fn region_id(&self) -> Option<&str> {
        non_empty(&self.region_id)
    }

    /// Human-readable macro region name, if one was supplied.
    #[must_use]
    pub fn macro_region_name(&self) -> Option<&str> {
        non_empty(&self.macro_region_name)
    }

    /// Human-readable region name, if one was supplied.
    #[must_use]
    pub fn region_name(&self) -> Option<&str> {
        non_empty(&self.region_name)
    }

    /// Macro region classifier such as [`REPUBLIC`], if one was supplied.
    #[must_use]
    pub fn macro_region_type(&self) -> Option<&str> {
        non_empty(&self.macro_region_type)
    }

    /// Returns true when the macro region type is [`REPUBLIC`] (case-insensitive).
    #[must_use]
    pub fn is_republic(&self) -> bool {
        self.macro_region_type.to_lowercase() == REPUBLIC
    }

    /// Building qualifier, empty when unset.
    #[must_use]
    pub fn house_building(&self) -> &str {
        &self.house_building
    }

    /// Structure qualifier, empty when unset.
    #[must_use]
    pub fn house_structure(&self) -> &str {
        &self.house_structure
    }

    /// Apartment number, empty when unset.
    #[must_use]
    pub fn apartment(&self) -> &str {
        &self.apartment
    }
}

/// Builder for [`AddressInput`].
///
/// Every optional field defaults to an empty string, which the registry
/// treats the same as "not given".
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AddressInputBuilder {
    street_name: String,
    house_number: String,
    macro_region_id: String,
    region_id: String,
    macro_region_name: String,
    region_name: String,
    macro_region_type: String,
    house_building: String,
    house_structure: String,
    apartment: String,
}

impl AddressInputBuilder {
    /// Sets the pre-resolved macro region identifier.
    #[must_use]
    pub fn macro_region_id(mut self, id: impl Into<String>) -> Self {
        self.macro_region_id = id.into();
        self
    }

    /// Sets the pre-resolved region identifier.
    #[must_use]
    pub fn region_id(mut self, id: impl Into<String>) -> Self {
        self.region_id = id.into();
        self
    }

    /// Sets the macro region name used when no id is given.
    #[must_use]
    pub fn macro_region_name(mut self, name: impl Into<String>) -> Self {
        self.macro_region_name = name.into();
        self
    }

    /// Sets the region name used when no id is given.
    #[must_use]
    pub fn region_name(mut self, name: impl Into<String>) -> Self {
        self.region_name = name.into();
        self
    }

    /// Sets the macro region classifier (e.g. [`REPUBLIC`]).
    #[must_use]
    pub fn macro_region_type(mut self, kind: impl Into<String>) -> Self {
        self.macro_region_type = kind.into();
        self
    }

    /// Sets the building qualifier.
    #[must_use]
    pub fn house_building(mut self, building: impl Into<String>) -> Self {
        self.house_building = building.into();
        self
    }

    /// Sets the structure qualifier.
    #[must_use]
    pub fn house_structure(mut self, structure: impl Into<String>) -> Self {
        self.house_structure = structure.into();
        self
    }

    /// Sets the apartment number.
    #[must_use]
    pub fn apartment(mut self, apartment: impl Into<String>) -> Self {
        self.apartment = apartment.into();
        self
    }

    /// Validates the collected fields and builds the address.
    ///
    /// Street and house are not checked: the registry itself accepts empty
    /// values there.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if neither a macro region id nor a macro
    /// region name is present, or if neither a region id nor a region name
    /// is present.
    pub fn build(self) -> Result<AddressInput, ValidationError> {
        if self.macro_region_id.is_empty() && self.macro_region_name.is_empty() {
            return Err(ValidationError::one_of_required(&[
                "macro_region_id",
                "macro_region_name",
            ]));
        }
        if self.region_id.is_empty() && self.region_name.is_empty() {
            return Err(ValidationError::one_of_required(&["region_id", "region_name"]));
        }

        Ok(AddressInput {
            street_name: self.street_name,
            house_number: self.house_number,
            macro_region_id: self.macro_region_id,
            region_id: self.region_id,
            macro_region_name: self.macro_region_name,
            region_name: self.region_name,
            macro_region_type: self.macro_region_type,
            house_building: self.house_building,
            house_structure: self.house_structure,
            apartment: self.apartment,
        })
    }
}

impl TryFrom<AddressInputBuilder> for AddressInput {
    type Error = ValidationError;

    fn try_from(builder: AddressInputBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}
