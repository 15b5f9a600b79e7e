//! Client for the online registry API.

use std::collections::HashMap;
use std::sync::Arc;

use rosreestr_core::{
    find_id_by_name, normalize_cadastral_id, AddressInput, MacroRegion, Region, RegistryId,
    REPUBLIC,
};
use rosreestr_http::{Executor, HttpExecutor};
use serde_json::Value;

use crate::cache::{RegionCache, RegionSource};
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::response::{body_as, body_value, into_objects};
use crate::urls;

/// Completes a short macro region name the way the registry lists it.
///
/// The name is lower-cased, then the first matching rule applies: a name
/// ending in "ая" gets " область", one ending in "ий" gets " край", and a
/// republic gets the "республика " prefix.
///
/// # Examples
///
/// ```
/// use rosreestr_client::expand_macro_region_name;
///
/// assert_eq!(expand_macro_region_name("Московская", None), "московская область");
/// assert_eq!(expand_macro_region_name("Краснодарский", None), "краснодарский край");
/// assert_eq!(expand_macro_region_name("Крым", Some("Республика")), "республика крым");
/// assert_eq!(expand_macro_region_name("Москва", None), "москва");
/// ```
#[must_use]
pub fn expand_macro_region_name(name: &str, macro_region_type: Option<&str>) -> String {
    let name = name.to_lowercase();
    if name.ends_with("ая") {
        format!("{name} область")
    } else if name.ends_with("ий") {
        format!("{name} край")
    } else if macro_region_type.is_some_and(|kind| kind.to_lowercase() == REPUBLIC) {
        format!("{REPUBLIC} {name}")
    } else {
        name
    }
}

/// Raw endpoint access, kept apart from the cache so both can be borrowed at once.
#[derive(Debug, Clone)]
struct RegistryApi {
    base_url: String,
    executor: Arc<dyn Executor>,
}

impl RegistryApi {
    fn get_value(&self, url: &str) -> Result<Value, ClientError> {
        body_value(&self.executor.get(url)?)
    }
}

impl RegionSource for RegistryApi {
    fn fetch_macro_regions(&self) -> Result<Vec<MacroRegion>, ClientError> {
        let url = urls::macro_regions(&self.base_url);
        body_as(&self.executor.get(&url)?)
    }

    fn fetch_regions(&self, macro_region_id: &RegistryId) -> Result<Vec<Region>, ClientError> {
        let url = urls::regions(&self.base_url, macro_region_id);
        body_as(&self.executor.get(&url)?)
    }
}

/// Client for the Rosreestr online registry.
///
/// Resolves macro region and region names to registry ids through two lookup
/// tables that are downloaded on first use and kept for the lifetime of the
/// client. Methods that may touch those tables take `&mut self`.
///
/// # Examples
///
/// ```no_run
/// use rosreestr_client::{ClientConfig, RegistryClient};
/// use rosreestr_core::AddressInput;
///
/// let mut client = RegistryClient::new(ClientConfig::registry())?;
///
/// let address = AddressInput::builder("Красного маяка", "22")
///     .macro_region_name("Москва")
///     .region_name("Южное Бутово")
///     .house_building("2")
///     .apartment("187")
///     .build()?;
///
/// for object in client.get_objects_by_address(&address)? {
///     println!("{}", object["objectId"]);
/// }
/// # Ok::<(), rosreestr_client::ClientError>(())
/// ```
#[derive(Debug)]
pub struct RegistryClient {
    api: RegistryApi,
    cache: RegionCache,
}

impl RegistryClient {
    /// Creates a client with its own HTTP executor.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the executor
    /// cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        config.validate()?;
        let executor = HttpExecutor::new(config.executor_config())?;
        Ok(Self::with_executor(config.base_url, Arc::new(executor)))
    }

    /// Creates a client that sends requests through `executor`.
    #[must_use]
    pub fn with_executor(base_url: impl Into<String>, executor: Arc<dyn Executor>) -> Self {
        Self {
            api: RegistryApi {
                base_url: base_url.into(),
                executor,
            },
            cache: RegionCache::new(),
        }
    }

    /// API base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.api.base_url
    }

    /// The executor requests go through.
    #[must_use]
    pub const fn executor(&self) -> &Arc<dyn Executor> {
        &self.api.executor
    }

    /// Macro regions in registry order, downloaded on first call.
    ///
    /// # Errors
    ///
    /// Returns an error if the list has to be downloaded and that fails.
    pub fn macro_regions(&mut self) -> Result<&[MacroRegion], ClientError> {
        self.cache.macro_regions(&self.api)
    }

    /// Regions of every macro region, downloaded on first call.
    ///
    /// # Errors
    ///
    /// Returns an error if the table has to be downloaded and any request
    /// fails.
    pub fn macro_regions_to_regions(
        &mut self,
    ) -> Result<&HashMap<RegistryId, Vec<Region>>, ClientError> {
        self.cache.macro_regions_to_regions(&self.api)
    }

    /// Regions of the macro region named `macro_region_name`.
    ///
    /// Uses the cached region table if it is there; otherwise downloads the
    /// regions of this one macro region only.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MacroRegionNotFound`] if the name does not
    /// match, or the download error.
    pub fn regions_of(&mut self, macro_region_name: &str) -> Result<Vec<Region>, ClientError> {
        let macro_region_id = self.resolve_macro_region_id(macro_region_name)?;
        self.cache.regions_of(&self.api, &macro_region_id)
    }

    /// Finds the id of the macro region named `name`, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MacroRegionNotFound`] if no macro region has
    /// that name, or the download error if the list could not be fetched.
    pub fn resolve_macro_region_id(&mut self, name: &str) -> Result<RegistryId, ClientError> {
        find_id_by_name(self.macro_regions()?, name)
            .cloned()
            .ok_or_else(|| ClientError::MacroRegionNotFound {
                name: name.to_string(),
            })
    }

    /// Finds the id of region `region_name` inside macro region `macro_region_name`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MacroRegionNotFound`] or
    /// [`ClientError::RegionNotFound`] if a name does not match, or the
    /// download error if a table could not be fetched.
    pub fn resolve_region_id(
        &mut self,
        region_name: &str,
        macro_region_name: &str,
    ) -> Result<RegistryId, ClientError> {
        let macro_region_id = self.resolve_macro_region_id(macro_region_name)?;
        self.macro_regions_to_regions()?
            .get(&macro_region_id)
            .and_then(|regions| find_id_by_name(regions, region_name))
            .cloned()
            .ok_or_else(|| ClientError::RegionNotFound {
                region_name: region_name.to_string(),
                macro_region_name: macro_region_name.to_string(),
            })
    }

    /// Searches registry objects at a postal address.
    ///
    /// Ids given in the address are used as-is; missing ones are resolved
    /// from the names. Empty results come back as an empty list.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if a name cannot be resolved,
    /// [`ClientError::HttpStatus`] for status 400 and above, or a transport
    /// or JSON error.
    pub fn get_objects_by_address(
        &mut self,
        address: &AddressInput,
    ) -> Result<Vec<Value>, ClientError> {
        let macro_region_name = address.macro_region_name().unwrap_or_default();

        let macro_region_id = match address.macro_region_id() {
            Some(id) => RegistryId::from(id),
            None => {
                let expanded =
                    expand_macro_region_name(macro_region_name, address.macro_region_type());
                self.resolve_macro_region_id(&expanded)?
            }
        };

        let region_id = match address.region_id() {
            Some(id) => RegistryId::from(id),
            None => self.resolve_region_id(
                address.region_name().unwrap_or_default(),
                macro_region_name,
            )?,
        };

        let url =
            urls::objects_by_address(&self.api.base_url, &macro_region_id, &region_id, address);
        tracing::info!(%url, "Trying to download rosreestr objects");

        let objects = into_objects(self.api.get_value(&url)?);
        tracing::info!(count = objects.len(), "Rosreestr objects were downloaded");
        Ok(objects)
    }

    /// Lists the settlement types of a region.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::HttpStatus`] for status 400 and above, or a
    /// transport or JSON error.
    pub fn get_region_types(&self, region_id: &str) -> Result<Value, ClientError> {
        self.api
            .get_value(&urls::region_types(&self.api.base_url, region_id))
    }

    /// Searches objects by right registration number.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::HttpStatus`] for status 400 and above, or a
    /// transport or JSON error.
    pub fn get_objects_by_right(
        &self,
        region_number: &str,
        right_number: &str,
    ) -> Result<Value, ClientError> {
        self.api.get_value(&urls::objects_by_right(
            &self.api.base_url,
            region_number,
            right_number,
        ))
    }

    /// Fetches the detailed record of one object.
    ///
    /// Cadastral numbers are normalized first ("77:05:0007007:4926" is sent
    /// as "77:5:7007:4926").
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::HttpStatus`] for status 400 and above, or a
    /// transport or JSON error.
    pub fn get_object(&self, object_id: &str) -> Result<Value, ClientError> {
        let object_id = normalize_cadastral_id(object_id);
        tracing::info!(%object_id, "Trying to download detailed object");
        let object = self
            .api
            .get_value(&urls::object(&self.api.base_url, &object_id))?;
        tracing::info!(%object_id, "Detailed object was downloaded");
        Ok(object)
    }
}
