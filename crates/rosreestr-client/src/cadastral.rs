//! Geo-search on the public cadastral map.

use std::fmt;
use std::sync::Arc;

use rosreestr_http::{Executor, HttpExecutor};
use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::response::body_value;
use crate::urls;

/// Kind of object searched on the cadastral map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    /// Land parcel.
    Parcel,
    /// Building.
    Building,
}

impl ObjectKind {
    /// Numeric type tag used in feature URLs.
    #[must_use]
    pub const fn tag(self) -> u8 {
        match self {
            Self::Parcel => 1,
            Self::Building => 5,
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parcel => f.write_str("parcel"),
            Self::Building => f.write_str("building"),
        }
    }
}

/// What to search for.
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureQuery {
    /// A cadastral number, e.g. "77:17:0:11471".
    CadastralId(String),
    /// A point in WGS 84 degrees.
    Coordinates {
        /// Latitude.
        lat: f64,
        /// Longitude.
        long: f64,
    },
}

/// Paging and matching options of a feature search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureSearchOptions {
    /// Maximum number of features returned.
    pub limit: u32,
    /// Search tolerance.
    pub tolerance: u32,
}

impl FeatureSearchOptions {
    /// Creates options with the given limit and tolerance.
    #[must_use]
    pub const fn new(limit: u32, tolerance: u32) -> Self {
        Self { limit, tolerance }
    }
}

impl Default for FeatureSearchOptions {
    fn default() -> Self {
        Self::new(11, 2)
    }
}

/// Client for the cadastral map feature search.
///
/// Stateless apart from the executor. Responses are returned as decoded
/// JSON without further interpretation.
///
/// # Examples
///
/// ```no_run
/// use rosreestr_client::{CadastralClient, ClientConfig, FeatureSearchOptions};
///
/// let client = CadastralClient::new(ClientConfig::cadastral())?;
/// let parcel = client.get_parcel_by_cadastral_id("77:17:0:11471", FeatureSearchOptions::default())?;
/// println!("{parcel}");
/// # Ok::<(), rosreestr_client::ClientError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CadastralClient {
    base_url: String,
    executor: Arc<dyn Executor>,
}

impl CadastralClient {
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
            base_url: base_url.into(),
            executor,
        }
    }

    /// API base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Searches features of `kind` matching `query`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::HttpStatus`] for status 400 and above,
    /// [`ClientError::Transport`] if the request fails and
    /// [`ClientError::Json`] if the body is not JSON.
    pub fn search_features(
        &self,
        kind: ObjectKind,
        query: &FeatureQuery,
        options: FeatureSearchOptions,
    ) -> Result<Value, ClientError> {
        let url = urls::features(&self.base_url, kind, query, options);
        tracing::debug!(%kind, %url, "Searching cadastral map");
        body_value(&self.executor.get(&url)?)
    }

    /// Finds parcels at a point.
    ///
    /// # Errors
    ///
    /// See [`search_features`](Self::search_features).
    pub fn get_parcel_by_coordinates(
        &self,
        lat: f64,
        long: f64,
        options: FeatureSearchOptions,
    ) -> Result<Value, ClientError> {
        self.search_features(ObjectKind::Parcel, &FeatureQuery::Coordinates { lat, long }, options)
    }

    /// Finds parcels by cadastral number.
    ///
    /// # Errors
    ///
    /// See [`search_features`](Self::search_features).
    pub fn get_parcel_by_cadastral_id(
        &self,
        cadastral_id: &str,
        options: FeatureSearchOptions,
    ) -> Result<Value, ClientError> {
        self.search_features(
            ObjectKind::Parcel,
            &FeatureQuery::CadastralId(cadastral_id.to_string()),
            options,
        )
    }

    /// Finds buildings at a point.
    ///
    /// # Errors
    ///
    /// See [`search_features`](Self::search_features).
    pub fn get_building_by_coordinates(
        &self,
        lat: f64,
        long: f64,
        options: FeatureSearchOptions,
    ) -> Result<Value, ClientError> {
        self.search_features(ObjectKind::Building, &FeatureQuery::Coordinates { lat, long }, options)
    }

    /// Finds buildings by cadastral number.
    ///
    /// # Errors
    ///
    /// See [`search_features`](Self::search_features).
    pub fn get_building_by_cadastral_id(
        &self,
        cadastral_id: &str,
        options: FeatureSearchOptions,
    ) -> Result<Value, ClientError> {
        self.search_features(
            ObjectKind::Building,
            &FeatureQuery::CadastralId(cadastral_id.to_string()),
            options,
        )
    }
}
