//! URL templates of the registry and cadastral map APIs.
//!
//! Values are substituted as given; only the right number is percent-encoded.

use rosreestr_core::{AddressInput, RegistryId};
use url::form_urlencoded;

use crate::cadastral::{FeatureQuery, FeatureSearchOptions, ObjectKind};

pub(crate) fn macro_regions(base: &str) -> String {
    format!("{base}/macro_regions/")
}

pub(crate) fn regions(base: &str, macro_region_id: &RegistryId) -> String {
    format!("{base}/regions/{macro_region_id}/")
}

pub(crate) fn region_types(base: &str, region_id: &str) -> String {
    format!("{base}/region_types/{region_id}/")
}

/// Spaces become `+` and `/` becomes `%2F`, like Python's `quote_plus`.
pub(crate) fn objects_by_right(base: &str, region_number: &str, right_number: &str) -> String {
    let right: String = form_urlencoded::byte_serialize(right_number.as_bytes()).collect();
    format!("{base}/right/{region_number}/{right}/")
}

pub(crate) fn objects_by_address(
    base: &str,
    macro_region_id: &RegistryId,
    region_id: &RegistryId,
    address: &AddressInput,
) -> String {
    format!(
        "{base}/address/fir_objects/?macroRegionId={macro_region_id}&regionId={region_id}\
         &street={}&house={}&building={}&structure={}&apartment={}",
        address.street_name(),
        address.house_number(),
        address.house_building(),
        address.house_structure(),
        address.apartment(),
    )
}

pub(crate) fn object(base: &str, normalized_id: &str) -> String {
    format!("{base}/fir_object/{normalized_id}/")
}

pub(crate) fn features(
    base: &str,
    kind: ObjectKind,
    query: &FeatureQuery,
    options: FeatureSearchOptions,
) -> String {
    let text = match query {
        FeatureQuery::CadastralId(cadastral_id) => cadastral_id.clone(),
        // Debug keeps the fraction on whole numbers: 55.0, not 55.
        FeatureQuery::Coordinates { lat, long } => format!("{lat:?}%20{long:?}"),
    };
    format!(
        "{base}/features/{}?text={text}&limit={}&tolerance={}",
        kind.tag(),
        options.limit,
        options.tolerance,
    )
}
