//! Macro regions and regions as listed by the registry.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier assigned by the registry.
///
/// The registry returns numeric ids, but ids supplied by callers arrive as
/// strings; both forms render identically when substituted into a URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RegistryId {
    /// Numeric identifier (the registry's native form).
    Number(u64),
    /// Textual identifier.
    Text(String),
}

impl fmt::Display for RegistryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}

impl From<u64> for RegistryId {
    fn from(id: u64) -> Self {
        Self::Number(id)
    }
}

impl From<&str> for RegistryId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

impl From<String> for RegistryId {
    fn from(id: String) -> Self {
        Self::Text(id)
    }
}

/// A subject of the federation (oblast, krai, republic, federal city).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroRegion {
    /// Registry identifier.
    pub id: RegistryId,
    /// Display name, e.g. "Москва" or "Московская область".
    pub name: String,
}

/// A district or settlement inside a macro region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    /// Registry identifier.
    pub id: RegistryId,
    /// Display name, e.g. "ЮЖНОЕ БУТОВО".
    pub name: String,
}

/// Records that carry a registry id and a display name.
pub trait Named {
    /// Registry identifier.
    fn id(&self) -> &RegistryId;

    /// Display name.
    fn name(&self) -> &str;

    /// Case-insensitive exact name comparison.
    fn matches_name(&self, name: &str) -> bool {
        self.name().to_lowercase() == name.to_lowercase()
    }
}

impl Named for MacroRegion {
    fn id(&self) -> &RegistryId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Region {
    fn id(&self) -> &RegistryId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Returns the id of the first record whose name matches `name` case-insensitively.
///
/// Records are scanned in the given order, so with duplicate names the
/// earliest one wins.
///
/// # Examples
///
/// ```
/// use rosreestr_core::{find_id_by_name, MacroRegion, RegistryId};
///
/// let macro_regions = vec![MacroRegion {
///     id: RegistryId::from(145_000_000_000),
///     name: "Москва".to_string(),
/// }];
///
/// assert_eq!(
///     find_id_by_name(&macro_regions, "МОСКВА"),
///     Some(&RegistryId::from(145_000_000_000))
/// );
/// assert_eq!(find_id_by_name(&macro_regions, "Моск"), None);
/// ```
pub fn find_id_by_name<'a, T: Named>(records: &'a [T], name: &str) -> Option<&'a RegistryId> {
    records
        .iter()
        .find(|record| record.matches_name(name))
        .map(Named::id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(id: u64, name: &str) -> Region {
        Region {
            id: RegistryId::from(id),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_registry_id_deserialize_number_and_text() {
        let number: RegistryId = serde_json::from_str("145000000000").unwrap();
        let text: RegistryId = serde_json::from_str("\"145000000000\"").unwrap();

        assert_eq!(number, RegistryId::Number(145_000_000_000));
        assert_eq!(text, RegistryId::Text("145000000000".to_string()));
        assert_eq!(number.to_string(), text.to_string());
    }

    #[test]
    fn test_macro_region_deserialize_ignores_extra_fields() {
        let macro_region: MacroRegion =
            serde_json::from_str(r#"{"id": 199000000000, "name": "Еврейская А.обл.", "code": 79}"#)
                .unwrap();

        assert_eq!(macro_region.id, RegistryId::from(199_000_000_000));
        assert_eq!(macro_region.name, "Еврейская А.обл.");
    }

    #[test]
    fn test_matches_name_is_case_insensitive() {
        let record = region(145_296_000_000, "ЮЖНОЕ БУТОВО");

        assert!(record.matches_name("южное бутово"));
        assert!(record.matches_name("Южное Бутово"));
        assert!(!record.matches_name("южное"));
    }

    #[test]
    fn test_find_id_first_match_wins() {
        let regions = vec![
            region(1, "Андреевка"),
            region(2, "андреевка"),
            region(3, "Вишневое"),
        ];

        assert_eq!(find_id_by_name(&regions, "АНДРЕЕВКА"), Some(&RegistryId::from(1)));
        assert_eq!(find_id_by_name(&regions, "вишневое"), Some(&RegistryId::from(3)));
        assert_eq!(find_id_by_name(&regions, "Верхнесадовое"), None);
    }
}
