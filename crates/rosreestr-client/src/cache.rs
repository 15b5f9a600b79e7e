//! Lazily populated region lookup tables.
//!
//! Both tables are fetched on first access and kept for the lifetime of the
//! owning client. Nothing is evicted or refreshed.

use std::collections::HashMap;

use rosreestr_core::{MacroRegion, Region, RegistryId};

use crate::error::ClientError;

/// A value fetched at most once.
///
/// A failed fetch leaves the cell empty, so the next access fetches again.
/// A successful fetch is kept even when the value is empty.
///
/// # Examples
///
/// ```
/// use rosreestr_client::Memo;
///
/// let mut memo: Memo<Vec<u32>> = Memo::new();
/// let mut calls = 0;
///
/// for _ in 0..3 {
///     let value = memo.get_or_try_fetch(|| {
///         calls += 1;
///         Ok::<_, std::io::Error>(Vec::new())
///     })?;
///     assert!(value.is_empty());
/// }
/// assert_eq!(calls, 1);
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Memo<T> {
    value: Option<T>,
}

impl<T> Memo<T> {
    /// Creates an empty cell.
    #[must_use]
    pub const fn new() -> Self {
        Self { value: None }
    }

    /// Returns the value if it has been fetched.
    #[must_use]
    pub const fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Returns true once a fetch has succeeded.
    #[must_use]
    pub const fn is_populated(&self) -> bool {
        self.value.is_some()
    }

    /// Returns the value, running `fetch` first if the cell is empty.
    ///
    /// # Errors
    ///
    /// Returns the error of `fetch`; the cell stays empty in that case.
    pub fn get_or_try_fetch<E>(&mut self, fetch: impl FnOnce() -> Result<T, E>) -> Result<&T, E> {
        let value = match self.value.take() {
            Some(value) => value,
            None => fetch()?,
        };
        Ok(self.value.insert(value))
    }
}

impl<T> Default for Memo<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Where the region tables come from.
pub trait RegionSource {
    /// Downloads the list of macro regions.
    ///
    /// # Errors
    ///
    /// Returns an error if the list cannot be fetched or decoded.
    fn fetch_macro_regions(&self) -> Result<Vec<MacroRegion>, ClientError>;

    /// Downloads the regions of one macro region.
    ///
    /// # Errors
    ///
    /// Returns an error if the list cannot be fetched or decoded.
    fn fetch_regions(&self, macro_region_id: &RegistryId) -> Result<Vec<Region>, ClientError>;
}

/// The two region lookup tables owned by one client.
#[derive(Debug, Default)]
pub struct RegionCache {
    macro_regions: Memo<Vec<MacroRegion>>,
    macro_regions_to_regions: Memo<HashMap<RegistryId, Vec<Region>>>,
}

impl RegionCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Macro regions in registry order, fetched on first call.
    ///
    /// # Errors
    ///
    /// Returns the fetch error when the table is not populated yet and the
    /// download fails.
    pub fn macro_regions(
        &mut self,
        source: &impl RegionSource,
    ) -> Result<&[MacroRegion], ClientError> {
        self.macro_regions
            .get_or_try_fetch(|| download_macro_regions(source))
            .map(Vec::as_slice)
    }

    /// Regions keyed by macro region id, fetched on first call.
    ///
    /// The table is built all at once: the macro region list (if missing) and
    /// then the regions of every macro region. If any download fails nothing
    /// is kept and the next call starts over.
    ///
    /// # Errors
    ///
    /// Returns the first fetch error.
    pub fn macro_regions_to_regions(
        &mut self,
        source: &impl RegionSource,
    ) -> Result<&HashMap<RegistryId, Vec<Region>>, ClientError> {
        let Self {
            macro_regions,
            macro_regions_to_regions,
        } = self;

        macro_regions_to_regions.get_or_try_fetch(|| {
            let macro_regions = macro_regions.get_or_try_fetch(|| download_macro_regions(source))?;

            let mut table = HashMap::with_capacity(macro_regions.len());
            for macro_region in macro_regions {
                let regions = source.fetch_regions(&macro_region.id)?;
                tracing::debug!(
                    macro_region_id = %macro_region.id,
                    count = regions.len(),
                    "Regions were downloaded"
                );
                table.insert(macro_region.id.clone(), regions);
            }
            tracing::info!(macro_regions = table.len(), "Regions were downloaded");
            Ok(table)
        })
    }

    /// Regions of one macro region.
    ///
    /// Served from the region table when it is cached. Otherwise only this
    /// macro region's list is downloaded, and the table stays unpopulated.
    ///
    /// # Errors
    ///
    /// Returns the fetch error when the table is not cached and the download
    /// fails.
    pub fn regions_of(
        &self,
        source: &impl RegionSource,
        macro_region_id: &RegistryId,
    ) -> Result<Vec<Region>, ClientError> {
        if let Some(table) = self.macro_regions_to_regions.get() {
            return Ok(table.get(macro_region_id).cloned().unwrap_or_default());
        }
        source.fetch_regions(macro_region_id)
    }

    /// Returns true once the macro region list is cached.
    #[must_use]
    pub const fn has_macro_regions(&self) -> bool {
        self.macro_regions.is_populated()
    }

    /// Returns true once the region table is cached.
    #[must_use]
    pub const fn has_regions(&self) -> bool {
        self.macro_regions_to_regions.is_populated()
    }
}

fn download_macro_regions(source: &impl RegionSource) -> Result<Vec<MacroRegion>, ClientError> {
    let macro_regions = source.fetch_macro_regions()?;
    tracing::info!(count = macro_regions.len(), "Macro regions were downloaded");
    Ok(macro_regions)
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;

    #[derive(Default)]
    struct CountingSource {
        macro_region_fetches: Cell<usize>,
        region_fetches: RefCell<Vec<RegistryId>>,
        fail_regions_of: Option<RegistryId>,
    }

    impl RegionSource for CountingSource {
        fn fetch_macro_regions(&self) -> Result<Vec<MacroRegion>, ClientError> {
            self.macro_region_fetches.set(self.macro_region_fetches.get() + 1);
            Ok(vec![
                MacroRegion {
                    id: RegistryId::from(199_000_000_000),
                    name: "Еврейская А.обл.".to_string(),
                },
                MacroRegion {
                    id: RegistryId::from(39_200_000_000_000),
                    name: "Севастополь".to_string(),
                },
            ])
        }

        fn fetch_regions(&self, macro_region_id: &RegistryId) -> Result<Vec<Region>, ClientError> {
            self.region_fetches.borrow_mut().push(macro_region_id.clone());
            if self.fail_regions_of.as_ref() == Some(macro_region_id) {
                return Err(ClientError::HttpStatus {
                    status: 502,
                    body: String::new(),
                });
            }
            Ok(vec![Region {
                id: RegistryId::from(1),
                name: format!("region of {macro_region_id}"),
            }])
        }
    }

    #[test]
    fn test_memo_failed_fetch_is_retried() {
        let mut memo: Memo<u32> = Memo::new();

        let err = memo.get_or_try_fetch(|| Err("down")).unwrap_err();
        assert_eq!(err, "down");
        assert!(!memo.is_populated());

        assert_eq!(memo.get_or_try_fetch(|| Ok::<_, &str>(7)), Ok(&7));
        assert_eq!(memo.get_or_try_fetch(|| Ok::<_, &str>(8)), Ok(&7));
        assert_eq!(memo.get(), Some(&7));
    }

    #[test]
    fn test_macro_regions_fetched_once() {
        let source = CountingSource::default();
        let mut cache = RegionCache::new();

        for _ in 0..3 {
            assert_eq!(cache.macro_regions(&source).unwrap().len(), 2);
        }
        assert_eq!(source.macro_region_fetches.get(), 1);
        assert!(cache.has_macro_regions());
        assert!(!cache.has_regions());
    }

    #[test]
    fn test_regions_fetched_once_per_macro_region() {
        let source = CountingSource::default();
        let mut cache = RegionCache::new();

        for _ in 0..3 {
            let table = cache.macro_regions_to_regions(&source).unwrap();
            assert_eq!(table.len(), 2);
            assert_eq!(
                table[&RegistryId::from(39_200_000_000_000)][0].name,
                "region of 39200000000000"
            );
        }
        cache.macro_regions(&source).unwrap();

        assert_eq!(source.macro_region_fetches.get(), 1);
        assert_eq!(
            *source.region_fetches.borrow(),
            vec![
                RegistryId::from(199_000_000_000),
                RegistryId::from(39_200_000_000_000)
            ]
        );
    }

    #[test]
    fn test_partial_region_failure_is_not_kept() {
        let source = CountingSource {
            fail_regions_of: Some(RegistryId::from(39_200_000_000_000)),
            ..CountingSource::default()
        };
        let mut cache = RegionCache::new();

        let err = cache.macro_regions_to_regions(&source).unwrap_err();
        assert_eq!(err.status(), Some(502));
        assert!(!cache.has_regions());
        // The macro region list itself was fetched fine and stays cached.
        assert!(cache.has_macro_regions());

        let _ = cache.macro_regions_to_regions(&source);
        assert_eq!(source.macro_region_fetches.get(), 1);
        assert_eq!(source.region_fetches.borrow().len(), 4);
    }

    #[test]
    fn test_regions_of_one_macro_region() {
        let source = CountingSource::default();
        let mut cache = RegionCache::new();
        let sevastopol = RegistryId::from(39_200_000_000_000);

        let regions = cache.regions_of(&source, &sevastopol).unwrap();
        assert_eq!(regions[0].name, "region of 39200000000000");
        assert_eq!(*source.region_fetches.borrow(), vec![sevastopol.clone()]);
        assert!(!cache.has_regions());

        // Once the table is cached it answers without downloading.
        cache.macro_regions_to_regions(&source).unwrap();
        assert_eq!(source.region_fetches.borrow().len(), 3);
        assert_eq!(cache.regions_of(&source, &sevastopol).unwrap(), regions);
        assert!(cache
            .regions_of(&source, &RegistryId::from(5))
            .unwrap()
            .is_empty());
        assert_eq!(source.region_fetches.borrow().len(), 3);
    }
}
