pub mod observe;
pub mod random;

use std::sync::Arc;

use crate::catalog::CatalogIndex;
use crate::types::{Ad, Category, SelectionPath};
pub use observe::{AttributeValue, NoopObserver, Observer, RecordedEvent, RecordingObserver};
pub use random::{RandomSource, SeededRandom, ThreadRandom};

use observe::{ATTR_AD_COUNT, ATTR_CATEGORY, ATTR_CONTEXT_KEYS_COUNT, EVENT_LOOKUP, EVENT_RANDOM};

/// Number of ads drawn by the random fallback.
pub const MAX_ADS_TO_SERVE: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("Catalog is empty: no ads to sample from")]
    EmptyCatalog,
}

/// Ads chosen for a request and the algorithm that chose them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub ads: Vec<Ad>,
    pub path: SelectionPath,
}

/// Reads the shared catalog and picks ads. Holds no per-request state.
pub struct AdSelector<R = ThreadRandom> {
    catalog: Arc<CatalogIndex>,
    random: R,
}

impl AdSelector<ThreadRandom> {
    pub fn new(catalog: Arc<CatalogIndex>) -> Self {
        Self::with_random(catalog, ThreadRandom)
    }
}

impl<R> AdSelector<R>
where
    R: RandomSource,
{
    pub fn with_random(catalog: Arc<CatalogIndex>, random: R) -> Self {
        Self { catalog, random }
    }

    pub fn catalog(&self) -> &CatalogIndex {
        &self.catalog
    }

    /// Ads for one category, reported as a lookup event.
    pub fn lookup(&self, category: &Category, observer: &dyn Observer) -> &[Ad] {
        let ads = self.catalog.lookup(category);
        observer.record_event(
            EVENT_LOOKUP,
            &[
                (ATTR_CATEGORY, category.as_str().into()),
                (ATTR_AD_COUNT, ads.len().into()),
            ],
        );
        ads
    }

    /// Concatenate the matches of every category in input order.
    ///
    /// Repeated categories and shared ads are not deduplicated. When nothing
    /// matches (including an empty input) this falls back to
    /// [`AdSelector::select_random`].
    pub fn select_by_categories(
        &self,
        categories: &[Category],
        observer: &dyn Observer,
    ) -> Result<Selection, SelectionError> {
        observer.record_attribute(ATTR_CONTEXT_KEYS_COUNT, categories.len().into());

        let mut ads = Vec::new();
        for category in categories {
            ads.extend_from_slice(self.lookup(category, observer));
        }

        let selection = if ads.is_empty() {
            Selection {
                ads: self.select_random(observer)?,
                path: SelectionPath::RandomFallback,
            }
        } else {
            Selection {
                ads,
                path: SelectionPath::CategoryMatch,
            }
        };

        observer.record_attribute(ATTR_AD_COUNT, selection.ads.len().into());
        Ok(selection)
    }

    /// Draw `MAX_ADS_TO_SERVE` ads uniformly, with replacement.
    ///
    /// The same ad may appear more than once in the result.
    pub fn select_random(&self, observer: &dyn Observer) -> Result<Vec<Ad>, SelectionError> {
        let all = self.catalog.all_ads();
        if all.is_empty() {
            return Err(SelectionError::EmptyCatalog);
        }

        let ads: Vec<Ad> = (0..MAX_ADS_TO_SERVE)
            .map(|_| all[self.random.index(all.len())].clone())
            .collect();

        debug_assert_eq!(ads.len(), MAX_ADS_TO_SERVE);
        observer.record_event(EVENT_RANDOM, &[(ATTR_AD_COUNT, ads.len().into())]);
        Ok(ads)
    }
}
