// Built once, read many times:
// no mutation after build
// no reload
// lookups hand out borrowed slices

use std::collections::BTreeMap;

use sha2::{Digest, Sha256};

use crate::types::{Ad, Category};

/// Accumulates `(category, ad)` associations before freezing them.
///
/// Behaves like a list multimap: adding the same category twice appends to
/// the same group, and equal ads are kept as separate entries.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    order: Vec<Category>,
    groups: BTreeMap<Category, Vec<Ad>>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, category: impl Into<Category>, ad: Ad) -> Self {
        self.push(category.into(), ad);
        self
    }

    pub fn add_all<I>(mut self, category: impl Into<Category>, ads: I) -> Self
    where
        I: IntoIterator<Item = Ad>,
    {
        let category = category.into();
        for ad in ads {
            self.push(category.clone(), ad);
        }
        self
    }

    fn push(&mut self, category: Category, ad: Ad) {
        if !self.groups.contains_key(&category) {
            self.order.push(category.clone());
        }
        self.groups.entry(category).or_default().push(ad);
    }

    pub fn build(self) -> CatalogIndex {
        let CatalogBuilder { order, groups } = self;

        // Flattened view follows category first-insertion order, then
        // insertion order within each category.
        let mut all = Vec::with_capacity(groups.values().map(Vec::len).sum());
        let mut hasher = Sha256::new();
        for category in &order {
            for ad in &groups[category] {
                let line = format!("{}:{}:{}\n", category.as_str(), ad.redirect_url, ad.text);
                hasher.update(line.as_bytes());
                all.push(ad.clone());
            }
        }
        let version = format!("sha256:{}", hex::encode(hasher.finalize()));

        CatalogIndex {
            order,
            groups,
            all,
            version,
        }
    }
}

/// Immutable category → ads index plus the flattened list of every ad.
///
/// Safe to share across threads without locking; nothing mutates it after
/// [`CatalogBuilder::build`].
#[derive(Debug, Clone)]
pub struct CatalogIndex {
    order: Vec<Category>,
    groups: BTreeMap<Category, Vec<Ad>>,
    all: Vec<Ad>,
    version: String,
}

impl CatalogIndex {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::new()
    }

    /// Ads registered under `category`, in insertion order.
    ///
    /// Unknown categories yield an empty slice.
    pub fn lookup(&self, category: &Category) -> &[Ad] {
        self.groups.get(category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every ad in the catalog in a stable build order.
    pub fn all_ads(&self) -> &[Ad] {
        &self.all
    }

    pub fn categories(&self) -> &[Category] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    /// Content fingerprint over every `category:redirect_url:text` line.
    pub fn version(&self) -> &str {
        &self.version
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_category_appends_to_first_group() {
        let index = CatalogIndex::builder()
            .add("a", Ad::new("/1", "one"))
            .add("b", Ad::new("/2", "two"))
            .add("a", Ad::new("/3", "three"))
            .build();

        assert_eq!(index.categories(), &[Category::from("a"), Category::from("b")]);
        let urls: Vec<&str> = index
            .all_ads()
            .iter()
            .map(|ad| ad.redirect_url.as_str())
            .collect();
        assert_eq!(urls, vec!["/1", "/3", "/2"]);
    }

    #[test]
    fn version_is_stable_for_equal_content() {
        let first = CatalogIndex::builder().add("a", Ad::new("/1", "one")).build();
        let second = CatalogIndex::builder().add("a", Ad::new("/1", "one")).build();
        assert_eq!(first.version(), second.version());
        assert!(first.version().starts_with("sha256:"));
    }
}
