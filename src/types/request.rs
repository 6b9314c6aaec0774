use serde::{Deserialize, Serialize};

use super::ad::{Ad, Category};

/// Context hints for one GetAds call. May be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdRequest {
    #[serde(default)]
    pub context_keys: Vec<Category>,
}

impl AdRequest {
    pub fn new<I, C>(keys: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Category>,
    {
        Self {
            context_keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_targeted(&self) -> bool {
        !self.context_keys.is_empty()
    }
}

/// The ads served for one request.
///
/// Only the random fallback is capped at `MAX_ADS_TO_SERVE`; a category
/// match returns every matching ad.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdResponse {
    pub ads: Vec<Ad>,
}

/// Which algorithm produced a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPath {
    CategoryMatch,
    RandomFallback,
}

impl SelectionPath {
    /// Value reported under `app.ads.ad_response_type`.
    pub fn response_type(self) -> &'static str {
        match self {
            SelectionPath::CategoryMatch => "TARGETED",
            SelectionPath::RandomFallback => "RANDOM",
        }
    }
}
