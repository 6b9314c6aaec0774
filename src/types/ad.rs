use serde::{Deserialize, Serialize};

/// An advertisement record.
///
/// Ads have no identity beyond their fields: two ads with the same
/// redirect URL and text are interchangeable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ad {
    pub redirect_url: String,
    pub text: String,
}

impl Ad {
    pub fn new(redirect_url: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            redirect_url: redirect_url.into(),
            text: text.into(),
        }
    }
}

/// A category key used for targeted lookup.
///
/// Any string is a legal key. Unknown keys simply match nothing.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    pub fn new(key: impl Into<String>) -> Self {
        Category(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Category {
    fn from(key: &str) -> Self {
        Category(key.to_string())
    }
}

impl From<String> for Category {
    fn from(key: String) -> Self {
        Category(key)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
