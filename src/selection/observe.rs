//! Minimal observability seam.
//!
//! Selection code reports named attributes and events through [`Observer`]
//! and never depends on a concrete tracing library. The service layer
//! supplies an adapter; tests use [`RecordingObserver`].

use std::sync::Mutex;

pub const ATTR_CONTEXT_KEYS: &str = "app.ads.contextKeys";
pub const ATTR_CONTEXT_KEYS_COUNT: &str = "app.ads.contextKeys.count";
pub const ATTR_CATEGORY: &str = "app.ads.category";
pub const ATTR_AD_COUNT: &str = "app.ads.count";
pub const ATTR_REQUEST_TYPE: &str = "app.ads.ad_request_type";
pub const ATTR_RESPONSE_TYPE: &str = "app.ads.ad_response_type";
pub const ATTR_EXCEPTION_MESSAGE: &str = "exception.message";

pub const EVENT_LOOKUP: &str = "getAdsByCategory";
pub const EVENT_RANDOM: &str = "getRandomAds";
pub const EVENT_ERROR: &str = "Error";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    Str(String),
    Int(i64),
}

impl From<&str> for AttributeValue {
    fn from(v: &str) -> Self {
        AttributeValue::Str(v.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(v: String) -> Self {
        AttributeValue::Str(v)
    }
}

impl From<usize> for AttributeValue {
    fn from(v: usize) -> Self {
        AttributeValue::Int(i64::try_from(v).unwrap_or(i64::MAX))
    }
}

impl std::fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttributeValue::Str(s) => f.write_str(s),
            AttributeValue::Int(n) => write!(f, "{n}"),
        }
    }
}

/// Receives attributes for the current unit of work.
///
/// Setting a key twice overwrites it, like a span attribute.
pub trait Observer {
    fn record_attribute(&self, key: &str, value: AttributeValue);

    fn record_event(&self, name: &str, attributes: &[(&str, AttributeValue)]);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl Observer for NoopObserver {
    fn record_attribute(&self, _key: &str, _value: AttributeValue) {}

    fn record_event(&self, _name: &str, _attributes: &[(&str, AttributeValue)]) {}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedEvent {
    pub name: String,
    pub attributes: Vec<(String, AttributeValue)>,
}

impl RecordedEvent {
    pub fn attribute(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }
}

/// Captures everything it is given, in order.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    attributes: Mutex<Vec<(String, AttributeValue)>>,
    events: Mutex<Vec<RecordedEvent>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest value recorded under `key`.
    pub fn attribute(&self, key: &str) -> Option<AttributeValue> {
        let attributes = self.attributes.lock().unwrap_or_else(|p| p.into_inner());
        attributes
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    }

    /// How many times `key` was written.
    pub fn attribute_writes(&self, key: &str) -> usize {
        let attributes = self.attributes.lock().unwrap_or_else(|p| p.into_inner());
        attributes.iter().filter(|(k, _)| k == key).count()
    }

    pub fn events(&self) -> Vec<RecordedEvent> {
        self.events.lock().unwrap_or_else(|p| p.into_inner()).clone()
    }

    pub fn events_named(&self, name: &str) -> Vec<RecordedEvent> {
        self.events().into_iter().filter(|e| e.name == name).collect()
    }
}

impl Observer for RecordingObserver {
    fn record_attribute(&self, key: &str, value: AttributeValue) {
        self.attributes
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .push((key.to_string(), value));
    }

    fn record_event(&self, name: &str, attributes: &[(&str, AttributeValue)]) {
        let event = RecordedEvent {
            name: name.to_string(),
            attributes: attributes
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        };
        self.events.lock().unwrap_or_else(|p| p.into_inner()).push(event);
    }
}
