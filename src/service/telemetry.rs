use tracing::{field, info, info_span, warn, Span};
use tracing_subscriber::EnvFilter;

use crate::selection::observe::EVENT_ERROR;
use crate::selection::{AttributeValue, Observer};

pub const DEFAULT_LOG_FILTER: &str = "ad_core=info,adservice=info";

/// `RUST_LOG`-style directives, or the default filter when absent or invalid.
pub fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Writes observer attributes as fields of one `getAds` span and events as
/// `tracing` events inside it.
pub struct TracingObserver {
    span: Span,
}

impl TracingObserver {
    /// Span for one GetAds call with every attribute field declared up front.
    pub fn get_ads() -> Self {
        let span = info_span!(
            "getAds",
            app.ads.contextKeys = field::Empty,
            app.ads.contextKeys.count = field::Empty,
            app.ads.count = field::Empty,
            app.ads.ad_request_type = field::Empty,
            app.ads.ad_response_type = field::Empty,
        );
        Self { span }
    }

    pub fn span(&self) -> &Span {
        &self.span
    }
}

impl Observer for TracingObserver {
    fn record_attribute(&self, key: &str, value: AttributeValue) {
        // Keys not declared on the span are dropped by `tracing`.
        match value {
            AttributeValue::Str(s) => self.span.record(key, s.as_str()),
            AttributeValue::Int(n) => self.span.record(key, n),
        };
    }

    fn record_event(&self, name: &str, attributes: &[(&str, AttributeValue)]) {
        let rendered: Vec<String> = attributes.iter().map(|(k, v)| format!("{k}={v}")).collect();
        let rendered = rendered.join(" ");
        if name == EVENT_ERROR {
            warn!(parent: &self.span, event = name, attributes = %rendered, "span event");
        } else {
            info!(parent: &self.span, event = name, attributes = %rendered, "span event");
        }
    }
}
