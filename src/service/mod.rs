pub mod config;
pub mod grpc;
pub mod server;
pub mod telemetry;

use std::sync::Arc;

use crate::catalog::CatalogIndex;
use crate::selection::observe::{
    ATTR_AD_COUNT, ATTR_CONTEXT_KEYS, ATTR_CONTEXT_KEYS_COUNT, ATTR_EXCEPTION_MESSAGE,
    ATTR_REQUEST_TYPE, ATTR_RESPONSE_TYPE, EVENT_ERROR,
};
use crate::selection::{AdSelector, Observer, RandomSource, Selection, SelectionError, ThreadRandom};
use crate::types::{AdRequest, AdResponse, Category, SelectionPath};
pub use config::{ConfigError, ServiceConfig};
pub use grpc::GrpcAdService;
pub use server::{bind, serve_with_shutdown, TransportError};
pub use telemetry::{log_filter, TracingObserver};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    #[error("service failure: {0}")]
    Failure(#[from] SelectionError),
}

/// The GetAds boundary the transport calls into.
pub struct AdService<R = ThreadRandom> {
    selector: AdSelector<R>,
}

impl AdService<ThreadRandom> {
    pub fn new(catalog: Arc<CatalogIndex>) -> Self {
        Self {
            selector: AdSelector::new(catalog),
        }
    }
}

impl<R> AdService<R>
where
    R: RandomSource,
{
    pub fn with_selector(selector: AdSelector<R>) -> Self {
        Self { selector }
    }

    pub fn catalog(&self) -> &CatalogIndex {
        self.selector.catalog()
    }

    /// Serve one request.
    ///
    /// Targeted requests go through category lookup; untargeted requests and
    /// targeted requests with no matches both end at the random fallback.
    pub fn get_ads(
        &self,
        request: &AdRequest,
        observer: &dyn Observer,
    ) -> Result<AdResponse, ServiceError> {
        let request_type = if request.is_targeted() {
            "TARGETED"
        } else {
            "NOT_TARGETED"
        };
        let keys = format_keys(&request.context_keys);
        observer.record_attribute(ATTR_CONTEXT_KEYS, keys.into());
        observer.record_attribute(ATTR_REQUEST_TYPE, request_type.into());

        match self.select(request, observer) {
            Ok(Selection { ads, path }) => {
                observer.record_attribute(ATTR_RESPONSE_TYPE, path.response_type().into());
                Ok(AdResponse { ads })
            }
            Err(err) => {
                let message = err.to_string().into();
                observer.record_event(EVENT_ERROR, &[(ATTR_EXCEPTION_MESSAGE, message)]);
                Err(ServiceError::Failure(err))
            }
        }
    }

    // The selector reports key and ad counts for targeted requests; this
    // reports them for the untargeted path so each is written once.
    fn select(
        &self,
        request: &AdRequest,
        observer: &dyn Observer,
    ) -> Result<Selection, SelectionError> {
        if request.is_targeted() {
            let selection = self.selector.select_by_categories(&request.context_keys, observer)?;
            if !selection.ads.is_empty() {
                return Ok(selection);
            }
        } else {
            observer.record_attribute(ATTR_CONTEXT_KEYS_COUNT, 0usize.into());
        }

        let selection = Selection {
            ads: self.selector.select_random(observer)?,
            path: SelectionPath::RandomFallback,
        };
        observer.record_attribute(ATTR_AD_COUNT, selection.ads.len().into());
        Ok(selection)
    }
}

/// Render keys as `[a, b]`, the format existing dashboards expect.
pub fn format_keys(keys: &[Category]) -> String {
    let joined: Vec<&str> = keys.iter().map(Category::as_str).collect();
    format!("[{}]", joined.join(", "))
}
