use std::sync::Arc;

use tonic::{Request, Response, Status};
use tracing::{info, warn};

use super::telemetry::TracingObserver;
use super::{format_keys, AdService};
use crate::selection::{RandomSource, ThreadRandom};
use crate::types::{Ad, AdRequest, AdResponse, Category};

pub mod proto {
    tonic::include_proto!("hipstershop");
}

use proto::ad_service_server::AdService as AdServiceRpc;
pub use proto::ad_service_server::AdServiceServer;

impl From<proto::AdRequest> for AdRequest {
    fn from(request: proto::AdRequest) -> Self {
        AdRequest {
            context_keys: request.context_keys.into_iter().map(Category::from).collect(),
        }
    }
}

impl From<Ad> for proto::Ad {
    fn from(ad: Ad) -> Self {
        proto::Ad {
            redirect_url: ad.redirect_url,
            text: ad.text,
        }
    }
}

impl From<AdResponse> for proto::AdResponse {
    fn from(response: AdResponse) -> Self {
        proto::AdResponse {
            ads: response.ads.into_iter().map(proto::Ad::from).collect(),
        }
    }
}

/// gRPC adapter over the synchronous [`AdService`].
pub struct GrpcAdService<R = ThreadRandom> {
    service: Arc<AdService<R>>,
}

impl<R> GrpcAdService<R> {
    pub fn new(service: Arc<AdService<R>>) -> Self {
        Self { service }
    }
}

#[tonic::async_trait]
impl<R> AdServiceRpc for GrpcAdService<R>
where
    R: RandomSource + 'static,
{
    async fn get_ads(
        &self,
        request: Request<proto::AdRequest>,
    ) -> Result<Response<proto::AdResponse>, Status> {
        let request = AdRequest::from(request.into_inner());
        let observer = TracingObserver::get_ads();
        observer.span().in_scope(|| {
            info!(
                "received ad request (context_words={})",
                format_keys(&request.context_keys)
            );
        });

        match self.service.get_ads(&request, &observer) {
            Ok(response) => Ok(Response::new(response.into())),
            Err(err) => {
                observer.span().in_scope(|| warn!("GetAds Failed with status {err}"));
                Err(Status::internal(err.to_string()))
            }
        }
    }
}
