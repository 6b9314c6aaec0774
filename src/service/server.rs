use std::future::Future;
use std::io;
use std::sync::Arc;

use thiserror::Error;
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Server;
use tonic_health::ServingStatus;
use tracing::info;

use super::config::ServiceConfig;
use super::grpc::{AdServiceServer, GrpcAdService};
use super::AdService;
use crate::selection::RandomSource;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Transport error: {0}")]
    Transport(#[from] tonic::transport::Error),
}

pub async fn bind(config: &ServiceConfig) -> Result<TcpListener, TransportError> {
    Ok(TcpListener::bind(config.bind_addr()).await?)
}

/// Serve GetAds and gRPC health on `listener` until `shutdown` resolves.
///
/// Health reports SERVING while the server accepts calls and NOT_SERVING once
/// shutdown begins. In-flight calls are drained before this returns.
pub async fn serve_with_shutdown<R, F>(
    listener: TcpListener,
    service: AdService<R>,
    shutdown: F,
) -> Result<(), TransportError>
where
    R: RandomSource + 'static,
    F: Future<Output = ()> + Send,
{
    let port = listener.local_addr()?.port();
    let (mut health, health_service) = tonic_health::server::health_reporter();
    health.set_serving::<AdServiceServer<GrpcAdService<R>>>().await;
    health.set_service_status("", ServingStatus::Serving).await;

    let rpc = AdServiceServer::new(GrpcAdService::new(Arc::new(service)));
    info!("Ad Service started, listening on {port}");

    let mut stopping = health.clone();
    Server::builder()
        .add_service(health_service)
        .add_service(rpc)
        .serve_with_incoming_shutdown(TcpListenerStream::new(listener), async move {
            shutdown.await;
            info!("shutting down gRPC ads server");
            stopping.set_service_status("", ServingStatus::NotServing).await;
            stopping.set_not_serving::<AdServiceServer<GrpcAdService<R>>>().await;
        })
        .await?;

    info!("server shut down");
    Ok(())
}
