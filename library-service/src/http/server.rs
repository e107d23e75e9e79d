use std::{net::SocketAddr, sync::Arc};

use hyper::{server::conn::http1, service::service_fn};
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;
use tracing::{debug, info, warn};

use crate::{error::AppResult, http::router::Router};

/// Accepts connections on `address` until Ctrl-C is received.
///
/// Connections already accepted keep running on their own tasks.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the shutdown signal
/// cannot be installed.
pub async fn serve(address: SocketAddr, router: Arc<Router>) -> AppResult<()> {
    let listener = TcpListener::bind(address).await?;
    info!("HTTP server started at {}", listener.local_addr()?);

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            accepted = listener.accept() => {
                let (stream, remote_address) = match accepted {
                    Ok(accepted) => accepted,
                    Err(err) => {
                        warn!(error = %err, "Failed to accept connection");
                        continue;
                    }
                };

                let router = Arc::clone(&router);
                tokio::spawn(async move {
                    let service = service_fn(move |request| {
                        let router = Arc::clone(&router);
                        async move { router.handle(request).await }
                    });
                    if let Err(err) = http1::Builder::new()
                        .serve_connection(TokioIo::new(stream), service)
                        .await
                    {
                        debug!(remote_address = %remote_address, error = %err, "Connection failed");
                    }
                });
            }
            signal = &mut shutdown => {
                signal?;
                info!("Shutting down HTTP server");
                break;
            }
        }
    }

    Ok(())
}
