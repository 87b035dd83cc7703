//! Standalone HTTP server for an application host.

use std::sync::Arc;

use tokio::net::TcpListener;

use crate::app::DashApp;
use crate::config::Config;
use crate::error::ServerError;

/// Bind the configured address and serve `app` until the process ends
pub async fn serve(app: Arc<DashApp>, config: &Config) -> Result<(), ServerError> {
    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    serve_on(listener, app).await
}

/// Serve `app` on an already bound listener
pub async fn serve_on(listener: TcpListener, app: Arc<DashApp>) -> Result<(), ServerError> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(app = %app.name(), "Listening on http://{}", addr);
    }

    axum::serve(listener, app.router())
        .await
        .map_err(ServerError::Serve)
}
