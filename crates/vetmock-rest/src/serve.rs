use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use vetmock_fixtures::FixtureRepository;

use crate::routes::router;

/// Bind and serve the REST facade until the task is cancelled.
pub async fn serve(addr: SocketAddr, repo: Arc<FixtureRepository>) -> io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    let local = listener.local_addr()?;
    tracing::info!(addr = %local, "REST facade listening");
    tracing::debug!("endpoints: /api/clients /api/pets /api/vets /api/appointments /api/health");
    axum::serve(listener, router(repo)).await
}
