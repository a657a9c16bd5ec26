use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::Router;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use tokio::net::TcpListener;

use vetmock_fixtures::FixtureRepository;

use crate::schema::{VetSchema, build_schema};

/// `POST /graphql` executes queries; `GET /graphql` serves the playground.
pub fn router(schema: VetSchema) -> Router {
    Router::new().route("/graphql", get(graphiql).post_service(GraphQL::new(schema)))
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

/// Bind and serve the GraphQL facade until the task is cancelled.
pub async fn serve(addr: SocketAddr, repo: Arc<FixtureRepository>) -> io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    let local = listener.local_addr()?;
    tracing::info!(addr = %local, "GraphQL facade listening");
    tracing::debug!("queries: clients pets vets appointments(date, vetId)");
    axum::serve(listener, router(build_schema(repo))).await
}
