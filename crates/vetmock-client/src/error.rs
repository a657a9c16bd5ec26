use thiserror::Error;

/// Adapter failures, worded the way the dashboard presents them.
///
/// `Fetch` carries the resource noun so the rendered message is exactly
/// `Error fetching <resource>`; GraphQL logical errors surface the server's
/// first error message verbatim.
#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("Error fetching {0}")]
    Fetch(&'static str),
    #[error("GraphQL request failed: {0}")]
    GraphQlStatus(u16),
    #[error("{0}")]
    GraphQl(String),
    #[error("unexpected response shape: {0}")]
    Decode(#[from] serde_json::Error),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
