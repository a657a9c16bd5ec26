pub mod api;
pub mod error;
pub mod graphql;
pub mod rest;

pub use api::VetApi;
pub use error::AdapterError;
pub use graphql::GraphqlApi;
pub use rest::RestApi;
