pub mod error;
pub mod routes;
pub mod serve;

pub use error::ApiError;
pub use routes::router;
pub use serve::serve;
