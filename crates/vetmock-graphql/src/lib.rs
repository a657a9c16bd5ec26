pub mod schema;
pub mod serve;

pub use schema::{QueryRoot, VetSchema, build_schema};
pub use serve::{router, serve};
