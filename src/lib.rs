pub mod config;
pub mod decode;
pub mod error;
pub mod resource;
pub mod schema;

// Re-export commonly used types
pub use config::{Config, PaginationConfig, ServerConfig};
pub use error::{GraphqlResourceError, Result};
pub use resource::{Options, Resource};
pub use schema::{add_resource_to_schema_config, InputField, OutputField, OutputType, Page, SchemaConfig};
