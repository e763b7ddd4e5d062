/// GraphQL schema generation for resources
///
/// This module turns a resource description into CRUD query and mutation
/// fields, including name derivation, pagination, custom scalars and the
/// mutable schema configuration the fields are registered on.

mod naming;
pub mod pagination;
mod resolver;
mod scalars;
mod schema_config;
mod types;

pub use naming::{is_valid_type_name, title_case, ResourceNames};
pub use pagination::{paginated, Page, PageFetcher, PaginatedField};
pub use resolver::{add_resource_to_schema_config, ResourceFactory};
pub use scalars::{register_custom_scalars, DATE, DATE_TIME};
pub use schema_config::SchemaConfig;
pub use types::{build_input_object, InputField, OutputField, OutputType};
