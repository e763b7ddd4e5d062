pub mod books;
pub mod sdl;
pub mod serve;

use crate::cli::books::BooksResource;
use graphql_resource::error::Result;
use graphql_resource::{add_resource_to_schema_config, Options, PaginationConfig, SchemaConfig};
use std::sync::Arc;

/// Build the demo schema configuration with the in-memory book resource
pub fn demo_schema_config(pagination: PaginationConfig) -> Result<SchemaConfig> {
    let mut schema_config = SchemaConfig::default();

    let options = Options::new(Arc::new(BooksResource::seeded()), BooksResource::output_type())
        .create_input_fields(BooksResource::create_input_fields())
        .update_input_fields(BooksResource::update_input_fields())
        .pagination(pagination);

    add_resource_to_schema_config(&mut schema_config, &options)?;

    Ok(schema_config)
}
