/// Resource capability and registration options
///
/// A `Resource` is the caller's implementation of the five CRUD operations for
/// one entity type. The generated resolvers forward their arguments to it and
/// return whatever it produces, errors included.

use crate::config::PaginationConfig;
use crate::schema::pagination::Page;
use crate::schema::{InputField, OutputType};

use async_graphql::{Context, Value};
use async_trait::async_trait;
use std::sync::Arc;

/// CRUD operations backing the generated fields of one entity type
///
/// Records are `Value` objects whose keys match the output type's fields.
/// Inputs arrive undecoded; use [`crate::decode::decode_input`] to turn them
/// into typed structures.
#[async_trait]
pub trait Resource: Send + Sync {
    /// Return one page of records and the total number of records
    async fn list(&self, ctx: &Context<'_>, page: Page) -> async_graphql::Result<(Vec<Value>, usize)>;

    async fn show(&self, ctx: &Context<'_>, id: &str) -> async_graphql::Result<Option<Value>>;

    async fn create(&self, ctx: &Context<'_>, input: Value) -> async_graphql::Result<Option<Value>>;

    async fn update(
        &self,
        ctx: &Context<'_>,
        id: &str,
        input: Value,
    ) -> async_graphql::Result<Option<Value>>;

    async fn destroy(&self, ctx: &Context<'_>, id: &str) -> async_graphql::Result<Option<Value>>;
}

/// Everything needed to register one resource into a schema
#[derive(Clone)]
pub struct Options {
    pub resource: Arc<dyn Resource>,
    pub output: OutputType,
    pub create_input_fields: Vec<InputField>,
    pub update_input_fields: Vec<InputField>,
    pub pagination: PaginationConfig,
}

impl Options {
    pub fn new(resource: Arc<dyn Resource>, output: OutputType) -> Self {
        Self {
            resource,
            output,
            create_input_fields: Vec::new(),
            update_input_fields: Vec::new(),
            pagination: PaginationConfig::default(),
        }
    }

    pub fn create_input_fields(mut self, fields: Vec<InputField>) -> Self {
        self.create_input_fields = fields;
        self
    }

    pub fn update_input_fields(mut self, fields: Vec<InputField>) -> Self {
        self.update_input_fields = fields;
        self
    }

    pub fn pagination(mut self, pagination: PaginationConfig) -> Self {
        self.pagination = pagination;
        self
    }
}
