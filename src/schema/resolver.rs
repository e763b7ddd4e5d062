/// Resource field factory
///
/// Turns one `Options` value into the five CRUD fields of a resource:
/// - `{type}List(offset, limit)` and `{type}(id)` on the query object
/// - `create{Type}(input)`, `update{Type}(id, input)`, `delete{Type}(id)` on
///   the mutation object
///
/// Resolvers only extract arguments and call the resource. Inputs are passed
/// through undecoded and resource errors are returned unchanged.

use crate::error::{GraphqlResourceError, Result};
use crate::resource::{Options, Resource};
use crate::schema::naming::{is_valid_type_name, ResourceNames};
use crate::schema::pagination::{paginated, Page, PageFetcher, PaginatedField};
use crate::schema::schema_config::SchemaConfig;
use crate::schema::types::build_input_object;

use async_graphql::dynamic::{Field, FieldFuture, FieldValue, InputObject, InputValue, Object, ResolverContext, TypeRef};
use async_graphql::{Context, Value};
use async_trait::async_trait;
use std::sync::Arc;

/// Register the five CRUD fields of a resource, plus the types they need
///
/// Fails without touching `config` if the type name is invalid, an input field
/// list is empty, or any generated field or type name is already taken.
pub fn add_resource_to_schema_config(config: &mut SchemaConfig, opts: &Options) -> Result<()> {
    let type_name = &opts.output.name;
    if !is_valid_type_name(type_name) {
        return Err(GraphqlResourceError::InvalidTypeName(type_name.clone()));
    }

    let factory = ResourceFactory::new(opts.clone());
    let names = factory.names().clone();

    for (kind, fields) in [
        ("Create", &opts.create_input_fields),
        ("Update", &opts.update_input_fields),
    ] {
        if fields.is_empty() {
            return Err(GraphqlResourceError::SchemaGeneration(format!(
                "{} input for '{}' declares no fields",
                kind, type_name
            )));
        }
    }

    config.ensure_available(
        &names.query_fields(),
        &names.mutation_fields(),
        &[
            names.type_name.as_str(),
            names.list_type.as_str(),
            names.create_input_type.as_str(),
            names.update_input_type.as_str(),
        ],
    )?;

    tracing::info!(
        "Registering resource {} ({}, {}, {}, {}, {})",
        names.type_name,
        names.list_field,
        names.show_field,
        names.create_field,
        names.update_field,
        names.delete_field
    );

    let (list_field, list_object) = factory.make_list();

    config.register_type(&names.type_name, opts.output.build_object())?;
    config.register_type(&names.list_type, list_object)?;
    config.register_type(&names.create_input_type, factory.make_create_input())?;
    config.register_type(&names.update_input_type, factory.make_update_input())?;

    config.add_query_field(&names.list_field, list_field)?;
    config.add_query_field(&names.show_field, factory.make_show())?;
    config.add_mutation_field(&names.create_field, factory.make_create())?;
    config.add_mutation_field(&names.update_field, factory.make_update())?;
    config.add_mutation_field(&names.delete_field, factory.make_delete())?;

    Ok(())
}

/// Builds the CRUD fields for one resource
pub struct ResourceFactory {
    opts: Options,
    names: ResourceNames,
}

/// Adapts a resource's `list` operation to the pagination fetcher
struct ListFetcher(Arc<dyn Resource>);

#[async_trait]
impl PageFetcher for ListFetcher {
    async fn fetch(&self, ctx: &Context<'_>, page: Page) -> async_graphql::Result<(Vec<Value>, usize)> {
        self.0.list(ctx, page).await
    }
}

impl ResourceFactory {
    pub fn new(opts: Options) -> Self {
        let names = ResourceNames::derive(&opts.output.name);
        Self { opts, names }
    }

    pub fn names(&self) -> &ResourceNames {
        &self.names
    }

    /// Build the `{type}List` field and its `{Type}List` wrapper object
    pub fn make_list(&self) -> (Field, Object) {
        paginated(PaginatedField {
            field_name: self.names.list_field.clone(),
            list_type: self.names.list_type.clone(),
            item_type: self.names.type_name.clone(),
            settings: self.opts.pagination,
            fetcher: Arc::new(ListFetcher(self.opts.resource.clone())),
        })
    }

    pub fn make_show(&self) -> Field {
        let resource = self.opts.resource.clone();
        let field_name = self.names.show_field.clone();

        Field::new(
            self.names.show_field.clone(),
            TypeRef::named(&self.names.type_name),
            move |ctx: ResolverContext| {
                let resource = resource.clone();
                let field_name = field_name.clone();

                FieldFuture::new(async move {
                    let id = id_arg(&ctx)?;
                    tracing::debug!("Resolving {} (id={})", field_name, id);

                    let record = resource.show(ctx.ctx, &id).await?;
                    Ok(record.map(FieldValue::owned_any))
                })
            },
        )
        .argument(id_input())
    }

    pub fn make_create(&self) -> Field {
        let resource = self.opts.resource.clone();
        let field_name = self.names.create_field.clone();

        Field::new(
            self.names.create_field.clone(),
            TypeRef::named(&self.names.type_name),
            move |ctx: ResolverContext| {
                let resource = resource.clone();
                let field_name = field_name.clone();

                FieldFuture::new(async move {
                    let input = input_arg(&ctx)?;
                    tracing::debug!("Resolving {}", field_name);

                    let record = resource.create(ctx.ctx, input).await?;
                    Ok(record.map(FieldValue::owned_any))
                })
            },
        )
        .argument(InputValue::new(
            "input",
            TypeRef::named_nn(&self.names.create_input_type),
        ))
        .description(format!("Create {}", self.names.type_name))
    }

    pub fn make_update(&self) -> Field {
        let resource = self.opts.resource.clone();
        let field_name = self.names.update_field.clone();

        Field::new(
            self.names.update_field.clone(),
            TypeRef::named(&self.names.type_name),
            move |ctx: ResolverContext| {
                let resource = resource.clone();
                let field_name = field_name.clone();

                FieldFuture::new(async move {
                    let id = id_arg(&ctx)?;
                    let input = input_arg(&ctx)?;
                    tracing::debug!("Resolving {} (id={})", field_name, id);

                    let record = resource.update(ctx.ctx, &id, input).await?;
                    Ok(record.map(FieldValue::owned_any))
                })
            },
        )
        .argument(id_input())
        .argument(InputValue::new(
            "input",
            TypeRef::named_nn(&self.names.update_input_type),
        ))
        .description(format!("Update {} by id", self.names.type_name))
    }

    pub fn make_delete(&self) -> Field {
        let resource = self.opts.resource.clone();
        let field_name = self.names.delete_field.clone();

        Field::new(
            self.names.delete_field.clone(),
            TypeRef::named(&self.names.type_name),
            move |ctx: ResolverContext| {
                let resource = resource.clone();
                let field_name = field_name.clone();

                FieldFuture::new(async move {
                    let id = id_arg(&ctx)?;
                    tracing::debug!("Resolving {} (id={})", field_name, id);

                    let record = resource.destroy(ctx.ctx, &id).await?;
                    Ok(record.map(FieldValue::owned_any))
                })
            },
        )
        .argument(id_input())
        .description(format!("Delete {} by id", self.names.type_name))
    }

    pub fn make_create_input(&self) -> InputObject {
        build_input_object(&self.names.create_input_type, &self.opts.create_input_fields)
    }

    pub fn make_update_input(&self) -> InputObject {
        build_input_object(&self.names.update_input_type, &self.opts.update_input_fields)
    }
}

fn id_input() -> InputValue {
    InputValue::new("id", TypeRef::named_nn(TypeRef::STRING))
}

// `id` is declared `String!`, so the engine rejects requests without it
// before any resolver runs.
fn id_arg(ctx: &ResolverContext<'_>) -> async_graphql::Result<String> {
    Ok(ctx.args.try_get("id")?.string()?.to_string())
}

fn input_arg(ctx: &ResolverContext<'_>) -> async_graphql::Result<Value> {
    Ok(ctx.args.try_get("input")?.as_value().clone())
}
