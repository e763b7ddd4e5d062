/// Mutable schema configuration
///
/// Collects query fields, mutation fields and named types before the dynamic
/// schema is built. Registration happens once, up front; the finished
/// `Schema` is immutable and shared across requests.

use crate::error::{GraphqlResourceError, Result};
use crate::schema::scalars::{register_custom_scalars, DATE, DATE_TIME};

use async_graphql::dynamic::{Field, Object, Schema, SchemaBuilder, Type, TypeRef};
use indexmap::IndexMap;

const QUERY: &str = "query";
const MUTATION: &str = "mutation";

/// Type names every schema already defines
const RESERVED_TYPES: &[&str] = &[
    TypeRef::STRING,
    TypeRef::INT,
    TypeRef::FLOAT,
    TypeRef::BOOLEAN,
    TypeRef::ID,
    DATE,
    DATE_TIME,
];

pub struct SchemaConfig {
    query_name: String,
    mutation_name: String,
    query_fields: IndexMap<String, Field>,
    mutation_fields: IndexMap<String, Field>,
    types: IndexMap<String, Type>,
}

impl SchemaConfig {
    /// Create an empty configuration with the given root object names
    pub fn new(query_name: impl Into<String>, mutation_name: impl Into<String>) -> Self {
        Self {
            query_name: query_name.into(),
            mutation_name: mutation_name.into(),
            query_fields: IndexMap::new(),
            mutation_fields: IndexMap::new(),
            types: IndexMap::new(),
        }
    }

    pub fn add_query_field(&mut self, name: impl Into<String>, field: Field) -> Result<()> {
        insert_field(&mut self.query_fields, QUERY, name.into(), field)
    }

    pub fn add_mutation_field(&mut self, name: impl Into<String>, field: Field) -> Result<()> {
        insert_field(&mut self.mutation_fields, MUTATION, name.into(), field)
    }

    /// Register a named type (object, input object, scalar, ...)
    pub fn register_type(&mut self, name: impl Into<String>, ty: impl Into<Type>) -> Result<()> {
        let name = name.into();
        if self.is_type_taken(&name) {
            return Err(GraphqlResourceError::DuplicateType(name));
        }
        self.types.insert(name, ty.into());
        Ok(())
    }

    /// Check that none of the given names are taken yet
    pub fn ensure_available(
        &self,
        query_fields: &[&str],
        mutation_fields: &[&str],
        types: &[&str],
    ) -> Result<()> {
        for name in query_fields {
            if self.query_fields.contains_key(*name) {
                return Err(GraphqlResourceError::DuplicateField {
                    section: QUERY,
                    name: name.to_string(),
                });
            }
        }

        for name in mutation_fields {
            if self.mutation_fields.contains_key(*name) {
                return Err(GraphqlResourceError::DuplicateField {
                    section: MUTATION,
                    name: name.to_string(),
                });
            }
        }

        for name in types {
            if self.is_type_taken(name) {
                return Err(GraphqlResourceError::DuplicateType(name.to_string()));
            }
        }

        Ok(())
    }

    fn is_type_taken(&self, name: &str) -> bool {
        self.types.contains_key(name)
            || name == self.query_name
            || name == self.mutation_name
            || RESERVED_TYPES.contains(&name)
    }

    pub fn query_field_names(&self) -> Vec<&str> {
        self.query_fields.keys().map(String::as_str).collect()
    }

    pub fn mutation_field_names(&self) -> Vec<&str> {
        self.mutation_fields.keys().map(String::as_str).collect()
    }

    pub fn type_names(&self) -> Vec<&str> {
        self.types.keys().map(String::as_str).collect()
    }

    /// Turn the configuration into a dynamic schema builder
    ///
    /// Use this instead of [`SchemaConfig::finish`] to attach schema data or
    /// further types before building. The mutation object is only added when
    /// it has fields.
    pub fn into_builder(self) -> SchemaBuilder {
        let has_mutation = !self.mutation_fields.is_empty();

        let query = self
            .query_fields
            .into_values()
            .fold(Object::new(&self.query_name), |object, field| object.field(field));

        let mut schema_builder = Schema::build(
            &self.query_name,
            has_mutation.then_some(self.mutation_name.as_str()),
            None,
        );

        for scalar in register_custom_scalars() {
            schema_builder = schema_builder.register(scalar);
        }

        for (_, ty) in self.types {
            schema_builder = schema_builder.register(ty);
        }

        schema_builder = schema_builder.register(query);

        if has_mutation {
            let mutation = self
                .mutation_fields
                .into_values()
                .fold(Object::new(&self.mutation_name), |object, field| object.field(field));
            schema_builder = schema_builder.register(mutation);
        }

        schema_builder
    }

    /// Build the dynamic schema
    pub fn finish(self) -> Result<Schema> {
        self.into_builder().finish().map_err(|e| {
            GraphqlResourceError::SchemaGeneration(format!("Failed to build schema: {}", e))
        })
    }
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self::new("Query", "Mutation")
    }
}

fn insert_field(
    fields: &mut IndexMap<String, Field>,
    section: &'static str,
    name: String,
    field: Field,
) -> Result<()> {
    if fields.contains_key(&name) {
        return Err(GraphqlResourceError::DuplicateField { section, name });
    }
    fields.insert(name, field);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_graphql::dynamic::{FieldFuture, FieldValue};
    use async_graphql::{Request, Value};

    fn hello_field() -> Field {
        Field::new("hello", TypeRef::named_nn(TypeRef::STRING), |_| {
            FieldFuture::new(async {
                Ok(Some(FieldValue::value(Value::String("world".to_string()))))
            })
        })
    }

    #[test]
    fn test_duplicate_query_field() {
        let mut config = SchemaConfig::default();
        config.add_query_field("hello", hello_field()).unwrap();

        let err = config.add_query_field("hello", hello_field()).unwrap_err();
        assert!(matches!(
            err,
            GraphqlResourceError::DuplicateField { section: "query", .. }
        ));
    }

    #[test]
    fn test_same_name_in_different_sections() {
        let mut config = SchemaConfig::default();
        config.add_query_field("hello", hello_field()).unwrap();
        config.add_mutation_field("hello", hello_field()).unwrap();

        assert_eq!(config.query_field_names(), vec!["hello"]);
        assert_eq!(config.mutation_field_names(), vec!["hello"]);
    }

    #[test]
    fn test_duplicate_type() {
        let mut config = SchemaConfig::default();
        config.register_type("Thing", Object::new("Thing")).unwrap();

        let err = config.register_type("Thing", Object::new("Thing")).unwrap_err();
        assert!(matches!(err, GraphqlResourceError::DuplicateType(_)));
    }

    #[test]
    fn test_ensure_available_rejects_root_names() {
        let config = SchemaConfig::default();

        assert!(config.ensure_available(&[], &[], &["Query"]).is_err());
        assert!(config.ensure_available(&[], &[], &["Mutation"]).is_err());
        assert!(config.ensure_available(&["a"], &["b"], &["C"]).is_ok());
    }

    #[test]
    fn test_builtin_and_custom_scalar_names_reserved() {
        let mut config = SchemaConfig::default();

        for name in ["Date", "DateTime", "String", "Int", "Float", "Boolean", "ID"] {
            let err = config.ensure_available(&[], &[], &[name]).unwrap_err();
            assert!(matches!(err, GraphqlResourceError::DuplicateType(_)), "{}", name);
        }

        let err = config.register_type("Date", Object::new("Date")).unwrap_err();
        assert!(matches!(err, GraphqlResourceError::DuplicateType(_)));
        assert!(config.type_names().is_empty());
    }

    #[test]
    fn test_finish_without_mutations() {
        let mut config = SchemaConfig::default();
        config.add_query_field("hello", hello_field()).unwrap();

        let schema = config.finish().expect("schema should build");
        let response = tokio_test::block_on(schema.execute(Request::new("{ hello }")));

        assert!(response.errors.is_empty(), "errors: {:?}", response.errors);
        let data = response.data.into_json().unwrap();
        assert_eq!(data["hello"], "world");
    }
}
