/// Output and input type descriptors
///
/// Resources hand records back as `async_graphql::Value` objects. The output
/// type describes which keys of those records are exposed and with which
/// GraphQL type; input fields describe the accepted create/update arguments.

use async_graphql::dynamic::{Field, FieldFuture, FieldValue, InputObject, InputValue, Object, TypeRef};
use async_graphql::Value;

/// A field exposed on a resource's output object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputField {
    pub name: String,
    pub ty: TypeRef,
    pub description: Option<String>,
}

impl OutputField {
    pub fn new(name: impl Into<String>, ty: impl Into<TypeRef>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            description: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// The GraphQL object type a resource resolves to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputType {
    pub name: String,
    pub description: Option<String>,
    pub fields: Vec<OutputField>,
}

impl OutputType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            fields: Vec::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn field(mut self, field: OutputField) -> Self {
        self.fields.push(field);
        self
    }

    /// Build the dynamic object type
    ///
    /// Each field reads the matching key from the parent record. Keys the
    /// record does not carry resolve to null. The same object can back a
    /// nested field, whose parent then arrives as a plain value.
    pub fn build_object(&self) -> Object {
        let mut object = Object::new(&self.name);

        if let Some(desc) = &self.description {
            object = object.description(desc);
        }

        for field in &self.fields {
            let key = field.name.clone();

            let mut graphql_field = Field::new(&field.name, field.ty.clone(), move |ctx| {
                let key = key.clone();
                FieldFuture::new(async move {
                    let parent = parent_record(ctx.parent_value)?;

                    if let Value::Object(obj) = parent {
                        if let Some(value) = obj.get(key.as_str()) {
                            return Ok(Some(FieldValue::value(value.clone())));
                        }
                    }

                    Ok(Some(FieldValue::NULL))
                })
            });

            if let Some(desc) = &field.description {
                graphql_field = graphql_field.description(desc);
            }

            object = object.field(graphql_field);
        }

        object
    }
}

/// Top-level records are resolved as `owned_any`, nested objects as plain values
fn parent_record<'a>(parent: &'a FieldValue<'_>) -> async_graphql::Result<&'a Value> {
    match parent.as_value() {
        Some(value) => Ok(value),
        None => parent.try_downcast_ref::<Value>(),
    }
}

/// An accepted field of a create or update input object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputField {
    pub name: String,
    pub ty: TypeRef,
    pub description: Option<String>,
}

impl InputField {
    pub fn new(name: impl Into<String>, ty: impl Into<TypeRef>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            description: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    fn to_input_value(&self) -> InputValue {
        let value = InputValue::new(&self.name, self.ty.clone());
        match &self.description {
            Some(desc) => value.description(desc),
            None => value,
        }
    }
}

/// Build an input object type from a list of input fields
pub fn build_input_object(name: &str, fields: &[InputField]) -> InputObject {
    fields
        .iter()
        .fold(InputObject::new(name), |object, field| {
            object.field(field.to_input_value())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_type_builder() {
        let output = OutputType::new("Book")
            .description("A book")
            .field(OutputField::new("title", TypeRef::named(TypeRef::STRING)))
            .field(
                OutputField::new("author", TypeRef::named(TypeRef::STRING))
                    .description("Book author"),
            );

        assert_eq!(output.name, "Book");
        assert_eq!(output.fields.len(), 2);
        assert_eq!(output.fields[1].description.as_deref(), Some("Book author"));

        let object = output.build_object();
        assert_eq!(object.type_name(), "Book");
    }

    #[test]
    fn test_input_field_builder() {
        let field = InputField::new("title", TypeRef::named_nn(TypeRef::STRING))
            .description("Book title");

        assert_eq!(field.name, "title");
        assert_eq!(field.ty.to_string(), "String!");
        assert_eq!(field.description.as_deref(), Some("Book title"));
    }

    #[test]
    fn test_build_input_object_name() {
        let fields = vec![InputField::new("title", TypeRef::named(TypeRef::STRING))];
        let input = build_input_object("CreateBookInput", &fields);

        assert_eq!(input.type_name(), "CreateBookInput");
    }
}
