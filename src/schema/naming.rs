/// Name derivation for generated resource fields and types
///
/// Every name the factory emits comes from the output type's declared name,
/// so building the same resource twice always yields the same schema.

/// All names derived from a resource's output type name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceNames {
    /// Declared output type name, e.g. `Book`
    pub type_name: String,
    /// Query field returning a page of records, e.g. `bookList`
    pub list_field: String,
    /// Query field returning one record by id, e.g. `book`
    pub show_field: String,
    /// Mutation field, e.g. `createBook`
    pub create_field: String,
    /// Mutation field, e.g. `updateBook`
    pub update_field: String,
    /// Mutation field, e.g. `deleteBook`
    pub delete_field: String,
    /// Page wrapper object holding `data` and `count`, e.g. `BookList`
    pub list_type: String,
    /// Input object for creation, e.g. `CreateBookInput`
    pub create_input_type: String,
    /// Input object for updates, e.g. `UpdateBookInput`
    pub update_input_type: String,
}

impl ResourceNames {
    /// Derive field and type names from an output type name
    ///
    /// Field names use the lower-cased name (`bookList`, `book`) and its
    /// title-cased form (`createBook`). Type names keep the declared casing
    /// with the first letter upper-cased (`CreateBookInput`).
    pub fn derive(type_name: &str) -> Self {
        let lower = type_name.to_lowercase();
        let title = title_case(&lower);
        let type_title = title_case(type_name);

        Self {
            type_name: type_name.to_string(),
            list_field: format!("{}List", lower),
            show_field: lower.clone(),
            create_field: format!("create{}", title),
            update_field: format!("update{}", title),
            delete_field: format!("delete{}", title),
            list_type: format!("{}List", type_title),
            create_input_type: format!("Create{}Input", type_title),
            update_input_type: format!("Update{}Input", type_title),
        }
    }

    /// Query section field names, in registration order
    pub fn query_fields(&self) -> [&str; 2] {
        [&self.list_field, &self.show_field]
    }

    /// Mutation section field names, in registration order
    pub fn mutation_fields(&self) -> [&str; 3] {
        [&self.create_field, &self.update_field, &self.delete_field]
    }

    /// Types registered alongside the output type
    pub fn generated_types(&self) -> [&str; 3] {
        [
            &self.list_type,
            &self.create_input_type,
            &self.update_input_type,
        ]
    }
}

/// Upper-case the first character, leaving the rest untouched
pub fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Check that a type name is usable as a GraphQL name (`/[_A-Za-z][_0-9A-Za-z]*/`)
pub fn is_valid_type_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_ascii_alphabetic() => {
            chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
        }
        _ => false,
    }
}
