use thiserror::Error;

#[derive(Error, Debug)]
pub enum GraphqlResourceError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Schema generation error: {0}")]
    SchemaGeneration(String),

    #[error("Invalid type name '{0}': must be a non-empty GraphQL name")]
    InvalidTypeName(String),

    #[error("Field '{name}' is already defined on {section}")]
    DuplicateField { section: &'static str, name: String },

    #[error("Type '{0}' is already registered")]
    DuplicateType(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for GraphqlResourceError {
    fn from(err: toml::de::Error) -> Self {
        GraphqlResourceError::Config(format!("TOML parse error: {}", err))
    }
}

impl From<toml::ser::Error> for GraphqlResourceError {
    fn from(err: toml::ser::Error) -> Self {
        GraphqlResourceError::Serialization(format!("TOML serialization error: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, GraphqlResourceError>;
