/// Conversions between GraphQL values and typed structures
///
/// Resources receive create/update inputs as untyped `Value` maps and return
/// records as `Value` objects. These helpers go through serde so resources can
/// work with their own structs.

use async_graphql::Value;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Decode an input value (usually an input object) into `T`
///
/// Keys missing from the input become `None`/default values if `T` allows it.
pub fn decode_input<T: DeserializeOwned>(input: Value) -> async_graphql::Result<T> {
    async_graphql::from_value(input)
        .map_err(|e| async_graphql::Error::new(format!("Failed to decode input: {}", e)))
}

/// Encode a typed record as a GraphQL object value
pub fn encode_output<T: Serialize>(record: &T) -> async_graphql::Result<Value> {
    async_graphql::to_value(record)
        .map_err(|e| async_graphql::Error::new(format!("Failed to encode record: {}", e)))
}
