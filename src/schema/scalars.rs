/// Custom GraphQL scalar types for Date and DateTime
///
/// These scalars handle ISO 8601 formatted date and datetime strings. Every
/// `SchemaConfig` registers them, so resource input and output fields can use
/// `Date` and `DateTime` by name.

use async_graphql::dynamic::Scalar;
use async_graphql::Value;
use chrono::{DateTime as ChronoDateTime, NaiveDate};

pub const DATE: &str = "Date";
pub const DATE_TIME: &str = "DateTime";

/// Scalars added to every generated schema
pub fn register_custom_scalars() -> Vec<Scalar> {
    vec![date_scalar(), datetime_scalar()]
}

/// Create the Date scalar
fn date_scalar() -> Scalar {
    Scalar::new(DATE)
        .description("ISO 8601 date format (YYYY-MM-DD)")
        .validator(is_valid_date)
}

/// Create the DateTime scalar
fn datetime_scalar() -> Scalar {
    Scalar::new(DATE_TIME)
        .description("ISO 8601 datetime format with timezone")
        .validator(is_valid_datetime)
}

fn is_valid_date(value: &Value) -> bool {
    match value {
        Value::String(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok(),
        _ => false,
    }
}

fn is_valid_datetime(value: &Value) -> bool {
    match value {
        Value::String(s) => ChronoDateTime::parse_from_rfc3339(s).is_ok(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_registration() {
        let scalars = register_custom_scalars();
        assert_eq!(scalars.len(), 2);
    }

    #[test]
    fn test_date_validation() {
        assert!(is_valid_date(&Value::String("2024-01-15".to_string())));
        assert!(!is_valid_date(&Value::String("invalid-date".to_string())));
        assert!(!is_valid_date(&Value::String("2024-13-01".to_string())));
        assert!(!is_valid_date(&Value::Boolean(true)));
    }

    #[test]
    fn test_datetime_validation() {
        assert!(is_valid_datetime(&Value::String(
            "2024-01-15T10:00:00Z".to_string()
        )));
        assert!(is_valid_datetime(&Value::String(
            "2024-01-15T10:00:00+02:00".to_string()
        )));
        assert!(!is_valid_datetime(&Value::String("not-a-datetime".to_string())));
        assert!(!is_valid_datetime(&Value::Null));
    }
}
