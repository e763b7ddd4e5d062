/// Offset/limit pagination for list fields
///
/// `paginated` builds a query field taking `offset` and `limit` arguments and
/// a wrapper object exposing the fetched `data` and the total `count`. The
/// records and count come straight from the `PageFetcher`; nothing here
/// filters or truncates them.

use crate::config::PaginationConfig;

use async_graphql::dynamic::{Field, FieldFuture, FieldValue, InputValue, Object, ObjectAccessor, TypeRef};
use async_graphql::{Context, Value};
use async_trait::async_trait;
use std::sync::Arc;

/// A requested page of records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub offset: usize,
    pub limit: usize,
}

impl Page {
    /// Resolve a page from optional request arguments
    ///
    /// Missing values fall back to offset 0 and the configured default limit.
    /// Limits above `max_limit` are clamped; negative values are rejected.
    pub fn resolve(
        offset: Option<i64>,
        limit: Option<i64>,
        settings: PaginationConfig,
    ) -> async_graphql::Result<Self> {
        let offset = match offset {
            Some(v) if v < 0 => return Err("offset must not be negative".into()),
            Some(v) => v as usize,
            None => 0,
        };

        let limit = match limit {
            Some(v) if v < 0 => return Err("limit must not be negative".into()),
            Some(v) => v as usize,
            None => settings.default_limit,
        };

        Ok(Self {
            offset,
            limit: limit.min(settings.max_limit),
        })
    }

    fn from_args(args: &ObjectAccessor<'_>, settings: PaginationConfig) -> async_graphql::Result<Self> {
        let offset = match args.get("offset") {
            Some(v) if !v.is_null() => Some(v.i64()?),
            _ => None,
        };
        let limit = match args.get("limit") {
            Some(v) if !v.is_null() => Some(v.i64()?),
            _ => None,
        };

        Self::resolve(offset, limit, settings)
    }
}

/// Fetches one page of records together with the total record count
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, ctx: &Context<'_>, page: Page) -> async_graphql::Result<(Vec<Value>, usize)>;
}

/// Resolved list payload, read by the wrapper object's fields
struct PagePayload {
    data: Vec<Value>,
    count: usize,
}

/// Description of a paginated list field
pub struct PaginatedField {
    /// Query field name, e.g. `bookList`
    pub field_name: String,
    /// Wrapper object name, e.g. `BookList`
    pub list_type: String,
    /// Item object name, e.g. `Book`
    pub item_type: String,
    pub settings: PaginationConfig,
    pub fetcher: Arc<dyn PageFetcher>,
}

/// Build a paginated list field and its wrapper object type
///
/// The wrapper object must be registered in the schema next to the field.
pub fn paginated(field: PaginatedField) -> (Field, Object) {
    let PaginatedField {
        field_name,
        list_type,
        item_type,
        settings,
        fetcher,
    } = field;

    let wrapper = build_wrapper(&list_type, &item_type);
    let log_name = field_name.clone();

    let field = Field::new(field_name, TypeRef::named_nn(&list_type), move |ctx| {
        let fetcher = fetcher.clone();
        let field_name = log_name.clone();

        FieldFuture::new(async move {
            let page = Page::from_args(&ctx.args, settings)?;

            tracing::debug!(
                "Resolving {} (offset={}, limit={})",
                field_name,
                page.offset,
                page.limit
            );

            let (data, count) = fetcher.fetch(ctx.ctx, page).await?;

            Ok(Some(FieldValue::owned_any(PagePayload { data, count })))
        })
    })
    .argument(InputValue::new("offset", TypeRef::named(TypeRef::INT)))
    .argument(InputValue::new("limit", TypeRef::named(TypeRef::INT)));

    (field, wrapper)
}

fn build_wrapper(list_type: &str, item_type: &str) -> Object {
    Object::new(list_type)
        .description(format!("A page of {} records", item_type))
        .field(Field::new(
            "data",
            TypeRef::named_nn_list_nn(item_type),
            |ctx| {
                FieldFuture::new(async move {
                    let payload = ctx.parent_value.try_downcast_ref::<PagePayload>()?;
                    let items = payload
                        .data
                        .iter()
                        .cloned()
                        .map(FieldValue::owned_any);
                    Ok(Some(FieldValue::list(items)))
                })
            },
        ))
        .field(Field::new("count", TypeRef::named_nn(TypeRef::INT), |ctx| {
            FieldFuture::new(async move {
                let payload = ctx.parent_value.try_downcast_ref::<PagePayload>()?;
                let count = count_value(payload.count)?;
                Ok(Some(FieldValue::value(count)))
            })
        }))
}

/// GraphQL `Int` is a signed 32-bit integer
fn count_value(count: usize) -> async_graphql::Result<Value> {
    let count = i32::try_from(count).map_err(|_| {
        async_graphql::Error::new(format!("count {} does not fit in a GraphQL Int", count))
    })?;
    Ok(Value::Number(count.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> PaginationConfig {
        PaginationConfig {
            default_limit: 10,
            max_limit: 50,
        }
    }

    #[test]
    fn test_page_defaults() {
        let page = Page::resolve(None, None, settings()).unwrap();
        assert_eq!(page, Page { offset: 0, limit: 10 });
    }

    #[test]
    fn test_page_explicit_values() {
        let page = Page::resolve(Some(20), Some(5), settings()).unwrap();
        assert_eq!(page, Page { offset: 20, limit: 5 });
    }

    #[test]
    fn test_page_limit_clamped() {
        let page = Page::resolve(Some(0), Some(5000), settings()).unwrap();
        assert_eq!(page.limit, 50);
    }

    #[test]
    fn test_page_negative_values_rejected() {
        assert!(Page::resolve(Some(-1), None, settings()).is_err());
        assert!(Page::resolve(None, Some(-5), settings()).is_err());
    }

    #[test]
    fn test_count_value_bounds() {
        assert_eq!(count_value(42).unwrap(), Value::Number(42.into()));
        assert_eq!(
            count_value(i32::MAX as usize).unwrap(),
            Value::Number(i32::MAX.into())
        );
        assert!(count_value(i32::MAX as usize + 1).is_err());
    }

    #[test]
    fn test_paginated_wrapper_name() {
        struct Empty;

        #[async_trait]
        impl PageFetcher for Empty {
            async fn fetch(
                &self,
                _ctx: &Context<'_>,
                _page: Page,
            ) -> async_graphql::Result<(Vec<Value>, usize)> {
                Ok((Vec::new(), 0))
            }
        }

        let (_field, wrapper) = paginated(PaginatedField {
            field_name: "bookList".to_string(),
            list_type: "BookList".to_string(),
            item_type: "Book".to_string(),
            settings: settings(),
            fetcher: Arc::new(Empty),
        });

        assert_eq!(wrapper.type_name(), "BookList");
    }
}
