use graphql_resource::decode::{decode_input, encode_output};
use graphql_resource::schema::{DATE, Page};
use graphql_resource::{InputField, OutputField, OutputType, Resource};

use async_graphql::dynamic::TypeRef;
use async_graphql::{Context, Value};
use async_trait::async_trait;
use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Book {
    id: String,
    title: String,
    author: Option<String>,
    published_on: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateBookInput {
    title: String,
    author: Option<String>,
    published_on: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateBookInput {
    title: Option<String>,
    author: Option<String>,
    published_on: Option<NaiveDate>,
}

/// In-memory book catalogue served by the demo server
pub struct BooksResource {
    books: RwLock<IndexMap<String, Book>>,
    next_id: AtomicU64,
}

impl BooksResource {
    /// Catalogue seeded with a couple of classics
    pub fn seeded() -> Self {
        let books = [
            ("Don Quixote", "Miguel de Cervantes", NaiveDate::from_ymd_opt(1605, 1, 16)),
            ("The Stranger", "Albert Camus", NaiveDate::from_ymd_opt(1942, 5, 19)),
        ]
        .into_iter()
        .enumerate()
        .map(|(i, (title, author, published_on))| {
            let id = (i + 1).to_string();
            let book = Book {
                id: id.clone(),
                title: title.to_string(),
                author: Some(author.to_string()),
                published_on,
            };
            (id, book)
        })
        .collect::<IndexMap<_, _>>();

        let next_id = books.len() as u64 + 1;
        Self {
            books: RwLock::new(books),
            next_id: AtomicU64::new(next_id),
        }
    }

    pub fn output_type() -> OutputType {
        OutputType::new("Book")
            .description("A book in the catalogue")
            .field(OutputField::new("id", TypeRef::named_nn(TypeRef::ID)))
            .field(OutputField::new("title", TypeRef::named_nn(TypeRef::STRING)))
            .field(OutputField::new("author", TypeRef::named(TypeRef::STRING)))
            .field(OutputField::new("publishedOn", TypeRef::named(DATE)))
    }

    pub fn create_input_fields() -> Vec<InputField> {
        vec![
            InputField::new("title", TypeRef::named_nn(TypeRef::STRING)).description("Book title"),
            InputField::new("author", TypeRef::named(TypeRef::STRING)).description("Book author"),
            InputField::new("publishedOn", TypeRef::named(DATE)).description("Publication date"),
        ]
    }

    pub fn update_input_fields() -> Vec<InputField> {
        vec![
            InputField::new("title", TypeRef::named(TypeRef::STRING)).description("Book title"),
            InputField::new("author", TypeRef::named(TypeRef::STRING)).description("Book author"),
            InputField::new("publishedOn", TypeRef::named(DATE)).description("Publication date"),
        ]
    }
}

fn not_found(id: &str) -> async_graphql::Error {
    async_graphql::Error::new(format!("Book '{}' not found", id))
}

#[async_trait]
impl Resource for BooksResource {
    async fn list(&self, _ctx: &Context<'_>, page: Page) -> async_graphql::Result<(Vec<Value>, usize)> {
        let books = self.books.read().await;
        let data = books
            .values()
            .skip(page.offset)
            .take(page.limit)
            .map(encode_output)
            .collect::<async_graphql::Result<Vec<_>>>()?;
        Ok((data, books.len()))
    }

    async fn show(&self, _ctx: &Context<'_>, id: &str) -> async_graphql::Result<Option<Value>> {
        let books = self.books.read().await;
        books.get(id).map(encode_output).transpose()
    }

    async fn create(&self, _ctx: &Context<'_>, input: Value) -> async_graphql::Result<Option<Value>> {
        let input: CreateBookInput = decode_input(input)?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst).to_string();
        let book = Book {
            id: id.clone(),
            title: input.title,
            author: input.author,
            published_on: input.published_on,
        };

        let value = encode_output(&book)?;
        self.books.write().await.insert(id, book);
        tracing::info!("Created book {}", value);
        Ok(Some(value))
    }

    async fn update(
        &self,
        _ctx: &Context<'_>,
        id: &str,
        input: Value,
    ) -> async_graphql::Result<Option<Value>> {
        let input: UpdateBookInput = decode_input(input)?;
        let mut books = self.books.write().await;
        let book = books.get_mut(id).ok_or_else(|| not_found(id))?;

        if let Some(title) = input.title {
            book.title = title;
        }
        if input.author.is_some() {
            book.author = input.author;
        }
        if input.published_on.is_some() {
            book.published_on = input.published_on;
        }

        encode_output(book).map(Some)
    }

    async fn destroy(&self, _ctx: &Context<'_>, id: &str) -> async_graphql::Result<Option<Value>> {
        let book = self
            .books
            .write()
            .await
            .shift_remove(id)
            .ok_or_else(|| not_found(id))?;
        encode_output(&book).map(Some)
    }
}
