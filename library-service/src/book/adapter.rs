use http::StatusCode;
use library_api::model::book::{BookId, BookRecord};

use crate::{
    book::service::BookService,
    error::AppResult,
    http::{
        body::decode_json,
        response::{self, HttpResponse},
    },
};

/// Translates book requests into service calls.
#[derive(Debug, Clone)]
pub struct BookAdapter {
    book_service: BookService,
}

impl BookAdapter {
    pub fn new(book_service: BookService) -> Self {
        BookAdapter { book_service }
    }

    #[tracing::instrument(skip(body))]
    pub async fn create_book(&self, body: &[u8]) -> AppResult<HttpResponse> {
        let record: BookRecord = decode_json(body)?;
        record.validate_for_create()?;

        let book = self.book_service.create_book(&record).await?;
        response::json(StatusCode::CREATED, &book)
    }

    /// Lists every book, or the books with exactly `title` when given.
    #[tracing::instrument]
    pub async fn list_books(&self, title: Option<&str>) -> AppResult<HttpResponse> {
        let books = match title {
            Some(title) => self.book_service.list_books_by_title(title).await?,
            None => self.book_service.list_books().await?,
        };
        response::json_list(&books)
    }

    #[tracing::instrument]
    pub async fn list_books_in_series(&self) -> AppResult<HttpResponse> {
        response::json_list(&self.book_service.list_books_in_series().await?)
    }

    #[tracing::instrument]
    pub async fn list_books_by_series_name(&self, name: &str) -> AppResult<HttpResponse> {
        response::json_list(&self.book_service.list_books_by_series_name(name).await?)
    }

    #[tracing::instrument]
    pub async fn list_books_by_series_name_and_number(
        &self,
        name: &str,
        number: i32,
    ) -> AppResult<HttpResponse> {
        response::json_list(
            &self
                .book_service
                .list_books_by_series_name_and_number(name, number)
                .await?,
        )
    }

    #[tracing::instrument]
    pub async fn get_book(&self, id: BookId) -> AppResult<HttpResponse> {
        match self.book_service.get_book(id).await? {
            Some(book) => response::json(StatusCode::OK, &book),
            None => Ok(response::empty(StatusCode::NOT_FOUND)),
        }
    }

    #[tracing::instrument]
    pub async fn delete_book(&self, id: BookId) -> AppResult<HttpResponse> {
        self.book_service.delete_book(id).await?;
        Ok(response::empty(StatusCode::NO_CONTENT))
    }

    #[tracing::instrument(skip(body))]
    pub async fn update_book(&self, id: BookId, body: &[u8]) -> AppResult<HttpResponse> {
        let record: BookRecord = decode_json(body)?;
        record.validate_for_update()?;

        self.book_service.update_book(id, &record).await?;
        Ok(response::empty(StatusCode::NO_CONTENT))
    }
}
