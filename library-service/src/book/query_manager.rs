use library_api::model::book::{BookId, BookRecord};

use crate::{
    book::repository::{BookFilter, BookRepositoryArc},
    error::AppResult,
};

#[derive(Debug, Clone)]
pub struct BookQueryManager {
    book_repository: BookRepositoryArc,
}

impl BookQueryManager {
    pub fn new(book_repository: BookRepositoryArc) -> Self {
        BookQueryManager { book_repository }
    }

    pub async fn query_list(&self, filter: &BookFilter) -> AppResult<Vec<BookRecord>> {
        Ok(self
            .book_repository
            .select_filtered(filter)
            .await?
            .into_iter()
            .map(BookRecord::from)
            .collect())
    }

    pub async fn query_one(&self, id: BookId) -> AppResult<Option<BookRecord>> {
        Ok(self.book_repository.select(id).await?.map(Into::into))
    }
}
