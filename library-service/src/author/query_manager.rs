use itertools::Itertools;
use library_api::model::{
    author::{AuthorId, AuthorRecord},
    book::BookRecord,
    error::CatalogError,
};

use crate::{
    author::repository::AuthorRepositoryArc, book::repository::BookRepositoryArc,
    error::AppResult,
};

#[derive(Debug, Clone)]
pub struct AuthorQueryManager {
    author_repository: AuthorRepositoryArc,
    book_repository: BookRepositoryArc,
}

impl AuthorQueryManager {
    pub fn new(author_repository: AuthorRepositoryArc, book_repository: BookRepositoryArc) -> Self {
        AuthorQueryManager {
            author_repository,
            book_repository,
        }
    }

    pub async fn query_list(&self) -> AppResult<Vec<AuthorRecord>> {
        Ok(self
            .author_repository
            .select_all()
            .await?
            .into_iter()
            .map(AuthorRecord::from)
            .collect())
    }

    pub async fn query_one(&self, id: AuthorId) -> AppResult<Option<AuthorRecord>> {
        Ok(self.author_repository.select(id).await?.map(Into::into))
    }

    /// Returns the books of an existing author, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if the author does not exist.
    pub async fn query_books(&self, id: AuthorId) -> AppResult<Vec<BookRecord>> {
        let author = self
            .author_repository
            .select(id)
            .await?
            .ok_or_else(|| CatalogError::author_not_found(id))?;

        let book_ids = author.book_ids.into_iter().collect_vec();
        Ok(self
            .book_repository
            .select_multiple(&book_ids)
            .await?
            .into_iter()
            .map(BookRecord::from)
            .collect())
    }
}
