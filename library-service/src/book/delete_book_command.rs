use library_api::model::{author::AuthorId, book::BookId, error::CatalogError};
use tracing::info;

use crate::{
    book::repository::BookRepositoryArc, error::AppResult,
    relationship::reconciler::RelationshipReconciler,
};

#[derive(Debug, Clone)]
pub struct DeleteBookCommand {
    book_repository: BookRepositoryArc,
    reconciler: RelationshipReconciler,
}

impl DeleteBookCommand {
    pub fn new(book_repository: BookRepositoryArc, reconciler: RelationshipReconciler) -> Self {
        DeleteBookCommand {
            book_repository,
            reconciler,
        }
    }

    /// Detaches the book from its authors and removes it.
    ///
    /// Returns the authors the book was detached from.
    #[tracing::instrument]
    pub async fn execute(&self, id: BookId) -> AppResult<Vec<AuthorId>> {
        let book = self
            .book_repository
            .select(id)
            .await?
            .ok_or_else(|| CatalogError::book_not_found(id))?;

        let detached = self.reconciler.detach_book(&book).await?;

        if !self.book_repository.delete(id).await? {
            return Err(CatalogError::book_not_found(id).into());
        }

        info!(book_id = %id, detached = ?detached, "Successfully deleted book");

        Ok(detached)
    }
}
