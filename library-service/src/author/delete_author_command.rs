use std::collections::BTreeSet;

use library_api::model::{author::AuthorId, error::CatalogError};
use tracing::info;

use crate::{
    author::repository::AuthorRepositoryArc,
    error::AppResult,
    relationship::reconciler::{AuthorBooksOutcome, RelationshipReconciler},
};

/// Command removing an author.
///
/// The author is unlinked from all of its books first. Books it was the only
/// author of are deleted with it.
#[derive(Debug, Clone)]
pub struct DeleteAuthorCommand {
    author_repository: AuthorRepositoryArc,
    reconciler: RelationshipReconciler,
}

impl DeleteAuthorCommand {
    pub fn new(author_repository: AuthorRepositoryArc, reconciler: RelationshipReconciler) -> Self {
        DeleteAuthorCommand {
            author_repository,
            reconciler,
        }
    }

    #[tracing::instrument]
    pub async fn execute(&self, id: AuthorId) -> AppResult<AuthorBooksOutcome> {
        let mut author = self
            .author_repository
            .select(id)
            .await?
            .ok_or_else(|| CatalogError::author_not_found(id))?;

        let books = self
            .reconciler
            .reconcile_author_books(&mut author, &BTreeSet::new())
            .await?;

        if !self.author_repository.delete(id).await? {
            return Err(CatalogError::author_not_found(id).into());
        }

        info!(
            author_id = %id,
            deleted_orphans = ?books.deleted_orphans,
            "Successfully deleted author"
        );

        Ok(books)
    }
}
