use std::collections::BTreeSet;

use library_api::model::{
    author::{AuthorId, AuthorRecord},
    book::BookId,
    error::{CatalogError, EntityKind},
};
use tracing::info;

use crate::{
    author::repository::AuthorRepositoryArc,
    error::AppResult,
    relationship::reconciler::{AuthorBooksOutcome, RelationshipReconciler},
};

/// Command replacing an author's names and book set.
#[derive(Debug, Clone)]
pub struct UpdateAuthorCommand {
    author_repository: AuthorRepositoryArc,
    reconciler: RelationshipReconciler,
}

#[derive(Debug, Clone)]
pub struct UpdateAuthorCommandInput<'a> {
    /// Author addressed by the caller
    pub id: AuthorId,
    /// Id carried by the submitted record
    pub record_id: Option<AuthorId>,
    pub first_name: &'a str,
    pub last_name: &'a str,
    /// Desired book set, `None` leaves the links untouched
    pub book_ids: Option<&'a BTreeSet<BookId>>,
}

#[derive(Debug, Clone)]
pub struct UpdateAuthorCommandOutput {
    pub author: AuthorRecord,
    pub books: AuthorBooksOutcome,
}

impl UpdateAuthorCommand {
    pub fn new(author_repository: AuthorRepositoryArc, reconciler: RelationshipReconciler) -> Self {
        UpdateAuthorCommand {
            author_repository,
            reconciler,
        }
    }

    /// Stores the new names, then moves the book set to the requested one.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if the author or an added book does
    /// not exist, and [`CatalogError::IdMismatch`] if the record names another
    /// author. Names and links applied before a missing book stay stored.
    #[tracing::instrument]
    pub async fn execute(
        &self,
        input: UpdateAuthorCommandInput<'_>,
    ) -> AppResult<UpdateAuthorCommandOutput> {
        let mut author = self
            .author_repository
            .select(input.id)
            .await?
            .ok_or_else(|| CatalogError::author_not_found(input.id))?;

        if input.record_id != Some(input.id) {
            return Err(CatalogError::IdMismatch {
                kind: EntityKind::Author,
            }
            .into());
        }

        author.first_name = input.first_name.to_string();
        author.last_name = input.last_name.to_string();
        self.author_repository.save(&author).await?;

        let books = match input.book_ids {
            Some(book_ids) => {
                self.reconciler
                    .reconcile_author_books(&mut author, book_ids)
                    .await?
            }
            None => AuthorBooksOutcome::default(),
        };

        info!(
            author_id = %author.id,
            linked = ?books.linked,
            unlinked = ?books.unlinked,
            deleted_orphans = ?books.deleted_orphans,
            "Successfully updated author"
        );

        Ok(UpdateAuthorCommandOutput {
            author: author.into(),
            books,
        })
    }
}
