use library_api::model::{
    author::AuthorId,
    book::{BookId, BookRecord},
    category::BookCategory,
    error::{CatalogError, EntityKind},
    status::BookStatus,
    validation::{ValidationError, ValidationOperation},
};
use tracing::{debug, info};

use crate::{
    book::repository::BookRepositoryArc,
    error::AppResult,
    relationship::reconciler::RelationshipReconciler,
};

/// Command replacing a book's fields and authors.
#[derive(Debug, Clone)]
pub struct UpdateBookCommand {
    book_repository: BookRepositoryArc,
    reconciler: RelationshipReconciler,
}

#[derive(Debug, Clone)]
pub struct UpdateBookCommandInput<'a> {
    /// Book addressed by the caller
    pub id: BookId,
    /// Id carried by the submitted record
    pub record_id: Option<BookId>,
    pub title: &'a str,
    pub author_ids: &'a [AuthorId],
    /// Category name, `None` keeps the current one
    pub category: Option<&'a str>,
    pub description: &'a str,
    pub series_name: Option<&'a str>,
    pub series_number: Option<i32>,
    /// Status name, `None` keeps the current one
    pub status: Option<&'a str>,
}

#[derive(Debug, Clone)]
pub struct UpdateBookCommandOutput {
    pub book: BookRecord,
}

impl UpdateBookCommand {
    pub fn new(book_repository: BookRepositoryArc, reconciler: RelationshipReconciler) -> Self {
        UpdateBookCommand {
            book_repository,
            reconciler,
        }
    }

    /// Overwrites the book's fields, then replaces its authors.
    ///
    /// Category and status are parsed before anything is written.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if the book or a requested author
    /// does not exist, [`CatalogError::IdMismatch`] if the record names
    /// another book, and [`CatalogError::UnknownValue`] for an unknown
    /// category or status. Authors attached before a missing one stay
    /// attached; a book left without any author is deleted.
    #[tracing::instrument]
    pub async fn execute(
        &self,
        input: UpdateBookCommandInput<'_>,
    ) -> AppResult<UpdateBookCommandOutput> {
        let mut book = self
            .book_repository
            .select(input.id)
            .await?
            .ok_or_else(|| CatalogError::book_not_found(input.id))?;

        if input.record_id != Some(input.id) {
            return Err(CatalogError::IdMismatch {
                kind: EntityKind::Book,
            }
            .into());
        }
        if input.author_ids.is_empty() {
            return Err(ValidationError::empty_authors(ValidationOperation::Update).into());
        }

        let category = input.category.map(BookCategory::parse).transpose()?;
        let status = input.status.map(BookStatus::parse).transpose()?;

        book.title = input.title.to_string();
        book.description = input.description.to_string();
        book.series_name = input.series_name.map(ToString::to_string);
        book.series_number = input.series_number;
        if let Some(category) = category {
            book.category = category;
        }
        if let Some(status) = status {
            book.status = status;
        }

        let authors = match self
            .reconciler
            .reconcile_book_authors(&mut book, input.author_ids)
            .await
        {
            Ok(authors) => authors,
            Err(err) => {
                if book.is_orphan() {
                    self.book_repository.delete(book.id).await?;
                    debug!(book_id = %book.id, "Deleted orphaned book");
                }
                return Err(err);
            }
        };

        info!(
            book_id = %book.id,
            detached = ?authors.detached,
            attached = ?authors.attached,
            "Successfully updated book"
        );

        Ok(UpdateBookCommandOutput { book: book.into() })
    }
}
