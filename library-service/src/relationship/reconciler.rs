use std::collections::BTreeSet;

use itertools::Itertools;
use library_api::model::{author::AuthorId, book::BookId, error::CatalogError};
use tracing::debug;

use crate::{
    author::repository::{AuthorEntity, AuthorRepositoryArc},
    book::repository::{BookEntity, BookRepositoryArc},
    error::AppResult,
};

/// Applies link set changes to both sides of the author and book relation.
///
/// Steps are persisted one at a time. A failing step aborts the operation and
/// leaves the steps already taken in place; each of them is symmetric on its
/// own.
#[derive(Debug, Clone)]
pub struct RelationshipReconciler {
    author_repository: AuthorRepositoryArc,
    book_repository: BookRepositoryArc,
}

/// Changes made while reconciling an author's books.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorBooksOutcome {
    pub linked: Vec<BookId>,
    pub unlinked: Vec<BookId>,
    /// Books deleted because the author was their last one.
    pub deleted_orphans: Vec<BookId>,
}

/// Changes made while reconciling a book's authors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookAuthorsOutcome {
    pub detached: Vec<AuthorId>,
    pub attached: Vec<AuthorId>,
}

impl RelationshipReconciler {
    pub fn new(author_repository: AuthorRepositoryArc, book_repository: BookRepositoryArc) -> Self {
        Self {
            author_repository,
            book_repository,
        }
    }

    /// Moves the author's book set to `target`.
    ///
    /// Removals run first. A removed book that is missing from the store is
    /// only dropped from the author's set, and a book left without authors is
    /// deleted. Additions follow in ascending id order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] for the first added book that does
    /// not exist.
    pub async fn reconcile_author_books(
        &self,
        author: &mut AuthorEntity,
        target: &BTreeSet<BookId>,
    ) -> AppResult<AuthorBooksOutcome> {
        let mut outcome = AuthorBooksOutcome::default();

        let to_remove = author.book_ids.difference(target).copied().collect_vec();
        let to_add = target.difference(&author.book_ids).copied().collect_vec();

        for book_id in to_remove {
            author.unlink_book(book_id);
            if let Some(mut book) = self.book_repository.select(book_id).await? {
                book.unlink_author(author.id);
                if book.is_orphan() {
                    self.book_repository.delete(book_id).await?;
                    debug!(book_id = %book_id, "Deleted orphaned book");
                    outcome.deleted_orphans.push(book_id);
                } else {
                    self.book_repository.save(&book).await?;
                }
            }
            self.author_repository.save(author).await?;
            debug!(author_id = %author.id, book_id = %book_id, "Unlinked book");
            outcome.unlinked.push(book_id);
        }

        for book_id in to_add {
            let mut book = self
                .book_repository
                .select(book_id)
                .await?
                .ok_or_else(|| CatalogError::book_not_found(book_id))?;
            author.link_book(book_id);
            book.link_author(author.id);
            self.book_repository.save(&book).await?;
            self.author_repository.save(author).await?;
            debug!(author_id = %author.id, book_id = %book_id, "Linked book");
            outcome.linked.push(book_id);
        }

        Ok(outcome)
    }

    /// Removes the book from every author that lists it.
    ///
    /// The book itself is not written.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub async fn detach_book(&self, book: &BookEntity) -> AppResult<Vec<AuthorId>> {
        let mut detached = Vec::with_capacity(book.author_ids.len());
        for mut author in self
            .author_repository
            .select_multiple(&book.author_ids)
            .await?
        {
            if author.unlink_book(book.id) {
                self.author_repository.save(&author).await?;
                debug!(author_id = %author.id, book_id = %book.id, "Detached book");
                detached.push(author.id);
            }
        }
        Ok(detached)
    }

    /// Replaces the book's authors with `target`.
    ///
    /// Every current author is detached and the author-less book is saved,
    /// then each target author is attached in request order. Repeated ids are
    /// attached once.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] for the first target author that
    /// does not exist. Authors attached before it stay attached.
    pub async fn reconcile_book_authors(
        &self,
        book: &mut BookEntity,
        target: &[AuthorId],
    ) -> AppResult<BookAuthorsOutcome> {
        let mut outcome = BookAuthorsOutcome {
            detached: self.detach_book(book).await?,
            attached: Vec::new(),
        };
        book.author_ids.clear();
        self.book_repository.save(book).await?;

        for &author_id in target.iter().unique() {
            let mut author = self
                .author_repository
                .select(author_id)
                .await?
                .ok_or_else(|| CatalogError::author_not_found(author_id))?;
            author.link_book(book.id);
            book.link_author(author_id);
            self.author_repository.save(&author).await?;
            self.book_repository.save(book).await?;
            debug!(author_id = %author_id, book_id = %book.id, "Attached author");
            outcome.attached.push(author_id);
        }

        Ok(outcome)
    }
}
