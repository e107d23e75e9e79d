use std::{collections::BTreeSet, fmt::Debug, sync::Arc};

use async_trait::async_trait;
use library_api::model::{
    author::{AuthorId, AuthorRecord},
    book::BookId,
};

use crate::error::AppResult;

/// In-memory repository implementation.
pub mod memory;

/// Author fields for insertion operations.
///
/// The identifier is assigned by the repository.
#[derive(Debug)]
pub struct AuthorEntityInsert {
    /// First name of the author
    pub first_name: String,
    /// Last name of the author
    pub last_name: String,
}

/// Stored author.
///
/// Books are referenced by identifier. Every book listed here lists this
/// author back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorEntity {
    /// Unique identifier for the author
    pub id: AuthorId,
    /// First name of the author
    pub first_name: String,
    /// Last name of the author
    pub last_name: String,
    /// Books linked to the author
    pub book_ids: BTreeSet<BookId>,
}

/// Repository trait for author data operations.
#[async_trait]
pub trait AuthorRepository: Debug {
    /// Inserts a new author with an empty book set.
    ///
    /// # Errors
    ///
    /// Returns an error if the insertion fails.
    async fn insert(&self, record: AuthorEntityInsert) -> AppResult<AuthorEntity>;

    /// Stores the author, replacing any stored author with the same id.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    async fn save(&self, author: &AuthorEntity) -> AppResult<()>;

    /// Selects an author by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the selection fails.
    async fn select(&self, id: AuthorId) -> AppResult<Option<AuthorEntity>>;

    /// Selects the existing authors among `ids`, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the selection fails.
    async fn select_multiple(&self, ids: &[AuthorId]) -> AppResult<Vec<AuthorEntity>>;

    /// Selects every author, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the selection fails.
    async fn select_all(&self) -> AppResult<Vec<AuthorEntity>>;

    /// Deletes an author by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the deletion fails.
    ///
    /// # Returns
    ///
    /// Returns `true` if an author was deleted, `false` if not found.
    async fn delete(&self, id: AuthorId) -> AppResult<bool>;
}

/// Thread-safe shared reference to an author repository.
pub type AuthorRepositoryArc = Arc<dyn AuthorRepository + Send + Sync>;

impl AuthorEntity {
    /// Adds a book to the author's set, returning `false` if already linked.
    pub fn link_book(&mut self, book_id: BookId) -> bool {
        self.book_ids.insert(book_id)
    }

    /// Removes a book from the author's set, returning `false` if absent.
    pub fn unlink_book(&mut self, book_id: BookId) -> bool {
        self.book_ids.remove(&book_id)
    }
}

impl From<AuthorEntity> for AuthorRecord {
    fn from(author: AuthorEntity) -> Self {
        AuthorRecord {
            id: Some(author.id),
            first_name: author.first_name,
            last_name: author.last_name,
            book_ids: Some(author.book_ids),
        }
    }
}
