use std::{fmt::Debug, sync::Arc};

use async_trait::async_trait;
use library_api::model::{
    author::AuthorId,
    book::{BookId, BookRecord},
    category::BookCategory,
    status::BookStatus,
};

use crate::error::AppResult;

/// In-memory repository implementation.
pub mod memory;

/// Book fields for insertion operations.
///
/// The identifier is assigned by the repository.
#[derive(Debug)]
pub struct BookEntityInsert {
    /// Title of the book
    pub title: String,
    /// Authors of the book, never empty
    pub author_ids: Vec<AuthorId>,
    /// Subject classification
    pub category: BookCategory,
    /// Description of the book
    pub description: String,
    /// Name of the series the book belongs to
    pub series_name: Option<String>,
    /// Position of the book within its series
    pub series_number: Option<i32>,
    /// Availability state
    pub status: BookStatus,
}

/// Stored book.
///
/// Every author listed here lists this book back, and a stored book always
/// has at least one author once an operation completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookEntity {
    /// Unique identifier for the book
    pub id: BookId,
    /// Title of the book
    pub title: String,
    /// Authors of the book, without duplicates
    pub author_ids: Vec<AuthorId>,
    /// Subject classification
    pub category: BookCategory,
    /// Description of the book
    pub description: String,
    /// Name of the series the book belongs to
    pub series_name: Option<String>,
    /// Position of the book within its series
    pub series_number: Option<i32>,
    /// Availability state
    pub status: BookStatus,
}

/// Selection criteria for book listings.
///
/// Name and title matches are exact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookFilter {
    All,
    /// Books with a series name.
    InSeries,
    SeriesName(String),
    Series { name: String, number: i32 },
    Title(String),
}

/// Repository trait for book data operations.
#[async_trait]
pub trait BookRepository: Debug {
    /// Inserts a new book record.
    ///
    /// # Errors
    ///
    /// Returns an error if the insertion fails.
    async fn insert(&self, record: BookEntityInsert) -> AppResult<BookEntity>;

    /// Stores the book, replacing any stored book with the same id.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    async fn save(&self, book: &BookEntity) -> AppResult<()>;

    /// Selects a book by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the selection fails.
    async fn select(&self, id: BookId) -> AppResult<Option<BookEntity>>;

    /// Selects the existing books among `ids`, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the selection fails.
    async fn select_multiple(&self, ids: &[BookId]) -> AppResult<Vec<BookEntity>>;

    /// Selects the books matching `filter`, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the selection fails.
    async fn select_filtered(&self, filter: &BookFilter) -> AppResult<Vec<BookEntity>>;

    /// Deletes a book by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the deletion fails.
    ///
    /// # Returns
    ///
    /// Returns `true` if a book was deleted, `false` if not found.
    async fn delete(&self, id: BookId) -> AppResult<bool>;
}

/// Thread-safe shared reference to a book repository.
pub type BookRepositoryArc = Arc<dyn BookRepository + Send + Sync>;

impl BookEntity {
    /// Appends an author, returning `false` if already linked.
    pub fn link_author(&mut self, author_id: AuthorId) -> bool {
        if self.author_ids.contains(&author_id) {
            return false;
        }
        self.author_ids.push(author_id);
        true
    }

    /// Removes an author, returning `false` if absent.
    pub fn unlink_author(&mut self, author_id: AuthorId) -> bool {
        let len = self.author_ids.len();
        self.author_ids.retain(|id| *id != author_id);
        self.author_ids.len() != len
    }

    /// A book without authors must not stay in the store.
    pub fn is_orphan(&self) -> bool {
        self.author_ids.is_empty()
    }
}

impl BookFilter {
    pub fn matches(&self, book: &BookEntity) -> bool {
        match self {
            Self::All => true,
            Self::InSeries => book.series_name.is_some(),
            Self::SeriesName(name) => book.series_name.as_deref() == Some(name.as_str()),
            Self::Series { name, number } => {
                book.series_name.as_deref() == Some(name.as_str())
                    && book.series_number == Some(*number)
            }
            Self::Title(title) => book.title == *title,
        }
    }
}

impl From<BookEntity> for BookRecord {
    fn from(book: BookEntity) -> Self {
        BookRecord {
            id: Some(book.id),
            title: book.title,
            author_ids: book.author_ids,
            category: Some(book.category.format()),
            description: book.description,
            series_name: book.series_name,
            series_number: book.series_number,
            status: Some(book.status.format()),
        }
    }
}
