use std::{
    collections::HashMap,
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
};

use async_trait::async_trait;
use itertools::Itertools;
use library_api::model::book::BookId;
use tokio::sync::RwLock;

use crate::{
    book::repository::{BookEntity, BookEntityInsert, BookFilter, BookRepository},
    error::AppResult,
};

/// In-memory implementation of the book repository.
#[derive(Debug)]
pub struct MemoryBookRepository {
    books: Arc<RwLock<HashMap<BookId, BookEntity>>>,
    next_id: AtomicU64,
}

impl Default for MemoryBookRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBookRepository {
    /// Creates a new empty memory book repository.
    pub fn new() -> Self {
        Self {
            books: Arc::new(RwLock::new(HashMap::new())),
            next_id: AtomicU64::new(1),
        }
    }

    /// Creates a new memory book repository with initial data.
    ///
    /// # Arguments
    ///
    /// * `books` - Initial books to populate the repository with
    pub fn with_data(books: Vec<BookEntity>) -> Self {
        let next_id = books.iter().map(|book| book.id.0).max().unwrap_or(0) + 1;
        Self {
            books: Arc::new(RwLock::new(
                books.into_iter().map(|book| (book.id, book)).collect(),
            )),
            next_id: AtomicU64::new(next_id),
        }
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn insert(&self, record: BookEntityInsert) -> AppResult<BookEntity> {
        let book = BookEntity {
            id: BookId::new(self.next_id.fetch_add(1, Ordering::Relaxed)),
            title: record.title,
            author_ids: record.author_ids,
            category: record.category,
            description: record.description,
            series_name: record.series_name,
            series_number: record.series_number,
            status: record.status,
        };
        self.books.write().await.insert(book.id, book.clone());
        Ok(book)
    }

    async fn save(&self, book: &BookEntity) -> AppResult<()> {
        self.books.write().await.insert(book.id, book.clone());
        Ok(())
    }

    async fn select(&self, id: BookId) -> AppResult<Option<BookEntity>> {
        let books = self.books.read().await;
        Ok(books.get(&id).cloned())
    }

    async fn select_multiple(&self, ids: &[BookId]) -> AppResult<Vec<BookEntity>> {
        let books = self.books.read().await;
        Ok(ids
            .iter()
            .unique()
            .filter_map(|id| books.get(id))
            .sorted_unstable_by_key(|book| book.id)
            .cloned()
            .collect())
    }

    async fn select_filtered(&self, filter: &BookFilter) -> AppResult<Vec<BookEntity>> {
        let books = self.books.read().await;
        Ok(books
            .values()
            .filter(|book| filter.matches(book))
            .sorted_unstable_by_key(|book| book.id)
            .cloned()
            .collect())
    }

    async fn delete(&self, id: BookId) -> AppResult<bool> {
        Ok(self.books.write().await.remove(&id).is_some())
    }
}
