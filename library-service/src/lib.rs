//! Library catalog service.
//!
//! Keeps authors and books with a symmetric many-to-many relation between
//! them and exposes the catalog over HTTP.

pub mod author;
pub mod book;
pub mod config;
pub mod error;
pub mod http;
pub mod relationship;
pub mod tracing;
pub mod transaction;

use std::sync::Arc;

use author::{
    repository::{AuthorRepositoryArc, memory::MemoryAuthorRepository},
    service::AuthorService,
};
use book::{
    repository::{BookRepositoryArc, memory::MemoryBookRepository},
    service::BookService,
};
use transaction::TransactionGate;

/// Author and book services sharing one store and one transaction gate.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub author_service: AuthorService,
    pub book_service: BookService,
}

impl Catalog {
    pub fn new(author_repository: AuthorRepositoryArc, book_repository: BookRepositoryArc) -> Self {
        let gate = TransactionGate::new();
        Catalog {
            author_service: AuthorService::new(
                gate.clone(),
                Arc::clone(&author_repository),
                Arc::clone(&book_repository),
            ),
            book_service: BookService::new(gate, author_repository, book_repository),
        }
    }

    /// Creates a catalog over an empty in-memory store.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(MemoryAuthorRepository::new()),
            Arc::new(MemoryBookRepository::new()),
        )
    }
}
