#![allow(dead_code)]

use std::sync::Arc;

use library_api::model::{
    author::{AuthorId, AuthorRecord},
    book::{BookId, BookRecord},
};
use library_service::{
    Catalog,
    author::repository::{AuthorRepositoryArc, memory::MemoryAuthorRepository},
    book::repository::{BookFilter, BookRepositoryArc, memory::MemoryBookRepository},
};

pub struct Fixture {
    pub catalog: Catalog,
    pub author_repository: AuthorRepositoryArc,
    pub book_repository: BookRepositoryArc,
}

impl Fixture {
    pub fn new() -> Self {
        let author_repository: AuthorRepositoryArc = Arc::new(MemoryAuthorRepository::new());
        let book_repository: BookRepositoryArc = Arc::new(MemoryBookRepository::new());
        Fixture {
            catalog: Catalog::new(author_repository.clone(), book_repository.clone()),
            author_repository,
            book_repository,
        }
    }

    pub async fn create_author(&self, first_name: &str, last_name: &str) -> AuthorId {
        self.catalog
            .author_service
            .create_author(first_name, last_name)
            .await
            .unwrap()
            .id
            .unwrap()
    }

    pub async fn create_book(&self, title: &str, author_ids: &[AuthorId]) -> BookId {
        self.catalog
            .book_service
            .create_book(&book(title, author_ids))
            .await
            .unwrap()
            .id
            .unwrap()
    }

    pub async fn author(&self, id: AuthorId) -> Option<AuthorRecord> {
        self.catalog.author_service.get_author(id).await.unwrap()
    }

    pub async fn book(&self, id: BookId) -> Option<BookRecord> {
        self.catalog.book_service.get_book(id).await.unwrap()
    }

    /// Checks both link directions across the whole store and that no book is
    /// left without authors.
    pub async fn assert_symmetric(&self) {
        let authors = self.author_repository.select_all().await.unwrap();
        let books = self
            .book_repository
            .select_filtered(&BookFilter::All)
            .await
            .unwrap();

        for author in &authors {
            for book_id in &author.book_ids {
                let book = books
                    .iter()
                    .find(|book| book.id == *book_id)
                    .unwrap_or_else(|| {
                        panic!("author {} lists missing book {book_id}", author.id)
                    });
                assert!(
                    book.author_ids.contains(&author.id),
                    "book {book_id} does not list author {}",
                    author.id
                );
            }
        }

        for book in &books {
            assert!(!book.author_ids.is_empty(), "book {} has no authors", book.id);
            for author_id in &book.author_ids {
                let author = authors
                    .iter()
                    .find(|author| author.id == *author_id)
                    .unwrap_or_else(|| panic!("book {} lists missing author {author_id}", book.id));
                assert!(
                    author.book_ids.contains(&book.id),
                    "author {author_id} does not list book {}",
                    book.id
                );
            }
        }
    }
}

pub fn book(title: &str, author_ids: &[AuthorId]) -> BookRecord {
    BookRecord {
        title: title.to_string(),
        author_ids: author_ids.to_vec(),
        category: Some("fiction".into()),
        description: format!("About {title}."),
        ..Default::default()
    }
}
