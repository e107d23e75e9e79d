use library_api::model::book::{BookId, BookRecord};

use crate::{
    author::repository::AuthorRepositoryArc,
    book::{
        create_book_command::{CreateBookCommand, CreateBookCommandInput},
        delete_book_command::DeleteBookCommand,
        query_manager::BookQueryManager,
        repository::{BookFilter, BookRepositoryArc},
        update_book_command::{UpdateBookCommand, UpdateBookCommandInput},
    },
    error::AppResult,
    relationship::reconciler::RelationshipReconciler,
    transaction::TransactionGate,
};

/// Book operations of the catalog.
///
/// Mutations hold the write side of the shared gate, queries the read side.
#[derive(Debug, Clone)]
pub struct BookService {
    gate: TransactionGate,
    book_query_manager: BookQueryManager,
    create_book_command: CreateBookCommand,
    update_book_command: UpdateBookCommand,
    delete_book_command: DeleteBookCommand,
}

impl BookService {
    pub fn new(
        gate: TransactionGate,
        author_repository: AuthorRepositoryArc,
        book_repository: BookRepositoryArc,
    ) -> Self {
        let reconciler =
            RelationshipReconciler::new(author_repository.clone(), book_repository.clone());
        BookService {
            gate,
            book_query_manager: BookQueryManager::new(book_repository.clone()),
            create_book_command: CreateBookCommand::new(author_repository, book_repository.clone()),
            update_book_command: UpdateBookCommand::new(
                book_repository.clone(),
                reconciler.clone(),
            ),
            delete_book_command: DeleteBookCommand::new(book_repository, reconciler),
        }
    }

    /// Creates a book linked to every author in `record`.
    ///
    /// The id and status of `record` are ignored.
    ///
    /// # Errors
    ///
    /// Fails with not found for the first missing author and with an unknown
    /// value for an unknown category.
    pub async fn create_book(&self, record: &BookRecord) -> AppResult<BookRecord> {
        let _guard = self.gate.write().await;
        let output = self
            .create_book_command
            .execute(CreateBookCommandInput {
                title: &record.title,
                author_ids: &record.author_ids,
                category: record.category.as_deref().unwrap_or_default(),
                description: &record.description,
                series_name: record.series_name.as_deref(),
                series_number: record.series_number,
            })
            .await?;
        Ok(output.book)
    }

    pub async fn list_books(&self) -> AppResult<Vec<BookRecord>> {
        self.query(&BookFilter::All).await
    }

    /// Returns the books that belong to any series.
    pub async fn list_books_in_series(&self) -> AppResult<Vec<BookRecord>> {
        self.query(&BookFilter::InSeries).await
    }

    pub async fn list_books_by_series_name(&self, name: &str) -> AppResult<Vec<BookRecord>> {
        self.query(&BookFilter::SeriesName(name.to_string())).await
    }

    pub async fn list_books_by_series_name_and_number(
        &self,
        name: &str,
        number: i32,
    ) -> AppResult<Vec<BookRecord>> {
        self.query(&BookFilter::Series {
            name: name.to_string(),
            number,
        })
        .await
    }

    pub async fn list_books_by_title(&self, title: &str) -> AppResult<Vec<BookRecord>> {
        self.query(&BookFilter::Title(title.to_string())).await
    }

    /// Returns the book, or `None` if it does not exist.
    pub async fn get_book(&self, id: BookId) -> AppResult<Option<BookRecord>> {
        let _guard = self.gate.read().await;
        self.book_query_manager.query_one(id).await
    }

    pub async fn delete_book(&self, id: BookId) -> AppResult<()> {
        let _guard = self.gate.write().await;
        self.delete_book_command.execute(id).await?;
        Ok(())
    }

    /// Replaces the fields and the authors of the book.
    ///
    /// # Errors
    ///
    /// Fails with not found if the book or a requested author does not exist,
    /// with an id mismatch if `record` names another book, and with an
    /// unknown value for an unknown category or status.
    pub async fn update_book(&self, id: BookId, record: &BookRecord) -> AppResult<BookRecord> {
        let _guard = self.gate.write().await;
        let output = self
            .update_book_command
            .execute(UpdateBookCommandInput {
                id,
                record_id: record.id,
                title: &record.title,
                author_ids: &record.author_ids,
                category: record.category.as_deref(),
                description: &record.description,
                series_name: record.series_name.as_deref(),
                series_number: record.series_number,
                status: record.status.as_deref(),
            })
            .await?;
        Ok(output.book)
    }

    async fn query(&self, filter: &BookFilter) -> AppResult<Vec<BookRecord>> {
        let _guard = self.gate.read().await;
        self.book_query_manager.query_list(filter).await
    }
}
