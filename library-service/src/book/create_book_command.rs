use itertools::Itertools;
use library_api::model::{
    author::AuthorId,
    book::BookRecord,
    category::BookCategory,
    error::CatalogError,
    status::BookStatus,
    validation::{ValidationError, ValidationOperation},
};
use tracing::info;

use crate::{
    author::repository::AuthorRepositoryArc,
    book::repository::{BookEntityInsert, BookRepositoryArc},
    error::AppResult,
};

/// Command for creating new books.
///
/// Every named author must exist before anything is stored. New books are
/// always available, whatever status the caller sent.
#[derive(Debug, Clone)]
pub struct CreateBookCommand {
    author_repository: AuthorRepositoryArc,
    book_repository: BookRepositoryArc,
}

/// Input data for creating a book.
#[derive(Debug, Clone)]
pub struct CreateBookCommandInput<'a> {
    /// Title of the book
    pub title: &'a str,
    /// Authors of the book, repeated ids are collapsed
    pub author_ids: &'a [AuthorId],
    /// Category name, matched case-insensitively
    pub category: &'a str,
    /// Description of the book
    pub description: &'a str,
    /// Optional series name
    pub series_name: Option<&'a str>,
    /// Optional position within the series
    pub series_number: Option<i32>,
}

/// Output data from book creation.
#[derive(Debug, Clone)]
pub struct CreateBookCommandOutput {
    /// The created book with its assigned id
    pub book: BookRecord,
}

impl CreateBookCommand {
    /// Creates a new `CreateBookCommand`.
    ///
    /// # Arguments
    ///
    /// * `author_repository` - Repository the authors are resolved from
    /// * `book_repository` - Repository for persisting book data
    pub fn new(author_repository: AuthorRepositoryArc, book_repository: BookRepositoryArc) -> Self {
        Self {
            author_repository,
            book_repository,
        }
    }

    /// Executes the book creation command.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownValue`] for an unknown category and
    /// [`CatalogError::NotFound`] for the first author that does not exist.
    #[tracing::instrument]
    pub async fn execute(
        &self,
        input: CreateBookCommandInput<'_>,
    ) -> AppResult<CreateBookCommandOutput> {
        if input.author_ids.is_empty() {
            return Err(ValidationError::empty_authors(ValidationOperation::Create).into());
        }
        let category = BookCategory::parse(input.category)?;

        let author_ids = input.author_ids.iter().copied().unique().collect_vec();
        let mut authors = Vec::with_capacity(author_ids.len());
        for &author_id in &author_ids {
            let author = self
                .author_repository
                .select(author_id)
                .await?
                .ok_or_else(|| CatalogError::author_not_found(author_id))?;
            authors.push(author);
        }

        let book = self
            .book_repository
            .insert(BookEntityInsert {
                title: input.title.to_string(),
                author_ids,
                category,
                description: input.description.to_string(),
                series_name: input.series_name.map(ToString::to_string),
                series_number: input.series_number,
                status: BookStatus::Available,
            })
            .await?;

        for mut author in authors {
            author.link_book(book.id);
            self.author_repository.save(&author).await?;
        }

        info!(
            book_id = %book.id,
            author_ids = ?book.author_ids,
            "Successfully created book"
        );

        Ok(CreateBookCommandOutput { book: book.into() })
    }
}
