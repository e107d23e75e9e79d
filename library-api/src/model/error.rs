use std::fmt::{self, Display, Formatter};

use thiserror::Error;

use crate::model::{author::AuthorId, book::BookId, validation::ValidationError};

/// Failures raised by the catalog core.
///
/// Callers translate these into user-facing responses. The core only carries
/// the kind of failure and enough context to identify the offending input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A referenced author or book does not exist.
    #[error("{kind} with id {id} not found")]
    NotFound { kind: EntityKind, id: u64 },

    /// The identifier addressed by the caller differs from the one embedded
    /// in the submitted record.
    #[error("{kind} id does not match")]
    IdMismatch { kind: EntityKind },

    /// A category or status string that names no vocabulary member.
    #[error("Unknown {kind}: {value}")]
    UnknownValue { kind: ValueKind, value: String },

    /// An identifier that could not be parsed.
    #[error("invalid identifier `{value}`")]
    InvalidId { value: String },

    /// A submitted record failed its create or update rules.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Kind of catalog entity an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Author,
    Book,
}

/// Vocabulary an unknown value was parsed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Category,
    Status,
}

impl CatalogError {
    pub fn author_not_found(id: AuthorId) -> Self {
        Self::NotFound {
            kind: EntityKind::Author,
            id: id.0,
        }
    }

    pub fn book_not_found(id: BookId) -> Self {
        Self::NotFound {
            kind: EntityKind::Book,
            id: id.0,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Author => "Author",
            Self::Book => "Book",
        })
    }
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Category => "category",
            Self::Status => "status",
        })
    }
}
