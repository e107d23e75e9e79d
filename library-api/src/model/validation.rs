//! Create and update rules for submitted records.
//!
//! Both record shapes are shared between creation and update; each operation
//! has its own rule set. Every rule is checked so callers receive all
//! violations at once.

use std::fmt::{self, Display, Formatter};

use itertools::Itertools;
use thiserror::Error;

use crate::model::{author::AuthorRecord, book::BookRecord, error::EntityKind};

/// Operation a record was validated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationOperation {
    Create,
    Update,
}

/// A single broken field rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    /// Transfer field name
    pub field: &'static str,
    /// Human readable description of the rule
    pub message: &'static str,
}

/// Rejected record with every violation found.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub subject: EntityKind,
    pub operation: ValidationOperation,
    pub violations: Vec<FieldViolation>,
}

impl Display for ValidationOperation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Create => "create",
            Self::Update => "update",
        })
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} validation failed", self.subject, self.operation)?;
        if !self.violations.is_empty() {
            write!(
                f,
                ":\n{}",
                self.violations
                    .iter()
                    .map(|violation| violation.message)
                    .join("\n")
            )?;
        }
        Ok(())
    }
}

impl ValidationError {
    /// Rejection of a book without authors, raised outside the record rules.
    pub fn empty_authors(operation: ValidationOperation) -> Self {
        Self {
            subject: EntityKind::Book,
            operation,
            violations: vec![FieldViolation {
                field: BookRecord::AUTHOR_IDS_FIELD_NAME,
                message: EMPTY_AUTHORS_MESSAGE,
            }],
        }
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.violations
            .iter()
            .any(|violation| violation.field == field)
    }
}

struct Violations {
    subject: EntityKind,
    operation: ValidationOperation,
    violations: Vec<FieldViolation>,
}

impl Violations {
    fn new(subject: EntityKind, operation: ValidationOperation) -> Self {
        Self {
            subject,
            operation,
            violations: Vec::new(),
        }
    }

    fn require(&mut self, valid: bool, field: &'static str, message: &'static str) -> &mut Self {
        if !valid {
            self.violations.push(FieldViolation { field, message });
        }
        self
    }

    fn finish(&mut self) -> Result<(), ValidationError> {
        if self.violations.is_empty() {
            return Ok(());
        }
        Err(ValidationError {
            subject: self.subject,
            operation: self.operation,
            violations: std::mem::take(&mut self.violations),
        })
    }
}

const EMPTY_AUTHORS_MESSAGE: &str = "Authors list cannot be empty.";

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

impl AuthorRecord {
    pub const ID_FIELD_NAME: &str = "id";
    pub const FIRST_NAME_FIELD_NAME: &str = "firstName";
    pub const LAST_NAME_FIELD_NAME: &str = "lastName";
    pub const BOOK_IDS_FIELD_NAME: &str = "bookIds";

    /// Checks the rules of a new author.
    ///
    /// # Errors
    ///
    /// Returns every violated rule if the record is not acceptable.
    pub fn validate_for_create(&self) -> Result<(), ValidationError> {
        Violations::new(EntityKind::Author, ValidationOperation::Create)
            .require(
                self.id.is_none(),
                Self::ID_FIELD_NAME,
                "ID must be null when creating a new author.",
            )
            .require(
                !is_blank(&self.first_name),
                Self::FIRST_NAME_FIELD_NAME,
                "First name cannot be blank.",
            )
            .require(
                !is_blank(&self.last_name),
                Self::LAST_NAME_FIELD_NAME,
                "Last name cannot be blank.",
            )
            .require(
                self.book_ids.is_none(),
                Self::BOOK_IDS_FIELD_NAME,
                "Books IDs must be null when creating a new author.",
            )
            .finish()
    }

    /// Checks the rules of an author replacement.
    ///
    /// # Errors
    ///
    /// Returns every violated rule if the record is not acceptable.
    pub fn validate_for_update(&self) -> Result<(), ValidationError> {
        Violations::new(EntityKind::Author, ValidationOperation::Update)
            .require(
                self.id.is_some(),
                Self::ID_FIELD_NAME,
                "ID is required when updating an author.",
            )
            .require(
                !is_blank(&self.first_name),
                Self::FIRST_NAME_FIELD_NAME,
                "First name cannot be blank.",
            )
            .require(
                !is_blank(&self.last_name),
                Self::LAST_NAME_FIELD_NAME,
                "Last name cannot be blank.",
            )
            .require(
                self.book_ids.is_some(),
                Self::BOOK_IDS_FIELD_NAME,
                "Books IDs cannot be null when updating an author.",
            )
            .finish()
    }
}

impl BookRecord {
    pub const ID_FIELD_NAME: &str = "id";
    pub const TITLE_FIELD_NAME: &str = "title";
    pub const AUTHOR_IDS_FIELD_NAME: &str = "authorIds";
    pub const CATEGORY_FIELD_NAME: &str = "category";
    pub const DESCRIPTION_FIELD_NAME: &str = "description";
    pub const STATUS_FIELD_NAME: &str = "status";

    /// Checks the rules of a new book.
    ///
    /// # Errors
    ///
    /// Returns every violated rule if the record is not acceptable.
    pub fn validate_for_create(&self) -> Result<(), ValidationError> {
        let mut violations = Violations::new(EntityKind::Book, ValidationOperation::Create);
        violations.require(
            self.id.is_none(),
            Self::ID_FIELD_NAME,
            "ID must be null when creating a new book.",
        );
        self.require_content(&mut violations);
        violations
            .require(
                self.status.is_none(),
                Self::STATUS_FIELD_NAME,
                "Status must be null when creating a new book.",
            )
            .finish()
    }

    /// Checks the rules of a book replacement.
    ///
    /// # Errors
    ///
    /// Returns every violated rule if the record is not acceptable.
    pub fn validate_for_update(&self) -> Result<(), ValidationError> {
        let mut violations = Violations::new(EntityKind::Book, ValidationOperation::Update);
        violations.require(
            self.id.is_some(),
            Self::ID_FIELD_NAME,
            "ID is required when updating a book.",
        );
        self.require_content(&mut violations);
        violations
            .require(
                self.status.is_some(),
                Self::STATUS_FIELD_NAME,
                "Status is required when updating a book.",
            )
            .finish()
    }

    fn require_content(&self, violations: &mut Violations) {
        violations
            .require(
                !is_blank(&self.title),
                Self::TITLE_FIELD_NAME,
                "Title cannot be blank.",
            )
            .require(
                !self.author_ids.is_empty(),
                Self::AUTHOR_IDS_FIELD_NAME,
                EMPTY_AUTHORS_MESSAGE,
            )
            .require(
                self.category.is_some(),
                Self::CATEGORY_FIELD_NAME,
                "Category cannot be null.",
            )
            .require(
                !is_blank(&self.description),
                Self::DESCRIPTION_FIELD_NAME,
                "Description cannot be blank.",
            );
    }
}
