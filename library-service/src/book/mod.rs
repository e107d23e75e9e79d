//! Book management module.
//!
//! Provides the book operations of the catalog including:
//! - HTTP adapter translating requests into service calls
//! - Command handlers for create, update, and delete operations
//! - Query manager for listing and filtering books
//! - Repository abstraction for data persistence

/// HTTP adapter for books.
pub mod adapter;

/// Book creation command handler.
pub mod create_book_command;

/// Book deletion command handler.
pub mod delete_book_command;

/// Book query manager for data retrieval.
pub mod query_manager;

/// Book repository abstraction and implementations.
pub mod repository;

/// Book operations run under the transaction gate.
pub mod service;

/// Book update command handler.
pub mod update_book_command;
