//! Author management module.
//!
//! Provides the author operations of the catalog including:
//! - HTTP adapter translating requests into service calls
//! - Command handlers for create, update, and delete operations
//! - Query manager for retrieving author data
//! - Repository abstraction for data persistence

/// HTTP adapter for authors.
pub mod adapter;

/// Author creation command handler.
pub mod create_author_command;

/// Author deletion command handler.
pub mod delete_author_command;

/// Author query manager for data retrieval.
pub mod query_manager;

/// Author repository abstraction and implementations.
pub mod repository;

/// Author operations run under the transaction gate.
pub mod service;

/// Author update command handler.
pub mod update_author_command;
