//! Model definitions for the catalog.
//!
//! This module contains the transfer records, closed vocabularies and error
//! types shared between the catalog core and its callers.

#[macro_use]
mod enumeration;

/// Author identifier and transfer record.
pub mod author;
/// Book identifier and transfer record.
pub mod book;
/// Book category vocabulary.
pub mod category;
/// Typed catalog errors.
pub mod error;
/// Book availability vocabulary.
pub mod status;
/// Create and update validation of transfer records.
pub mod validation;
