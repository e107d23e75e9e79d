//! Library catalog API.
//!
//! Transfer boundary of the catalog service. It includes:
//!
//! - Identifiers and flat transfer records for authors and books
//! - Book category and status vocabularies
//! - Create and update validation rules for submitted records
//! - The typed errors raised by the catalog core

pub mod model;
