use crate::model::error::{CatalogError, CatalogResult, ValueKind};

impl_catalog_enum! {
    /// Availability state of a book.
    BookStatus (ValueKind::Status) {
        /// State assigned to every newly created book.
        Available => "AVAILABLE",
        Reserved => "RESERVED",
        Borrowed => "BORROWED",
        Overdue => "OVERDUE",
        Lost => "LOST",
    }
}

impl Default for BookStatus {
    fn default() -> Self {
        Self::Available
    }
}
