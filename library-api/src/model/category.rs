use crate::model::error::{CatalogError, CatalogResult, ValueKind};

impl_catalog_enum! {
    /// Subject classification of a book.
    BookCategory (ValueKind::Category) {
        Fiction => "FICTION",
        Science => "SCIENCE",
        Art => "ART",
        History => "HISTORY",
        Biography => "BIOGRAPHY",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_ignores_case() {
        for text in ["FICTION", "fiction", "Fiction", "fIcTiOn"] {
            assert_eq!(BookCategory::parse(text).unwrap(), BookCategory::Fiction);
        }
        assert_eq!(
            "biography".parse::<BookCategory>().unwrap(),
            BookCategory::Biography
        );
    }

    #[test]
    fn parse_unknown() {
        let err = BookCategory::parse("unknown").unwrap_err();
        assert_eq!(
            err,
            CatalogError::UnknownValue {
                kind: ValueKind::Category,
                value: "unknown".into(),
            }
        );
        assert_eq!(err.to_string(), "Unknown category: unknown");

        // No trimming or partial matches.
        assert!(BookCategory::parse(" art").is_err());
        assert!(BookCategory::parse("Sci").is_err());
        assert!(BookCategory::parse("").is_err());
    }

    #[test]
    fn format_capitalizes() {
        assert_eq!(BookCategory::Fiction.format(), "Fiction");
        assert_eq!(BookCategory::Art.format(), "Art");
        assert_eq!(BookCategory::Biography.to_string(), "Biography");
    }

    #[test]
    fn parse_inverts_format() {
        for &category in BookCategory::ALL {
            assert_eq!(BookCategory::parse(&category.format()).unwrap(), category);
            assert_eq!(BookCategory::parse(category.name()).unwrap(), category);
        }
        assert_eq!(BookCategory::ALL.len(), 5);
    }
}
