use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::model::{author::AuthorId, error::CatalogError};

/// Store-assigned book identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(pub u64);

/// Flat transfer form of a book.
///
/// Category and status travel as strings and are parsed by the catalog, so
/// an unknown value is reported as a typed error rather than a body decoding
/// failure. Records produced by the catalog always carry the canonical
/// spelling (`"Fiction"`, `"Available"`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRecord {
    #[serde(default)]
    pub id: Option<BookId>,
    #[serde(default)]
    pub title: String,
    #[serde(default, alias = "authorsIds")]
    pub author_ids: Vec<AuthorId>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub series_name: Option<String>,
    #[serde(default)]
    pub series_number: Option<i32>,
    #[serde(default)]
    pub status: Option<String>,
}

impl BookId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

impl Display for BookId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for BookId {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self).map_err(|_| CatalogError::InvalidId {
            value: s.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn parse_id() {
        assert_eq!("5".parse::<BookId>().unwrap(), BookId(5));
        assert!("five".parse::<BookId>().is_err());
    }

    #[test]
    fn deserialize() {
        let record: BookRecord = serde_json::from_value(json!({
            "title": "The Dispossessed",
            "authorsIds": [1, 2],
            "category": "fiction",
            "description": "An ambiguous utopia.",
            "seriesName": "Hainish Cycle",
            "seriesNumber": 6,
        }))
        .unwrap();
        assert_eq!(record.id, None);
        assert_eq!(record.author_ids, vec![AuthorId(1), AuthorId(2)]);
        assert_eq!(record.category.as_deref(), Some("fiction"));
        assert_eq!(record.series_number, Some(6));
        assert_eq!(record.status, None);
    }

    #[test]
    fn serialize() {
        let record = BookRecord {
            id: Some(BookId(1)),
            title: "Dune".into(),
            author_ids: vec![AuthorId(7)],
            category: Some("Fiction".into()),
            description: "Spice.".into(),
            series_name: None,
            series_number: None,
            status: Some("Available".into()),
        };
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({
                "id": 1,
                "title": "Dune",
                "authorIds": [7],
                "category": "Fiction",
                "description": "Spice.",
                "seriesName": null,
                "seriesNumber": null,
                "status": "Available",
            })
        );
    }
}
