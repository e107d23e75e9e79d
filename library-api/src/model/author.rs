use std::{
    collections::BTreeSet,
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::model::{book::BookId, error::CatalogError};

/// Store-assigned author identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorId(pub u64);

/// Flat transfer form of an author.
///
/// Books are referenced by identifier only. The same shape is used for
/// creation (no `id`, no `book_ids`) and for updates (both required); see
/// [`AuthorRecord::validate_for_create`] and
/// [`AuthorRecord::validate_for_update`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorRecord {
    #[serde(default)]
    pub id: Option<AuthorId>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default, alias = "booksIds")]
    pub book_ids: Option<BTreeSet<BookId>>,
}

impl AuthorId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

impl Display for AuthorId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for AuthorId {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self).map_err(|_| CatalogError::InvalidId {
            value: s.to_string(),
        })
    }
}

impl AuthorRecord {
    pub fn new<F: Into<String>, L: Into<String>>(first_name: F, last_name: L) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            book_ids: None,
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: AuthorId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn with_book_ids<I: IntoIterator<Item = BookId>>(mut self, book_ids: I) -> Self {
        self.book_ids = Some(book_ids.into_iter().collect());
        self
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn parse_id() {
        assert_eq!("17".parse::<AuthorId>().unwrap(), AuthorId(17));
        assert_eq!(
            "authors/17".parse::<AuthorId>().unwrap_err(),
            CatalogError::InvalidId {
                value: "authors/17".into()
            }
        );
        assert!("-1".parse::<AuthorId>().is_err());
    }

    #[test]
    fn serialize() {
        let record = AuthorRecord::new("Ursula", "Le Guin")
            .with_id(AuthorId(3))
            .with_book_ids([BookId(9), BookId(2)]);
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({
                "id": 3,
                "firstName": "Ursula",
                "lastName": "Le Guin",
                "bookIds": [2, 9],
            })
        );
    }

    #[test]
    fn deserialize() {
        let record: AuthorRecord =
            serde_json::from_value(json!({ "firstName": "Ursula" })).unwrap();
        assert_eq!(record, AuthorRecord::new("Ursula", ""));

        let record: AuthorRecord = serde_json::from_value(json!({
            "id": 3,
            "firstName": "Ursula",
            "lastName": "Le Guin",
            "booksIds": [4, 4, 1],
        }))
        .unwrap();
        assert_eq!(
            record.book_ids,
            Some(BTreeSet::from([BookId(1), BookId(4)]))
        );
    }
}
