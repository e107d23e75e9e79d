use std::{
    collections::{BTreeSet, HashMap},
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
};

use async_trait::async_trait;
use itertools::Itertools;
use library_api::model::author::AuthorId;
use tokio::sync::RwLock;

use crate::{
    author::repository::{AuthorEntity, AuthorEntityInsert, AuthorRepository},
    error::AppResult,
};

/// In-memory implementation of the author repository.
#[derive(Debug)]
pub struct MemoryAuthorRepository {
    authors: Arc<RwLock<HashMap<AuthorId, AuthorEntity>>>,
    next_id: AtomicU64,
}

impl Default for MemoryAuthorRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryAuthorRepository {
    /// Creates a new empty memory repository.
    pub fn new() -> Self {
        Self {
            authors: Arc::new(RwLock::new(HashMap::new())),
            next_id: AtomicU64::new(1),
        }
    }

    /// Creates a new memory repository with initial data.
    ///
    /// # Arguments
    ///
    /// * `authors` - Initial list of authors to populate the repository
    pub fn with_data(authors: Vec<AuthorEntity>) -> Self {
        let next_id = authors.iter().map(|author| author.id.0).max().unwrap_or(0) + 1;
        Self {
            authors: Arc::new(RwLock::new(
                authors
                    .into_iter()
                    .map(|author| (author.id, author))
                    .collect(),
            )),
            next_id: AtomicU64::new(next_id),
        }
    }
}

#[async_trait]
impl AuthorRepository for MemoryAuthorRepository {
    async fn insert(&self, record: AuthorEntityInsert) -> AppResult<AuthorEntity> {
        let author = AuthorEntity {
            id: AuthorId::new(self.next_id.fetch_add(1, Ordering::Relaxed)),
            first_name: record.first_name,
            last_name: record.last_name,
            book_ids: BTreeSet::new(),
        };
        self.authors.write().await.insert(author.id, author.clone());
        Ok(author)
    }

    async fn save(&self, author: &AuthorEntity) -> AppResult<()> {
        self.authors.write().await.insert(author.id, author.clone());
        Ok(())
    }

    async fn select(&self, id: AuthorId) -> AppResult<Option<AuthorEntity>> {
        let authors = self.authors.read().await;
        Ok(authors.get(&id).cloned())
    }

    async fn select_multiple(&self, ids: &[AuthorId]) -> AppResult<Vec<AuthorEntity>> {
        let authors = self.authors.read().await;
        Ok(ids
            .iter()
            .unique()
            .filter_map(|id| authors.get(id))
            .sorted_unstable_by_key(|author| author.id)
            .cloned()
            .collect())
    }

    async fn select_all(&self) -> AppResult<Vec<AuthorEntity>> {
        let authors = self.authors.read().await;
        Ok(authors
            .values()
            .sorted_unstable_by_key(|author| author.id)
            .cloned()
            .collect())
    }

    async fn delete(&self, id: AuthorId) -> AppResult<bool> {
        Ok(self.authors.write().await.remove(&id).is_some())
    }
}
