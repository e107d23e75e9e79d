use library_api::model::{
    author::{AuthorId, AuthorRecord},
    book::BookRecord,
};

use crate::{
    author::{
        create_author_command::{CreateAuthorCommand, CreateAuthorCommandInput},
        delete_author_command::DeleteAuthorCommand,
        query_manager::AuthorQueryManager,
        repository::AuthorRepositoryArc,
        update_author_command::{UpdateAuthorCommand, UpdateAuthorCommandInput},
    },
    book::repository::BookRepositoryArc,
    error::AppResult,
    relationship::reconciler::RelationshipReconciler,
    transaction::TransactionGate,
};

/// Author operations of the catalog.
///
/// Mutations hold the write side of the shared gate, queries the read side.
#[derive(Debug, Clone)]
pub struct AuthorService {
    gate: TransactionGate,
    author_query_manager: AuthorQueryManager,
    create_author_command: CreateAuthorCommand,
    update_author_command: UpdateAuthorCommand,
    delete_author_command: DeleteAuthorCommand,
}

impl AuthorService {
    pub fn new(
        gate: TransactionGate,
        author_repository: AuthorRepositoryArc,
        book_repository: BookRepositoryArc,
    ) -> Self {
        let reconciler =
            RelationshipReconciler::new(author_repository.clone(), book_repository.clone());
        AuthorService {
            gate,
            author_query_manager: AuthorQueryManager::new(
                author_repository.clone(),
                book_repository,
            ),
            create_author_command: CreateAuthorCommand::new(author_repository.clone()),
            update_author_command: UpdateAuthorCommand::new(
                author_repository.clone(),
                reconciler.clone(),
            ),
            delete_author_command: DeleteAuthorCommand::new(author_repository, reconciler),
        }
    }

    pub async fn create_author(&self, first_name: &str, last_name: &str) -> AppResult<AuthorRecord> {
        let _guard = self.gate.write().await;
        let output = self
            .create_author_command
            .execute(CreateAuthorCommandInput {
                first_name,
                last_name,
            })
            .await?;
        Ok(output.author)
    }

    pub async fn list_authors(&self) -> AppResult<Vec<AuthorRecord>> {
        let _guard = self.gate.read().await;
        self.author_query_manager.query_list().await
    }

    /// Returns the author, or `None` if it does not exist.
    pub async fn get_author(&self, id: AuthorId) -> AppResult<Option<AuthorRecord>> {
        let _guard = self.gate.read().await;
        self.author_query_manager.query_one(id).await
    }

    /// Returns the books of the author.
    ///
    /// # Errors
    ///
    /// Fails with not found if the author does not exist.
    pub async fn get_author_books(&self, id: AuthorId) -> AppResult<Vec<BookRecord>> {
        let _guard = self.gate.read().await;
        self.author_query_manager.query_books(id).await
    }

    pub async fn delete_author(&self, id: AuthorId) -> AppResult<()> {
        let _guard = self.gate.write().await;
        self.delete_author_command.execute(id).await?;
        Ok(())
    }

    /// Replaces the names and the book set of the author.
    ///
    /// # Errors
    ///
    /// Fails with not found if the author or a requested book does not exist,
    /// and with an id mismatch if `record` names another author.
    pub async fn update_author(&self, id: AuthorId, record: &AuthorRecord) -> AppResult<AuthorRecord> {
        let _guard = self.gate.write().await;
        let output = self
            .update_author_command
            .execute(UpdateAuthorCommandInput {
                id,
                record_id: record.id,
                first_name: &record.first_name,
                last_name: &record.last_name,
                book_ids: record.book_ids.as_ref(),
            })
            .await?;
        Ok(output.author)
    }
}
