use library_api::model::author::AuthorRecord;
use tracing::info;

use crate::{
    author::repository::{AuthorEntityInsert, AuthorRepositoryArc},
    error::AppResult,
};

/// Command for creating new authors.
///
/// New authors start without books; links are added by updating the author
/// or by creating books that name it.
#[derive(Debug, Clone)]
pub struct CreateAuthorCommand {
    author_repository: AuthorRepositoryArc,
}

/// Input data for creating an author.
#[derive(Debug, Clone)]
pub struct CreateAuthorCommandInput<'a> {
    /// First name of the author
    pub first_name: &'a str,
    /// Last name of the author
    pub last_name: &'a str,
}

/// Output data from author creation.
#[derive(Debug, Clone)]
pub struct CreateAuthorCommandOutput {
    /// The created author with its assigned id
    pub author: AuthorRecord,
}

impl CreateAuthorCommand {
    /// Creates a new `CreateAuthorCommand`.
    ///
    /// # Arguments
    ///
    /// * `author_repository` - Repository for persisting author data
    pub fn new(author_repository: AuthorRepositoryArc) -> Self {
        Self { author_repository }
    }

    /// Executes the author creation command.
    ///
    /// # Errors
    ///
    /// Returns an error if the author cannot be stored.
    #[tracing::instrument]
    pub async fn execute(
        &self,
        input: CreateAuthorCommandInput<'_>,
    ) -> AppResult<CreateAuthorCommandOutput> {
        let author = self
            .author_repository
            .insert(AuthorEntityInsert {
                first_name: input.first_name.to_string(),
                last_name: input.last_name.to_string(),
            })
            .await?;

        info!(author_id = %author.id, "Successfully created author");

        Ok(CreateAuthorCommandOutput {
            author: author.into(),
        })
    }
}
