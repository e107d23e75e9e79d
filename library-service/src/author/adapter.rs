use http::StatusCode;
use library_api::model::author::{AuthorId, AuthorRecord};

use crate::{
    author::service::AuthorService,
    error::AppResult,
    http::{
        body::decode_json,
        response::{self, HttpResponse},
    },
};

/// Translates author requests into service calls.
///
/// Payloads are checked against the create and update rules here, before the
/// service sees them.
#[derive(Debug, Clone)]
pub struct AuthorAdapter {
    author_service: AuthorService,
}

impl AuthorAdapter {
    pub fn new(author_service: AuthorService) -> Self {
        AuthorAdapter { author_service }
    }

    #[tracing::instrument(skip(body))]
    pub async fn create_author(&self, body: &[u8]) -> AppResult<HttpResponse> {
        let record: AuthorRecord = decode_json(body)?;
        record.validate_for_create()?;

        let author = self
            .author_service
            .create_author(&record.first_name, &record.last_name)
            .await?;

        response::json(StatusCode::CREATED, &author)
    }

    #[tracing::instrument]
    pub async fn list_authors(&self) -> AppResult<HttpResponse> {
        response::json_list(&self.author_service.list_authors().await?)
    }

    #[tracing::instrument]
    pub async fn get_author(&self, id: AuthorId) -> AppResult<HttpResponse> {
        match self.author_service.get_author(id).await? {
            Some(author) => response::json(StatusCode::OK, &author),
            None => Ok(response::empty(StatusCode::NOT_FOUND)),
        }
    }

    #[tracing::instrument]
    pub async fn get_author_books(&self, id: AuthorId) -> AppResult<HttpResponse> {
        response::json_list(&self.author_service.get_author_books(id).await?)
    }

    #[tracing::instrument]
    pub async fn delete_author(&self, id: AuthorId) -> AppResult<HttpResponse> {
        self.author_service.delete_author(id).await?;
        Ok(response::empty(StatusCode::NO_CONTENT))
    }

    #[tracing::instrument(skip(body))]
    pub async fn update_author(&self, id: AuthorId, body: &[u8]) -> AppResult<HttpResponse> {
        let record: AuthorRecord = decode_json(body)?;
        record.validate_for_update()?;

        self.author_service.update_author(id, &record).await?;
        Ok(response::empty(StatusCode::OK))
    }
}
