use std::convert::Infallible;

use http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use hyper::body::Incoming;
use itertools::Itertools;
use library_api::model::{author::AuthorId, book::BookId};
use tracing::{debug, info};

use crate::{
    Catalog,
    author::adapter::AuthorAdapter,
    book::adapter::BookAdapter,
    error::{AppError, AppResult},
    http::{
        body::{decode_segment, query_param},
        response::{self, HttpResponse},
    },
};

const TITLE_PARAM: &str = "title";

/// Route table of the catalog.
#[derive(Debug, Clone)]
pub struct Router {
    author_adapter: AuthorAdapter,
    book_adapter: BookAdapter,
}

impl Router {
    pub fn new(catalog: &Catalog) -> Self {
        Router {
            author_adapter: AuthorAdapter::new(catalog.author_service.clone()),
            book_adapter: BookAdapter::new(catalog.book_service.clone()),
        }
    }

    /// Serves a request received by the server.
    pub async fn handle(&self, request: Request<Incoming>) -> Result<HttpResponse, Infallible> {
        let (parts, body) = request.into_parts();
        let body = match body.collect().await {
            Ok(collected) => collected.to_bytes(),
            Err(err) => {
                debug!(error = %err, "Failed to read request body");
                return Ok(response::from_error(&AppError::BadRequest(
                    "Failed to read request body".into(),
                )));
            }
        };

        let response = self
            .route(&parts.method, parts.uri.path(), parts.uri.query(), &body)
            .await;
        info!(
            method = %parts.method,
            path = %parts.uri.path(),
            status = response.status().as_u16(),
            "Handled request"
        );
        Ok(response)
    }

    /// Resolves a request to its handler and renders the outcome.
    pub async fn route(
        &self,
        method: &Method,
        path: &str,
        query: Option<&str>,
        body: &[u8],
    ) -> HttpResponse {
        match self.dispatch(method, path, query, body).await {
            Ok(response) => response,
            Err(err) => response::from_error(&err),
        }
    }

    async fn dispatch(
        &self,
        method: &Method,
        path: &str,
        query: Option<&str>,
        body: &[u8],
    ) -> AppResult<HttpResponse> {
        let segments = path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(decode_segment)
            .collect::<AppResult<Vec<_>>>()?;
        let segments = segments.iter().map(String::as_str).collect_vec();

        let authors = &self.author_adapter;
        let books = &self.book_adapter;

        match (segments.as_slice(), method) {
            (["authors"], &Method::GET) => authors.list_authors().await,
            (["authors"], _) => Ok(response::method_not_allowed("GET")),

            (["authors", "new"], &Method::POST) => authors.create_author(body).await,
            (["authors", "new"], _) => Ok(response::method_not_allowed("POST")),

            (["authors", id], &Method::GET) => authors.get_author(id.parse::<AuthorId>()?).await,
            (["authors", id], &Method::PUT) => {
                authors.update_author(id.parse::<AuthorId>()?, body).await
            }
            (["authors", id], &Method::DELETE) => {
                authors.delete_author(id.parse::<AuthorId>()?).await
            }
            (["authors", _], _) => Ok(response::method_not_allowed("GET, PUT, DELETE")),

            (["authors", id, "books"], &Method::GET) => {
                authors.get_author_books(id.parse::<AuthorId>()?).await
            }
            (["authors", _, "books"], _) => Ok(response::method_not_allowed("GET")),

            (["books"], &Method::GET) => {
                let title = query_param(query, TITLE_PARAM)?;
                books.list_books(title.as_deref()).await
            }
            (["books"], _) => Ok(response::method_not_allowed("GET")),

            (["books", "new"], &Method::POST) => books.create_book(body).await,
            (["books", "new"], _) => Ok(response::method_not_allowed("POST")),

            (["books", "series"], &Method::GET) => books.list_books_in_series().await,
            (["books", "series", name], &Method::GET) => {
                books.list_books_by_series_name(name).await
            }
            (["books", "series", name, number], &Method::GET) => {
                let number = number.parse::<i32>().map_err(|_| {
                    AppError::BadRequest(format!("Invalid series number `{number}`"))
                })?;
                books
                    .list_books_by_series_name_and_number(name, number)
                    .await
            }
            (["books", "series", ..], _) if segments.len() <= 4 => {
                Ok(response::method_not_allowed("GET"))
            }

            (["books", id], &Method::GET) => books.get_book(id.parse::<BookId>()?).await,
            (["books", id], &Method::PUT) => books.update_book(id.parse::<BookId>()?, body).await,
            (["books", id], &Method::DELETE) => books.delete_book(id.parse::<BookId>()?).await,
            (["books", _], _) => Ok(response::method_not_allowed("GET, PUT, DELETE")),

            _ => Ok(response::empty(StatusCode::NOT_FOUND)),
        }
    }
}
