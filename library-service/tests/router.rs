mod common;

use common::Fixture;
use http::{Method, StatusCode, header::ALLOW};
use http_body_util::BodyExt;
use library_api::model::{author::AuthorRecord, book::BookRecord};
use library_service::http::{response::HttpResponse, router::Router};
use serde_json::{Value, json};

struct Client {
    fixture: Fixture,
    router: Router,
}

impl Client {
    fn new() -> Self {
        let fixture = Fixture::new();
        let router = Router::new(&fixture.catalog);
        Client { fixture, router }
    }

    async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> HttpResponse {
        let (path, query) = match uri.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (uri, None),
        };
        let body = body
            .map(|body| serde_json::to_vec(&body).unwrap())
            .unwrap_or_default();
        self.router.route(&method, path, query, &body).await
    }
}

async fn text(response: HttpResponse) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn json_body<T: serde::de::DeserializeOwned>(response: HttpResponse) -> T {
    serde_json::from_str(&text(response).await).unwrap()
}

#[tokio::test]
async fn authors() {
    let client = Client::new();

    let response = client.send(Method::GET, "/authors", None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = client
        .send(
            Method::POST,
            "/authors/new",
            Some(json!({ "firstName": "Ursula", "lastName": "Le Guin" })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let author: AuthorRecord = json_body(response).await;
    assert_eq!(author.id.map(|id| id.0), Some(1));

    let response = client.send(Method::GET, "/authors", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let authors: Vec<AuthorRecord> = json_body(response).await;
    assert_eq!(authors, vec![author.clone()]);

    let response = client.send(Method::GET, "/authors/1", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body::<AuthorRecord>(response).await, author);

    let response = client.send(Method::GET, "/authors/2", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(text(response).await.is_empty());

    let response = client.send(Method::GET, "/authors/1/books", None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = client.send(Method::GET, "/authors/2/books", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(text(response).await, "Author with id 2 not found");

    let response = client
        .send(
            Method::PUT,
            "/authors/1",
            Some(json!({ "id": 1, "firstName": "Ursula K.", "lastName": "Le Guin", "booksIds": [] })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        client
            .fixture
            .author(author.id.unwrap())
            .await
            .unwrap()
            .first_name,
        "Ursula K."
    );

    let response = client
        .send(
            Method::PUT,
            "/authors/1",
            Some(json!({ "id": 2, "firstName": "Ursula", "lastName": "Le Guin", "bookIds": [] })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(text(response).await, "Author id does not match");

    let response = client.send(Method::DELETE, "/authors/1", None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let response = client.send(Method::DELETE, "/authors/1", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn author_validation() {
    let client = Client::new();

    let response = client
        .send(
            Method::POST,
            "/authors/new",
            Some(json!({ "id": 4, "firstName": " ", "lastName": "Le Guin" })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        text(response).await,
        "Author create validation failed:\n\
         ID must be null when creating a new author.\n\
         First name cannot be blank."
    );

    let response = client
        .send(
            Method::PUT,
            "/authors/1",
            Some(json!({ "firstName": "Ursula", "lastName": "Le Guin" })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = client
        .router
        .route(&Method::POST, "/authors/new", None, b"{\"firstName\":")
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = client.send(Method::GET, "/authors/abc", None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn books() {
    let client = Client::new();
    let author_id = client.fixture.create_author("James S. A.", "Corey").await;

    let response = client.send(Method::GET, "/books", None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = client
        .send(
            Method::POST,
            "/books/new",
            Some(json!({
                "title": "Leviathan Wakes",
                "authorsIds": [author_id.0],
                "category": "fiction",
                "description": "A missing girl and a derelict ship.",
                "seriesName": "The Expanse",
                "seriesNumber": 1,
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let book: BookRecord = json_body(response).await;
    assert_eq!(book.status.as_deref(), Some("Available"));
    assert_eq!(book.category.as_deref(), Some("Fiction"));

    let response = client
        .send(
            Method::POST,
            "/books/new",
            Some(json!({
                "title": "Nemesis Games",
                "authorIds": [author_id.0],
                "category": "FICTION",
                "description": "The crew scatters.",
                "seriesName": "The Expanse",
                "seriesNumber": 5,
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = client.send(Method::GET, "/books/1", None).await;
    assert_eq!(json_body::<BookRecord>(response).await, book);
    let response = client.send(Method::GET, "/books/9", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = client
        .send(Method::GET, "/books?title=Leviathan%20Wakes", None)
        .await;
    assert_eq!(json_body::<Vec<BookRecord>>(response).await, vec![book.clone()]);
    let response = client.send(Method::GET, "/books?title=Babylon", None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = client.send(Method::GET, "/books/series", None).await;
    assert_eq!(json_body::<Vec<BookRecord>>(response).await.len(), 2);
    let response = client
        .send(Method::GET, "/books/series/The%20Expanse", None)
        .await;
    assert_eq!(json_body::<Vec<BookRecord>>(response).await.len(), 2);
    let response = client
        .send(Method::GET, "/books/series/The%20Expanse/5", None)
        .await;
    let books: Vec<BookRecord> = json_body(response).await;
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].title, "Nemesis Games");
    let response = client
        .send(Method::GET, "/books/series/The%20Expanse/five", None)
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = client
        .send(
            Method::PUT,
            "/books/1",
            Some(json!({
                "id": 1,
                "title": "Leviathan Wakes",
                "authorIds": [author_id.0],
                "category": "Fiction",
                "description": "A missing girl and a derelict ship.",
                "status": "borrowed",
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let stored = client
        .fixture
        .book(book.id.unwrap())
        .await
        .unwrap();
    assert_eq!(stored.status.as_deref(), Some("Borrowed"));
    assert_eq!(stored.series_name, None);

    let response = client
        .send(
            Method::PUT,
            "/books/1",
            Some(json!({
                "id": 1,
                "title": "Leviathan Wakes",
                "authorIds": [author_id.0],
                "category": "Poetry",
                "description": "A missing girl and a derelict ship.",
                "status": "borrowed",
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(text(response).await, "Unknown category: Poetry");

    let response = client.send(Method::DELETE, "/books/1", None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let response = client.send(Method::DELETE, "/books/1", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(text(response).await, "Book with id 1 not found");

    client.fixture.assert_symmetric().await;
}

#[tokio::test]
async fn book_validation() {
    let client = Client::new();

    let response = client
        .send(
            Method::POST,
            "/books/new",
            Some(json!({
                "title": "",
                "authorIds": [],
                "description": "Nothing yet.",
                "status": "Available",
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        text(response).await,
        "Book create validation failed:\n\
         Title cannot be blank.\n\
         Authors list cannot be empty.\n\
         Category cannot be null.\n\
         Status must be null when creating a new book."
    );

    let response = client
        .send(
            Method::POST,
            "/books/new",
            Some(json!({
                "title": "Orphan",
                "authorIds": [3],
                "category": "Art",
                "description": "Nobody wrote it.",
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(text(response).await, "Author with id 3 not found");
}

#[tokio::test]
async fn unknown_routes() {
    let client = Client::new();

    for uri in ["/", "/publishers", "/authors/1/books/2", "/books/series/a/1/x"] {
        let response = client.send(Method::GET, uri, None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
    }

    let response = client.send(Method::GET, "/authors/new", None).await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response.headers()[ALLOW], "POST");

    let response = client.send(Method::POST, "/books/1", None).await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

    let response = client.send(Method::DELETE, "/books/series", None).await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
