use http::StatusCode;
use library_api::model::{error::CatalogError, validation::ValidationError};
use thiserror::Error;

/// Application error types.
///
/// Represents all possible errors that can occur in the library service.
#[derive(Debug, Error)]
pub enum AppError {
    /// Internal application error.
    ///
    /// Represents unexpected failures of the store or the infrastructure.
    #[error("internal error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),

    /// Catalog error.
    ///
    /// Represents the typed failures of the catalog core.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Malformed request.
    ///
    /// Represents input the HTTP layer could not decode.
    #[error("{0}")]
    BadRequest(String),
}

/// Application result type.
///
/// Type alias for Result with `AppError` as the error type.
pub type AppResult<T> = Result<T, AppError>;

macro_rules! impl_internal_errors {
    ( $( $type:ty ),* $(,)? ) => {
        $(
        impl From<$type> for AppError {
            fn from(err: $type) -> Self {
                AppError::Internal(Box::new(err))
            }
        }
        )*
    };
}
impl_internal_errors!(
    config::ConfigError,
    std::io::Error,
    hyper::Error,
    http::Error,
    serde_json::Error,
    tracing_subscriber::util::TryInitError,
);

macro_rules! impl_catalog_errors {
    ( $( $type:ty ),* $(,)? ) => {
        $(
        impl From<$type> for AppError {
            fn from(err: $type) -> Self {
                CatalogError::from(err).into()
            }
        }
        )*
    };
}
impl_catalog_errors!(ValidationError);

impl AppError {
    /// Returns the catalog error carried by this error, if any.
    pub fn as_catalog(&self) -> Option<&CatalogError> {
        match self {
            Self::Catalog(err) => Some(err),
            _ => None,
        }
    }

    /// Maps the error to the HTTP status reported to clients.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Catalog(err) if err.is_not_found() => StatusCode::NOT_FOUND,
            Self::Catalog(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
