//! HTTP interface of the catalog.
//!
//! Routes are resolved by [`router::Router`], which works on plain request
//! parts so it can be driven without a socket. [`server::serve`] binds it to
//! a TCP listener.

/// Request body and URL decoding.
pub mod body;

/// Response construction helpers.
pub mod response;

/// Route table.
pub mod router;

/// Connection loop.
pub mod server;
