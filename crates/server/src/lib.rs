//! HTTP server for the live translation service

pub mod error;
pub mod http;
pub mod state;

pub use error::ServerError;
pub use http::create_router;
pub use state::AppState;
