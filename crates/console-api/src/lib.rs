//! # Console API
//! 
//! HTTP handlers, extractors, and the response envelope of the study console.

pub mod handlers;
pub mod extract;
pub mod error;
pub mod response;
pub mod routes;
pub mod state;

pub use routes::router;
pub use state::AppState;

#[cfg(test)]
mod test_support;
