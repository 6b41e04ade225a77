//! # Console Core
//! 
//! Domain entities, repository ports, and the menu/dashboard composition
//! services of the study console.

pub mod clock;
pub mod domain;
pub mod services;
pub mod repositories;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use error::DomainError;
