//! # Console Shared
//! 
//! Shared configuration, telemetry, and helper types for the study console.

pub mod constants;
pub mod types;
pub mod utils;
pub mod telemetry;
pub mod config;
pub mod error;

pub use types::*;
pub use error::AppError;
