//! Shop Settings

pub mod errors;
pub mod models;
mod repository;
pub mod service;

pub use errors::SettingsServiceError;
pub use service::*;
