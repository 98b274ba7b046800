//! Admin Authentication

mod errors;
mod service;
mod token;

pub use errors::*;
pub use service::*;
pub use token::*;
