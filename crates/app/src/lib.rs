//! Storefront domain services, persistence and admin sessions.

pub mod auth;
mod columns;
pub mod context;
pub mod database;
pub mod domain;
pub mod import;

#[cfg(test)]
mod test;

mod uuids;

pub use uuids::TypedUuid;
