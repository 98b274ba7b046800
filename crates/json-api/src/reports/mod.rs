//! Reports

mod csv;
mod errors;
mod index;

pub(crate) use self::{csv::handler as csv_handler, index::handler as index_handler};
