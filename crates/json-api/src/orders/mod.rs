//! Orders

mod errors;
mod filter;
mod handlers;

pub(crate) use errors::into_status_error;
pub(crate) use filter::order_filter;
pub(crate) use handlers::*;
