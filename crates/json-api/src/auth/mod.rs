//! Admin gate and session endpoints

mod credentials;
pub(crate) mod login;
pub(crate) mod logout;
pub(crate) mod middleware;

pub(crate) use credentials::*;
