//! Handler helpers for depot lookups and error mapping

mod depot;
mod result;

pub(crate) use self::{depot::DepotExt as _, result::ResultExt as _};
