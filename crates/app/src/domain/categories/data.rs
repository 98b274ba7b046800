//! Categories Data

use crate::domain::categories::records::CategoryUuid;

/// New Category Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewCategory {
    pub uuid: CategoryUuid,
    pub name: String,
    pub description: Option<String>,
    pub sort_order: i64,
    pub is_active: bool,
}

impl NewCategory {
    /// An active category with the given name, sorted first.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            uuid: CategoryUuid::new(),
            name: name.into(),
            description: None,
            sort_order: 0,
            is_active: true,
        }
    }
}

/// Category Update Data
///
/// Absent fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub sort_order: Option<i64>,
    pub is_active: Option<bool>,
}
