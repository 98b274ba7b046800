//! Shop Settings Models

use jiff::Timestamp;

/// Seller details printed on receipts and shown on the storefront.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopSettings {
    pub shop_name: String,
    pub holder_name: String,

    /// Taxpayer identification number
    pub inn: String,

    pub registration_address: String,
    pub organization_address: String,
    pub email: String,
    pub phone: String,

    /// `None` until the settings have been saved once
    pub updated_at: Option<Timestamp>,
}

impl Default for ShopSettings {
    fn default() -> Self {
        Self {
            shop_name: "Smart Service".to_string(),
            holder_name: "Your name".to_string(),
            inn: "1234567890".to_string(),
            registration_address: "Registration address".to_string(),
            organization_address: "Organization address".to_string(),
            email: "email@example.com".to_string(),
            phone: "+79991234567".to_string(),
            updated_at: None,
        }
    }
}
