//! Customer Session Model

use serde::{Deserialize, Serialize};

/// The active dine-in session
///
/// At most one session exists at a time; it is a plain value holder
/// and does not check that the referenced table or order exists.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CustomerSession {
    pub customer_name: String,
    pub customer_phone: String,
    pub guests: i32,
    /// Assigned table id, once seated
    pub table: Option<i64>,
    /// Order id produced by checkout
    pub order_id: Option<String>,
}

/// Seating payload: the three customer fields, nothing else
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerInfo {
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub guests: i32,
}

impl CustomerInfo {
    pub fn new(name: impl Into<String>, phone: impl Into<String>, guests: i32) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            guests,
        }
    }
}
