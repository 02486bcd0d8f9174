//! Cart Model

use serde::{Deserialize, Serialize};

/// A line in the shopping cart
///
/// Repeated adds of the same dish land as separate lines with distinct
/// ids; merging is a presentation concern, not a cart concern.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    pub id: i64,
    pub name: String,
    /// Price in cents
    pub price: i64,
    pub quantity: i64,
    pub note: Option<String>,
}

/// Add-to-cart payload (id is assigned by the store)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLineInput {
    pub name: String,
    /// Price in cents
    #[serde(default)]
    pub price: i64,
    /// Defaults to 1 when omitted; an explicit 0 is kept and simply
    /// contributes nothing to the total
    #[serde(default = "default_quantity")]
    pub quantity: i64,
    pub note: Option<String>,
}

fn default_quantity() -> i64 {
    1
}

impl CartLineInput {
    pub fn new(name: impl Into<String>, price: i64, quantity: i64) -> Self {
        Self {
            name: name.into(),
            price,
            quantity,
            note: None,
        }
    }
}
