//! Menu Catalog Models

use serde::{Deserialize, Serialize};

/// Menu category entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuCategory {
    pub id: i64,
    pub name: String,
    #[serde(default = "default_bg_color")]
    pub bg_color: String,
    #[serde(default = "default_icon")]
    pub icon: String,
    #[serde(default)]
    pub items: Vec<MenuDish>,
}

/// Menu dish entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuDish {
    pub id: i64,
    pub name: String,
    /// Price in cents
    pub price: i64,
    /// Name of the containing category; kept in step on rename
    pub category: String,
}

pub fn default_bg_color() -> String {
    "#f5f5f5".to_string()
}

pub fn default_icon() -> String {
    "utensils".to_string()
}

/// Create category payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCreate {
    pub name: String,
    pub bg_color: Option<String>,
    pub icon: Option<String>,
}

impl CategoryCreate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bg_color: None,
            icon: None,
        }
    }
}

/// Update category payload (shallow patch)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryUpdate {
    pub name: Option<String>,
    pub bg_color: Option<String>,
    pub icon: Option<String>,
}

/// Create dish payload
///
/// Price arrives in currency units from the admin surface and is
/// coerced to integer cents on insertion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DishInput {
    pub name: String,
    /// Price in currency units (e.g. 12.50)
    #[serde(default)]
    pub price: f64,
}

impl DishInput {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// Update dish payload (shallow patch)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DishUpdate {
    pub name: Option<String>,
    /// Price in currency units, coerced to cents like on creation
    pub price: Option<f64>,
}
