//! Store commands - the unified dispatch surface of the state core
//!
//! Every mutation is a named command. The outer envelope names the
//! owning store, the inner enum names the operation:
//!
//! ```json
//! {
//!   "store": "Tables",
//!   "command": { "kind": "SET_STATUS", "payload": { "table_id": 7, "status": "BOOKED", "customer_name": "Ana" } }
//! }
//! ```
//!
//! Each store ignores commands addressed to another store, so the root
//! store hands every command to every slice unconditionally.

use serde::{Deserialize, Serialize};

use crate::models::{
    CartLineInput, CategoryCreate, CategoryUpdate, CustomerInfo, DiningTable, DishInput,
    DishUpdate, IdentityInput, MenuCategory, OrderInput, OrderPatch, TableOverrides, TableStatus,
};

/// Top-level command envelope, one variant per store
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "store", content = "command")]
pub enum Command {
    Cart(CartCommand),
    Catalog(CatalogCommand),
    Tables(TableCommand),
    Session(SessionCommand),
    Orders(OrderCommand),
    Identity(IdentityCommand),
}

/// Cart slice commands
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CartCommand {
    /// Insert a new line with a fresh id; identical dishes are kept as
    /// separate lines on purpose
    Add(CartLineInput),
    /// Drop the matching line; no-op when absent
    Remove { line_id: i64 },
    RemoveAll,
}

/// Menu catalog slice commands
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CatalogCommand {
    AddCategory(CategoryCreate),
    /// Category is looked up by name (first match); silently ignored
    /// when no category carries that name
    AddDish {
        category_name: String,
        dish: DishInput,
    },
    RemoveCategory {
        category_id: i64,
    },
    RemoveDish {
        category_id: i64,
        dish_id: i64,
    },
    UpdateCategory {
        category_id: i64,
        patch: CategoryUpdate,
    },
    UpdateDish {
        category_id: i64,
        dish_id: i64,
        patch: DishUpdate,
    },
    /// Wholesale overwrite, used for bulk load and reset
    ReplaceAll {
        categories: Vec<MenuCategory>,
    },
}

/// Table slice commands
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TableCommand {
    Add {
        #[serde(default)]
        overrides: TableOverrides,
    },
    /// Flip occupancy; `customer_name` and `status` change in the same
    /// transition so the booked/name duality never breaks
    SetStatus {
        table_id: i64,
        status: TableStatus,
        customer_name: Option<String>,
    },
    Remove {
        table_id: i64,
    },
    ClearAll,
    ReplaceAll {
        tables: Vec<DiningTable>,
    },
}

/// Customer session slice commands
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionCommand {
    /// Overwrite the three customer fields, nothing else
    SetCustomer(CustomerInfo),
    UpdateTable { table: Option<i64> },
    SetOrder { order_id: Option<String> },
    Clear,
}

/// Order slice commands
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderCommand {
    /// Wholesale replace from an external source; clears loading/error
    SetAll { orders: Vec<OrderInput> },
    Add(OrderInput),
    Update { order_id: String, patch: OrderPatch },
    SetLoading { loading: bool },
    /// Surfacing a fetch failure also forces `loading = false`
    SetError { message: Option<String> },
    Clear,
}

/// Identity slice commands
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IdentityCommand {
    Set(IdentityInput),
    Clear,
}
