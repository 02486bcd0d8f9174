//! Dining Table Model

use serde::{Deserialize, Serialize};

/// Table occupancy status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TableStatus {
    #[default]
    Available,
    Booked,
}

/// Dining table entity (桌台)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiningTable {
    pub id: i64,
    /// Sequential number shown on the floor plan; current max + 1 on
    /// creation, 1 for the first table
    pub table_no: i32,
    pub status: TableStatus,
    pub seats: i32,
    /// Set exactly while `status` is `Booked`
    pub current_order_customer_name: Option<String>,
}

/// Overrides applied on top of the defaults when adding a table
///
/// Every field is honored as given, including `status` and `table_no`;
/// the caller is trusted not to break the floor plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableOverrides {
    pub table_no: Option<i32>,
    pub status: Option<TableStatus>,
    pub seats: Option<i32>,
    pub current_order_customer_name: Option<String>,
}
