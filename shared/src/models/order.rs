//! Order Model

use serde::{Deserialize, Serialize};

use crate::models::CartLine;
use crate::util;

/// Order status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Active,
    Completed,
    Void,
}

/// A line item frozen into an order at checkout
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLine {
    pub name: String,
    /// Price in cents
    pub price: i64,
    pub quantity: i64,
}

impl From<&CartLine> for OrderLine {
    fn from(line: &CartLine) -> Self {
        Self {
            name: line.name.clone(),
            price: line.price,
            quantity: line.quantity,
        }
    }
}

/// Placed order entity
///
/// `legacy_id` mirrors `id` on the wire (`_id`); legacy readers key
/// orders by either, so both are kept equal at all times.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderRecord {
    #[serde(rename = "_id")]
    pub legacy_id: String,
    pub id: String,
    /// Unix milliseconds
    pub created_at: i64,
    pub status: OrderStatus,
    /// Total in cents
    pub total: i64,
    pub items: Vec<OrderLine>,
    pub customer_name: Option<String>,
    pub table_no: Option<i32>,
    pub guest_count: Option<i32>,
}

/// Incoming order payload, from checkout or an external fetch
///
/// Either id key may be present (or neither, in which case a fresh
/// order number is generated on insertion).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderInput {
    #[serde(default, rename = "_id")]
    pub legacy_id: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    /// Unix milliseconds; defaults to now
    pub created_at: Option<i64>,
    #[serde(default)]
    pub status: OrderStatus,
    /// Total in cents
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub items: Vec<OrderLine>,
    pub customer_name: Option<String>,
    pub table_no: Option<i32>,
    pub guest_count: Option<i32>,
}

impl OrderRecord {
    /// Normalize an input into a record: resolve the id from either
    /// key (generating an order number when both are absent), default
    /// `created_at` to now, and mirror the id into both key fields.
    pub fn from_input(input: OrderInput) -> Self {
        let id = input
            .id
            .or(input.legacy_id)
            .filter(|id| !id.is_empty())
            .unwrap_or_else(util::order_number);
        Self {
            legacy_id: id.clone(),
            id,
            created_at: input.created_at.unwrap_or_else(util::now_millis),
            status: input.status,
            total: input.total,
            items: input.items,
            customer_name: input.customer_name,
            table_no: input.table_no,
            guest_count: input.guest_count,
        }
    }

    /// Shallow-merge a patch onto this record. Absent fields are left
    /// untouched; the id keys never change.
    pub fn apply_patch(&mut self, patch: &OrderPatch) {
        if let Some(created_at) = patch.created_at {
            self.created_at = created_at;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(total) = patch.total {
            self.total = total;
        }
        if let Some(items) = &patch.items {
            self.items = items.clone();
        }
        if let Some(customer_name) = &patch.customer_name {
            self.customer_name = Some(customer_name.clone());
        }
        if let Some(table_no) = patch.table_no {
            self.table_no = Some(table_no);
        }
        if let Some(guest_count) = patch.guest_count {
            self.guest_count = Some(guest_count);
        }
    }
}

/// Update order payload (shallow patch)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderPatch {
    pub created_at: Option<i64>,
    pub status: Option<OrderStatus>,
    /// Total in cents
    pub total: Option<i64>,
    pub items: Option<Vec<OrderLine>>,
    pub customer_name: Option<String>,
    pub table_no: Option<i32>,
    pub guest_count: Option<i32>,
}
