//! OrderStore - normalized, sorted collection of placed orders
//!
//! State shape is `ids` + `entities`: the entity map holds each record
//! once, the id list carries the presentation order. The list is kept
//! sorted by `created_at` descending (newest first) after every
//! mutation, including patches that touch `created_at`.

use std::collections::HashMap;

use serde::Serialize;
use shared::command::{Command, OrderCommand};
use shared::models::OrderRecord;
use tracing::debug;

/// Placed orders slice
#[derive(Debug, Clone, Default, Serialize)]
pub struct OrderStore {
    ids: Vec<String>,
    entities: HashMap<String, OrderRecord>,
    loading: bool,
    error: Option<String>,
}

impl OrderStore {
    /// Apply a command. Commands addressed to other stores are ignored.
    pub fn apply(&mut self, command: &Command) {
        let Command::Orders(command) = command else {
            return;
        };
        match command {
            OrderCommand::SetAll { orders } => {
                self.ids.clear();
                self.entities.clear();
                for input in orders {
                    let record = OrderRecord::from_input(input.clone());
                    // last write wins on a duplicate id
                    if self.entities.insert(record.id.clone(), record.clone()).is_none() {
                        self.ids.push(record.id);
                    }
                }
                self.sort_ids();
                self.loading = false;
                self.error = None;
            }
            OrderCommand::Add(input) => self.upsert(OrderRecord::from_input(input.clone())),
            OrderCommand::Update { order_id, patch } => {
                let Some(record) = self.entities.get_mut(order_id) else {
                    debug!(order_id = %order_id, "update: order not found, ignoring");
                    return;
                };
                record.apply_patch(patch);
                // a patched created_at can move the record
                if patch.created_at.is_some() {
                    self.sort_ids();
                }
            }
            OrderCommand::SetLoading { loading } => self.loading = *loading,
            OrderCommand::SetError { message } => {
                self.error = message.clone();
                self.loading = false;
            }
            OrderCommand::Clear => {
                self.ids.clear();
                self.entities.clear();
                self.loading = false;
                self.error = None;
            }
        }
    }

    fn upsert(&mut self, record: OrderRecord) {
        let id = record.id.clone();
        let created_at = record.created_at;
        if self.entities.insert(id.clone(), record).is_none() {
            // insert at the position that keeps created_at descending
            let entities = &self.entities;
            let at = self.ids.partition_point(|existing| {
                entities
                    .get(existing)
                    .is_some_and(|order| order.created_at > created_at)
            });
            self.ids.insert(at, id);
        } else {
            // replaced an existing record, created_at may have moved
            self.sort_ids();
        }
    }

    fn sort_ids(&mut self) {
        let entities = &self.entities;
        self.ids.sort_by_key(|id| {
            std::cmp::Reverse(entities.get(id).map_or(i64::MIN, |order| order.created_at))
        });
    }

    // ===== Selectors =====

    /// All orders, newest first
    pub fn all(&self) -> Vec<&OrderRecord> {
        self.ids
            .iter()
            .filter_map(|id| self.entities.get(id))
            .collect()
    }

    /// Lookup by either id key (they are kept equal)
    pub fn order(&self, id: &str) -> Option<&OrderRecord> {
        self.entities.get(id)
    }

    /// All ids, newest first
    pub fn order_ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
