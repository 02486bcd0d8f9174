//! TableStore - physical table inventory and occupancy

use serde::Serialize;
use shared::command::{Command, TableCommand};
use shared::models::{DiningTable, TableOverrides, TableStatus};
use shared::util::IdGen;
use tracing::debug;

const DEFAULT_SEATS: i32 = 4;

/// Table inventory slice
#[derive(Debug, Clone, Default, Serialize)]
pub struct TableStore {
    tables: Vec<DiningTable>,
    #[serde(skip)]
    ids: IdGen,
}

impl TableStore {
    /// Seed a starting floor plan: `count` available tables numbered
    /// from 1, default seats.
    pub fn with_seed(count: u32) -> Self {
        let mut store = Self::default();
        for _ in 0..count {
            store.add_table(&TableOverrides::default());
        }
        store
    }

    /// Apply a command. Commands addressed to other stores are ignored.
    pub fn apply(&mut self, command: &Command) {
        let Command::Tables(command) = command else {
            return;
        };
        match command {
            TableCommand::Add { overrides } => self.add_table(overrides),
            TableCommand::SetStatus {
                table_id,
                status,
                customer_name,
            } => {
                if *status == TableStatus::Booked && customer_name.is_none() {
                    debug!(table_id = %table_id, "set_status: booking without a customer name, ignoring");
                    return;
                }
                let Some(table) = self.tables.iter_mut().find(|table| table.id == *table_id)
                else {
                    debug!(table_id = %table_id, "set_status: table not found, ignoring");
                    return;
                };
                // Status and customer name flip in the same transition,
                // which is what keeps the booked/name duality intact.
                table.status = *status;
                table.current_order_customer_name = match status {
                    TableStatus::Booked => customer_name.clone(),
                    TableStatus::Available => None,
                };
            }
            TableCommand::Remove { table_id } => {
                self.tables.retain(|table| table.id != *table_id);
            }
            TableCommand::ClearAll => self.tables.clear(),
            TableCommand::ReplaceAll { tables } => self.tables = tables.clone(),
        }
    }

    fn add_table(&mut self, overrides: &TableOverrides) {
        // current max + 1; an empty floor plan starts at 1
        let next_no = self
            .tables
            .iter()
            .map(|table| table.table_no)
            .max()
            .unwrap_or(0)
            + 1;
        self.tables.push(DiningTable {
            id: self.ids.next_id(),
            table_no: overrides.table_no.unwrap_or(next_no),
            status: overrides.status.unwrap_or_default(),
            seats: overrides.seats.unwrap_or(DEFAULT_SEATS),
            current_order_customer_name: overrides.current_order_customer_name.clone(),
        });
    }

    // ===== Selectors =====

    pub fn tables(&self) -> &[DiningTable] {
        &self.tables
    }

    pub fn table(&self, table_id: i64) -> Option<&DiningTable> {
        self.tables.iter().find(|table| table.id == table_id)
    }

    pub fn available_tables(&self) -> impl Iterator<Item = &DiningTable> {
        self.tables
            .iter()
            .filter(|table| table.status == TableStatus::Available)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add(store: &mut TableStore, overrides: TableOverrides) {
        store.apply(&Command::Tables(TableCommand::Add { overrides }));
    }

    #[test]
    fn test_first_table_gets_number_one() {
        let mut store = TableStore::default();
        add(&mut store, TableOverrides::default());
        assert_eq!(store.tables()[0].table_no, 1);
        assert_eq!(store.tables()[0].seats, DEFAULT_SEATS);
        assert_eq!(store.tables()[0].status, TableStatus::Available);
    }

    #[test]
    fn test_numbering_continues_from_max() {
        let mut store = TableStore::default();
        add(
            &mut store,
            TableOverrides {
                table_no: Some(1),
                ..Default::default()
            },
        );
        add(
            &mut store,
            TableOverrides {
                table_no: Some(3),
                ..Default::default()
            },
        );
        add(&mut store, TableOverrides::default());
        assert_eq!(store.tables()[2].table_no, 4);
    }

    #[test]
    fn test_booked_and_customer_name_flip_together() {
        let mut store = TableStore::with_seed(2);
        let table_id = store.tables()[0].id;
        store.apply(&Command::Tables(TableCommand::SetStatus {
            table_id,
            status: TableStatus::Booked,
            customer_name: Some("Ana".to_string()),
        }));
        let table = store.table(table_id).unwrap();
        assert_eq!(table.status, TableStatus::Booked);
        assert_eq!(table.current_order_customer_name.as_deref(), Some("Ana"));

        store.apply(&Command::Tables(TableCommand::SetStatus {
            table_id,
            status: TableStatus::Available,
            customer_name: Some("Ana".to_string()),
        }));
        let table = store.table(table_id).unwrap();
        assert_eq!(table.status, TableStatus::Available);
        assert!(table.current_order_customer_name.is_none());

        // duality holds across the whole inventory
        for table in store.tables() {
            assert_eq!(
                table.status == TableStatus::Booked,
                table.current_order_customer_name.is_some()
            );
        }
    }

    #[test]
    fn test_booking_without_name_is_ignored() {
        let mut store = TableStore::with_seed(1);
        let table_id = store.tables()[0].id;
        store.apply(&Command::Tables(TableCommand::SetStatus {
            table_id,
            status: TableStatus::Booked,
            customer_name: None,
        }));
        assert_eq!(store.tables()[0].status, TableStatus::Available);
    }

    #[test]
    fn test_set_status_unknown_table_is_noop() {
        let mut store = TableStore::with_seed(1);
        let before = store.tables().to_vec();
        store.apply(&Command::Tables(TableCommand::SetStatus {
            table_id: -5,
            status: TableStatus::Booked,
            customer_name: Some("Ana".to_string()),
        }));
        assert_eq!(store.tables(), before.as_slice());
    }

    #[test]
    fn test_clear_all_is_idempotent_and_numbering_restarts() {
        let mut store = TableStore::with_seed(3);
        store.apply(&Command::Tables(TableCommand::ClearAll));
        assert!(store.tables().is_empty());
        store.apply(&Command::Tables(TableCommand::ClearAll));
        assert!(store.tables().is_empty());
        // adding to an empty floor plan assigns 1 without raising
        add(&mut store, TableOverrides::default());
        assert_eq!(store.tables()[0].table_no, 1);
    }
}
