//! Cross-slice use cases
//!
//! Slices never read each other during a transition, so any sequence
//! that has to stay consistent across slices (the table / session /
//! order triangle) lives here as one named operation instead of a
//! command ordering every caller must get right.

use thiserror::Error;
use tracing::info;

use shared::command::{CartCommand, Command, OrderCommand, SessionCommand, TableCommand};
use shared::models::{OrderInput, OrderLine, OrderPatch, OrderStatus, TableStatus};
use shared::util;

use crate::RootStore;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoordinatorError {
    #[error("cart is empty")]
    EmptyCart,

    #[error("table not found: {0}")]
    TableNotFound(i64),

    #[error("table {0} is already booked")]
    TableOccupied(i64),

    #[error("table {0} is not booked")]
    TableNotBooked(i64),
}

impl RootStore {
    /// Seat the active session at `table_id` and place the cart as a
    /// new order: create the order, book the table under the customer
    /// name, record the order id and table on the session, then clear
    /// the cart. Returns the new order id.
    ///
    /// The caller sees one operation; internally this is the usual
    /// command sequence, applied in an order where an early failure
    /// leaves every slice untouched.
    pub fn seat_and_order(&mut self, table_id: i64) -> Result<String, CoordinatorError> {
        if self.cart.is_empty() {
            return Err(CoordinatorError::EmptyCart);
        }
        let table = self
            .tables
            .table(table_id)
            .ok_or(CoordinatorError::TableNotFound(table_id))?;
        if table.status == TableStatus::Booked {
            return Err(CoordinatorError::TableOccupied(table_id));
        }
        let table_no = table.table_no;
        let session = self.session.session().clone();

        let order_id = util::order_number();
        self.dispatch(&Command::Orders(OrderCommand::Add(OrderInput {
            id: Some(order_id.clone()),
            total: self.cart.total_price(),
            items: self.cart.lines().iter().map(OrderLine::from).collect(),
            customer_name: Some(session.customer_name.clone()),
            table_no: Some(table_no),
            guest_count: Some(session.guests),
            ..Default::default()
        })));
        self.dispatch(&Command::Tables(TableCommand::SetStatus {
            table_id,
            status: TableStatus::Booked,
            customer_name: Some(session.customer_name.clone()),
        }));
        self.dispatch(&Command::Session(SessionCommand::UpdateTable {
            table: Some(table_id),
        }));
        self.dispatch(&Command::Session(SessionCommand::SetOrder {
            order_id: Some(order_id.clone()),
        }));
        self.dispatch(&Command::Cart(CartCommand::RemoveAll));

        info!(order_id = %order_id, table_no, "seated and placed order");
        Ok(order_id)
    }

    /// Close out a booked table: complete the session's order, free
    /// the table, end the session.
    pub fn close_table(&mut self, table_id: i64) -> Result<(), CoordinatorError> {
        let table = self
            .tables
            .table(table_id)
            .ok_or(CoordinatorError::TableNotFound(table_id))?;
        if table.status != TableStatus::Booked {
            return Err(CoordinatorError::TableNotBooked(table_id));
        }
        let table_no = table.table_no;

        // resolve the order through the table's own reference; the
        // singleton session may already belong to another party
        let order_id = self
            .orders
            .all()
            .iter()
            .find(|order| order.status == OrderStatus::Active && order.table_no == Some(table_no))
            .map(|order| order.id.clone());
        if let Some(order_id) = order_id {
            self.dispatch(&Command::Orders(OrderCommand::Update {
                order_id,
                patch: OrderPatch {
                    status: Some(OrderStatus::Completed),
                    ..Default::default()
                },
            }));
        }
        self.dispatch(&Command::Tables(TableCommand::SetStatus {
            table_id,
            status: TableStatus::Available,
            customer_name: None,
        }));
        // end the session only when it is seated at this table
        if self.session.session().table == Some(table_id) {
            self.dispatch(&Command::Session(SessionCommand::Clear));
        }

        info!(table_id, "table closed");
        Ok(())
    }
}
