//! CustomerSessionStore - the active dine-in session
//!
//! A single-slot value holder. Each store instance owns its own slot,
//! so independent fixtures never interfere through globals.

use serde::Serialize;
use shared::command::{Command, SessionCommand};
use shared::models::CustomerSession;

/// Customer session slice
#[derive(Debug, Clone, Default, Serialize)]
pub struct CustomerSessionStore {
    session: CustomerSession,
}

impl CustomerSessionStore {
    /// Apply a command. Commands addressed to other stores are ignored.
    pub fn apply(&mut self, command: &Command) {
        let Command::Session(command) = command else {
            return;
        };
        match command {
            SessionCommand::SetCustomer(info) => {
                // only the three customer fields; table and order id
                // are managed by their own commands
                self.session.customer_name = info.name.clone();
                self.session.customer_phone = info.phone.clone();
                self.session.guests = info.guests;
            }
            SessionCommand::UpdateTable { table } => self.session.table = *table,
            SessionCommand::SetOrder { order_id } => {
                self.session.order_id = order_id.clone();
            }
            SessionCommand::Clear => self.session = CustomerSession::default(),
        }
    }

    // ===== Selectors =====

    pub fn session(&self) -> &CustomerSession {
        &self.session
    }

    pub fn is_active(&self) -> bool {
        !self.session.customer_name.is_empty()
    }
}
