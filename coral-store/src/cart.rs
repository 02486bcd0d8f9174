//! CartStore - transient dish selection pending checkout

use serde::Serialize;
use shared::command::{CartCommand, Command};
use shared::models::CartLine;
use shared::util::IdGen;

/// Shopping cart slice
///
/// The id generator is not part of the serialized snapshot; a
/// rehydrated cart restarts its sequence and the timestamp word keeps
/// new ids clear of old ones.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CartStore {
    lines: Vec<CartLine>,
    #[serde(skip)]
    ids: IdGen,
}

impl CartStore {
    /// Apply a command. Commands addressed to other stores are ignored.
    pub fn apply(&mut self, command: &Command) {
        let Command::Cart(command) = command else {
            return;
        };
        match command {
            CartCommand::Add(input) => {
                self.lines.push(CartLine {
                    id: self.ids.next_id(),
                    name: input.name.clone(),
                    price: input.price,
                    quantity: input.quantity,
                    note: input.note.clone(),
                });
            }
            CartCommand::Remove { line_id } => {
                self.lines.retain(|line| line.id != *line_id);
            }
            CartCommand::RemoveAll => self.lines.clear(),
        }
    }

    // ===== Selectors =====

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Cart total in cents: price x quantity over all lines. A line
    /// with quantity 0 contributes nothing.
    pub fn total_price(&self) -> i64 {
        self.lines
            .iter()
            .map(|line| line.price * line.quantity)
            .sum()
    }
}
