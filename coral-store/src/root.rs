//! RootStore - the six slices under one dispatch entry point

use serde::Serialize;
use shared::command::Command;

use crate::{
    CartStore, CustomerSessionStore, MenuCatalogStore, OrderStore, TableStore, UserIdentityStore,
};

/// Root store owning every slice
///
/// Slices are public for selector access; mutation goes through
/// [`RootStore::dispatch`] only.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RootStore {
    pub catalog: MenuCatalogStore,
    pub cart: CartStore,
    pub tables: TableStore,
    pub session: CustomerSessionStore,
    pub orders: OrderStore,
    pub identity: UserIdentityStore,
}

impl RootStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh store with a seeded floor plan of `table_count` tables
    pub fn with_tables(table_count: u32) -> Self {
        Self {
            tables: TableStore::with_seed(table_count),
            ..Self::default()
        }
    }

    /// Hand the command to every slice unconditionally; each slice
    /// ignores commands addressed elsewhere.
    pub fn dispatch(&mut self, command: &Command) {
        self.catalog.apply(command);
        self.cart.apply(command);
        self.tables.apply(command);
        self.session.apply(command);
        self.orders.apply(command);
        self.identity.apply(command);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::command::{CartCommand, OrderCommand};
    use shared::models::CartLineInput;

    #[test]
    fn test_dispatch_routes_to_owning_slice_only() {
        let mut store = RootStore::with_tables(2);
        store.dispatch(&Command::Cart(CartCommand::Add(CartLineInput::new(
            "Ramen", 1000, 1,
        ))));
        assert_eq!(store.cart.lines().len(), 1);
        assert!(store.orders.is_empty());
        assert_eq!(store.tables.tables().len(), 2);

        store.dispatch(&Command::Orders(OrderCommand::SetLoading { loading: true }));
        assert!(store.orders.is_loading());
        assert_eq!(store.cart.lines().len(), 1);
    }
}
