//! End-to-end exercises of the state core: catalog load, sign-in,
//! seating, checkout, and table close, driven only through commands
//! and the coordinator.

use coral_store::{CoordinatorError, RootStore};
use shared::command::{
    CartCommand, CatalogCommand, Command, IdentityCommand, OrderCommand, SessionCommand,
};
use shared::models::{
    CartLineInput, CategoryCreate, CustomerInfo, DishInput, IdentityInput, OrderStatus,
    TableStatus,
};

fn seed_store() -> RootStore {
    let mut store = RootStore::with_tables(4);

    store.dispatch(&Command::Catalog(CatalogCommand::AddCategory(
        CategoryCreate::new("Noodles"),
    )));
    store.dispatch(&Command::Catalog(CatalogCommand::AddDish {
        category_name: "Noodles".to_string(),
        dish: DishInput::new("Ramen", 12.5),
    }));

    store.dispatch(&Command::Identity(IdentityCommand::Set(IdentityInput {
        id: "staff-1".to_string(),
        name: "Marta".to_string(),
        is_admin: true,
        ..Default::default()
    })));

    store
}

#[test]
fn checkout_books_table_and_records_order() {
    let mut store = seed_store();
    let table_id = store.tables.tables()[1].id;

    store.dispatch(&Command::Session(SessionCommand::SetCustomer(
        CustomerInfo::new("Ana", "600123456", 3),
    )));
    let dish = store.catalog.category_by_name("Noodles").unwrap().items[0].clone();
    store.dispatch(&Command::Cart(CartCommand::Add(CartLineInput::new(
        &dish.name, dish.price, 2,
    ))));

    let order_id = store.seat_and_order(table_id).expect("checkout failed");

    // order landed, newest first, with the cart frozen in
    let order = store.orders.order(&order_id).expect("order missing");
    assert_eq!(order.total, 2500);
    assert_eq!(order.items.len(), 1);
    assert_eq!(order.customer_name.as_deref(), Some("Ana"));
    assert_eq!(order.guest_count, Some(3));
    assert_eq!(store.orders.order_ids()[0], order_id);

    // table booked under the customer name
    let table = store.tables.table(table_id).unwrap();
    assert_eq!(table.status, TableStatus::Booked);
    assert_eq!(table.current_order_customer_name.as_deref(), Some("Ana"));

    // session points at both
    assert_eq!(store.session.session().table, Some(table_id));
    assert_eq!(store.session.session().order_id.as_deref(), Some(&*order_id));

    // cart is gone
    assert!(store.cart.is_empty());
}

#[test]
fn close_table_completes_order_and_ends_session() {
    let mut store = seed_store();
    let table_id = store.tables.tables()[0].id;
    store.dispatch(&Command::Session(SessionCommand::SetCustomer(
        CustomerInfo::new("Ana", "600123456", 2),
    )));
    store.dispatch(&Command::Cart(CartCommand::Add(CartLineInput::new(
        "Ramen", 1250, 1,
    ))));
    let order_id = store.seat_and_order(table_id).unwrap();

    store.close_table(table_id).expect("close failed");

    assert_eq!(
        store.orders.order(&order_id).unwrap().status,
        OrderStatus::Completed
    );
    let table = store.tables.table(table_id).unwrap();
    assert_eq!(table.status, TableStatus::Available);
    assert!(table.current_order_customer_name.is_none());
    assert_eq!(store.session.session().customer_name, "");
    assert!(store.session.session().order_id.is_none());
}

#[test]
fn closing_one_table_leaves_the_other_party_untouched() {
    let mut store = seed_store();
    let table_a = store.tables.tables()[0].id;
    let table_b = store.tables.tables()[1].id;

    store.dispatch(&Command::Session(SessionCommand::SetCustomer(
        CustomerInfo::new("Ana", "600111111", 2),
    )));
    store.dispatch(&Command::Cart(CartCommand::Add(CartLineInput::new(
        "Ramen", 1250, 1,
    ))));
    let ana_order = store.seat_and_order(table_a).unwrap();

    // the singleton session moves on to the next party
    store.dispatch(&Command::Session(SessionCommand::SetCustomer(
        CustomerInfo::new("Bea", "600222222", 4),
    )));
    store.dispatch(&Command::Cart(CartCommand::Add(CartLineInput::new(
        "Gyoza", 500, 2,
    ))));
    let bea_order = store.seat_and_order(table_b).unwrap();

    store.close_table(table_a).expect("close failed");

    // Ana's order is the one completed, resolved via the table itself
    assert_eq!(
        store.orders.order(&ana_order).unwrap().status,
        OrderStatus::Completed
    );
    assert_eq!(
        store.orders.order(&bea_order).unwrap().status,
        OrderStatus::Active
    );
    // Bea's session and table are untouched
    assert_eq!(store.session.session().customer_name, "Bea");
    assert_eq!(store.session.session().table, Some(table_b));
    assert_eq!(store.session.session().order_id.as_deref(), Some(&*bea_order));
    assert_eq!(
        store.tables.table(table_b).unwrap().status,
        TableStatus::Booked
    );

    // closing Bea's own table ends her session as usual
    store.close_table(table_b).unwrap();
    assert_eq!(
        store.orders.order(&bea_order).unwrap().status,
        OrderStatus::Completed
    );
    assert!(store.session.session().order_id.is_none());
    assert_eq!(store.session.session().customer_name, "");
}

#[test]
fn checkout_refuses_empty_cart_and_leaves_state_untouched() {
    let mut store = seed_store();
    let table_id = store.tables.tables()[0].id;

    let err = store.seat_and_order(table_id).unwrap_err();
    assert_eq!(err, CoordinatorError::EmptyCart);
    assert!(store.orders.is_empty());
    assert_eq!(
        store.tables.table(table_id).unwrap().status,
        TableStatus::Available
    );
}

#[test]
fn checkout_refuses_unknown_and_occupied_tables() {
    let mut store = seed_store();
    store.dispatch(&Command::Cart(CartCommand::Add(CartLineInput::new(
        "Ramen", 1250, 1,
    ))));

    assert_eq!(
        store.seat_and_order(-1).unwrap_err(),
        CoordinatorError::TableNotFound(-1)
    );

    let table_id = store.tables.tables()[0].id;
    store.seat_and_order(table_id).unwrap();

    store.dispatch(&Command::Cart(CartCommand::Add(CartLineInput::new(
        "Ramen", 1250, 1,
    ))));
    assert_eq!(
        store.seat_and_order(table_id).unwrap_err(),
        CoordinatorError::TableOccupied(table_id)
    );
    // the second cart is still there, nothing was half-applied
    assert_eq!(store.cart.lines().len(), 1);
    assert_eq!(store.orders.len(), 1);
}

#[test]
fn close_table_requires_a_booking() {
    let mut store = seed_store();
    let table_id = store.tables.tables()[0].id;
    assert_eq!(
        store.close_table(table_id).unwrap_err(),
        CoordinatorError::TableNotBooked(table_id)
    );
    assert_eq!(
        store.close_table(-1).unwrap_err(),
        CoordinatorError::TableNotFound(-1)
    );
}

#[test]
fn external_fetch_results_flow_in_as_commands() {
    let mut store = seed_store();

    store.dispatch(&Command::Orders(OrderCommand::SetLoading { loading: true }));
    assert!(store.orders.is_loading());

    // a failed fetch surfaces through the error field, never a panic
    store.dispatch(&Command::Orders(OrderCommand::SetError {
        message: Some("network unreachable".to_string()),
    }));
    assert!(!store.orders.is_loading());
    assert_eq!(store.orders.error(), Some("network unreachable"));

    // a later successful fetch hydrates and clears the error
    store.dispatch(&Command::Orders(OrderCommand::SetAll {
        orders: vec![
            serde_json::from_value(serde_json::json!({"_id": "ext-1", "created_at": 100})).unwrap(),
            serde_json::from_value(serde_json::json!({"id": "ext-2", "created_at": 200})).unwrap(),
        ],
    }));
    assert!(store.orders.error().is_none());
    assert_eq!(store.orders.order_ids(), &["ext-2", "ext-1"]);
}
