//! Client-side state core for the Coral POS shell
//!
//! Six independent state slices (catalog, cart, tables, session,
//! orders, identity), each a synchronous command-to-snapshot
//! transition, composed under a [`RootStore`]. Cross-slice sequences
//! such as checkout live in the coordinator layer, never inside a
//! slice.
//!
//! Slices never fail: an unknown reference degrades to a logged no-op
//! and malformed values degrade to safe defaults. Asynchronous work
//! (fetching, persistence) belongs to the host, which feeds results
//! back in as commands (`SET_ALL`, `SET_LOADING`, `SET_ERROR`).

pub mod cart;
pub mod catalog;
pub mod coordinator;
pub mod identity;
pub mod orders;
pub mod root;
pub mod session;
pub mod tables;

// Re-exports
pub use cart::CartStore;
pub use catalog::MenuCatalogStore;
pub use coordinator::CoordinatorError;
pub use identity::UserIdentityStore;
pub use orders::OrderStore;
pub use root::RootStore;
pub use session::CustomerSessionStore;
pub use tables::TableStore;
