//! Data models
//!
//! Shared between the store layer and frontend (via the bridge).
//! Generated IDs are `i64` (snowflake-style, see `crate::util::IdGen`);
//! order ids are `String` because external systems may supply their own.
//! All prices are integer cents.

pub mod cart;
pub mod catalog;
pub mod dining_table;
pub mod identity;
pub mod order;
pub mod session;

// Re-exports
pub use cart::*;
pub use catalog::*;
pub use dining_table::*;
pub use identity::*;
pub use order::*;
pub use session::*;
