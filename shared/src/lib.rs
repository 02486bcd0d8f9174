//! Shared types for the Coral POS state core
//!
//! Entity models, store commands, and id utilities used by the
//! store layer and by host shells (UI bridge, sync workers).

pub mod command;
pub mod models;
pub mod util;

// Re-exports
pub use command::{
    CartCommand, CatalogCommand, Command, IdentityCommand, OrderCommand, SessionCommand,
    TableCommand,
};
pub use serde::{Deserialize, Serialize};
