//! Storage crate: the durable bot state aggregate and its JSON file store.
//!
//! ## Modules
//!
//! - [`state`] – BotState aggregate and AdminRoster
//! - [`store`] – StateStore (JSON file, atomic save, default-fill load)

mod state;
mod store;

pub use state::{AdminRoster, BotState, DEFAULT_ROTATION_INTERVAL_SECS};
pub use store::{StateStore, StoreError};
