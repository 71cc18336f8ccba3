//! # linkbot
//!
//! Invite-link rotation bot for Telegram: serves a rotating channel link to
//! subscribers, rotated on a timer, managed by admins under an owner-gated
//! permission model. State lives in a single JSON snapshot (see the storage
//! crate); this crate wires the command processor, the rotation loop, and the
//! Telegram adapter.

pub mod auth;
pub mod cli;
pub mod config;
pub mod rotation;
pub mod service;
pub mod telegram;

pub use cli::{Cli, Commands};
pub use config::BotConfig;
pub use rotation::run_rotation;
pub use service::BotService;
pub use telegram::run_bot;
