//! # linkbot-core
//!
//! Core types for the invite-link rotation bot: the command surface, outcome and
//! error types the command processor returns, the [`Messenger`] trait for outbound
//! delivery, and tracing initialization. Transport-agnostic; used by storage and
//! the linkbot application crate.

pub mod error;
pub mod logger;
pub mod types;

pub use error::{CommandError, LinkbotError, Result};
pub use logger::init_tracing;
pub use types::{Command, CommandOutcome, CommandResult, Messenger, Reply, ReplyAction};
