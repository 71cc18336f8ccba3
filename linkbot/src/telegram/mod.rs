//! Telegram adapter: command parsing, reply rendering, the Messenger
//! implementation, and the dispatcher runner.

pub mod commands;
pub mod messenger;
pub mod render;
pub mod runner;

pub use commands::parse_command;
pub use messenger::TelegramMessenger;
pub use render::{latest_link_text, render};
pub use runner::run_bot;
