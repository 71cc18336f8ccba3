use thiserror::Error;

#[derive(Error, Debug)]
pub enum LinkbotError {
    #[error("Store error: {0}")]
    Store(String),

    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Command error: {0}")]
    Command(#[from] CommandError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Rejections a command operation can report to its caller. Input errors never
/// mutate state; authorization errors are distinct from "not found" outcomes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unauthorized access")]
    Unauthorized,

    #[error("Owner-only command")]
    OwnerOnly,

    /// Missing required argument; carries the usage hint shown to the caller.
    #[error("{0}")]
    MissingArgument(&'static str),

    #[error("Invalid link format: {0}")]
    InvalidLink(String),

    #[error("Invalid minutes value: {0}")]
    InvalidMinutes(String),

    #[error("Minutes out of range: {0}")]
    MinutesOutOfRange(u64),
}

pub type Result<T> = std::result::Result<T, LinkbotError>;
