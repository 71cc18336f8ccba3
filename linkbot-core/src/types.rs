//! Core types: command surface, operation outcomes, reply payload, and the
//! Messenger trait for outbound delivery.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::CommandError;

/// The bot's command surface. Exact reply formatting is the adapter's concern;
/// these are the operations the command processor understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Start,
    AddLink,
    RemoveLink,
    ListLinks,
    SetTimer,
    CurrentLink,
    Broadcast,
    AddAdmin,
    RemoveAdmin,
    AdminsList,
    Help,
}

impl Command {
    /// Looks up a command by its bare name (no leading slash, lowercase).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "start" => Some(Self::Start),
            "addlink" => Some(Self::AddLink),
            "removelink" => Some(Self::RemoveLink),
            "listlinks" => Some(Self::ListLinks),
            "settimer" => Some(Self::SetTimer),
            "currentlink" => Some(Self::CurrentLink),
            "broadcast" => Some(Self::Broadcast),
            "addadmin" => Some(Self::AddAdmin),
            "removeadmin" => Some(Self::RemoveAdmin),
            "adminslist" => Some(Self::AdminsList),
            "help" => Some(Self::Help),
            _ => None,
        }
    }
}

/// Successful result of a command operation. Adapters branch on the variant to
/// render a reply; tests branch on it instead of matching strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Caller added to the subscriber set (or already present).
    Subscribed,
    /// The link currently served, or None when no links are configured.
    CurrentLink(Option<String>),
    LinkAdded(String),
    LinkAlreadyExists,
    LinkRemoved(String),
    LinkNotFound,
    /// All configured links in rotation order.
    Links(Vec<String>),
    /// Rotation interval set, in minutes.
    TimerSet(u64),
    BroadcastComplete { delivered: usize, failed: usize },
    AdminAdded(String),
    AlreadyAdmin,
    AdminRemoved(String),
    AdminNotFound,
    CannotRemoveOwner,
    /// All admins, owner first.
    Admins(Vec<String>),
    Help,
}

pub type CommandResult = std::result::Result<CommandOutcome, CommandError>;

/// Extra action the adapter should attach to a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyAction {
    None,
    /// Attach the "get latest link" inline button.
    LinkButton,
}

/// Rendered reply for the adapter to deliver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub action: ReplyAction,
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            action: ReplyAction::None,
        }
    }

    pub fn with_link_button(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            action: ReplyAction::LinkButton,
        }
    }
}

/// Abstraction for sending a text message to a user by identifier.
/// Implementations map to a transport (e.g. Telegram); tests substitute a
/// recording implementation.
#[async_trait]
pub trait Messenger: Send + Sync {
    async fn send_text(&self, user_id: &str, text: &str) -> crate::error::Result<()>;
}
