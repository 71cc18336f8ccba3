//! Maps command outcomes and errors to reply text.

use linkbot_core::{CommandError, CommandOutcome, CommandResult, Reply};

pub const HELP_TEXT: &str = "Commands:
/start - Get started
/addlink LINK - Add a new channel link
/removelink LINK - Remove a channel link
/listlinks - List all channel links
/settimer MINUTES - Set link rotation timer (in minutes)
/currentlink - Show current link
/broadcast MESSAGE - Send message to all users
/addadmin USERID - Add admin (owner only)
/removeadmin USERID - Remove admin (owner only)
/adminslist - List admins (owner only)
/help - Show this help message";

/// Text shown when the link button is pressed.
pub fn latest_link_text(link: Option<&str>) -> String {
    format!("Here is your latest link:\n{}", link.unwrap_or("No link set."))
}

fn numbered(items: &[String]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(idx, item)| format!("{}. {}", idx + 1, item))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders a command result as a reply.
pub fn render(result: &CommandResult) -> Reply {
    match result {
        Ok(outcome) => render_outcome(outcome),
        Err(error) => render_error(error),
    }
}

fn render_outcome(outcome: &CommandOutcome) -> Reply {
    match outcome {
        CommandOutcome::Subscribed => {
            Reply::with_link_button("Welcome! Click below to get the latest channel link.")
        }
        CommandOutcome::CurrentLink(link) => Reply::text(format!(
            "Current link: {}",
            link.as_deref().unwrap_or("No link set.")
        )),
        CommandOutcome::LinkAdded(link) => Reply::text(format!("Link added: {}", link)),
        CommandOutcome::LinkAlreadyExists => Reply::text("Link already exists."),
        CommandOutcome::LinkRemoved(link) => Reply::text(format!("Link removed: {}", link)),
        CommandOutcome::LinkNotFound => Reply::text("Link not found."),
        CommandOutcome::Links(links) => {
            if links.is_empty() {
                Reply::text("No links found.")
            } else {
                Reply::text(format!("Links:\n{}", numbered(links)))
            }
        }
        CommandOutcome::TimerSet(minutes) => {
            Reply::text(format!("Rotation interval set to {} minutes.", minutes))
        }
        CommandOutcome::BroadcastComplete { delivered, failed } => Reply::text(format!(
            "Broadcast sent to {} users. Failed: {}",
            delivered, failed
        )),
        CommandOutcome::AdminAdded(id) => Reply::text(format!("Admin added: {}", id)),
        CommandOutcome::AlreadyAdmin => Reply::text("User is already an admin."),
        CommandOutcome::AdminRemoved(id) => Reply::text(format!("Admin removed: {}", id)),
        CommandOutcome::AdminNotFound => Reply::text("User is not an admin."),
        CommandOutcome::CannotRemoveOwner => Reply::text("Cannot remove the owner."),
        CommandOutcome::Admins(admins) => {
            if admins.is_empty() {
                Reply::text("No admins set.")
            } else {
                Reply::text(format!("Admins:\n{}", numbered(admins)))
            }
        }
        CommandOutcome::Help => Reply::text(HELP_TEXT),
    }
}

fn render_error(error: &CommandError) -> Reply {
    match error {
        CommandError::Unauthorized => Reply::text("You are not authorized."),
        CommandError::OwnerOnly => Reply::text("Only the owner can do that."),
        CommandError::MissingArgument(hint) => Reply::text(*hint),
        CommandError::InvalidLink(_) => {
            Reply::text("Invalid link format. Please provide a valid URL or Telegram link.")
        }
        CommandError::InvalidMinutes(_) => {
            Reply::text("Invalid input. Please provide an integer value for minutes.")
        }
        CommandError::MinutesOutOfRange(0) => {
            Reply::text("Please provide a positive number of minutes.")
        }
        CommandError::MinutesOutOfRange(_) => {
            Reply::text("Timer cannot be set for more than 24 hours (1440 minutes).")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linkbot_core::ReplyAction;

    #[test]
    fn test_welcome_carries_link_button() {
        let reply = render(&Ok(CommandOutcome::Subscribed));
        assert_eq!(reply.action, ReplyAction::LinkButton);
        assert!(reply.text.starts_with("Welcome!"));
    }

    #[test]
    fn test_current_link_with_and_without_link() {
        let reply = render(&Ok(CommandOutcome::CurrentLink(Some(
            "https://t.me/a".to_string(),
        ))));
        assert_eq!(reply.text, "Current link: https://t.me/a");

        let reply = render(&Ok(CommandOutcome::CurrentLink(None)));
        assert_eq!(reply.text, "Current link: No link set.");
    }

    #[test]
    fn test_links_numbered_in_order() {
        let reply = render(&Ok(CommandOutcome::Links(vec![
            "a://1".to_string(),
            "a://2".to_string(),
        ])));
        assert_eq!(reply.text, "Links:\n1. a://1\n2. a://2");
        assert_eq!(reply.action, ReplyAction::None);
    }

    #[test]
    fn test_timer_range_errors_render_distinct_texts() {
        let zero = render(&Err(CommandError::MinutesOutOfRange(0)));
        let over = render(&Err(CommandError::MinutesOutOfRange(2000)));
        assert_eq!(zero.text, "Please provide a positive number of minutes.");
        assert!(over.text.contains("1440"));
    }

    #[test]
    fn test_latest_link_text_falls_back() {
        assert_eq!(
            latest_link_text(Some("https://t.me/a")),
            "Here is your latest link:\nhttps://t.me/a"
        );
        assert_eq!(latest_link_text(None), "Here is your latest link:\nNo link set.");
    }
}
