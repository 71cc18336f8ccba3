//! Parses Telegram message text into a command and its arguments.

use linkbot_core::Command;

/// Parses `/name arg…` (optionally `/name@BotName`) into a command and args.
/// Returns None for non-command text and unknown commands.
pub fn parse_command(text: &str) -> Option<(Command, Vec<String>)> {
    let rest = text.trim().strip_prefix('/')?;
    let mut parts = rest.split_whitespace();
    let head = parts.next()?;
    let name = head.split('@').next().unwrap_or(head);
    let command = Command::from_name(&name.to_ascii_lowercase())?;
    let args = parts.map(str::to_string).collect();
    Some((command, args))
}
