//! Authorization policy: admin and owner tiers over the state's admin roster.
//!
//! Admin covers link and timer management plus broadcast; owner covers admin
//! management. Bootstrap (adding the first admin to an empty roster) is
//! handled at the add-admin operation, not here.

use linkbot_core::CommandError;
use storage::BotState;

/// Requires the caller to be an admin (the owner counts as one).
pub fn require_admin(state: &BotState, caller_id: &str) -> Result<(), CommandError> {
    if state.admins.is_admin(caller_id) {
        Ok(())
    } else {
        Err(CommandError::Unauthorized)
    }
}

/// Requires the caller to be the owner. Always fails while no owner exists.
pub fn require_owner(state: &BotState, caller_id: &str) -> Result<(), CommandError> {
    if state.admins.is_owner(caller_id) {
        Ok(())
    } else {
        Err(CommandError::OwnerOnly)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_admins(ids: &[&str]) -> BotState {
        let mut state = BotState::default();
        for id in ids {
            state.admins.add(id);
        }
        state
    }

    #[test]
    fn test_require_admin_accepts_owner_and_admins() {
        let state = state_with_admins(&["1", "2"]);
        assert!(require_admin(&state, "1").is_ok());
        assert!(require_admin(&state, "2").is_ok());
    }

    #[test]
    fn test_require_admin_rejects_non_admin() {
        let state = state_with_admins(&["1"]);
        assert_eq!(require_admin(&state, "3"), Err(CommandError::Unauthorized));
    }

    #[test]
    fn test_require_owner_rejects_plain_admin() {
        let state = state_with_admins(&["1", "2"]);
        assert!(require_owner(&state, "1").is_ok());
        assert_eq!(require_owner(&state, "2"), Err(CommandError::OwnerOnly));
    }

    #[test]
    fn test_require_owner_rejects_everyone_when_roster_empty() {
        let state = BotState::default();
        assert_eq!(require_owner(&state, "1"), Err(CommandError::OwnerOnly));
        assert_eq!(require_admin(&state, "1"), Err(CommandError::Unauthorized));
    }
}
