//! BotService: the command processor.
//!
//! Owns the in-memory [`BotState`] behind a single tokio mutex together with
//! its [`StateStore`]. Every mutating operation holds the lock for its full
//! read-modify-write-persist sequence, so command handlers and the rotation
//! loop never interleave on the state. Persistence failures are logged and
//! the operation still reports success; in-memory state is never rolled back.

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use linkbot_core::{Command, CommandError, CommandOutcome, CommandResult, Messenger};
use storage::{BotState, StateStore, StoreError};

use crate::auth;

const MIN_TIMER_MINUTES: u64 = 1;
const MAX_TIMER_MINUTES: u64 = 1440;

/// Accepted link prefixes. A heuristic, not URL validation.
const LINK_PREFIXES: [&str; 3] = ["http://", "https://", "t.me/"];

fn is_valid_link(link: &str) -> bool {
    LINK_PREFIXES.iter().any(|p| link.starts_with(p))
}

/// Command processor over the shared bot state.
pub struct BotService {
    state: Mutex<BotState>,
    store: StateStore,
}

impl BotService {
    /// Loads state from the store (default-filled when absent or invalid).
    pub fn new(store: StateStore) -> Self {
        let state = store.load();
        info!(
            links = state.links.len(),
            admins = state.admins.all().len(),
            users = state.users.len(),
            "State loaded"
        );
        Self {
            state: Mutex::new(state),
            store,
        }
    }

    /// Clone of the current state, for inspection and tests.
    pub async fn snapshot(&self) -> BotState {
        self.state.lock().await.clone()
    }

    /// Maps a parsed command to its operation.
    pub async fn dispatch(
        &self,
        caller_id: &str,
        command: Command,
        args: &[String],
        messenger: &dyn Messenger,
    ) -> CommandResult {
        match command {
            Command::Start => self.subscribe(caller_id).await,
            Command::AddLink => self.add_link(caller_id, args).await,
            Command::RemoveLink => self.remove_link(caller_id, args).await,
            Command::ListLinks => self.list_links(caller_id).await,
            Command::SetTimer => self.set_timer(caller_id, args).await,
            Command::CurrentLink => self.admin_current_link(caller_id).await,
            Command::Broadcast => self.broadcast(caller_id, args, messenger).await,
            Command::AddAdmin => self.add_admin(caller_id, args).await,
            Command::RemoveAdmin => self.remove_admin(caller_id, args).await,
            Command::AdminsList => self.list_admins(caller_id).await,
            Command::Help => Ok(CommandOutcome::Help),
        }
    }

    /// Adds the caller to the subscriber set. Public, idempotent.
    pub async fn subscribe(&self, caller_id: &str) -> CommandResult {
        let mut state = self.state.lock().await;
        if state.subscribe(caller_id) {
            info!(user_id = %caller_id, "New subscriber");
            self.persist(&state);
        }
        Ok(CommandOutcome::Subscribed)
    }

    /// The currently served link. Public; used by the link button callback.
    pub async fn current_link(&self) -> Option<String> {
        self.state.lock().await.current_link().map(str::to_string)
    }

    /// Admin view of the current link.
    pub async fn admin_current_link(&self, caller_id: &str) -> CommandResult {
        let state = self.state.lock().await;
        auth::require_admin(&state, caller_id)?;
        Ok(CommandOutcome::CurrentLink(
            state.current_link().map(str::to_string),
        ))
    }

    pub async fn add_link(&self, caller_id: &str, args: &[String]) -> CommandResult {
        let mut state = self.state.lock().await;
        auth::require_admin(&state, caller_id)?;
        if args.is_empty() {
            return Err(CommandError::MissingArgument("Please provide a link."));
        }
        let link = args.join(" ");
        if !is_valid_link(&link) {
            return Err(CommandError::InvalidLink(link));
        }
        if state.add_link(&link) {
            info!(user_id = %caller_id, link = %link, "Link added");
            self.persist(&state);
            Ok(CommandOutcome::LinkAdded(link))
        } else {
            Ok(CommandOutcome::LinkAlreadyExists)
        }
    }

    pub async fn remove_link(&self, caller_id: &str, args: &[String]) -> CommandResult {
        let mut state = self.state.lock().await;
        auth::require_admin(&state, caller_id)?;
        if args.is_empty() {
            return Err(CommandError::MissingArgument(
                "Please provide the link to remove.",
            ));
        }
        let link = args.join(" ");
        if state.remove_link(&link) {
            info!(user_id = %caller_id, link = %link, "Link removed");
            self.persist(&state);
            Ok(CommandOutcome::LinkRemoved(link))
        } else {
            Ok(CommandOutcome::LinkNotFound)
        }
    }

    pub async fn list_links(&self, caller_id: &str) -> CommandResult {
        let state = self.state.lock().await;
        auth::require_admin(&state, caller_id)?;
        Ok(CommandOutcome::Links(state.links.clone()))
    }

    /// Sets the rotation interval from a minutes argument, 1..=1440. Takes
    /// effect on the rotation loop's next cycle.
    pub async fn set_timer(&self, caller_id: &str, args: &[String]) -> CommandResult {
        let mut state = self.state.lock().await;
        auth::require_admin(&state, caller_id)?;
        let raw = args.first().ok_or(CommandError::MissingArgument(
            "Please provide timer in minutes (e.g., /settimer 10).",
        ))?;
        let minutes: u64 = raw
            .parse()
            .map_err(|_| CommandError::InvalidMinutes(raw.clone()))?;
        if !(MIN_TIMER_MINUTES..=MAX_TIMER_MINUTES).contains(&minutes) {
            return Err(CommandError::MinutesOutOfRange(minutes));
        }
        state.set_rotation_minutes(minutes);
        info!(user_id = %caller_id, minutes, "Rotation interval set");
        self.persist(&state);
        Ok(CommandOutcome::TimerSet(minutes))
    }

    /// Sends a message to every subscriber. Recipients are snapshotted under
    /// the lock; delivery happens outside it. Per-recipient failures are
    /// counted and never abort the batch.
    pub async fn broadcast(
        &self,
        caller_id: &str,
        args: &[String],
        messenger: &dyn Messenger,
    ) -> CommandResult {
        let recipients = {
            let state = self.state.lock().await;
            auth::require_admin(&state, caller_id)?;
            if args.is_empty() {
                return Err(CommandError::MissingArgument(
                    "Please provide a message to broadcast.",
                ));
            }
            state.users.clone()
        };
        let message = args.join(" ");

        let mut delivered = 0;
        let mut failed = 0;
        for user_id in &recipients {
            match messenger.send_text(user_id, &message).await {
                Ok(()) => delivered += 1,
                Err(e) => {
                    warn!(error = %e, user_id = %user_id, "Broadcast delivery failed");
                    failed += 1;
                }
            }
        }
        info!(user_id = %caller_id, delivered, failed, "Broadcast complete");
        Ok(CommandOutcome::BroadcastComplete { delivered, failed })
    }

    /// Adds an admin. Owner-only, except that the first admin added to an
    /// empty roster may be added by anyone and becomes the owner.
    pub async fn add_admin(&self, caller_id: &str, args: &[String]) -> CommandResult {
        let mut state = self.state.lock().await;
        if !state.admins.is_empty() {
            auth::require_owner(&state, caller_id)?;
        }
        let target = args
            .first()
            .ok_or(CommandError::MissingArgument(
                "Please provide user ID to add as admin.",
            ))?
            .clone();
        if state.admins.add(&target) {
            info!(user_id = %caller_id, admin_id = %target, "Admin added");
            self.persist(&state);
            Ok(CommandOutcome::AdminAdded(target))
        } else {
            Ok(CommandOutcome::AlreadyAdmin)
        }
    }

    /// Removes an admin. Owner-only; the owner itself can never be removed.
    pub async fn remove_admin(&self, caller_id: &str, args: &[String]) -> CommandResult {
        let mut state = self.state.lock().await;
        auth::require_owner(&state, caller_id)?;
        let target = args
            .first()
            .ok_or(CommandError::MissingArgument(
                "Please provide user ID to remove from admins.",
            ))?
            .clone();
        if state.admins.is_owner(&target) {
            return Ok(CommandOutcome::CannotRemoveOwner);
        }
        if state.admins.remove(&target) {
            info!(user_id = %caller_id, admin_id = %target, "Admin removed");
            self.persist(&state);
            Ok(CommandOutcome::AdminRemoved(target))
        } else {
            Ok(CommandOutcome::AdminNotFound)
        }
    }

    pub async fn list_admins(&self, caller_id: &str) -> CommandResult {
        let state = self.state.lock().await;
        auth::require_owner(&state, caller_id)?;
        Ok(CommandOutcome::Admins(state.admins.all()))
    }

    /// One rotation tick: advance the cursor and persist. Returns whether the
    /// cursor moved. Unlike command operations, a store failure propagates so
    /// the rotation loop can back off.
    pub async fn rotate_once(&self) -> Result<bool, StoreError> {
        let mut state = self.state.lock().await;
        if !state.advance_rotation() {
            return Ok(false);
        }
        self.store.save(&state)?;
        debug!(index = state.current_link_index, "Rotation advanced");
        Ok(true)
    }

    /// Current rotation interval; re-read by the rotation loop each cycle.
    pub async fn rotation_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.state.lock().await.rotation_interval)
    }

    /// Best-effort save: a failure is logged, the operation still succeeds
    /// and the state stays current in memory. Retried on the next mutation.
    fn persist(&self, state: &BotState) {
        if let Err(e) = self.store.save(state) {
            warn!(error = %e, path = %self.store.path().display(), "Failed to persist state");
        }
    }
}
