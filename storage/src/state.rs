//! BotState: the single mutable aggregate the bot persists.
//!
//! Snapshot shape is the five-field JSON object (`links`,
//! `current_link_index`, `rotation_interval`, `admins`, `users`); unknown
//! extra fields are ignored on load. Mutators keep the rotation cursor valid:
//! whenever `links` is non-empty, `current_link_index` is a valid index.

use serde::{Deserialize, Serialize};

/// Default rotation interval in seconds (5 minutes).
pub const DEFAULT_ROTATION_INTERVAL_SECS: u64 = 300;

/// The admin set with an explicit owner slot.
///
/// On the wire this is the flat `admins` array with the owner first; in memory
/// the owner is a named field so no list operation can displace it. The owner
/// is established by the first addition to an empty roster and can never be
/// removed through [`remove`](Self::remove).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct AdminRoster {
    owner: Option<String>,
    rest: Vec<String>,
}

impl AdminRoster {
    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    pub fn is_owner(&self, user_id: &str) -> bool {
        self.owner.as_deref() == Some(user_id)
    }

    pub fn is_admin(&self, user_id: &str) -> bool {
        self.is_owner(user_id) || self.rest.iter().any(|a| a == user_id)
    }

    pub fn is_empty(&self) -> bool {
        self.owner.is_none()
    }

    /// Adds an admin. The first addition to an empty roster establishes the
    /// owner. Returns false when the user is already an admin.
    pub fn add(&mut self, user_id: &str) -> bool {
        if self.is_admin(user_id) {
            return false;
        }
        if self.owner.is_none() {
            self.owner = Some(user_id.to_string());
        } else {
            self.rest.push(user_id.to_string());
        }
        true
    }

    /// Removes a non-owner admin. Returns false when the user is not among
    /// the non-owner admins; the owner is never removed here.
    pub fn remove(&mut self, user_id: &str) -> bool {
        let before = self.rest.len();
        self.rest.retain(|a| a != user_id);
        self.rest.len() != before
    }

    /// All admins in order, owner first.
    pub fn all(&self) -> Vec<String> {
        self.owner
            .iter()
            .chain(self.rest.iter())
            .cloned()
            .collect()
    }
}

impl From<Vec<String>> for AdminRoster {
    fn from(ids: Vec<String>) -> Self {
        let mut roster = AdminRoster::default();
        for id in ids {
            roster.add(&id);
        }
        roster
    }
}

impl From<AdminRoster> for Vec<String> {
    fn from(roster: AdminRoster) -> Self {
        roster.all()
    }
}

/// Durable bot state: links, rotation cursor and interval, admins, subscribers.
/// Loaded once at startup, held in memory, written back after every mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotState {
    pub links: Vec<String>,
    pub current_link_index: usize,
    /// Rotation interval in seconds.
    pub rotation_interval: u64,
    pub admins: AdminRoster,
    pub users: Vec<String>,
}

impl Default for BotState {
    fn default() -> Self {
        Self {
            links: Vec::new(),
            current_link_index: 0,
            rotation_interval: DEFAULT_ROTATION_INTERVAL_SECS,
            admins: AdminRoster::default(),
            users: Vec::new(),
        }
    }
}

impl BotState {
    /// The link the rotation cursor points at, if any.
    pub fn current_link(&self) -> Option<&str> {
        self.links.get(self.current_link_index).map(String::as_str)
    }

    /// Appends a link unless already present. Returns false on duplicate.
    pub fn add_link(&mut self, link: &str) -> bool {
        if self.links.iter().any(|l| l == link) {
            return false;
        }
        self.links.push(link.to_string());
        true
    }

    /// Removes a link; clamps the cursor to 0 when it falls out of range.
    /// Returns false when the link was not present.
    pub fn remove_link(&mut self, link: &str) -> bool {
        let before = self.links.len();
        self.links.retain(|l| l != link);
        if self.links.len() == before {
            return false;
        }
        if self.current_link_index >= self.links.len() {
            self.current_link_index = 0;
        }
        true
    }

    /// Advances the rotation cursor by one, wrapping at the end. No-op when
    /// there are no links. Returns whether the cursor moved.
    pub fn advance_rotation(&mut self) -> bool {
        if self.links.is_empty() {
            return false;
        }
        self.current_link_index = (self.current_link_index + 1) % self.links.len();
        true
    }

    /// Sets the rotation interval from minutes. Range checking is the command
    /// processor's job.
    pub fn set_rotation_minutes(&mut self, minutes: u64) {
        self.rotation_interval = minutes * 60;
    }

    /// Adds a subscriber. Returns false when already subscribed.
    pub fn subscribe(&mut self, user_id: &str) -> bool {
        if self.users.iter().any(|u| u == user_id) {
            return false;
        }
        self.users.push(user_id.to_string());
        true
    }

    /// Repairs invariants on a freshly loaded snapshot: an out-of-range
    /// rotation cursor clamps to 0.
    pub fn normalize(&mut self) {
        if self.current_link_index >= self.links.len() {
            self.current_link_index = 0;
        }
    }
}
