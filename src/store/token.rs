//! Monotonic request tokens for detecting overtaken responses.

use std::collections::HashMap;

use crate::models::UserId;

/// Identity of one dispatched network request. Later requests compare greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

/// What a request's response would overwrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// The whole list (`load`).
    Collection,
    /// A single record (`update`, `delete`).
    Record(UserId),
    /// A record the server has not assigned an id to yet (`create`).
    Fresh,
}

/// Issues tokens and remembers the newest one per target.
#[derive(Debug, Default)]
pub struct RequestTracker {
    next: u64,
    latest: HashMap<Target, RequestToken>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a token for a request about to be sent to `target`.
    pub fn issue(&mut self, target: Target) -> RequestToken {
        self.next += 1;
        let token = RequestToken(self.next);
        if target != Target::Fresh {
            self.latest.insert(target, token);
        }
        token
    }

    /// Whether `token` is still the newest request for `target`.
    ///
    /// `Fresh` targets can never be overtaken.
    pub fn is_current(&self, target: Target, token: RequestToken) -> bool {
        match target {
            Target::Fresh => true,
            _ => self.latest.get(&target).is_none_or(|latest| *latest == token),
        }
    }
}
