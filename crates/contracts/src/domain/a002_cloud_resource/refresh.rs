//! Sequencing of inventory refreshes.
//!
//! Several refreshes may be in flight at once. Only the most recently started
//! one may write its result; anything that replaced the resource array in the
//! meantime (a chat reply) also retires the outstanding tickets.

use super::aggregate::{normalize_resources, CloudResource, ResourceMap};
use crate::shared::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RefreshTicket(u64);

#[derive(Debug, Clone, Default)]
pub struct RefreshSequencer {
    latest: u64,
}

impl RefreshSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a refresh, superseding every earlier ticket.
    pub fn begin(&mut self) -> RefreshTicket {
        self.latest += 1;
        RefreshTicket(self.latest)
    }

    /// Retires all outstanding tickets without starting a refresh.
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }

    pub fn is_current(&self, ticket: RefreshTicket) -> bool {
        ticket.0 == self.latest
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RefreshApplied {
    /// Array replaced with this many providers
    Replaced(usize),
    /// A newer refresh or chat reply owns the array now
    Superseded,
    Failed(ApiError),
}

/// Applies a finished refresh to `resources`.
///
/// Only `Replaced` touches the array.
pub fn apply_refresh(
    resources: &mut Vec<CloudResource>,
    sequencer: &RefreshSequencer,
    ticket: RefreshTicket,
    result: Result<ResourceMap, ApiError>,
) -> RefreshApplied {
    let map = match result {
        Ok(map) => map,
        Err(e) => return RefreshApplied::Failed(e),
    };

    if !sequencer.is_current(ticket) {
        return RefreshApplied::Superseded;
    }

    *resources = normalize_resources(&map);
    RefreshApplied::Replaced(resources.len())
}
