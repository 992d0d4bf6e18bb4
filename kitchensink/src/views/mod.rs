//! State machines behind the three screens. Each view owns its state
//! outright; nothing here is shared between views.

pub mod create;
pub mod edit;
pub mod form;
pub mod list;

pub use create::{CreateMemberForm, CreateState};
pub use edit::{EditMemberForm, EditState};
pub use form::MemberForm;
pub use list::{DeleteOutcome, ListState, MemberListView};

use tracing::debug;

/// Identifies one request issued by a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Tracks which request a view is still waiting on. Starting a request
/// supersedes any earlier one; responses for superseded tickets are refused.
#[derive(Debug, Default)]
pub struct RequestTracker {
    issued: u64,
    outstanding: Option<u64>,
}

impl RequestTracker {
    pub fn begin(&mut self) -> Ticket {
        self.issued += 1;
        self.outstanding = Some(self.issued);
        Ticket(self.issued)
    }

    /// Closes `ticket` if it is the outstanding request. Returns false for a
    /// stale ticket, whose response must then be dropped.
    pub fn complete(&mut self, ticket: Ticket) -> bool {
        if self.outstanding == Some(ticket.0) {
            self.outstanding = None;
            true
        } else {
            debug!("Dropping response for superseded request #{}", ticket.0);
            false
        }
    }

    /// Forget the outstanding request so its response is ignored.
    pub fn abandon(&mut self) {
        self.outstanding = None;
    }

    pub fn in_flight(&self) -> bool {
        self.outstanding.is_some()
    }
}
