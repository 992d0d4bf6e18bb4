use shared::Result;
use shared_http::api::Member;
use tracing::warn;

use super::{RequestTracker, Ticket};

pub const LOAD_FAILED: &str = "Failed to load members. Please try again later.";
pub const DELETE_FAILED: &str = "Failed to delete member. Please try again later.";

#[derive(Debug, Clone, PartialEq)]
pub enum ListState {
    Loading,
    Ready(Vec<Member>),
    Empty,
    Error(String),
}

/// What the page should do once a delete request settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Deleted; fetch the whole collection again.
    Refresh,
    Failed,
    /// The response belonged to a superseded request.
    Ignored,
}

/// The member list screen: the fetched collection and a pending delete
/// awaiting confirmation.
#[derive(Debug)]
pub struct MemberListView {
    state: ListState,
    pending_delete: Option<String>,
    requests: RequestTracker,
}

impl Default for MemberListView {
    fn default() -> Self {
        Self::new()
    }
}

impl MemberListView {
    pub fn new() -> Self {
        Self {
            state: ListState::Loading,
            pending_delete: None,
            requests: RequestTracker::default(),
        }
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    /// Members in server order; empty unless the list is ready.
    pub fn members(&self) -> &[Member] {
        match &self.state {
            ListState::Ready(members) => members,
            _ => &[],
        }
    }

    pub fn pending_delete(&self) -> Option<&str> {
        self.pending_delete.as_deref()
    }

    /// True while a confirmed delete is awaiting its response.
    pub fn is_deleting(&self) -> bool {
        matches!(self.state, ListState::Ready(_)) && self.requests.in_flight()
    }

    /// Starts a full fetch. Used on mount, after a delete and by "Try Again".
    pub fn begin_refresh(&mut self) -> Ticket {
        self.state = ListState::Loading;
        self.pending_delete = None;
        self.requests.begin()
    }

    pub fn finish_refresh(&mut self, ticket: Ticket, result: Result<Vec<Member>>) {
        if !self.requests.complete(ticket) {
            return;
        }
        self.state = match result {
            Ok(members) if members.is_empty() => ListState::Empty,
            Ok(members) => ListState::Ready(members),
            Err(e) => {
                warn!("Error fetching members: {}", e);
                ListState::Error(LOAD_FAILED.to_string())
            }
        };
    }

    /// Asks for confirmation before deleting `id`. Ignored unless the list
    /// is showing, no request is pending and `id` is non-empty.
    pub fn request_delete(&mut self, id: impl Into<String>) {
        let id = id.into();
        if id.is_empty() {
            return;
        }
        if matches!(self.state, ListState::Ready(_)) && !self.requests.in_flight() {
            self.pending_delete = Some(id);
        }
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Confirms the pending delete, returning the id to send.
    pub fn confirm_delete(&mut self) -> Option<(Ticket, String)> {
        let id = self.pending_delete.take()?;
        Some((self.requests.begin(), id))
    }

    pub fn finish_delete(&mut self, ticket: Ticket, result: Result<()>) -> DeleteOutcome {
        if !self.requests.complete(ticket) {
            return DeleteOutcome::Ignored;
        }
        match result {
            Ok(()) => DeleteOutcome::Refresh,
            Err(e) => {
                warn!("Error deleting member: {}", e);
                self.state = ListState::Error(DELETE_FAILED.to_string());
                DeleteOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Error;

    fn member(id: &str, name: &str) -> Member {
        Member {
            id: Some(id.to_string()),
            ..Member::new(name, format!("{name}@example.com"), "1234567890")
        }
    }

    fn ready_view(members: Vec<Member>) -> MemberListView {
        let mut view = MemberListView::new();
        let ticket = view.begin_refresh();
        view.finish_refresh(ticket, Ok(members));
        view
    }

    #[test]
    fn test_starts_loading() {
        let view = MemberListView::new();
        assert_eq!(view.state(), &ListState::Loading);
        assert!(view.members().is_empty());
    }

    #[test]
    fn test_refresh_keeps_server_order() {
        let view = ready_view(vec![member("2", "zed"), member("1", "amy")]);
        let names: Vec<&str> = view.members().iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["zed", "amy"]);
    }

    #[test]
    fn test_empty_collection() {
        let view = ready_view(vec![]);
        assert_eq!(view.state(), &ListState::Empty);
    }

    #[test]
    fn test_load_failure_then_try_again() {
        let mut view = MemberListView::new();
        let ticket = view.begin_refresh();
        view.finish_refresh(ticket, Err(Error::Transport("connection refused".into())));
        assert_eq!(view.state(), &ListState::Error(LOAD_FAILED.to_string()));

        let retry = view.begin_refresh();
        assert_eq!(view.state(), &ListState::Loading);
        view.finish_refresh(retry, Ok(vec![member("1", "amy")]));
        assert_eq!(view.members().len(), 1);
    }

    #[test]
    fn test_stale_refresh_is_dropped() {
        let mut view = MemberListView::new();
        let first = view.begin_refresh();
        let second = view.begin_refresh();

        view.finish_refresh(second, Ok(vec![member("1", "amy")]));
        view.finish_refresh(first, Err(Error::Timeout(std::time::Duration::from_secs(10))));

        assert_eq!(view.members().len(), 1);
    }

    #[test]
    fn test_delete_needs_confirmation() {
        let mut view = ready_view(vec![member("1", "amy")]);
        assert!(view.confirm_delete().is_none());

        view.request_delete("1");
        assert_eq!(view.pending_delete(), Some("1"));
        view.cancel_delete();
        assert_eq!(view.pending_delete(), None);
        assert!(view.confirm_delete().is_none());
    }

    #[test]
    fn test_delete_then_refetch() {
        let mut view = ready_view(vec![member("1", "amy"), member("2", "bob")]);
        view.request_delete("1");
        let (ticket, id) = view.confirm_delete().unwrap();
        assert_eq!(id, "1");
        assert_eq!(view.pending_delete(), None);

        assert_eq!(view.finish_delete(ticket, Ok(())), DeleteOutcome::Refresh);
        // no local splice; the list only changes on the next fetch
        assert_eq!(view.members().len(), 2);

        let refresh = view.begin_refresh();
        view.finish_refresh(refresh, Ok(vec![member("2", "bob")]));
        assert_eq!(view.members()[0].id(), Some("2"));
    }

    #[test]
    fn test_delete_failure_shows_error() {
        let mut view = ready_view(vec![member("1", "amy")]);
        view.request_delete("missing");
        let (ticket, _) = view.confirm_delete().unwrap();
        let outcome = view.finish_delete(
            ticket,
            Err(Error::Server {
                status: 404,
                message: Some("Member not found with id: missing".into()),
            }),
        );
        assert_eq!(outcome, DeleteOutcome::Failed);
        assert_eq!(view.state(), &ListState::Error(DELETE_FAILED.to_string()));
    }

    #[test]
    fn test_no_second_delete_while_one_is_pending() {
        let mut view = ready_view(vec![member("1", "amy"), member("2", "bob")]);
        view.request_delete("1");
        let (ticket, _) = view.confirm_delete().unwrap();

        assert!(view.is_deleting());

        view.request_delete("2");
        assert_eq!(view.pending_delete(), None);

        assert_eq!(view.finish_delete(ticket, Ok(())), DeleteOutcome::Refresh);
        assert!(!view.is_deleting());
    }

    #[test]
    fn test_not_deleting_while_loading_or_idle() {
        let mut view = MemberListView::new();
        let ticket = view.begin_refresh();
        assert!(!view.is_deleting());
        view.finish_refresh(ticket, Ok(vec![member("1", "amy")]));
        assert!(!view.is_deleting());
    }

    #[test]
    fn test_failed_delete_clears_deleting() {
        let mut view = ready_view(vec![member("1", "amy")]);
        view.request_delete("1");
        let (ticket, _) = view.confirm_delete().unwrap();
        view.finish_delete(ticket, Err(Error::Transport("reset".into())));
        assert!(!view.is_deleting());
    }

    #[test]
    fn test_member_without_id_cannot_be_deleted() {
        let mut view = ready_view(vec![Member::new("amy", "amy@example.com", "1234567890")]);
        view.request_delete("");
        assert_eq!(view.pending_delete(), None);
        assert!(view.confirm_delete().is_none());
    }

    #[test]
    fn test_delete_response_after_refresh_is_ignored() {
        let mut view = ready_view(vec![member("1", "amy")]);
        view.request_delete("1");
        let (ticket, _) = view.confirm_delete().unwrap();
        let _refresh = view.begin_refresh();
        assert_eq!(view.finish_delete(ticket, Ok(())), DeleteOutcome::Ignored);
    }
}
