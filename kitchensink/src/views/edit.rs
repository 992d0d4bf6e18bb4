use shared::Result;
use shared_http::api::Member;
use tracing::warn;

use super::form::MemberForm;
use super::{RequestTracker, Ticket};
use crate::field::MemberField;
use crate::validation::FieldErrors;

pub const LOAD_FAILED: &str = "Failed to load member. Please try again later.";
pub const UPDATE_FAILED: &str = "Failed to update member. Please try again later.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditState {
    Loading,
    /// Terminal; the page only offers a way back to the list.
    LoadFailed(String),
    Editing {
        error: Option<String>,
    },
    Submitting,
    Updated,
}

/// The "Edit Member" form, keyed by the id from the route.
#[derive(Debug)]
pub struct EditMemberForm {
    id: String,
    form: MemberForm,
    state: EditState,
    requests: RequestTracker,
}

impl EditMemberForm {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            form: MemberForm::default(),
            state: EditState::Loading,
            requests: RequestTracker::default(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn state(&self) -> &EditState {
        &self.state
    }

    pub fn member(&self) -> &Member {
        self.form.member()
    }

    pub fn errors(&self) -> &FieldErrors {
        self.form.errors()
    }

    /// Points the form at another member. Whatever was in flight for the
    /// previous id is abandoned.
    pub fn rekey(&mut self, id: impl Into<String>) {
        self.id = id.into();
        self.form.reset();
        self.state = EditState::Loading;
        self.requests.abandon();
    }

    pub fn begin_load(&mut self) -> Ticket {
        self.state = EditState::Loading;
        self.requests.begin()
    }

    pub fn finish_load(&mut self, ticket: Ticket, result: Result<Member>) {
        if !self.requests.complete(ticket) {
            return;
        }
        match result {
            Ok(member) => {
                self.form = MemberForm::with_member(member);
                self.state = EditState::Editing { error: None };
            }
            Err(e) => {
                warn!("Error fetching member {}: {}", self.id, e);
                self.state = EditState::LoadFailed(LOAD_FAILED.to_string());
            }
        }
    }

    pub fn set_field(&mut self, field: MemberField, value: impl Into<String>) {
        if matches!(self.state, EditState::Editing { .. }) {
            self.form.set_field(field, value);
        }
    }

    /// Validates and returns the id and full member to PUT.
    pub fn submit(&mut self) -> Option<(Ticket, String, Member)> {
        if !matches!(self.state, EditState::Editing { .. }) {
            return None;
        }
        if !self.form.validate() {
            return None;
        }
        self.state = EditState::Submitting;
        Some((self.requests.begin(), self.id.clone(), self.form.member().clone()))
    }

    /// Applies the update result. The form keeps the submitted values either
    /// way. Returns true when the page should head back to the list.
    pub fn finish_submit(&mut self, ticket: Ticket, result: Result<Member>) -> bool {
        if !self.requests.complete(ticket) {
            return false;
        }
        match result {
            Ok(_) => {
                self.state = EditState::Updated;
                true
            }
            Err(e) => {
                warn!("Error updating member {}: {}", self.id, e);
                self.state = EditState::Editing {
                    error: Some(e.user_message(UPDATE_FAILED)),
                };
                false
            }
        }
    }
}
