use shared::Result;
use shared_http::api::Member;
use tracing::{info, warn};

use super::form::MemberForm;
use super::{RequestTracker, Ticket};
use crate::field::MemberField;
use crate::validation::FieldErrors;

pub const CREATE_FAILED: &str = "Failed to create member. Please try again later.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateState {
    Editing { error: Option<String> },
    Submitting,
    Submitted,
}

/// The "Add New Member" form.
#[derive(Debug)]
pub struct CreateMemberForm {
    form: MemberForm,
    state: CreateState,
    requests: RequestTracker,
}

impl Default for CreateMemberForm {
    fn default() -> Self {
        Self::new()
    }
}

impl CreateMemberForm {
    pub fn new() -> Self {
        Self {
            form: MemberForm::default(),
            state: CreateState::Editing { error: None },
            requests: RequestTracker::default(),
        }
    }

    pub fn state(&self) -> &CreateState {
        &self.state
    }

    pub fn member(&self) -> &Member {
        self.form.member()
    }

    pub fn errors(&self) -> &FieldErrors {
        self.form.errors()
    }

    pub fn set_field(&mut self, field: MemberField, value: impl Into<String>) {
        if matches!(self.state, CreateState::Editing { .. }) {
            self.form.set_field(field, value);
        }
    }

    /// Validates and, if the form is clean, returns the member to POST.
    /// Returns `None` when validation fails or a submission is already out.
    pub fn submit(&mut self) -> Option<(Ticket, Member)> {
        if !matches!(self.state, CreateState::Editing { .. }) {
            return None;
        }
        if !self.form.validate() {
            return None;
        }
        self.state = CreateState::Submitting;
        Some((self.requests.begin(), self.form.member().without_id()))
    }

    /// Applies the server's answer. Returns true when the member was created
    /// and the page should head back to the list.
    pub fn finish_submit(&mut self, ticket: Ticket, result: Result<Member>) -> bool {
        if !self.requests.complete(ticket) {
            return false;
        }
        match result {
            Ok(created) => {
                info!("Created member {}", created.id().unwrap_or("<none>"));
                self.form.reset();
                self.state = CreateState::Submitted;
                true
            }
            Err(e) => {
                warn!("Error creating member: {}", e);
                self.state = CreateState::Editing {
                    error: Some(e.user_message(CREATE_FAILED)),
                };
                false
            }
        }
    }
}
