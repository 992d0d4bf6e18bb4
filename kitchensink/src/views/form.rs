use shared_http::api::Member;

use crate::field::MemberField;
use crate::validation::{FieldErrors, validate};

/// Field values plus the errors from the most recent validation pass.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MemberForm {
    member: Member,
    errors: FieldErrors,
}

impl MemberForm {
    pub fn with_member(member: Member) -> Self {
        Self {
            member,
            errors: FieldErrors::default(),
        }
    }

    pub fn member(&self) -> &Member {
        &self.member
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn set_field(&mut self, field: MemberField, value: impl Into<String>) {
        field.set(&mut self.member, value);
    }

    /// Re-runs validation, keeping the result for display.
    pub fn validate(&mut self) -> bool {
        self.errors = validate(&self.member);
        self.errors.is_empty()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
