use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use shared_http::api::Member;

use crate::field::MemberField;

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Email address is invalid";
pub const PHONE_REQUIRED: &str = "Phone number is required";
pub const PHONE_INVALID: &str = "Phone number is invalid (must be 10 digits)";

const PHONE_DIGITS: usize = 10;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("valid email regex"));

/// Per-field validation messages. Empty means the member may be submitted.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<MemberField, &'static str>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: MemberField) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (MemberField, &'static str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, *message))
    }

    fn check(&mut self, field: MemberField, outcome: Option<&'static str>) {
        if let Some(message) = outcome {
            self.0.insert(field, message);
        }
    }
}

/// Validates every field of `member` independently.
pub fn validate(member: &Member) -> FieldErrors {
    let mut errors = FieldErrors::default();
    errors.check(MemberField::Name, check_name(&member.name));
    errors.check(MemberField::Email, check_email(&member.email));
    errors.check(MemberField::PhoneNumber, check_phone_number(&member.phone_number));
    errors
}

fn check_name(name: &str) -> Option<&'static str> {
    name.trim().is_empty().then_some(NAME_REQUIRED)
}

fn check_email(email: &str) -> Option<&'static str> {
    if email.trim().is_empty() {
        Some(EMAIL_REQUIRED)
    } else if !EMAIL_RE.is_match(email) {
        Some(EMAIL_INVALID)
    } else {
        None
    }
}

fn check_phone_number(phone_number: &str) -> Option<&'static str> {
    if phone_number.trim().is_empty() {
        return Some(PHONE_REQUIRED);
    }
    let digits = phone_number.chars().filter(char::is_ascii_digit).count();
    (digits != PHONE_DIGITS).then_some(PHONE_INVALID)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Some whitespace-free token contains `x@y.z` with non-empty parts.
    fn looks_like_email(email: &str) -> bool {
        email.split_whitespace().any(|token| {
            token.char_indices().any(|(at, c)| {
                if c != '@' || at == 0 {
                    return false;
                }
                let rest = &token[at + 1..];
                rest.char_indices()
                    .any(|(dot, c)| c == '.' && dot > 0 && dot + 1 < rest.len())
            })
        })
    }

    fn is_valid(name: &str, email: &str, phone_number: &str) -> bool {
        !name.trim().is_empty()
            && looks_like_email(email)
            && phone_number.chars().filter(char::is_ascii_digit).count() == PHONE_DIGITS
    }

    proptest! {
        #[test]
        fn test_errors_empty_iff_every_field_valid(
            name in "\\PC{0,12}",
            email in prop_oneof!["\\PC{0,16}", "[a-z ]{0,4}@[a-z. ]{0,6}"],
            phone in prop_oneof!["\\PC{0,16}", "[0-9() .+-]{0,16}"],
        ) {
            let errors = validate(&Member::new(name.clone(), email.clone(), phone.clone()));
            prop_assert_eq!(errors.is_empty(), is_valid(&name, &email, &phone));
        }

        #[test]
        fn test_well_formed_members_pass(
            name in "[A-Za-z][A-Za-z ]{0,20}",
            email in "[a-z0-9]{1,8}@[a-z0-9]{1,8}\\.[a-z]{2,4}",
            phone in "\\(?[0-9]{3}\\)?[ .-]?[0-9]{3}[ .-]?[0-9]{4}",
        ) {
            prop_assert!(validate(&Member::new(name, email, phone)).is_empty());
        }

        #[test]
        fn test_wrong_digit_count_is_invalid(
            phone in prop_oneof!["[0-9]{1,9}", "[0-9]{11,20}"],
        ) {
            prop_assert_eq!(check_phone_number(&phone), Some(PHONE_INVALID));
        }
    }
}
