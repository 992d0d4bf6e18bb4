use shared_http::api::Member;
use strum_macros::{Display, EnumCount, EnumIter};

/// The user-editable fields of a [`Member`]. `Display` gives the wire name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumCount, EnumIter)]
pub enum MemberField {
    #[strum(to_string = "name")]
    Name,
    #[strum(to_string = "email")]
    Email,
    #[strum(to_string = "phoneNumber")]
    PhoneNumber,
}

impl MemberField {
    pub fn label(self) -> &'static str {
        match self {
            MemberField::Name => "Name",
            MemberField::Email => "Email",
            MemberField::PhoneNumber => "Phone Number",
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            MemberField::Email => "email",
            MemberField::Name | MemberField::PhoneNumber => "text",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            MemberField::Name => "Enter name",
            MemberField::Email => "Enter email",
            MemberField::PhoneNumber => "Enter phone number",
        }
    }

    pub fn value(self, member: &Member) -> &str {
        match self {
            MemberField::Name => &member.name,
            MemberField::Email => &member.email,
            MemberField::PhoneNumber => &member.phone_number,
        }
    }

    pub fn set(self, member: &mut Member, value: impl Into<String>) {
        let slot = match self {
            MemberField::Name => &mut member.name,
            MemberField::Email => &mut member.email,
            MemberField::PhoneNumber => &mut member.phone_number,
        };
        *slot = value.into();
    }
}
