pub mod confirm_delete;
pub mod empty_state;
pub mod member_fields;
pub mod navbar;
pub mod spinner;
