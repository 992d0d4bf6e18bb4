//! Member directory console core: field validation, the REST transport
//! client and the per-view state machines the UI renders.

pub mod client;
pub mod field;
pub mod timer;
pub mod validation;
pub mod views;

pub use client::MemberClient;
pub use field::MemberField;
pub use validation::{FieldErrors, validate};
