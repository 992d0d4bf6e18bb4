mod member;
mod responses;

pub use member::Member;
pub use responses::ErrorResponse;
