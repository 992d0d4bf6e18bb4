pub mod add_member;
pub mod edit_member;
pub mod member_list;
pub mod not_found;

pub use add_member::AddMember;
pub use edit_member::EditMember;
pub use member_list::MemberList;
pub use not_found::PageNotFound;
