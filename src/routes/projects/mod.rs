mod invite_member;
mod resolve_invite;

pub use invite_member::invite_member;
pub use resolve_invite::resolve_invite;
