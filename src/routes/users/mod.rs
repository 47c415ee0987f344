mod get_invites;

pub use get_invites::get_invites;
