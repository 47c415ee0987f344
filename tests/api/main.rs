mod get_invites;
mod identity;
mod invite_member;
mod list_tasks;
