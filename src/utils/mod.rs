pub mod auth;
pub mod constants;
pub mod invitations;
pub mod tracing;
