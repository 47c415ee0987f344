mod auth_client;
mod data_stores;
mod email;
mod error;
mod invite;
mod invite_id;
mod membership;
mod principal;
mod project_id;
mod project_name;
mod role_id;
mod task;
mod user_id;

pub use auth_client::*;
pub use data_stores::*;
pub use email::*;
pub use error::*;
pub use invite::*;
pub use invite_id::*;
pub use membership::*;
pub use principal::*;
pub use project_id::*;
pub use project_name::*;
pub use role_id::*;
pub use task::*;
pub use user_id::*;
