mod hashmap_invite_store;
mod hashmap_membership_store;
mod hashmap_task_store;
mod postgres_invite_store;
mod postgres_membership_store;
mod postgres_task_store;

pub use hashmap_invite_store::*;
pub use hashmap_membership_store::*;
pub use hashmap_task_store::*;
pub use postgres_invite_store::*;
pub use postgres_membership_store::*;
pub use postgres_task_store::*;
