use std::{collections::HashMap, sync::Arc};
use tokio::sync::RwLock;

use crate::domain::{
    AuthClient, InviteStore, MembershipStore, Principal, TaskStore,
};
pub type InviteStoreType = Arc<RwLock<dyn InviteStore + Send + Sync>>;
pub type MembershipStoreType = Arc<RwLock<dyn MembershipStore + Send + Sync>>;
pub type TaskStoreType = Arc<RwLock<dyn TaskStore + Send + Sync>>;
pub type AuthClientType = Arc<dyn AuthClient + Send + Sync>;
/// Already-materialized sessions, keyed by session token. First stop of the
/// identity resolver; the resolver itself never writes to it.
pub type SessionCacheType = Arc<RwLock<HashMap<String, Principal>>>;

#[derive(Clone)]
pub struct AppState {
    pub invite_store: InviteStoreType,
    pub membership_store: MembershipStoreType,
    pub task_store: TaskStoreType,
    pub auth_client: AuthClientType,
    pub session_cache: SessionCacheType,
}

impl AppState {
    pub fn new(
        invite_store: InviteStoreType,
        membership_store: MembershipStoreType,
        task_store: TaskStoreType,
        auth_client: AuthClientType,
        session_cache: SessionCacheType,
    ) -> Self {
        Self {
            invite_store,
            membership_store,
            task_store,
            auth_client,
            session_cache,
        }
    }
}
