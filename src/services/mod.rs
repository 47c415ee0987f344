pub mod data_stores;
pub mod http_auth_client;
