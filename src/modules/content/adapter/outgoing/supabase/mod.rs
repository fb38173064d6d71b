pub mod config;
pub mod rest_gateway;
pub mod storage_client;

pub use config::SupabaseConfig;
pub use rest_gateway::SupabaseGateway;
pub use storage_client::SupabaseStorage;
