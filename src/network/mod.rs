pub mod api_client;
pub mod config;

pub use api_client::{ApiClient, FetchError};
pub use config::ApiConfig;

// Helper function to get the API base URL for this build.
pub(crate) fn get_api_base_url() -> String {
    ApiConfig::from_env().base_url().to_string()
}
