pub(crate) mod api_client;
pub(crate) mod error_body;
pub mod models;
pub(crate) mod paths;

pub use api_client::ApiClient;
pub use error_body::extract_error_message;
