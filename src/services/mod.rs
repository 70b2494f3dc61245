mod filler;
mod oracle_client_http;
mod oracle_client_retrying;
mod project_store_filesystem;
mod project_store_memory;

pub use filler::ContentFiller;
pub use oracle_client_http::{API_KEY_ENV_VAR, HttpOracleClient};
pub use oracle_client_retrying::{RetryPolicy, RetryingOracleClient};
pub use project_store_filesystem::FilesystemProjectStore;
pub use project_store_memory::InMemoryProjectStore;
