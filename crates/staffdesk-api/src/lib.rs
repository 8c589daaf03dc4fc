// staffdesk-api: Async Rust client for the staff-records REST API

pub mod client;
pub mod error;
pub mod resources;
pub mod transport;
pub mod types;

pub use client::ApiClient;
pub use error::Error;
pub use resources::DEFAULT_PAGE_LIMIT;
pub use transport::TransportConfig;
pub use types::*;
