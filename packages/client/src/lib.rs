pub mod config;
pub mod error;
pub mod masked;
pub mod models;

mod admin;
mod envelope;

pub use admin::AdminClient;
pub use config::ClientConfig;
pub use error::ClientError;
