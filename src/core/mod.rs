//! Framework-free session and API logic

pub mod api;
pub mod config;
pub mod session;

pub use api::{ApiClient, ApiError};
pub use config::Config;
