//! Process configuration: credentials and logging.

pub mod credentials;
pub mod logging;

pub use credentials::Credentials;
