// Public modules
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod project;
pub mod remote;
pub mod resolve;
pub mod search;
pub mod section;
pub mod task;
pub mod user;
pub mod workspace;

// Internal modules - not part of public API
pub(crate) mod http;

// Re-export common types for convenience
pub use error::{Error, ErrorCode, Result};
pub use remote::{AsanaClient, ProjectService};
