pub mod config;
pub mod decoder;
pub mod document;
pub mod error;
pub mod recover;

pub use config::{RecoveryConfig, Selection};
pub use error::{RecoveryError, Result};
pub use recover::{recover, recover_from_path, recover_from_str, Recovery};
