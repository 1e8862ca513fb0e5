pub mod error;
pub mod types;
pub mod validation;

pub use error::{Result, SwarmError};
pub use types::*;
pub use validation::validate_config;
