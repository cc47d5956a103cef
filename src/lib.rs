pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliArgs;

pub use crate::adapters::GeminiAdapter;
pub use crate::config::{ApiKey, AppConfig};
pub use crate::core::controller::{QueryController, SearchState, SubmitOutcome};
pub use crate::domain::model::KeywordRecord;
pub use crate::domain::ports::KeywordProvider;
pub use crate::utils::error::{KeywordError, Result};
