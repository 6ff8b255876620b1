pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod page;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::http::HttpAvailabilityChecker;
pub use config::{toml_config::TomlConfig, ValidatorConfig};
pub use core::validator::{FieldEvent, FormValidator};
pub use page::{Page, SharedPage};
pub use utils::error::{Result, ValidatorError};
