pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliArgs;

pub use adapters::{http::HttpGateway, storage::LocalStorage};
pub use config::{AppConfig, FlowConfig};
pub use core::flow::WebhookFlow;
pub use domain::model::{FlowReport, Registration};
pub use utils::error::{Result, SolverError};
