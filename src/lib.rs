pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::http::ReqwestClient;
pub use crate::app::{accounts::AccountService, App};
pub use crate::config::{AppConfig, HttpSettings};
pub use crate::core::{FetchProxy, HttpClient, HttpResponse, ModuleRegistry};
pub use crate::utils::error::{AppError, Result};
