use super::toml_config::{AppConfig, HttpSettings};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "app-shell")]
#[command(about = "Fetch an API route through the application's account service")]
pub struct CliConfig {
    /// Route or URL handed to the account service
    pub route: String,

    #[arg(long, help = "Path to a TOML config file")]
    pub config: Option<String>,

    #[arg(long, help = "Base URL relative routes are resolved against")]
    pub base_url: Option<String>,

    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl CliConfig {
    /// File settings overlaid with whatever was passed on the command line.
    pub fn http_settings(&self) -> Result<HttpSettings> {
        let mut settings = match &self.config {
            Some(path) => AppConfig::from_file(path)?.http,
            None => HttpSettings::default(),
        };

        if let Some(base_url) = &self.base_url {
            // An empty flag clears a base URL coming from the file.
            settings.base_url = Some(base_url.clone()).filter(|u| !u.is_empty());
        }
        if let Some(timeout) = self.timeout_seconds {
            settings.timeout_seconds = timeout;
        }

        settings.validate()?;
        Ok(settings)
    }
}
