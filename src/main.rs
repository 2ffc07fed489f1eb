use app_shell::utils::logger;
use app_shell::{App, CliConfig, ReqwestClient};
use clap::Parser;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting app-shell");
    tracing::debug!("CLI config: {:?}", config);

    let settings = match config.http_settings() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(e.exit_code());
        }
    };

    let client = Arc::new(ReqwestClient::new(settings)?);
    let app = App::bootstrap(client)?;

    match app.accounts().fetch(&config.route).await {
        Ok(response) => {
            tracing::info!("✅ {} -> {}", config.route, response.status);
            println!("{}", response.body);
        }
        Err(e) => {
            tracing::error!("❌ Fetch of {} failed: {}", config.route, e);
            eprintln!("❌ {}", e);
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}
