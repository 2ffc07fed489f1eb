use anyhow::Result;
use app_shell::app::{self, accounts};
use app_shell::{App, AppConfig, AppError, ReqwestClient};
use httpmock::prelude::*;
use std::sync::Arc;
use tempfile::TempDir;

#[tokio::test]
async fn test_bootstrap_from_config_file_and_fetch() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/api/accounts/42");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"id": 42, "name": "Checking"}));
    });

    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("app.toml");
    tokio::fs::write(
        &config_path,
        format!(
            "[http]\nbase_url = \"{}/api/\"\ntimeout_seconds = 5\n",
            server.base_url()
        ),
    )
    .await?;

    let config = AppConfig::from_file(&config_path)?;
    let app = App::bootstrap(Arc::new(ReqwestClient::new(config.http)?))?;

    assert_eq!(app.load_order().last().map(String::as_str), Some(app::NAME));
    assert_eq!(
        app.registry().module(app::NAME)?.services,
        vec![accounts::SERVICE]
    );

    let response = app.accounts().fetch("accounts/42").await?;
    api_mock.assert();

    let account: serde_json::Value = response.json()?;
    assert_eq!(account["name"], "Checking");
    Ok(())
}

#[tokio::test]
async fn test_bootstrap_without_base_url() {
    let client = ReqwestClient::new(Default::default()).unwrap();
    let app = App::bootstrap(Arc::new(client)).unwrap();

    assert_eq!(
        app.load_order(),
        &["ngRoute", "app.core", "app.widgets", "app.accounts", "app"]
    );
    assert!(app.accounts().client().base_url().is_none());
    assert!(matches!(
        app.accounts().fetch("/accounts").await,
        Err(AppError::MissingConfigError { .. })
    ));
}
