use crate::config::toml_config::HttpSettings;
use crate::domain::model::HttpResponse;
use crate::domain::ports::HttpClient;
use crate::utils::error::{AppError, Result};
use crate::utils::validation::Validate;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use std::collections::BTreeMap;
use std::time::Duration;
use url::Url;

/// `HttpClient` backed by reqwest.
///
/// Relative routes are resolved against the configured base URL. Any
/// non-2xx status is returned as `AppError::Status`.
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    client: Client,
    base_url: Option<Url>,
}

impl ReqwestClient {
    pub fn new(settings: HttpSettings) -> Result<Self> {
        settings.validate()?;

        let mut headers = HeaderMap::new();
        for (name, value) in &settings.headers {
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                AppError::InvalidConfigValueError {
                    field: "http.headers".to_string(),
                    value: name.clone(),
                    reason: e.to_string(),
                }
            })?;
            let header_value =
                HeaderValue::from_str(value).map_err(|e| AppError::InvalidConfigValueError {
                    field: format!("http.headers.{}", name),
                    value: value.clone(),
                    reason: e.to_string(),
                })?;
            headers.insert(header_name, header_value);
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .default_headers(headers)
            .build()?;

        let base_url = settings.base_url.as_deref().map(Url::parse).transpose()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> Option<&Url> {
        self.base_url.as_ref()
    }

    pub fn resolve(&self, route: &str) -> Result<Url> {
        match Url::parse(route) {
            Ok(url) => Ok(url),
            Err(url::ParseError::RelativeUrlWithoutBase) => match &self.base_url {
                Some(base) => Ok(base.join(route)?),
                None => Err(AppError::MissingConfigError {
                    field: "http.base_url".to_string(),
                }),
            },
            Err(e) => Err(e.into()),
        }
    }
}

/// Repeated headers are joined with `", "`; non-UTF-8 bytes are decoded lossily.
fn collect_headers(headers: &HeaderMap) -> BTreeMap<String, String> {
    let mut collected: BTreeMap<String, String> = BTreeMap::new();
    for (name, value) in headers {
        let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
        collected
            .entry(name.as_str().to_string())
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(&value);
            })
            .or_insert(value);
    }
    collected
}

impl HttpClient for ReqwestClient {
    type Response = HttpResponse;
    type Error = AppError;

    async fn get(&self, url: &str) -> Result<HttpResponse> {
        let url = self.resolve(url)?;
        tracing::debug!("GET {}", url);

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        let headers = collect_headers(response.headers());
        let body = response.text().await?;

        tracing::debug!("GET {} -> {}", url, status);

        if !status.is_success() {
            return Err(AppError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(HttpResponse {
            status: status.as_u16(),
            headers,
            body,
        })
    }
}
