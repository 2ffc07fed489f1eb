use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("URL parse error: {0}")]
    UrlParseError(#[from] url::ParseError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Module '{name}' is not available (required by {required_by})")]
    ModuleNotFound { name: String, required_by: String },

    #[error("Module '{name}' is not declared")]
    UnknownModule { name: String },

    #[error("Invalid module name: '{name}'")]
    InvalidModuleName { name: String },

    #[error("Service '{service}' is already registered on module '{module}'")]
    DuplicateService { module: String, service: String },
}

impl AppError {
    /// Process exit code used by the CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Status { .. } => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
