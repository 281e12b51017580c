use serde::Deserialize;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub validation: ValidationConfig,
    pub logging: LoggingConfig,
}

/// Bounds applied by the form validator
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Maximum username length, in characters
    pub username_max_length: usize,
    /// Minimum password length, in characters
    pub password_min_length: usize,
    /// Maximum password length, in characters
    pub password_max_length: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            username_max_length: 24,
            password_min_length: 6,
            password_max_length: 12,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from `config/default`, `config/local` and `APP__*` variables.
    ///
    /// A `.env` file in the working directory is read first when present.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        Self::load_with_environment(environment())
    }

    fn load_with_environment(
        environment: config::Environment,
    ) -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(environment)
            .build()?;

        config.try_deserialize()
    }
}

/// `APP__SECTION__KEY` variables, e.g. `APP__VALIDATION__USERNAME_MAX_LENGTH=32`
fn environment() -> config::Environment {
    config::Environment::with_prefix("APP")
        .separator("__")
        .try_parsing(true)
}
