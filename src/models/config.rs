use serde::Deserialize;

/// Configuration options for the trivia service.
///
/// Values are layered from `config/default.yaml`, an optional
/// `config/{APP_ENV}.yaml` and `APP_`-prefixed environment variables.
#[derive(Clone, Debug, Deserialize)]
pub struct ServerConfig {
    /// Path of the SQLite database file.
    #[serde(default = "default_database_url")]
    pub database_url: String,
    /// Interface the HTTP server binds to.
    #[serde(default = "default_address")]
    pub address: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Number of questions returned per page by paginated endpoints.
    #[serde(default = "default_questions_per_page")]
    pub questions_per_page: usize,
}

fn default_database_url() -> String {
    "app.db".to_string()
}

fn default_address() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_questions_per_page() -> usize {
    crate::pagination::DEFAULT_ITEMS_PER_PAGE
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
            address: default_address(),
            port: default_port(),
            questions_per_page: default_questions_per_page(),
        }
    }
}

impl ServerConfig {
    /// Load the configuration from files and the environment.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let environment = std::env::var("APP_ENV").unwrap_or_else(|_| "local".to_string());

        let settings = ::config::Config::builder()
            .add_source(::config::File::with_name("config/default").required(false))
            .add_source(
                ::config::File::with_name(&format!("config/{environment}")).required(false),
            )
            .add_source(::config::Environment::with_prefix("APP").try_parsing(true))
            .build()?;

        let server_config: Self = settings.try_deserialize()?;
        if server_config.questions_per_page == 0 {
            return Err(::config::ConfigError::Message(
                "questions_per_page must be greater than zero".to_string(),
            ));
        }
        Ok(server_config)
    }
}
