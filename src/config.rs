/// Application configuration
/// In debug builds: loads from .env file
/// In release builds: uses the hosted API
#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL of the salon backend API
    pub api_url: String,
}

const DEFAULT_API_URL: &str = "https://api.salonspot.app/api";

impl Config {
    /// Load configuration based on build mode
    pub fn load() -> Self {
        #[cfg(debug_assertions)]
        {
            if dotenvy::dotenv().is_ok() {
                tracing::info!("Config: Dev mode activated - loaded .env file");
            }
            Self::from_env()
        }

        #[cfg(not(debug_assertions))]
        {
            Self {
                api_url: DEFAULT_API_URL.to_string(),
            }
        }
    }

    /// Load configuration from environment variables (dev mode)
    #[cfg(debug_assertions)]
    fn from_env() -> Self {
        let api_url = std::env::var("SALONSPOT_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        tracing::info!("Config: Using API at {api_url}");

        Self { api_url }
    }
}
