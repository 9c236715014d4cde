use std::env;

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address
    pub host: String,
    /// Server port
    pub port: u16,
    /// Path to the service-account key JSON file
    pub credentials_path: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()?;
        let credentials_path = env::var("GOOGLE_SERVICE_ACCOUNT")
            .unwrap_or_else(|_| "service-account.json".to_string());

        Ok(Self {
            host,
            port,
            credentials_path,
        })
    }
}
