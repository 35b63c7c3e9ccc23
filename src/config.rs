//! Application configuration management.
//!
//! Configuration is read once at startup from environment variables (with an
//! optional `.env` file) and handed to the components that need it. Nothing
//! reads the environment after startup.

use serde::Deserialize;
use url::Url;

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `DATABASE_URL` (optional): SQLite connection string, defaults to a
///   local `school_payments.db` file created on first run
/// - `SERVER_PORT` (optional): HTTP server port, defaults to 3000
/// - `JWT_SECRET` (required): shared secret for verifying bearer tokens
/// - `PAYMENT_GATEWAY_URL` (optional): base URL used to build mock payment
///   links, defaults to `https://payment-gateway.com`
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_database_url")]
    pub database_url: String,

    #[serde(default = "default_port")]
    pub server_port: u16,

    pub jwt_secret: String,

    #[serde(default = "default_payment_gateway_url")]
    pub payment_gateway_url: Url,
}

fn default_database_url() -> String {
    "sqlite://school_payments.db?mode=rwc".to_string()
}

/// Default port if SERVER_PORT environment variable is not set.
fn default_port() -> u16 {
    3000
}

fn default_payment_gateway_url() -> Url {
    Url::parse("https://payment-gateway.com").expect("default gateway URL is valid")
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Loads a `.env` file first if one exists, then deserializes the
    /// environment into a `Config`.
    ///
    /// # Errors
    ///
    /// Returns an error if `JWT_SECRET` is missing or any value cannot be
    /// parsed into its expected type.
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();

        envy::from_env::<Config>()
    }
}
