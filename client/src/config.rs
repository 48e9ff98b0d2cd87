//! Client configuration from environment variables

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Deployment environment, selects the default backend URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    fn from_env_value(value: &str) -> Result<Self, String> {
        match value.to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(format!(
                "SOCIETY_ENV must be 'development' or 'production', got '{}'",
                other
            )),
        }
    }

    /// Backend URL used when `SOCIETY_API_URL` is not set
    pub fn default_api_url(&self) -> &'static str {
        match self {
            Environment::Development => "http://192.168.0.116:5000/api",
            Environment::Production => "https://api.societyapp.com",
        }
    }
}

/// Razorpay checkout settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Publishable key id
    pub key_id: String,
    /// Merchant name shown in the checkout header
    pub merchant_name: String,
    pub currency: String,
    pub theme_color: String,
    pub logo_url: Option<String>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            key_id: "rzp_test_your_key_here".to_string(),
            merchant_name: "Society App".to_string(),
            currency: "INR".to_string(),
            theme_color: "#007AFF".to_string(),
            logo_url: None,
        }
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub environment: Environment,
    /// Backend base URL, including the `/api` prefix where the deployment uses one
    pub api_base_url: String,
    /// Upper bound for `POST /auth/login`
    pub login_timeout: Duration,
    /// Upper bound for every other request
    pub request_timeout: Duration,
    /// Where the device key-value store lives
    pub storage_path: PathBuf,
    pub gateway: GatewayConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        let environment = Environment::Development;
        Self {
            environment,
            api_base_url: environment.default_api_url().to_string(),
            login_timeout: Duration::from_millis(2000),
            request_timeout: Duration::from_secs(10),
            storage_path: PathBuf::from("society-client.json"),
            gateway: GatewayConfig::default(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        let defaults = Self::default();

        let environment = match env::var("SOCIETY_ENV") {
            Ok(value) => Environment::from_env_value(&value)?,
            Err(_) => defaults.environment,
        };

        let api_base_url = env::var("SOCIETY_API_URL")
            .unwrap_or_else(|_| environment.default_api_url().to_string());

        let login_timeout = env::var("SOCIETY_LOGIN_TIMEOUT_MS")
            .ok()
            .map(|v| {
                v.parse::<u64>()
                    .map_err(|_| "SOCIETY_LOGIN_TIMEOUT_MS must be a valid number".to_string())
            })
            .transpose()?
            .map(Duration::from_millis)
            .unwrap_or(defaults.login_timeout);

        let request_timeout = env::var("SOCIETY_REQUEST_TIMEOUT_SECS")
            .ok()
            .map(|v| {
                v.parse::<u64>()
                    .map_err(|_| "SOCIETY_REQUEST_TIMEOUT_SECS must be a valid number".to_string())
            })
            .transpose()?
            .map(Duration::from_secs)
            .unwrap_or(defaults.request_timeout);

        let storage_path = env::var("SOCIETY_STORAGE_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.storage_path);

        let gateway = GatewayConfig {
            key_id: env::var("RAZORPAY_KEY_ID").unwrap_or(defaults.gateway.key_id),
            merchant_name: env::var("SOCIETY_MERCHANT_NAME")
                .unwrap_or(defaults.gateway.merchant_name),
            logo_url: env::var("SOCIETY_LOGO_URL").ok(),
            ..defaults.gateway
        };

        let config = Self {
            environment,
            api_base_url,
            login_timeout,
            request_timeout,
            storage_path,
            gateway,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(self.api_base_url.starts_with("http://") || self.api_base_url.starts_with("https://")) {
            return Err(format!(
                "API base URL must start with http:// or https://, got '{}'",
                self.api_base_url
            ));
        }

        if self.environment == Environment::Production && !self.api_base_url.starts_with("https://") {
            return Err("Production API base URL must use https".to_string());
        }

        if self.login_timeout.is_zero() || self.request_timeout.is_zero() {
            return Err("Request timeouts must be greater than zero".to_string());
        }

        if self.gateway.key_id.is_empty() {
            return Err("RAZORPAY_KEY_ID must not be empty".to_string());
        }

        Ok(())
    }
}
