//! Kraken API credentials from the process environment.

use std::env;

/// API key pair for private endpoints. The secret is the base64-encoded
/// value as issued by the exchange; it is only decoded at signing time.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub api_key: String,
    pub api_secret: String,
}

impl Credentials {
    pub fn new(api_key: String, api_secret: String) -> Self {
        Self {
            api_key,
            api_secret,
        }
    }

    /// Read `KRAKEN_API_KEY` / `KRAKEN_API_SECRET`.
    ///
    /// Absent variables become empty strings rather than a local error, so
    /// a misconfigured environment surfaces as an authentication failure
    /// from the exchange.
    pub fn from_env() -> Self {
        Self {
            api_key: env::var("KRAKEN_API_KEY").unwrap_or_default(),
            api_secret: env::var("KRAKEN_API_SECRET").unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn reads_credentials_from_env() {
        std::env::set_var("KRAKEN_API_KEY", "test-key");
        std::env::set_var("KRAKEN_API_SECRET", "dGVzdC1zZWNyZXQ=");

        let creds = Credentials::from_env();
        assert_eq!(creds.api_key, "test-key");
        assert_eq!(creds.api_secret, "dGVzdC1zZWNyZXQ=");

        std::env::remove_var("KRAKEN_API_KEY");
        std::env::remove_var("KRAKEN_API_SECRET");
    }

    #[test]
    #[serial]
    fn missing_env_yields_empty_credentials() {
        std::env::remove_var("KRAKEN_API_KEY");
        std::env::remove_var("KRAKEN_API_SECRET");

        let creds = Credentials::from_env();
        assert!(creds.api_key.is_empty());
        assert!(creds.api_secret.is_empty());
    }
}
