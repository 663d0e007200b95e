use std::{env, net::IpAddr};

use crate::payment::stripe::STRIPE_API_BASE;

pub const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017/ecommerce";
pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub mongodb_uri: String,
    pub stripe_secret_key: Option<String>,
    pub stripe_api_base: String,
    pub host: IpAddr,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mongodb_uri = lookup("MONGODB_URI").unwrap_or_else(|| DEFAULT_MONGODB_URI.to_string());
        let stripe_secret_key = lookup("STRIPE_SECRET_KEY");
        let stripe_api_base =
            lookup("STRIPE_API_BASE").unwrap_or_else(|| STRIPE_API_BASE.to_string());
        let host = lookup("APP_HOST")
            .unwrap_or_else(|| "0.0.0.0".to_string())
            .parse::<IpAddr>()?;
        let port = lookup("PORT")
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        Ok(Self {
            mongodb_uri,
            stripe_secret_key,
            stripe_api_base,
            host,
            port,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> anyhow::Result<AppConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg.mongodb_uri, DEFAULT_MONGODB_URI);
        assert_eq!(cfg.port, 5000);
        assert_eq!(cfg.stripe_api_base, "https://api.stripe.com");
        assert!(cfg.stripe_secret_key.is_none());
        assert_eq!(cfg.host.to_string(), "0.0.0.0");
    }

    #[test]
    fn bad_port_falls_back_to_default() {
        let cfg = config(&[("PORT", "eighty")]).unwrap();
        assert_eq!(cfg.port, DEFAULT_PORT);

        let cfg = config(&[("PORT", "8080")]).unwrap();
        assert_eq!(cfg.port, 8080);
    }

    #[test]
    fn bad_host_is_an_error() {
        assert!(config(&[("APP_HOST", "not-an-ip")]).is_err());
    }
}
