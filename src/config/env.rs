use crate::config::{AramexConfig, Environment};
use crate::utils::error::{AramexError, Result};
use crate::utils::validation::Validate;
use std::path::PathBuf;

impl AramexConfig {
    /// 從 `ARAMEX_*` 環境變數建立配置
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| lookup(key).unwrap_or_default();
        let optional = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut config = AramexConfig::new(
            required("ARAMEX_USERNAME"),
            required("ARAMEX_PASSWORD"),
            required("ARAMEX_ACCOUNT_NUMBER"),
            required("ARAMEX_ACCOUNT_PIN"),
            required("ARAMEX_ACCOUNT_ENTITY"),
            required("ARAMEX_ACCOUNT_COUNTRY_CODE"),
        );

        if let Some(version) = optional("ARAMEX_VERSION") {
            config.version = version;
        }
        if let Some(source) = optional("ARAMEX_SOURCE") {
            config.source = parse_number("ARAMEX_SOURCE", &source)?;
        }
        if let Some(environment) = optional("ARAMEX_ENVIRONMENT") {
            config.environment = parse_environment(&environment)?;
        }
        if let Some(timeout) = optional("ARAMEX_TIMEOUT_MS") {
            config.timeout_ms = Some(parse_number("ARAMEX_TIMEOUT_MS", &timeout)?);
        }
        config.base_url = optional("ARAMEX_BASE_URL");
        config.schema_dir = optional("ARAMEX_SCHEMA_DIR").map(PathBuf::from);
        config.debug_wire = optional("ARAMEX_DEBUG_SOAP")
            .map(|v| matches!(v.trim(), "true" | "1"))
            .unwrap_or(false);

        config.validate()?;
        Ok(config)
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| AramexError::config(key, format!("not a valid number: '{}'", raw)))
}

fn parse_environment(raw: &str) -> Result<Environment> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "sandbox" | "test" => Ok(Environment::Sandbox),
        "production" | "live" => Ok(Environment::Production),
        other => Err(AramexError::config(
            "ARAMEX_ENVIRONMENT",
            format!("expected 'sandbox' or 'production', got '{}'", other),
        )),
    }
}
