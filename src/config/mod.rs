pub mod env;
pub mod toml_config;

use crate::domain::model::ClientInfo;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_positive_number, validate_required_string, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_VERSION: &str = "1.0";
pub const DEFAULT_SOURCE: u32 = 24;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Sandbox,
    Production,
}

impl Environment {
    pub fn is_sandbox(&self) -> bool {
        matches!(self, Environment::Sandbox)
    }
}

/// 連線設定。必填憑證缺漏時以空字串表示，由 `validate` 擋下。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AramexConfig {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub account_number: String,
    #[serde(default)]
    pub account_pin: String,
    #[serde(default)]
    pub account_entity: String,
    #[serde(default)]
    pub account_country_code: String,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default = "default_source")]
    pub source: u32,
    #[serde(default)]
    pub environment: Environment,
    #[serde(default)]
    pub timeout_ms: Option<u64>,
    /// 覆寫所有端點的 scheme/host/port，路徑不變
    #[serde(default)]
    pub base_url: Option<String>,
    /// 放置 WSDL 的目錄；未設定時使用內建文件
    #[serde(default)]
    pub schema_dir: Option<PathBuf>,
    #[serde(default)]
    pub debug_wire: bool,
}

fn default_version() -> String {
    DEFAULT_VERSION.to_string()
}

fn default_source() -> u32 {
    DEFAULT_SOURCE
}

impl AramexConfig {
    /// 只帶必填欄位，其餘取預設值
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        account_number: impl Into<String>,
        account_pin: impl Into<String>,
        account_entity: impl Into<String>,
        account_country_code: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            account_number: account_number.into(),
            account_pin: account_pin.into(),
            account_entity: account_entity.into(),
            account_country_code: account_country_code.into(),
            version: default_version(),
            source: default_source(),
            environment: Environment::default(),
            timeout_ms: None,
            base_url: None,
            schema_dir: None,
            debug_wire: false,
        }
    }

    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_schema_dir(mut self, schema_dir: impl Into<PathBuf>) -> Self {
        self.schema_dir = Some(schema_dir.into());
        self
    }

    pub fn with_debug_wire(mut self, debug_wire: bool) -> Self {
        self.debug_wire = debug_wire;
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }

    /// 每次呼叫都產生新的憑證區塊
    pub fn client_info(&self) -> ClientInfo {
        ClientInfo {
            user_name: self.username.clone(),
            password: self.password.clone(),
            version: self.version.clone(),
            account_number: self.account_number.clone(),
            account_pin: self.account_pin.clone(),
            account_entity: self.account_entity.clone(),
            account_country_code: self.account_country_code.clone(),
            source: self.source,
        }
    }
}

impl Validate for AramexConfig {
    fn validate(&self) -> Result<()> {
        validate_required_string("username", &self.username)?;
        validate_required_string("password", &self.password)?;
        validate_required_string("account_number", &self.account_number)?;
        validate_required_string("account_pin", &self.account_pin)?;
        validate_required_string("account_entity", &self.account_entity)?;
        validate_required_string("account_country_code", &self.account_country_code)?;

        if let Some(base_url) = &self.base_url {
            validate_url("base_url", base_url)?;
        }
        if let Some(timeout_ms) = self.timeout_ms {
            validate_positive_number("timeout_ms", timeout_ms, 1)?;
        }

        Ok(())
    }
}
