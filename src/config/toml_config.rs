use crate::config::AramexConfig;
use crate::utils::error::{AramexError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

impl AramexConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            AramexError::config(
                "config_file",
                format!("Cannot read {}: {}", path.display(), e),
            )
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置並驗證
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content);

        let config: AramexConfig = toml::from_str(&processed_content)
            .map_err(|e| AramexError::config("toml_parsing", format!("TOML parsing error: {}", e)))?;
        config.validate()?;
        Ok(config)
    }
}

/// 替換環境變數 (例如 ${ARAMEX_PASSWORD})；找不到的變數保留原字
fn substitute_env_vars(content: &str) -> String {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    let re = PATTERN.get_or_init(|| {
        Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("static pattern is valid")
    });

    re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    })
    .into_owned()
}
