use crate::utils::error::{AramexError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(AramexError::config(field_name, "URL cannot be empty"));
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(AramexError::config(
                field_name,
                format!("Unsupported URL scheme: {}", scheme),
            )),
        },
        Err(e) => Err(AramexError::config(
            field_name,
            format!("Invalid URL format: {}", e),
        )),
    }
}

/// 必填憑證欄位：缺漏與空白一律視為缺漏
pub fn validate_required_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AramexError::config(
            field_name,
            "required field is missing or empty",
        ));
    }
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(AramexError::config(
            field_name,
            format!("Value must be at least {}", min_value),
        ));
    }
    Ok(())
}

/// 請求參數的範圍檢查，失敗時不發出任何遠端呼叫
pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(AramexError::ValidationError {
            field: field_name.to_string(),
            message: format!("must be between {} and {}, got {}", min, max, value),
        });
    }
    Ok(())
}
