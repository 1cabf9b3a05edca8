//! 四個業務服務：附加憑證、呼叫遠端、把 `HasErrors` 轉成錯誤。

pub mod location;
pub mod rate;
pub mod shipping;
pub mod tracking;

pub use location::LocationService;
pub use rate::RateService;
pub use shipping::ShippingService;
pub use tracking::TrackingService;

use crate::domain::model::ApiResponse;
use crate::utils::error::{AramexError, Result};
use serde::Serialize;
use serde_json::Value;

pub(crate) fn encode_error(operation: &str, error: serde_json::Error) -> AramexError {
    AramexError::ValidationError {
        field: "request".to_string(),
        message: format!("cannot serialize {} request: {}", operation, error),
    }
}

/// 依欄位宣告順序轉成請求值
pub(crate) fn to_wire<T: Serialize + ?Sized>(operation: &str, value: &T) -> Result<Value> {
    serde_json::to_value(value).map_err(|e| encode_error(operation, e))
}

/// `HasErrors=true` 時帶著通知列表回傳 `ApiError`
pub(crate) fn ensure_success<R: ApiResponse>(response: R, message: &str) -> Result<R> {
    let base = response.base();
    if base.has_errors {
        tracing::warn!(
            notifications = base.notifications.len(),
            first_code = base.notifications.first().map(|n| n.code.as_str()).unwrap_or(""),
            "{}",
            message
        );
        return Err(AramexError::ApiError {
            message: message.to_string(),
            notifications: base.notifications.clone(),
        });
    }
    Ok(response)
}
