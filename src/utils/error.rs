use crate::domain::model::Notification;
use thiserror::Error;

/// 遠端呼叫在傳輸層的失敗原因
#[derive(Error, Debug)]
pub enum TransportFault {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("SOAP fault {code}: {message}")]
    SoapFault { code: String, message: String },

    #[error("malformed SOAP envelope: {reason}")]
    MalformedEnvelope { reason: String },

    #[error("call timed out after {elapsed_ms}ms")]
    Timeout { elapsed_ms: u64 },
}

#[derive(Error, Debug)]
pub enum AramexError {
    #[error("Configuration error in '{field}': {message}")]
    ConfigError { field: String, message: String },

    #[error("Failed to construct {service} binding: {reason}")]
    BindingConstructionError { service: String, reason: String },

    #[error("SOAP method '{operation}' not found in {service} service")]
    OperationNotFoundError { service: String, operation: String },

    #[error("SOAP call failed: {service}.{operation} - {source}")]
    TransportError {
        service: String,
        operation: String,
        #[source]
        source: TransportFault,
    },

    #[error("{message}")]
    ApiError {
        message: String,
        notifications: Vec<Notification>,
    },

    #[error("Validation error in '{field}': {message}")]
    ValidationError { field: String, message: String },

    #[error("Failed to decode {operation} response: {source}")]
    DecodeError {
        operation: String,
        #[source]
        source: serde_json::Error,
    },
}

/// 錯誤種類標籤，呼叫端以此判斷而非比對訊息字串
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Config,
    BindingConstruction,
    OperationNotFound,
    Transport,
    Api,
    Validation,
    Decode,
}

impl AramexError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AramexError::ConfigError { .. } => ErrorKind::Config,
            AramexError::BindingConstructionError { .. } => ErrorKind::BindingConstruction,
            AramexError::OperationNotFoundError { .. } => ErrorKind::OperationNotFound,
            AramexError::TransportError { .. } => ErrorKind::Transport,
            AramexError::ApiError { .. } => ErrorKind::Api,
            AramexError::ValidationError { .. } => ErrorKind::Validation,
            AramexError::DecodeError { .. } => ErrorKind::Decode,
        }
    }

    /// 是否值得由呼叫端重試。本函式庫本身從不自動重試。
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::BindingConstruction | ErrorKind::Transport
        )
    }

    /// 遠端回傳的通知列表（僅 `ApiError` 有）
    pub fn notifications(&self) -> &[Notification] {
        match self {
            AramexError::ApiError { notifications, .. } => notifications,
            _ => &[],
        }
    }

    pub(crate) fn config(field: &str, message: impl Into<String>) -> Self {
        AramexError::ConfigError {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AramexError>;
