use crate::core::binding::Binding;
use crate::core::service::LogicalService;
use crate::utils::error::{Result, TransportFault};
use async_trait::async_trait;
use serde_json::Value;
use std::path::PathBuf;
use std::time::Duration;

/// 從 WSDL 取得的單一遠端操作描述
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationSpec {
    pub name: String,
    pub soap_action: String,
    /// Body 內的請求元素名稱（通常與操作同名）
    pub input_element: String,
    pub namespace: String,
}

/// 單次呼叫送出/收到的原始 XML，只供除錯輸出。
/// 連線失敗時沒有回應內容，`response` 為空字串。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WireExchange {
    pub request: String,
    pub response: String,
}

/// 呼叫結果連同該次呼叫自己的原始 XML
#[derive(Debug)]
pub struct TracedCall {
    pub outcome: std::result::Result<Value, TransportFault>,
    pub exchange: Option<WireExchange>,
}

#[async_trait]
pub trait Transport: Send + Sync {
    async fn call(
        &self,
        operation: &OperationSpec,
        request: &Value,
    ) -> std::result::Result<Value, TransportFault>;

    /// 不保留原始 XML 的傳輸層只回傳結果
    async fn call_traced(&self, operation: &OperationSpec, request: &Value) -> TracedCall {
        TracedCall {
            outcome: self.call(operation, request).await,
            exchange: None,
        }
    }
}

/// 建立 binding 所需的資訊，由 SessionManager 依目前環境決定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingTarget {
    pub service: LogicalService,
    pub endpoint: String,
    pub schema_dir: Option<PathBuf>,
    pub timeout: Option<Duration>,
}

#[async_trait]
pub trait BindingFactory: Send + Sync {
    async fn create(&self, target: BindingTarget) -> Result<Binding>;
}
