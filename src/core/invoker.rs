use crate::core::repair::{repair_collections, unwrap_envelope};
use crate::core::service::LogicalService;
use crate::core::session::SessionManager;
use crate::utils::error::{AramexError, Result, TransportFault};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;

/// 執行單一遠端操作，回傳修補後的結果或已分類的錯誤
#[derive(Clone)]
pub struct Invoker {
    session: Arc<SessionManager>,
}

impl Invoker {
    pub fn new(session: Arc<SessionManager>) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &Arc<SessionManager> {
        &self.session
    }

    /// 設定 timeout 時，binding 建立與遠端呼叫共用同一個期限。
    /// 建立逾時回報為 `BindingConstructionError`，呼叫逾時回報為 `TransportFault::Timeout`。
    pub async fn invoke(
        &self,
        service: LogicalService,
        operation: &str,
        request: Value,
    ) -> Result<Value> {
        let config = self.session.config();
        let started = Instant::now();
        let deadline = config.timeout().map(|limit| tokio::time::Instant::now() + limit);

        let binding = match deadline {
            Some(at) => tokio::time::timeout_at(at, self.session.resolve_binding(service))
                .await
                .unwrap_or_else(|_| {
                    Err(AramexError::BindingConstructionError {
                        service: service.to_string(),
                        reason: format!(
                            "timed out after {} ms",
                            started.elapsed().as_millis()
                        ),
                    })
                })?,
            None => self.session.resolve_binding(service).await?,
        };

        let spec = binding
            .operation(operation)
            .ok_or_else(|| AramexError::OperationNotFoundError {
                service: service.to_string(),
                operation: operation.to_string(),
            })?;

        let transport = binding.transport();
        tracing::debug!(service = %service, operation, "Invoking SOAP operation");

        // 逾時會丟棄整個 future，不留下半途的 XML 紀錄
        let call = async {
            if !config.debug_wire {
                return transport.call(spec, &request).await;
            }
            let traced = transport.call_traced(spec, &request).await;
            if let Some(exchange) = &traced.exchange {
                tracing::trace!(
                    target: "aramex_sdk::wire",
                    service = %service,
                    operation,
                    request = %exchange.request,
                    response = %exchange.response,
                    "SOAP exchange"
                );
            }
            traced.outcome
        };

        let outcome = match deadline {
            Some(at) => tokio::time::timeout_at(at, call).await.unwrap_or_else(|_| {
                Err(TransportFault::Timeout {
                    elapsed_ms: started.elapsed().as_millis() as u64,
                })
            }),
            None => call.await,
        };

        let raw = outcome.map_err(|source| {
            tracing::warn!(
                service = %service,
                operation,
                error = %source,
                "SOAP call failed"
            );
            AramexError::TransportError {
                service: service.to_string(),
                operation: operation.to_string(),
                source,
            }
        })?;

        tracing::debug!(
            service = %service,
            operation,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "SOAP call completed"
        );

        Ok(repair_collections(unwrap_envelope(operation, raw)))
    }

    /// 序列化請求（保留欄位順序）並把結果解碼成指定型別
    pub async fn invoke_typed<Req, Resp>(
        &self,
        service: LogicalService,
        operation: &str,
        request: &Req,
    ) -> Result<Resp>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        let value = serde_json::to_value(request).map_err(|e| AramexError::ValidationError {
            field: "request".to_string(),
            message: format!("cannot serialize {} request: {}", operation, e),
        })?;

        let result = self.invoke(service, operation, value).await?;

        serde_json::from_value(result).map_err(|source| AramexError::DecodeError {
            operation: operation.to_string(),
            source,
        })
    }
}
