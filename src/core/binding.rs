use crate::core::service::LogicalService;
use crate::domain::ports::{OperationSpec, Transport};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// 一個服務在某個環境下的遠端連線：端點、操作表與傳輸層
#[derive(Clone)]
pub struct Binding {
    service: LogicalService,
    endpoint: String,
    operations: HashMap<String, OperationSpec>,
    transport: Arc<dyn Transport>,
}

impl Binding {
    pub fn new(
        service: LogicalService,
        endpoint: impl Into<String>,
        operations: impl IntoIterator<Item = OperationSpec>,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            service,
            endpoint: endpoint.into(),
            operations: operations
                .into_iter()
                .map(|op| (op.name.clone(), op))
                .collect(),
            transport,
        }
    }

    pub fn service(&self) -> LogicalService {
        self.service
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// 名稱需完全相符（區分大小寫）
    pub fn operation(&self, name: &str) -> Option<&OperationSpec> {
        self.operations.get(name)
    }

    pub fn operation_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.operations.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("service", &self.service)
            .field("endpoint", &self.endpoint)
            .field("operations", &self.operation_names())
            .finish()
    }
}
