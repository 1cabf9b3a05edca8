//! 單元測試用的假傳輸層與 binding factory

use crate::config::AramexConfig;
use crate::core::binding::Binding;
use crate::domain::ports::{
    BindingFactory, BindingTarget, OperationSpec, TracedCall, Transport, WireExchange,
};
use crate::utils::error::{AramexError, Result, TransportFault};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub(crate) fn sample_config() -> AramexConfig {
    AramexConfig::new("testingapi", "R123456789$r", "20016", "331421", "AMM", "JO")
}

type Reply = Box<dyn Fn(&str, &Value) -> std::result::Result<Value, TransportFault> + Send + Sync>;

pub(crate) struct MockTransport {
    calls: AtomicUsize,
    traced_calls: AtomicUsize,
    requests: Mutex<Vec<(String, Value)>>,
    reply: Reply,
    delay: Option<Duration>,
}

impl MockTransport {
    pub fn replying<F>(reply: F) -> Self
    where
        F: Fn(&str, &Value) -> std::result::Result<Value, TransportFault> + Send + Sync + 'static,
    {
        Self {
            calls: AtomicUsize::new(0),
            traced_calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
            reply: Box::new(reply),
            delay: None,
        }
    }

    /// 固定回傳同一個結果
    pub fn returning(value: Value) -> Self {
        Self::replying(move |_, _| Ok(value.clone()))
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// 經由 `call_traced` 進來的呼叫次數
    pub fn traced_calls(&self) -> usize {
        self.traced_calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<(String, Value)> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn call(
        &self,
        operation: &OperationSpec,
        request: &Value,
    ) -> std::result::Result<Value, TransportFault> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests
            .lock()
            .unwrap()
            .push((operation.name.clone(), request.clone()));
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        (self.reply)(&operation.name, request)
    }

    async fn call_traced(&self, operation: &OperationSpec, request: &Value) -> TracedCall {
        self.traced_calls.fetch_add(1, Ordering::SeqCst);
        let outcome = self.call(operation, request).await;
        let response = match &outcome {
            Ok(value) => value.to_string(),
            Err(fault) => fault.to_string(),
        };
        TracedCall {
            outcome,
            exchange: Some(WireExchange {
                request: format!(
                    "<{0}>{1}</{0}>",
                    operation.input_element, request
                ),
                response,
            }),
        }
    }
}

pub(crate) struct MockFactory {
    operations: Vec<String>,
    transport: Arc<MockTransport>,
    constructions: AtomicUsize,
    fail_next: AtomicBool,
    delay: Option<Duration>,
    targets: Mutex<Vec<BindingTarget>>,
}

impl MockFactory {
    pub fn new(operations: &[&str]) -> Self {
        Self::with_transport(operations, Arc::new(MockTransport::returning(Value::Null)))
    }

    pub fn with_transport(operations: &[&str], transport: Arc<MockTransport>) -> Self {
        Self {
            operations: operations.iter().map(|s| s.to_string()).collect(),
            transport,
            constructions: AtomicUsize::new(0),
            fail_next: AtomicBool::new(false),
            delay: None,
            targets: Mutex::new(Vec::new()),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn fail_next(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    pub fn constructions(&self) -> usize {
        self.constructions.load(Ordering::SeqCst)
    }

    pub fn last_target(&self) -> Option<BindingTarget> {
        self.targets.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl BindingFactory for MockFactory {
    async fn create(&self, target: BindingTarget) -> Result<Binding> {
        self.constructions.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(AramexError::BindingConstructionError {
                service: target.service.to_string(),
                reason: "schema document unavailable".to_string(),
            });
        }
        self.targets.lock().unwrap().push(target.clone());

        let operations = self.operations.iter().map(|name| OperationSpec {
            name: name.clone(),
            soap_action: format!("http://ws.aramex.net/ShippingAPI/v1/Service_1_0/{}", name),
            input_element: name.clone(),
            namespace: "http://ws.aramex.net/ShippingAPI/v1/".to_string(),
        });
        Ok(Binding::new(
            target.service,
            target.endpoint,
            operations,
            self.transport.clone(),
        ))
    }
}
