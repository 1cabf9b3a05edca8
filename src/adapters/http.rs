use crate::adapters::soap::wsdl::{self, SchemaDocument};
use crate::adapters::soap::{build_envelope, parse_envelope};
use crate::core::binding::Binding;
use crate::domain::ports::{
    BindingFactory, BindingTarget, OperationSpec, TracedCall, Transport, WireExchange,
};
use crate::utils::error::{AramexError, Result, TransportFault};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;

/// 以 HTTP POST 傳送 SOAP 1.1 envelope
pub struct SoapHttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl SoapHttpTransport {
    pub fn new(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn send(&self, operation: &OperationSpec, request: &Value) -> TracedCall {
        let envelope = build_envelope(&operation.namespace, &operation.input_element, request);
        tracing::debug!(
            endpoint = %self.endpoint,
            soap_action = %operation.soap_action,
            bytes = envelope.len(),
            "Posting SOAP envelope"
        );

        let (status, body) = match self.post(&operation.soap_action, envelope.clone()).await {
            Ok(reply) => reply,
            Err(fault) => {
                return TracedCall {
                    outcome: Err(fault),
                    exchange: Some(WireExchange {
                        request: envelope,
                        response: String::new(),
                    }),
                }
            }
        };

        TracedCall {
            outcome: interpret(status, &body),
            exchange: Some(WireExchange {
                request: envelope,
                response: body,
            }),
        }
    }

    async fn post(
        &self,
        soap_action: &str,
        envelope: String,
    ) -> std::result::Result<(StatusCode, String), TransportFault> {
        let started = Instant::now();
        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "text/xml; charset=utf-8")
            .header("SOAPAction", format!("\"{}\"", soap_action))
            .body(envelope)
            .send()
            .await
            .map_err(|e| classify(e, started))?;

        let status = response.status();
        tracing::debug!("SOAP response status: {}", status);
        let body = response.text().await.map_err(|e| classify(e, started))?;
        Ok((status, body))
    }
}

fn interpret(status: StatusCode, body: &str) -> std::result::Result<Value, TransportFault> {
    if status.is_success() {
        return parse_envelope(body);
    }

    // WCF 以 HTTP 500 回傳 Fault
    match parse_envelope(body) {
        Err(fault @ TransportFault::SoapFault { .. }) => Err(fault),
        _ => Err(TransportFault::Status {
            status: status.as_u16(),
            body: body.to_string(),
        }),
    }
}

fn classify(error: reqwest::Error, started: Instant) -> TransportFault {
    if error.is_timeout() {
        TransportFault::Timeout {
            elapsed_ms: started.elapsed().as_millis() as u64,
        }
    } else {
        TransportFault::Http(error)
    }
}

#[async_trait]
impl Transport for SoapHttpTransport {
    async fn call(
        &self,
        operation: &OperationSpec,
        request: &Value,
    ) -> std::result::Result<Value, TransportFault> {
        self.send(operation, request).await.outcome
    }

    async fn call_traced(&self, operation: &OperationSpec, request: &Value) -> TracedCall {
        self.send(operation, request).await
    }
}

/// 讀取 WSDL、建立 HTTP client，組成 binding
#[derive(Debug, Clone, Default)]
pub struct HttpBindingFactory;

impl HttpBindingFactory {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl BindingFactory for HttpBindingFactory {
    async fn create(&self, target: BindingTarget) -> Result<Binding> {
        let document = wsdl::load_document(target.service, target.schema_dir.as_deref()).await?;
        let schema = SchemaDocument::parse(target.service, &document)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = target.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| AramexError::BindingConstructionError {
                service: target.service.to_string(),
                reason: format!("cannot build HTTP client: {}", e),
            })?;

        tracing::debug!(
            service = %target.service,
            operations = schema.operations.len(),
            "Schema document loaded"
        );

        let transport = SoapHttpTransport::new(client, target.endpoint.clone());
        Ok(Binding::new(
            target.service,
            target.endpoint,
            schema.operations,
            Arc::new(transport),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::service::LogicalService;
    use httpmock::prelude::*;
    use serde_json::json;
    use std::time::Duration;

    fn track_spec() -> OperationSpec {
        OperationSpec {
            name: "TrackPickup".to_string(),
            soap_action: "http://ws.aramex.net/ShippingAPI/v1/Service_1_0/TrackPickup".to_string(),
            input_element: "PickupTrackingRequest".to_string(),
            namespace: "http://ws.aramex.net/ShippingAPI/v1/".to_string(),
        }
    }

    fn pickup_reply(reference: &str) -> String {
        format!(
            r#"<s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/"><s:Body><PickupTrackingResponse><Reference>{}</Reference><HasErrors>false</HasErrors></PickupTrackingResponse></s:Body></s:Envelope>"#,
            reference
        )
    }

    #[tokio::test]
    async fn test_exchange_returned_with_outcome() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/svc")
                    .header("content-type", "text/xml; charset=utf-8")
                    .body_contains("<Reference>PKP-1</Reference>");
                then.status(200).body(pickup_reply("PKP-1"));
            })
            .await;

        let transport = SoapHttpTransport::new(reqwest::Client::new(), server.url("/svc"));
        let traced = transport
            .call_traced(&track_spec(), &json!({"Reference": "PKP-1"}))
            .await;
        assert_eq!(
            traced.outcome.unwrap(),
            json!({"Reference": "PKP-1", "HasErrors": "false"})
        );

        let exchange = traced.exchange.unwrap();
        assert!(exchange.request.contains("<PickupTrackingRequest xmlns="));
        assert!(exchange.response.contains("PickupTrackingResponse"));
    }

    /// 同時進行的呼叫各自拿到自己的 XML
    #[tokio::test]
    async fn test_concurrent_calls_keep_their_own_exchange() {
        let server = MockServer::start_async().await;
        for (reference, delay) in [("PKP-1", 150), ("PKP-2", 10)] {
            server
                .mock_async(|when, then| {
                    when.method(POST)
                        .body_contains(format!("<Reference>{}</Reference>", reference));
                    then.status(200)
                        .delay(Duration::from_millis(delay))
                        .body(pickup_reply(reference));
                })
                .await;
        }

        let transport = SoapHttpTransport::new(reqwest::Client::new(), server.url("/svc"));
        let spec = track_spec();
        let first_request = json!({"Reference": "PKP-1"});
        let second_request = json!({"Reference": "PKP-2"});
        let (first, second) = tokio::join!(
            transport.call_traced(&spec, &first_request),
            transport.call_traced(&spec, &second_request),
        );

        for (traced, reference) in [(first, "PKP-1"), (second, "PKP-2")] {
            let exchange = traced.exchange.unwrap();
            let tag = format!("<Reference>{}</Reference>", reference);
            assert!(exchange.request.contains(&tag));
            assert!(exchange.response.contains(&tag));
            assert_eq!(traced.outcome.unwrap()["Reference"], json!(reference));
        }
    }

    #[tokio::test]
    async fn test_fault_status_keeps_exchange() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST);
                then.status(503).body("Service Unavailable");
            })
            .await;

        let transport = SoapHttpTransport::new(reqwest::Client::new(), server.url("/svc"));
        let traced = transport.call_traced(&track_spec(), &json!({})).await;
        assert!(matches!(
            traced.outcome,
            Err(TransportFault::Status { status: 503, .. })
        ));
        assert_eq!(traced.exchange.unwrap().response, "Service Unavailable");
    }

    #[tokio::test]
    async fn test_client_timeout_classified() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST);
                then.status(200).delay(Duration::from_millis(500)).body("<late/>");
            })
            .await;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(50))
            .build()
            .unwrap();
        let transport = SoapHttpTransport::new(client, server.url("/svc"));
        let fault = transport
            .call(&track_spec(), &json!({}))
            .await
            .unwrap_err();
        assert!(matches!(fault, TransportFault::Timeout { .. }));
    }

    #[tokio::test]
    async fn test_factory_builds_binding_from_embedded_schema() {
        let binding = HttpBindingFactory::new()
            .create(BindingTarget {
                service: LogicalService::Tracking,
                endpoint: "http://127.0.0.1:9/tracking".to_string(),
                schema_dir: None,
                timeout: Some(Duration::from_secs(1)),
            })
            .await
            .unwrap();
        assert_eq!(binding.endpoint(), "http://127.0.0.1:9/tracking");
        assert_eq!(
            binding.operation("TrackPickup").unwrap().input_element,
            "PickupTrackingRequest"
        );
    }
}
