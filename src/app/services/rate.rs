use crate::app::services::{encode_error, ensure_success, to_wire};
use crate::core::{Invoker, LogicalService};
use crate::domain::rate::{CalculateRateRequest, CalculateRateResponse};
use crate::utils::error::Result;
use serde_json::{Map, Value};

pub struct RateService {
    invoker: Invoker,
}

impl RateService {
    pub fn new(invoker: Invoker) -> Self {
        Self { invoker }
    }

    pub async fn calculate_rate(
        &self,
        request: &CalculateRateRequest,
    ) -> Result<CalculateRateResponse> {
        let wire = self.build_request(request)?;
        let response: CalculateRateResponse = self
            .invoker
            .invoke_typed(LogicalService::Rate, "CalculateRate", &wire)
            .await?;
        ensure_success(response, "Failed to calculate rate")
    }

    /// `calculate_rate` 的別名
    pub async fn get_quote(&self, request: &CalculateRateRequest) -> Result<CalculateRateResponse> {
        self.calculate_rate(request).await
    }

    fn build_request(&self, request: &CalculateRateRequest) -> Result<Value> {
        let op = "CalculateRate";
        let mut wire = Map::new();
        wire.insert(
            "ClientInfo".to_string(),
            to_wire(op, &self.invoker.session().client_info())?,
        );
        if let Some(transaction) = &request.transaction {
            wire.insert("Transaction".to_string(), to_wire(op, transaction)?);
        }
        wire.insert(
            "OriginAddress".to_string(),
            request
                .origin_address
                .normalized()
                .map_err(|e| encode_error(op, e))?,
        );
        wire.insert(
            "DestinationAddress".to_string(),
            request
                .destination_address
                .normalized()
                .map_err(|e| encode_error(op, e))?,
        );
        wire.insert(
            "ShipmentDetails".to_string(),
            request
                .shipment_details
                .to_normalized_value()
                .map_err(|e| encode_error(op, e))?,
        );
        if let Some(currency) = &request.preferred_currency_code {
            wire.insert(
                "PreferredCurrencyCode".to_string(),
                Value::String(currency.clone()),
            );
        }
        Ok(Value::Object(wire))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::{sample_config, MockFactory, MockTransport};
    use crate::core::SessionManager;
    use crate::domain::model::{Address, Money, ProductGroup, Weight};
    use crate::domain::rate::ShipmentDetailsForRate;
    use crate::utils::error::{AramexError, ErrorKind};
    use serde_json::json;
    use std::sync::Arc;

    fn service(transport: Arc<MockTransport>) -> RateService {
        let factory = Arc::new(MockFactory::with_transport(&["CalculateRate"], transport));
        let session = Arc::new(SessionManager::new(sample_config(), factory).unwrap());
        RateService::new(Invoker::new(session))
    }

    fn request() -> CalculateRateRequest {
        CalculateRateRequest {
            transaction: None,
            origin_address: Address::new("Road 1", "Manama", "BH"),
            destination_address: Address::new("Road 2", "Riffa", "BH"),
            shipment_details: ShipmentDetailsForRate {
                cash_on_delivery_amount: Some(Money::new("BHD", 12.5)),
                ..ShipmentDetailsForRate::new(Weight::kg(0.5), 1, ProductGroup::Domestic)
            },
            preferred_currency_code: Some("BHD".to_string()),
        }
    }

    #[tokio::test]
    async fn test_calculate_rate_request_shape_and_response() {
        let transport = Arc::new(MockTransport::returning(json!({
            "Transaction": null,
            "Notifications": null,
            "HasErrors": "false",
            "TotalAmount": {"CurrencyCode": "BHD", "Value": "0.53"}
        })));
        let rate = service(transport.clone());

        let response = rate.calculate_rate(&request()).await.unwrap();
        assert!((response.total_amount.unwrap().value - 0.53).abs() < 1e-9);

        let (operation, sent) = transport.last_request().unwrap();
        assert_eq!(operation, "CalculateRate");
        let keys: Vec<&str> = sent.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec![
                "ClientInfo",
                "OriginAddress",
                "DestinationAddress",
                "ShipmentDetails",
                "PreferredCurrencyCode"
            ]
        );
        assert_eq!(sent["OriginAddress"]["Line2"], json!(""));
        assert_eq!(sent["ShipmentDetails"]["Dimensions"], Value::Null);
        assert_eq!(
            sent["ShipmentDetails"]["CashOnDeliveryAmount"],
            json!({"CurrencyCode": "BHD", "Value": 12.5})
        );
        assert_eq!(sent["ClientInfo"]["AccountPin"], json!("331421"));
    }

    #[tokio::test]
    async fn test_has_errors_becomes_api_error() {
        let transport = Arc::new(MockTransport::returning(json!({
            "HasErrors": "true",
            "Notifications": {"Notification": {"Code": "ERR52", "Message": "Destination city invalid"}}
        })));
        let rate = service(transport);

        let err = rate.get_quote(&request()).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Api);
        match err {
            AramexError::ApiError { message, notifications } => {
                assert_eq!(message, "Failed to calculate rate");
                assert_eq!(notifications.len(), 1);
                assert_eq!(notifications[0].code, "ERR52");
            }
            other => panic!("expected ApiError, got {:?}", other),
        }
    }
}
