use crate::app::services::ensure_success;
use crate::core::{Invoker, LogicalService};
use crate::domain::model::Transaction;
use crate::domain::tracking::{
    TrackPickupRequest, TrackPickupResponse, TrackShipmentsRequest, TrackShipmentsResponse,
    WaybillList,
};
use crate::utils::error::Result;

pub struct TrackingService {
    invoker: Invoker,
}

impl TrackingService {
    pub fn new(invoker: Invoker) -> Self {
        Self { invoker }
    }

    pub async fn track_shipments(
        &self,
        waybill_numbers: &[String],
        last_update_only: bool,
        transaction: Option<&Transaction>,
    ) -> Result<TrackShipmentsResponse> {
        let request = TrackShipmentsRequest {
            client_info: self.invoker.session().client_info(),
            transaction,
            shipments: WaybillList::new(waybill_numbers),
            get_last_tracking_update_only: last_update_only,
        };
        let response: TrackShipmentsResponse = self
            .invoker
            .invoke_typed(LogicalService::Tracking, "TrackShipments", &request)
            .await?;
        ensure_success(response, "Failed to track shipments")
    }

    pub async fn track_shipment(
        &self,
        waybill_number: &str,
        last_update_only: bool,
        transaction: Option<&Transaction>,
    ) -> Result<TrackShipmentsResponse> {
        self.track_shipments(&[waybill_number.to_string()], last_update_only, transaction)
            .await
    }

    pub async fn track_pickup(
        &self,
        reference: &str,
        transaction: Option<&Transaction>,
    ) -> Result<TrackPickupResponse> {
        let request = TrackPickupRequest {
            client_info: self.invoker.session().client_info(),
            transaction,
            reference,
        };
        let response: TrackPickupResponse = self
            .invoker
            .invoke_typed(LogicalService::Tracking, "TrackPickup", &request)
            .await?;
        ensure_success(response, "Failed to track pickup")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::{sample_config, MockFactory, MockTransport};
    use crate::core::SessionManager;
    use crate::domain::tracking::ARRAYS_NS;
    use serde_json::json;
    use std::sync::Arc;

    fn service(transport: Arc<MockTransport>) -> TrackingService {
        let factory = Arc::new(MockFactory::with_transport(
            &["TrackShipments", "TrackPickup"],
            transport,
        ));
        let session = Arc::new(SessionManager::new(sample_config(), factory).unwrap());
        TrackingService::new(Invoker::new(session))
    }

    #[tokio::test]
    async fn test_track_shipment_sends_string_array() {
        let transport = Arc::new(MockTransport::returning(json!({
            "HasErrors": "false",
            "TrackingResults": {
                "KeyValueOfstringArrayOfTrackingResultmFAkxlpY": {
                    "Key": "44556677",
                    "Value": {"TrackingResult": {"WaybillNumber": "44556677", "UpdateCode": "SH014"}}
                }
            }
        })));
        let tracking = service(transport.clone());

        let response = tracking.track_shipment("44556677", true, None).await.unwrap();
        assert_eq!(response.updates_for("44556677").unwrap()[0].update_code, "SH014");

        let (operation, sent) = transport.last_request().unwrap();
        assert_eq!(operation, "TrackShipments");
        assert_eq!(
            sent["Shipments"],
            json!({"@xmlns:a": ARRAYS_NS, "a:string": ["44556677"]})
        );
        assert_eq!(sent["GetLastTrackingUpdateOnly"], json!(true));
    }

    #[tokio::test]
    async fn test_track_pickup_error() {
        let transport = Arc::new(MockTransport::returning(json!({
            "HasErrors": "true",
            "Notifications": {"Notification": {"Code": "ERR03", "Message": "Pickup not found"}}
        })));
        let tracking = service(transport.clone());

        let transaction = Transaction {
            reference1: Some("trace-1".to_string()),
            ..Default::default()
        };
        let err = tracking
            .track_pickup("PKP-1", Some(&transaction))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Failed to track pickup");
        assert_eq!(err.notifications()[0].code, "ERR03");

        let (_, sent) = transport.last_request().unwrap();
        assert_eq!(sent["Transaction"], json!({"Reference1": "trace-1"}));
        assert_eq!(sent["Reference"], json!("PKP-1"));
    }
}
