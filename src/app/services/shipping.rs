use crate::app::services::{ensure_success, to_wire};
use crate::core::{Invoker, LogicalService};
use crate::domain::model::{ProductGroup, Transaction};
use crate::domain::shipping::{
    CancelPickupRequest, CancelPickupResponse, CreatePickupRequest, CreatePickupResponse,
    CreateShipmentsRequest, CreateShipmentsResponse, LabelInfo, Pickup, PrintLabelRequest,
    PrintLabelResponse, ScheduleDeliveryRequest, ScheduleDeliveryResponse, Shipment, ShipmentList,
    ShipmentNumberRangeRequest, ShipmentNumberRangeResponse,
};
use crate::utils::error::Result;
use crate::utils::validation::validate_range;
use serde_json::{Map, Value};

/// 一次可保留的運單號碼上限
pub const MAX_RESERVED_RANGE: u32 = 5000;

pub struct ShippingService {
    invoker: Invoker,
}

impl ShippingService {
    pub fn new(invoker: Invoker) -> Self {
        Self { invoker }
    }

    pub async fn create_shipments(
        &self,
        shipments: &[Shipment],
        label_info: Option<LabelInfo>,
        transaction: Option<&Transaction>,
    ) -> Result<CreateShipmentsResponse> {
        let request = CreateShipmentsRequest {
            client_info: self.invoker.session().client_info(),
            transaction,
            shipments: ShipmentList { shipment: shipments },
            label_info,
        };
        let response: CreateShipmentsResponse = self
            .invoker
            .invoke_typed(LogicalService::Shipping, "CreateShipments", &request)
            .await?;
        ensure_success(response, "Failed to create shipments")
    }

    pub async fn create_shipment(
        &self,
        shipment: &Shipment,
        label_info: Option<LabelInfo>,
        transaction: Option<&Transaction>,
    ) -> Result<CreateShipmentsResponse> {
        self.create_shipments(std::slice::from_ref(shipment), label_info, transaction)
            .await
    }

    /// 未指定標籤設定時使用 ReportID 9201、URL
    pub async fn print_label(
        &self,
        shipment_number: &str,
        product_group: Option<ProductGroup>,
        origin_entity: Option<&str>,
        label_info: Option<LabelInfo>,
        transaction: Option<&Transaction>,
    ) -> Result<PrintLabelResponse> {
        let request = PrintLabelRequest {
            client_info: self.invoker.session().client_info(),
            transaction,
            shipment_number,
            product_group,
            origin_entity,
            label_info: label_info.unwrap_or_default(),
        };
        let response: PrintLabelResponse = self
            .invoker
            .invoke_typed(LogicalService::Shipping, "PrintLabel", &request)
            .await?;
        ensure_success(response, "Failed to print label")
    }

    pub async fn create_pickup(
        &self,
        pickup: &Pickup,
        label_info: Option<LabelInfo>,
        transaction: Option<&Transaction>,
    ) -> Result<CreatePickupResponse> {
        let request = CreatePickupRequest {
            client_info: self.invoker.session().client_info(),
            transaction,
            pickup,
            label_info,
        };
        let response: CreatePickupResponse = self
            .invoker
            .invoke_typed(LogicalService::Shipping, "CreatePickup", &request)
            .await?;
        ensure_success(response, "Failed to create pickup")
    }

    pub async fn cancel_pickup(
        &self,
        pickup_guid: &str,
        comments: Option<&str>,
        transaction: Option<&Transaction>,
    ) -> Result<CancelPickupResponse> {
        let request = CancelPickupRequest {
            client_info: self.invoker.session().client_info(),
            transaction,
            pickup_guid,
            comments,
        };
        let response: CancelPickupResponse = self
            .invoker
            .invoke_typed(LogicalService::Shipping, "CancelPickup", &request)
            .await?;
        ensure_success(response, "Failed to cancel pickup")
    }

    /// `count` 須介於 1 到 5000，超出範圍時不發出遠端呼叫
    pub async fn reserve_shipment_number_range(
        &self,
        entity: &str,
        product_group: ProductGroup,
        count: u32,
        transaction: Option<&Transaction>,
    ) -> Result<ShipmentNumberRangeResponse> {
        validate_range("count", count, 1, MAX_RESERVED_RANGE)?;

        let request = ShipmentNumberRangeRequest {
            client_info: self.invoker.session().client_info(),
            transaction,
            entity,
            product_group,
            count: Some(count),
        };
        let response: ShipmentNumberRangeResponse = self
            .invoker
            .invoke_typed(
                LogicalService::Shipping,
                "ReserveShipmentNumberRange",
                &request,
            )
            .await?;
        ensure_success(response, "Failed to reserve shipment number range")
    }

    pub async fn get_last_shipments_numbers_range(
        &self,
        entity: &str,
        product_group: ProductGroup,
        transaction: Option<&Transaction>,
    ) -> Result<ShipmentNumberRangeResponse> {
        let request = ShipmentNumberRangeRequest {
            client_info: self.invoker.session().client_info(),
            transaction,
            entity,
            product_group,
            count: None,
        };
        let response: ShipmentNumberRangeResponse = self
            .invoker
            .invoke_typed(
                LogicalService::Shipping,
                "GetLastShipmentsNumbersRange",
                &request,
            )
            .await?;
        ensure_success(response, "Failed to get last shipment numbers range")
    }

    pub async fn schedule_delivery(
        &self,
        request: &ScheduleDeliveryRequest,
    ) -> Result<ScheduleDeliveryResponse> {
        let op = "ScheduleDelivery";
        // ClientInfo 必須排在最前面
        let mut wire = Map::new();
        wire.insert(
            "ClientInfo".to_string(),
            to_wire(op, &self.invoker.session().client_info())?,
        );
        if let Value::Object(fields) = to_wire(op, request)? {
            wire.extend(fields);
        }

        let response: ScheduleDeliveryResponse = self
            .invoker
            .invoke_typed(LogicalService::Shipping, op, &Value::Object(wire))
            .await?;
        ensure_success(response, "Failed to schedule delivery")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::{sample_config, MockFactory, MockTransport};
    use crate::core::SessionManager;
    use crate::domain::model::{
        Address, Contact, Party, PaymentType, ProductType, ReportType, Weight,
    };
    use crate::domain::shipping::ShipmentDetails;
    use crate::utils::error::{AramexError, ErrorKind};
    use serde_json::json;
    use std::sync::Arc;

    const OPERATIONS: [&str; 7] = [
        "CreateShipments",
        "PrintLabel",
        "CreatePickup",
        "CancelPickup",
        "ReserveShipmentNumberRange",
        "GetLastShipmentsNumbersRange",
        "ScheduleDelivery",
    ];

    fn service(transport: Arc<MockTransport>) -> ShippingService {
        let factory = Arc::new(MockFactory::with_transport(&OPERATIONS, transport));
        let session = Arc::new(SessionManager::new(sample_config(), factory).unwrap());
        ShippingService::new(Invoker::new(session))
    }

    fn party(name: &str, city: &str) -> Party {
        Party {
            party_address: Address::new("Road 1", city, "BH"),
            contact: Contact {
                person_name: name.to_string(),
                company_name: name.to_string(),
                phone_number1: "+97317000000".to_string(),
                cell_phone: "+97317000000".to_string(),
                email_address: "ops@example.com".to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn shipment() -> Shipment {
        Shipment {
            reference1: Some("ORD-1".to_string()),
            reference2: None,
            reference3: None,
            shipper: party("Shop", "Manama"),
            consignee: party("Customer", "Riffa"),
            third_party: None,
            shipping_date_time: "2024-03-01T10:00:00+03:00".to_string(),
            due_date: None,
            comments: None,
            pickup_location: None,
            operations_instructions: None,
            accounting_instructions: None,
            details: ShipmentDetails {
                dimensions: None,
                actual_weight: Weight::kg(1.0),
                chargeable_weight: None,
                description_of_goods: "Books".to_string(),
                goods_origin_country: "BH".to_string(),
                number_of_pieces: 1,
                product_group: ProductGroup::Domestic,
                product_type: ProductType::Ond,
                payment_type: PaymentType::Prepaid,
                payment_options: None,
                services: None,
                items: None,
                customs_value_amount: None,
                cash_on_delivery_amount: None,
                insurance_amount: None,
                cash_additional_amount: None,
                cash_additional_amount_description: None,
                collect_amount: None,
            },
            attachments: None,
            foreign_hawb: None,
            transport_type: None,
            pickup_guid: None,
            number: None,
        }
    }

    #[tokio::test]
    async fn test_create_shipment_wraps_list_and_repairs_single_result() {
        let transport = Arc::new(MockTransport::returning(json!({
            "HasErrors": "false",
            "Notifications": null,
            "Shipments": {"ProcessedShipment": {"ID": "44556677", "HasErrors": "false"}}
        })));
        let shipping = service(transport.clone());

        let response = shipping
            .create_shipment(&shipment(), None, None)
            .await
            .unwrap();
        assert_eq!(response.shipments.len(), 1);
        assert_eq!(response.shipments[0].id, "44556677");

        let (_, sent) = transport.last_request().unwrap();
        let keys: Vec<&str> = sent.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["ClientInfo", "Shipments"]);
        assert_eq!(sent["Shipments"]["Shipment"][0]["Reference1"], json!("ORD-1"));
        assert_eq!(sent["Shipments"]["Shipment"][0]["Details"]["ProductType"], json!("OND"));
    }

    #[tokio::test]
    async fn test_print_label_defaults() {
        let transport = Arc::new(MockTransport::returning(json!({
            "HasErrors": "false",
            "ShipmentNumber": "44556677",
            "ShipmentLabel": {"LabelURL": "https://labels.example/1.pdf"}
        })));
        let shipping = service(transport.clone());

        let response = shipping
            .print_label("44556677", None, None, None, None)
            .await
            .unwrap();
        assert_eq!(response.shipment_number, "44556677");

        let (_, sent) = transport.last_request().unwrap();
        assert_eq!(sent["LabelInfo"], json!({"ReportID": 9201, "ReportType": "URL"}));
        assert!(sent.get("ProductGroup").is_none());

        shipping
            .print_label(
                "44556677",
                Some(ProductGroup::Express),
                Some("BAH"),
                Some(LabelInfo {
                    report_id: 9729,
                    report_type: ReportType::Rpt,
                }),
                None,
            )
            .await
            .unwrap();
        let (_, sent) = transport.last_request().unwrap();
        assert_eq!(sent["LabelInfo"]["ReportType"], json!("RPT"));
        assert_eq!(sent["OriginEntity"], json!("BAH"));
    }

    #[tokio::test]
    async fn test_reserve_range_validates_count_before_calling() {
        let transport = Arc::new(MockTransport::returning(json!({
            "HasErrors": "false",
            "ShipmentRangeFrom": "100",
            "ShipmentRangeTo": "199"
        })));
        let shipping = service(transport.clone());

        for count in [0, 5001] {
            let err = shipping
                .reserve_shipment_number_range("BAH", ProductGroup::Express, count, None)
                .await
                .unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Validation);
        }
        assert_eq!(transport.calls(), 0);

        let response = shipping
            .reserve_shipment_number_range("BAH", ProductGroup::Express, 100, None)
            .await
            .unwrap();
        assert_eq!(response.shipment_range_from.as_deref(), Some("100"));
        assert_eq!(transport.last_request().unwrap().1["Count"], json!(100));

        shipping
            .get_last_shipments_numbers_range("BAH", ProductGroup::Express, None)
            .await
            .unwrap();
        assert!(transport.last_request().unwrap().1.get("Count").is_none());
    }

    #[tokio::test]
    async fn test_cancel_pickup_error_carries_notifications() {
        let transport = Arc::new(MockTransport::returning(json!({
            "HasErrors": "true",
            "Notifications": [{"Code": "ERR61", "Message": "Pickup already cancelled"}]
        })));
        let shipping = service(transport.clone());

        let err = shipping
            .cancel_pickup("guid-1", Some("customer request"), None)
            .await
            .unwrap_err();
        assert!(matches!(err, AramexError::ApiError { ref message, .. } if message == "Failed to cancel pickup"));
        assert_eq!(err.notifications()[0].code, "ERR61");
        assert_eq!(transport.last_request().unwrap().1["PickupGUID"], json!("guid-1"));
    }

    #[tokio::test]
    async fn test_schedule_delivery_puts_client_info_first() {
        let transport = Arc::new(MockTransport::returning(json!({"HasErrors": "false", "ID": "77"})));
        let shipping = service(transport.clone());

        let response = shipping
            .schedule_delivery(&ScheduleDeliveryRequest {
                transaction: None,
                shipment_number: "44556677".to_string(),
                product_group: ProductGroup::Domestic,
                entity: "BAH".to_string(),
                address: Address::new("Road 1", "Manama", "BH"),
                consignee_phone: "+97317000000".to_string(),
                shipper_number: "20016".to_string(),
                shipper_reference: None,
                reference1: None,
                reference2: None,
                reference3: None,
            })
            .await
            .unwrap();
        assert_eq!(response.id.as_deref(), Some("77"));

        let (_, sent) = transport.last_request().unwrap();
        let keys: Vec<&str> = sent.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys[0], "ClientInfo");
        assert_eq!(keys[1], "ShipmentNumber");
    }
}
