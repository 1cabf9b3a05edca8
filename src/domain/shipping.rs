use crate::domain::de;
use crate::domain::model::{
    Address, BaseResponse, ClientInfo, Contact, Dimensions, Money, Notification,
    Party, PaymentOption, PaymentType, PickupStatus, ProductGroup, ProductType, ReportType,
    Transaction, Volume, Weight,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ShipmentItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<Weight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Attachment {
    pub file_name: String,
    pub file_extension: String,
    /// Base64 編碼
    pub file_contents: String,
}

/// 建立貨件用的明細，順序與運費試算不同
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ShipmentDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,
    pub actual_weight: Weight,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chargeable_weight: Option<Weight>,
    pub description_of_goods: String,
    pub goods_origin_country: String,
    pub number_of_pieces: u32,
    pub product_group: ProductGroup,
    pub product_type: ProductType,
    pub payment_type: PaymentType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_options: Option<PaymentOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub services: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<ShipmentItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customs_value_amount: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cash_on_delivery_amount: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insurance_amount: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cash_additional_amount: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cash_additional_amount_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collect_amount: Option<Money>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Shipment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference3: Option<String>,
    pub shipper: Party,
    pub consignee: Party,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub third_party: Option<Party>,
    /// ISO 8601
    pub shipping_date_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operations_instructions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accounting_instructions: Option<String>,
    pub details: ShipmentDetails,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<Attachment>>,
    #[serde(rename = "ForeignHAWB", skip_serializing_if = "Option::is_none")]
    pub foreign_hawb: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transport_type: Option<u8>,
    #[serde(rename = "PickupGUID", skip_serializing_if = "Option::is_none")]
    pub pickup_guid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LabelInfo {
    #[serde(rename = "ReportID")]
    pub report_id: u32,
    #[serde(rename = "ReportType")]
    pub report_type: ReportType,
}

impl Default for LabelInfo {
    /// 預設標籤版型 9201，以 URL 回傳
    fn default() -> Self {
        Self {
            report_id: 9201,
            report_type: ReportType::Url,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ShipmentLabel {
    #[serde(rename = "LabelURL", default, deserialize_with = "de::lenient_opt_string")]
    pub label_url: Option<String>,
    #[serde(rename = "LabelFileContents", default, deserialize_with = "de::lenient_opt_string")]
    pub label_file_contents: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProcessedShipment {
    #[serde(rename = "ID", default, deserialize_with = "de::lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "de::lenient_opt_string")]
    pub reference1: Option<String>,
    #[serde(default, deserialize_with = "de::lenient_opt_string")]
    pub reference2: Option<String>,
    #[serde(default, deserialize_with = "de::lenient_opt_string")]
    pub reference3: Option<String>,
    #[serde(rename = "ForeignHAWB", default, deserialize_with = "de::lenient_opt_string")]
    pub foreign_hawb: Option<String>,
    #[serde(default, deserialize_with = "de::lenient_bool")]
    pub has_errors: bool,
    #[serde(default, deserialize_with = "de::lenient_list")]
    pub notifications: Vec<Notification>,
    #[serde(default)]
    pub shipment_label: Option<ShipmentLabel>,
    /// 遠端回傳的明細格式不固定，保留原始結構
    #[serde(default)]
    pub shipment_details: Option<Value>,
}

impl de::WireItem for ProcessedShipment {
    const ELEMENT: &'static str = "ProcessedShipment";
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct CreateShipmentsRequest<'a> {
    pub client_info: ClientInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction: Option<&'a Transaction>,
    pub shipments: ShipmentList<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_info: Option<LabelInfo>,
}

/// 線路上以 `<Shipments><Shipment/>...</Shipments>` 包裝
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct ShipmentList<'a> {
    #[serde(rename = "Shipment")]
    pub shipment: &'a [Shipment],
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateShipmentsResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(default, deserialize_with = "de::lenient_list")]
    pub shipments: Vec<ProcessedShipment>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct PrintLabelRequest<'a> {
    pub client_info: ClientInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction: Option<&'a Transaction>,
    pub shipment_number: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_group: Option<ProductGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_entity: Option<&'a str>,
    pub label_info: LabelInfo,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PrintLabelResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(default, deserialize_with = "de::lenient_string")]
    pub shipment_number: String,
    #[serde(default)]
    pub shipment_label: Option<ShipmentLabel>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PickupItem {
    pub product_group: ProductGroup,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type: Option<ProductType>,
    pub number_of_shipments: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_type: Option<String>,
    pub payment: PaymentType,
    pub shipment_weight: Weight,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipment_volume: Option<Volume>,
    pub number_of_pieces: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cash_amount: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_charges: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipment_dimensions: Option<Dimensions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Pickup {
    pub pickup_address: Address,
    pub pickup_contact: Contact,
    pub pickup_location: String,
    /// ISO 8601
    pub pickup_date: String,
    /// HH:mm
    pub ready_time: String,
    pub last_pickup_time: String,
    pub closing_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    pub reference1: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipments: Option<Vec<Shipment>>,
    pub pickup_items: Vec<PickupItem>,
    pub status: PickupStatus,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProcessedPickup {
    #[serde(rename = "ID", default, deserialize_with = "de::lenient_string")]
    pub id: String,
    #[serde(rename = "GUID", default, deserialize_with = "de::lenient_string")]
    pub guid: String,
    #[serde(default, deserialize_with = "de::lenient_opt_string")]
    pub reference1: Option<String>,
    #[serde(default, deserialize_with = "de::lenient_opt_string")]
    pub reference2: Option<String>,
    #[serde(default, deserialize_with = "de::lenient_list")]
    pub processed_shipments: Vec<ProcessedShipment>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct CreatePickupRequest<'a> {
    pub client_info: ClientInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction: Option<&'a Transaction>,
    pub pickup: &'a Pickup,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_info: Option<LabelInfo>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreatePickupResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(default)]
    pub processed_pickup: Option<ProcessedPickup>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct CancelPickupRequest<'a> {
    pub client_info: ClientInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction: Option<&'a Transaction>,
    #[serde(rename = "PickupGUID")]
    pub pickup_guid: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CancelPickupResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct ShipmentNumberRangeRequest<'a> {
    pub client_info: ClientInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction: Option<&'a Transaction>,
    pub entity: &'a str,
    pub product_group: ProductGroup,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}

/// ReserveShipmentNumberRange 與 GetLastShipmentsNumbersRange 共用
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ShipmentNumberRangeResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(default, deserialize_with = "de::lenient_opt_string")]
    pub shipment_range_from: Option<String>,
    #[serde(default, deserialize_with = "de::lenient_opt_string")]
    pub shipment_range_to: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ScheduleDeliveryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction: Option<Transaction>,
    pub shipment_number: String,
    pub product_group: ProductGroup,
    pub entity: String,
    pub address: Address,
    pub consignee_phone: String,
    pub shipper_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipper_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference3: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ScheduleDeliveryResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(rename = "ID", default, deserialize_with = "de::lenient_opt_string")]
    pub id: Option<String>,
}

impl_api_response!(
    CreateShipmentsResponse,
    PrintLabelResponse,
    CreatePickupResponse,
    CancelPickupResponse,
    ShipmentNumberRangeResponse,
    ScheduleDeliveryResponse,
);
