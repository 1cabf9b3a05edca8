use crate::domain::de;
use crate::domain::model::{BaseResponse, ClientInfo, Transaction};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct TrackShipmentsRequest<'a> {
    pub client_info: ClientInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction: Option<&'a Transaction>,
    pub shipments: WaybillList<'a>,
    pub get_last_tracking_update_only: bool,
}

/// `ArrayOfstring` 的項目屬於序列化陣列的命名空間
pub const ARRAYS_NS: &str = "http://schemas.microsoft.com/2003/10/Serialization/Arrays";

/// 線路格式為 `ArrayOfstring`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct WaybillList<'a> {
    #[serde(rename = "@xmlns:a")]
    namespace: &'static str,
    #[serde(rename = "a:string")]
    numbers: &'a [String],
}

impl<'a> WaybillList<'a> {
    pub fn new(numbers: &'a [String]) -> Self {
        Self {
            namespace: ARRAYS_NS,
            numbers,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrackingResult {
    #[serde(default, deserialize_with = "de::lenient_string")]
    pub waybill_number: String,
    #[serde(default, deserialize_with = "de::lenient_string")]
    pub update_code: String,
    #[serde(default, deserialize_with = "de::lenient_string")]
    pub update_description: String,
    #[serde(default, deserialize_with = "de::lenient_string")]
    pub update_date_time: String,
    #[serde(default, deserialize_with = "de::lenient_string")]
    pub update_location: String,
    #[serde(default, deserialize_with = "de::lenient_opt_string")]
    pub comments: Option<String>,
    #[serde(default, deserialize_with = "de::lenient_opt_string")]
    pub problem_code: Option<String>,
    #[serde(default, deserialize_with = "de::lenient_opt_string")]
    pub gross_weight: Option<String>,
    #[serde(default, deserialize_with = "de::lenient_opt_string")]
    pub chargeable_weight: Option<String>,
    #[serde(default, deserialize_with = "de::lenient_opt_string")]
    pub weight_unit: Option<String>,
    #[serde(rename = "ShipmentForeignHAWB", default, deserialize_with = "de::lenient_opt_string")]
    pub shipment_foreign_hawb: Option<String>,
}

impl de::WireItem for TrackingResult {
    const ELEMENT: &'static str = "TrackingResult";
}

/// 一個運單號碼及其追蹤紀錄（遠端以 Key/Value 配對回傳）
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct WaybillTracking {
    #[serde(rename = "Key", default, deserialize_with = "de::lenient_string")]
    pub waybill_number: String,
    #[serde(rename = "Value", default, deserialize_with = "de::lenient_list")]
    pub updates: Vec<TrackingResult>,
}

/// 元素名稱帶有遠端產生的雜湊尾碼，例如 `KeyValueOfstringArrayOfTrackingResultmFAkxlpY`
impl de::WireItem for WaybillTracking {
    const ELEMENT: &'static str = "KeyValueOfstringArrayOfTrackingResult";

    fn is_wrapper(name: &str) -> bool {
        name.starts_with(Self::ELEMENT)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrackShipmentsResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(default, deserialize_with = "de::lenient_list")]
    pub tracking_results: Vec<WaybillTracking>,
    #[serde(default, deserialize_with = "de::lenient_string_list")]
    pub non_existing_waybills: Vec<String>,
}

impl TrackShipmentsResponse {
    pub fn updates_for(&self, waybill_number: &str) -> Option<&[TrackingResult]> {
        self.tracking_results
            .iter()
            .find(|entry| entry.waybill_number == waybill_number)
            .map(|entry| entry.updates.as_slice())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct TrackPickupRequest<'a> {
    pub client_info: ClientInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction: Option<&'a Transaction>,
    pub reference: &'a str,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PickupTrackingResult {
    #[serde(rename = "PickupID", default, deserialize_with = "de::lenient_string")]
    pub pickup_id: String,
    #[serde(default, deserialize_with = "de::lenient_string")]
    pub reference: String,
    #[serde(default, deserialize_with = "de::lenient_string")]
    pub status: String,
    #[serde(default, deserialize_with = "de::lenient_string")]
    pub update_date_time: String,
    #[serde(default, deserialize_with = "de::lenient_opt_string")]
    pub comments: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrackPickupResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(default)]
    pub pickup_tracking: Option<PickupTrackingResult>,
}

impl_api_response!(TrackShipmentsResponse, TrackPickupResponse);
