use crate::core::normalizer;
use crate::domain::de;
use crate::domain::model::{
    Address, ApiResponse, BaseResponse, Dimensions, Money, PaymentOption, PaymentType,
    ProductGroup, ProductType, Transaction, Weight,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 運費試算用的貨件明細。Dimensions 必須排第一。
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ShipmentDetailsForRate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,
    pub actual_weight: Weight,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chargeable_weight: Option<Weight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_of_goods: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goods_origin_country: Option<String>,
    pub number_of_pieces: u32,
    pub product_group: ProductGroup,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type: Option<ProductType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<PaymentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_options: Option<PaymentOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customs_value_amount: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cash_on_delivery_amount: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insurance_amount: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cash_additional_amount: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collect_amount: Option<Money>,
    /// 逗號分隔的服務代碼，見 [`crate::domain::model::ServiceCode::join`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub services: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Value>,
}

impl ShipmentDetailsForRate {
    pub fn new(actual_weight: Weight, number_of_pieces: u32, product_group: ProductGroup) -> Self {
        Self {
            dimensions: None,
            actual_weight,
            chargeable_weight: None,
            description_of_goods: None,
            goods_origin_country: None,
            number_of_pieces,
            product_group,
            product_type: None,
            payment_type: None,
            payment_options: None,
            customs_value_amount: None,
            cash_on_delivery_amount: None,
            insurance_amount: None,
            cash_additional_amount: None,
            collect_amount: None,
            services: None,
            items: None,
        }
    }

    /// 依 schema 順序輸出，前段欄位以 null 佔位，尾段選填欄位未提供時省略
    pub fn to_normalized_value(&self) -> serde_json::Result<Value> {
        Ok(normalizer::normalize_shipment_for_rate(&serde_json::to_value(self)?))
    }
}

/// 運費試算請求（ClientInfo 由服務層附加）
#[derive(Debug, Clone, PartialEq)]
pub struct CalculateRateRequest {
    pub transaction: Option<Transaction>,
    pub origin_address: Address,
    pub destination_address: Address,
    pub shipment_details: ShipmentDetailsForRate,
    pub preferred_currency_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RateLineItem {
    #[serde(default, deserialize_with = "de::lenient_string")]
    pub charge_type: String,
    #[serde(default, deserialize_with = "de::lenient_string")]
    pub charge_name: String,
    pub charge_amount: Option<Money>,
}

impl de::WireItem for RateLineItem {
    const ELEMENT: &'static str = "RateLineItem";
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RateDetails {
    #[serde(default)]
    pub total_amount: Option<Money>,
    #[serde(default, deserialize_with = "de::lenient_list")]
    pub rate_line_items: Vec<RateLineItem>,
    #[serde(default)]
    pub weight_charged: Option<Weight>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CalculateRateResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(default)]
    pub total_amount: Option<Money>,
    #[serde(default)]
    pub rate_details: Option<RateDetails>,
}

impl ApiResponse for CalculateRateResponse {
    fn base(&self) -> &BaseResponse {
        &self.base
    }
}
