//! 各服務共用的線路型別。欄位宣告順序即 WSDL 要求的順序，請勿重新排列。

use crate::core::normalizer;
use crate::domain::de;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 每次呼叫附帶的憑證區塊
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ClientInfo {
    pub user_name: String,
    pub password: String,
    pub version: String,
    pub account_number: String,
    pub account_pin: String,
    pub account_entity: String,
    pub account_country_code: String,
    pub source: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Transaction {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "de::lenient_opt_string")]
    pub reference1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "de::lenient_opt_string")]
    pub reference2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "de::lenient_opt_string")]
    pub reference3: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "de::lenient_opt_string")]
    pub reference4: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "de::lenient_opt_string")]
    pub reference5: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Address {
    #[serde(default, deserialize_with = "de::lenient_string")]
    pub line1: String,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "de::lenient_opt_string")]
    pub line2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "de::lenient_opt_string")]
    pub line3: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "de::lenient_opt_string")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "de::lenient_opt_string")]
    pub state_or_province_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "de::lenient_opt_string")]
    pub post_code: Option<String>,
    #[serde(default, deserialize_with = "de::lenient_string")]
    pub country_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "de::lenient_opt_f64")]
    pub longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "de::lenient_opt_f64")]
    pub latitude: Option<f64>,
}

impl de::WireItem for Address {
    const ELEMENT: &'static str = "Address";
}

impl Address {
    pub fn new(line1: impl Into<String>, city: impl Into<String>, country_code: impl Into<String>) -> Self {
        Self {
            line1: line1.into(),
            city: Some(city.into()),
            country_code: country_code.into(),
            ..Default::default()
        }
    }

    /// WSDL 順序的地址，選填文字欄位補空字串
    pub fn normalized(&self) -> serde_json::Result<Value> {
        Ok(normalizer::normalize_address(&serde_json::to_value(self)?))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "de::lenient_opt_string")]
    pub department: Option<String>,
    #[serde(default, deserialize_with = "de::lenient_string")]
    pub person_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "de::lenient_opt_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "de::lenient_string")]
    pub company_name: String,
    #[serde(default, deserialize_with = "de::lenient_string")]
    pub phone_number1: String,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "de::lenient_opt_string")]
    pub phone_number1_ext: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "de::lenient_opt_string")]
    pub phone_number2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "de::lenient_opt_string")]
    pub phone_number2_ext: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "de::lenient_opt_string")]
    pub fax_number: Option<String>,
    #[serde(default, deserialize_with = "de::lenient_string")]
    pub cell_phone: String,
    #[serde(default, deserialize_with = "de::lenient_string")]
    pub email_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "de::lenient_opt_string")]
    pub r#type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Party {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "de::lenient_opt_string")]
    pub reference1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "de::lenient_opt_string")]
    pub reference2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "de::lenient_opt_string")]
    pub account_number: Option<String>,
    pub party_address: Address,
    pub contact: Contact,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeightUnit {
    #[default]
    #[serde(rename = "KG")]
    Kg,
    #[serde(rename = "LB")]
    Lb,
}

/// Unit 必須在 Value 之前
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Weight {
    #[serde(default)]
    pub unit: WeightUnit,
    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub value: f64,
}

impl Weight {
    pub fn kg(value: f64) -> Self {
        Self {
            unit: WeightUnit::Kg,
            value,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DimensionUnit {
    #[default]
    #[serde(rename = "CM")]
    Cm,
    #[serde(rename = "M")]
    M,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Dimensions {
    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub length: f64,
    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub width: f64,
    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub height: f64,
    #[serde(default)]
    pub unit: DimensionUnit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeUnit {
    Cm3,
    Inch3,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Volume {
    pub unit: VolumeUnit,
    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub value: f64,
}

/// CurrencyCode 必須在 Value 之前
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Money {
    #[serde(default, deserialize_with = "de::lenient_string")]
    pub currency_code: String,
    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub value: f64,
}

impl Money {
    pub fn new(currency_code: impl Into<String>, value: f64) -> Self {
        Self {
            currency_code: currency_code.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Notification {
    #[serde(default, deserialize_with = "de::lenient_string")]
    pub code: String,
    #[serde(default, deserialize_with = "de::lenient_string")]
    pub message: String,
}

impl de::WireItem for Notification {
    const ELEMENT: &'static str = "Notification";
}

/// 所有回應共有的部分；`has_errors` 才是業務成功與否的依據
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BaseResponse {
    #[serde(default)]
    pub transaction: Option<Transaction>,
    #[serde(default, deserialize_with = "de::lenient_list")]
    pub notifications: Vec<Notification>,
    #[serde(default, deserialize_with = "de::lenient_bool")]
    pub has_errors: bool,
}

/// 由服務層檢查 `HasErrors` 的回應
pub trait ApiResponse {
    fn base(&self) -> &BaseResponse;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductGroup {
    #[serde(rename = "EXP")]
    Express,
    #[serde(rename = "DOM")]
    Domestic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProductType {
    /// Priority Document Express
    Pdx,
    /// Priority Parcel Express
    Ppx,
    /// Priority Letter Express
    Plx,
    /// Deferred Document Express
    Ddx,
    /// Deferred Parcel Express
    Dpx,
    /// Ground Document Express
    Gdx,
    /// Ground Parcel Express
    Gpx,
    /// Economy Parcel Express
    Epx,
    /// Domestic
    Ond,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentType {
    #[serde(rename = "P")]
    Prepaid,
    #[serde(rename = "C")]
    Collect,
    #[serde(rename = "3")]
    ThirdParty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentOption {
    Cash,
    Acct,
    Ppst,
    Crdt,
    Ascc,
    Arcc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ServiceCode {
    /// Cash on Delivery
    Cods,
    First,
    /// Free Domicile
    Frdm,
    /// Hold for Pickup
    Hfpu,
    Noon,
    /// Signature Required
    Sig,
}

impl ServiceCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceCode::Cods => "CODS",
            ServiceCode::First => "FIRST",
            ServiceCode::Frdm => "FRDM",
            ServiceCode::Hfpu => "HFPU",
            ServiceCode::Noon => "NOON",
            ServiceCode::Sig => "SIG",
        }
    }

    /// 線路格式為逗號分隔的服務代碼
    pub fn join(codes: &[ServiceCode]) -> String {
        codes
            .iter()
            .map(ServiceCode::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReportType {
    Url,
    Rpt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickupStatus {
    Ready,
    Pending,
}
