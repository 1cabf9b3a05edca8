use crate::domain::de;
use crate::domain::model::{Address, BaseResponse, ClientInfo, Transaction};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct FetchCountriesRequest<'a> {
    pub client_info: ClientInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction: Option<&'a Transaction>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Country {
    #[serde(default, deserialize_with = "de::lenient_string")]
    pub code: String,
    #[serde(default, deserialize_with = "de::lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "de::lenient_opt_string")]
    pub iso_code: Option<String>,
    #[serde(default, deserialize_with = "de::lenient_bool")]
    pub state_required: bool,
    #[serde(default, deserialize_with = "de::lenient_bool")]
    pub post_code_required: bool,
    #[serde(default, deserialize_with = "de::lenient_opt_string")]
    pub international_calling_number: Option<String>,
}

impl de::WireItem for Country {
    const ELEMENT: &'static str = "Country";
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FetchCountriesResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(default, deserialize_with = "de::lenient_list")]
    pub countries: Vec<Country>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct FetchCitiesRequest<'a> {
    pub client_info: ClientInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction: Option<&'a Transaction>,
    pub country_code: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_starts_with: Option<&'a str>,
}

/// 城市清單在線路上是 `ArrayOfstring`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FetchCitiesResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(default, deserialize_with = "de::lenient_string_list")]
    pub cities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct CountryScopedRequest<'a> {
    pub client_info: ClientInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction: Option<&'a Transaction>,
    pub country_code: &'a str,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct State {
    #[serde(default, deserialize_with = "de::lenient_string")]
    pub code: String,
    #[serde(default, deserialize_with = "de::lenient_string")]
    pub name: String,
}

impl de::WireItem for State {
    const ELEMENT: &'static str = "State";
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FetchStatesResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(default, deserialize_with = "de::lenient_list")]
    pub states: Vec<State>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct ValidateAddressRequest<'a> {
    pub client_info: ClientInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction: Option<&'a Transaction>,
    pub address: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ValidateAddressResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(default, deserialize_with = "de::lenient_list")]
    pub suggested_addresses: Vec<Address>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct FetchOfficesRequest<'a> {
    pub client_info: ClientInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction: Option<&'a Transaction>,
    pub country_code: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<&'a str>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OfficeLocation {
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default, deserialize_with = "de::lenient_opt_f64")]
    pub longitude: Option<f64>,
    #[serde(default, deserialize_with = "de::lenient_opt_f64")]
    pub latitude: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Office {
    #[serde(default, deserialize_with = "de::lenient_string")]
    pub entity: String,
    #[serde(default, deserialize_with = "de::lenient_string")]
    pub office_type: String,
    #[serde(default)]
    pub location: Option<OfficeLocation>,
    #[serde(default, deserialize_with = "de::lenient_opt_string")]
    pub working_days: Option<String>,
    #[serde(default, deserialize_with = "de::lenient_opt_string")]
    pub working_hours: Option<String>,
    #[serde(default, deserialize_with = "de::lenient_opt_string")]
    pub phone: Option<String>,
}

impl de::WireItem for Office {
    const ELEMENT: &'static str = "Office";
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FetchOfficesResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(default, deserialize_with = "de::lenient_list")]
    pub offices: Vec<Office>,
}

impl_api_response!(
    FetchCountriesResponse,
    FetchCitiesResponse,
    FetchStatesResponse,
    ValidateAddressResponse,
    FetchOfficesResponse,
);
