use crate::app::services::{encode_error, ensure_success};
use crate::core::{Invoker, LogicalService};
use crate::domain::location::{
    CountryScopedRequest, FetchCitiesRequest, FetchCitiesResponse, FetchCountriesRequest,
    FetchCountriesResponse, FetchOfficesRequest, FetchOfficesResponse, FetchStatesResponse,
    ValidateAddressRequest, ValidateAddressResponse,
};
use crate::domain::model::{Address, Transaction};
use crate::utils::error::Result;

pub struct LocationService {
    invoker: Invoker,
}

impl LocationService {
    pub fn new(invoker: Invoker) -> Self {
        Self { invoker }
    }

    pub async fn fetch_countries(
        &self,
        transaction: Option<&Transaction>,
    ) -> Result<FetchCountriesResponse> {
        let request = FetchCountriesRequest {
            client_info: self.invoker.session().client_info(),
            transaction,
        };
        let response: FetchCountriesResponse = self
            .invoker
            .invoke_typed(LogicalService::Location, "FetchCountries", &request)
            .await?;
        ensure_success(response, "Failed to fetch countries")
    }

    pub async fn fetch_cities(
        &self,
        country_code: &str,
        state: Option<&str>,
        name_starts_with: Option<&str>,
        transaction: Option<&Transaction>,
    ) -> Result<FetchCitiesResponse> {
        let request = FetchCitiesRequest {
            client_info: self.invoker.session().client_info(),
            transaction,
            country_code,
            state,
            name_starts_with,
        };
        let response: FetchCitiesResponse = self
            .invoker
            .invoke_typed(LogicalService::Location, "FetchCities", &request)
            .await?;
        ensure_success(response, "Failed to fetch cities")
    }

    pub async fn fetch_states(
        &self,
        country_code: &str,
        transaction: Option<&Transaction>,
    ) -> Result<FetchStatesResponse> {
        let request = CountryScopedRequest {
            client_info: self.invoker.session().client_info(),
            transaction,
            country_code,
        };
        let response: FetchStatesResponse = self
            .invoker
            .invoke_typed(LogicalService::Location, "FetchStates", &request)
            .await?;
        ensure_success(response, "Failed to fetch states")
    }

    /// 地址先依 WSDL 順序正規化再送出
    pub async fn validate_address(
        &self,
        address: &Address,
        transaction: Option<&Transaction>,
    ) -> Result<ValidateAddressResponse> {
        let op = "ValidateAddress";
        let request = ValidateAddressRequest {
            client_info: self.invoker.session().client_info(),
            transaction,
            address: address.normalized().map_err(|e| encode_error(op, e))?,
        };
        let response: ValidateAddressResponse = self
            .invoker
            .invoke_typed(LogicalService::Location, op, &request)
            .await?;
        ensure_success(response, "Failed to validate address")
    }

    pub async fn fetch_offices(
        &self,
        country_code: &str,
        city: Option<&str>,
        transaction: Option<&Transaction>,
    ) -> Result<FetchOfficesResponse> {
        let request = FetchOfficesRequest {
            client_info: self.invoker.session().client_info(),
            transaction,
            country_code,
            city,
        };
        let response: FetchOfficesResponse = self
            .invoker
            .invoke_typed(LogicalService::Location, "FetchOffices", &request)
            .await?;
        ensure_success(response, "Failed to fetch offices")
    }
}
