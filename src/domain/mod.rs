// Domain layer: wire models and ports (interfaces). No I/O here.

/// 回應型別共用的 `ApiResponse` 實作
macro_rules! impl_api_response {
    ($($ty:ty),* $(,)?) => {
        $(impl $crate::domain::model::ApiResponse for $ty {
            fn base(&self) -> &$crate::domain::model::BaseResponse {
                &self.base
            }
        })*
    };
}

pub mod de;
pub mod location;
pub mod model;
pub mod ports;
pub mod rate;
pub mod shipping;
pub mod tracking;
