// Adapters layer: concrete implementations for external systems (SOAP codec, HTTP transport).

pub mod http;
pub mod soap;

pub use http::{HttpBindingFactory, SoapHttpTransport};
