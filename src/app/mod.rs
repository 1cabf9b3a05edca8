// Application layer: domain services, shipment builder and the SDK entry point.

pub mod builder;
pub mod sdk;
pub mod services;

pub use sdk::AramexSdk;
