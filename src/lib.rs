pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::HttpBindingFactory;
pub use app::builder::{build_domestic_shipment, build_shipment};
pub use app::AramexSdk;
pub use config::{AramexConfig, Environment};
pub use core::{Invoker, LogicalService, SessionManager};
pub use utils::error::{AramexError, ErrorKind, Result, TransportFault};
