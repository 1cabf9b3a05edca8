//! SOAP 1.1 編解碼：請求 envelope 組裝、回應與 Fault 解析、WSDL 操作表。

mod builder;
mod fault;
mod parser;
pub mod wsdl;

pub use builder::build_envelope;
pub use fault::parse_fault;
pub use parser::{parse_document, parse_envelope, XmlElement};
pub use wsdl::SchemaDocument;
