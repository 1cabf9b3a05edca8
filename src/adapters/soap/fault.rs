use crate::adapters::soap::parser::XmlElement;
use crate::utils::error::TransportFault;

/// 讀取 SOAP 1.1 (`faultcode`/`faultstring`) 或 SOAP 1.2 (`Code/Value`, `Reason/Text`) 的 Fault
pub fn parse_fault(fault: &XmlElement) -> TransportFault {
    let code = fault
        .child("faultcode")
        .or_else(|| fault.child("Code").and_then(|c| c.child("Value")))
        .map(|e| e.text.trim().to_string())
        .unwrap_or_default();

    let message = fault
        .child("faultstring")
        .or_else(|| fault.child("Reason").and_then(|r| r.child("Text")))
        .map(|e| e.text.trim().to_string())
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| "unspecified SOAP fault".to_string());

    TransportFault::SoapFault { code, message }
}
