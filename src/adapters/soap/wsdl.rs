//! WSDL 1.1 文件讀取，產生操作表。

use crate::adapters::soap::parser::{parse_document, XmlElement};
use crate::core::service::LogicalService;
use crate::domain::ports::OperationSpec;
use crate::utils::error::{AramexError, Result};
use std::collections::HashMap;
use std::path::Path;

const RATE_WSDL: &str = include_str!("../../../wsdl/aramex-rates-calculator.wsdl");
const SHIPPING_WSDL: &str = include_str!("../../../wsdl/shipping-services-api.wsdl");
const TRACKING_WSDL: &str = include_str!("../../../wsdl/shipments-tracking-api.wsdl");
const LOCATION_WSDL: &str = include_str!("../../../wsdl/location-api.wsdl");

/// 隨 crate 發佈的 WSDL
pub fn embedded_document(service: LogicalService) -> &'static str {
    match service {
        LogicalService::Rate => RATE_WSDL,
        LogicalService::Shipping => SHIPPING_WSDL,
        LogicalService::Tracking => TRACKING_WSDL,
        LogicalService::Location => LOCATION_WSDL,
    }
}

/// 有指定目錄時讀取目錄中的檔案，否則用內建文件
pub async fn load_document(service: LogicalService, schema_dir: Option<&Path>) -> Result<String> {
    let Some(dir) = schema_dir else {
        return Ok(embedded_document(service).to_string());
    };

    let path = dir.join(service.schema_file());
    tokio::fs::read_to_string(&path)
        .await
        .map_err(|e| AramexError::BindingConstructionError {
            service: service.to_string(),
            reason: format!("cannot read schema document {}: {}", path.display(), e),
        })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaDocument {
    pub target_namespace: String,
    pub operations: Vec<OperationSpec>,
}

impl SchemaDocument {
    pub fn parse(service: LogicalService, xml: &str) -> Result<Self> {
        let failed = |reason: String| AramexError::BindingConstructionError {
            service: service.to_string(),
            reason,
        };

        let root = parse_document(xml).map_err(|e| failed(format!("invalid schema document: {}", e)))?;
        if root.name != "definitions" {
            return Err(failed(format!(
                "expected wsdl:definitions, found <{}>",
                root.name
            )));
        }
        let target_namespace = root
            .attribute("targetNamespace")
            .ok_or_else(|| failed("definitions has no targetNamespace".to_string()))?
            .to_string();

        // message 名稱 -> body 元素名稱
        let messages: HashMap<&str, String> = root
            .children_named("message")
            .filter_map(|message| {
                let name = message.attribute("name")?;
                let element = message
                    .children_named("part")
                    .find_map(|part| part.attribute("element"))
                    .map(strip_prefix)?;
                Some((name, element.to_string()))
            })
            .collect();

        // 操作名稱 -> soapAction
        let actions: HashMap<&str, &str> = root
            .children_named("binding")
            .flat_map(|binding| binding.children_named("operation"))
            .filter_map(|operation| {
                let name = operation.attribute("name")?;
                let action = operation
                    .child("operation")
                    .and_then(|soap_op| soap_op.attribute("soapAction"))
                    .unwrap_or("");
                Some((name, action))
            })
            .collect();

        let mut operations = Vec::new();
        for port_type in root.children_named("portType") {
            for operation in port_type.children_named("operation") {
                operations.push(describe_operation(
                    operation,
                    &messages,
                    &actions,
                    &target_namespace,
                    &failed,
                )?);
            }
        }

        if operations.is_empty() {
            return Err(failed("schema document declares no operations".to_string()));
        }

        Ok(Self {
            target_namespace,
            operations,
        })
    }
}

fn describe_operation(
    operation: &XmlElement,
    messages: &HashMap<&str, String>,
    actions: &HashMap<&str, &str>,
    namespace: &str,
    failed: &dyn Fn(String) -> AramexError,
) -> Result<OperationSpec> {
    let name = operation
        .attribute("name")
        .ok_or_else(|| failed("portType operation without a name".to_string()))?;
    let input_message = operation
        .child("input")
        .and_then(|input| input.attribute("message"))
        .map(strip_prefix)
        .ok_or_else(|| failed(format!("operation {} has no input message", name)))?;
    let input_element = messages
        .get(input_message)
        .cloned()
        .ok_or_else(|| failed(format!("message {} is not declared", input_message)))?;

    Ok(OperationSpec {
        name: name.to_string(),
        soap_action: actions.get(name).copied().unwrap_or_default().to_string(),
        input_element,
        namespace: namespace.to_string(),
    })
}

fn strip_prefix(qualified: &str) -> &str {
    qualified
        .rsplit_once(':')
        .map(|(_, local)| local)
        .unwrap_or(qualified)
}
