//! SOAP 回應解析：XML 轉成 `serde_json::Value`。
//!
//! 命名空間前綴一律捨棄，重複的兄弟元素合併成陣列，葉節點保留為字串，
//! 空元素或 `xsi:nil` 元素轉成 null。

use crate::adapters::soap::fault::parse_fault;
use crate::utils::error::TransportFault;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde_json::{Map, Value};

/// 去掉前綴後的 XML 元素樹
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<XmlElement>,
    pub text: String,
}

impl XmlElement {
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|c| c.name == name)
    }

    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlElement> {
        self.children.iter().filter(move |c| c.name == name)
    }

    fn is_nil(&self) -> bool {
        matches!(self.attribute("nil"), Some("true") | Some("1"))
    }

    /// 元素內容轉成 JSON
    pub fn to_value(&self) -> Value {
        if self.is_nil() {
            return Value::Null;
        }
        if self.children.is_empty() {
            return if self.text.is_empty() {
                Value::Null
            } else {
                Value::String(self.text.clone())
            };
        }

        let mut map = Map::new();
        for child in &self.children {
            let value = child.to_value();
            match map.get_mut(&child.name) {
                // 元素本身不會轉成陣列，已是陣列代表同名兄弟重複出現
                Some(Value::Array(items)) => items.push(value),
                Some(existing) => {
                    let first = existing.take();
                    *existing = Value::Array(vec![first, value]);
                }
                None => {
                    map.insert(child.name.clone(), value);
                }
            }
        }
        Value::Object(map)
    }
}

fn local_name(bytes: &[u8]) -> String {
    let name = String::from_utf8_lossy(bytes);
    match name.rsplit_once(':') {
        Some((_, local)) => local.to_string(),
        None => name.into_owned(),
    }
}

fn open_element(start: &BytesStart<'_>) -> Result<XmlElement, String> {
    let mut attributes = Vec::new();
    for attr in start.attributes() {
        let attr = attr.map_err(|e| e.to_string())?;
        let key = local_name(attr.key.as_ref());
        let value = attr.unescape_value().map_err(|e| e.to_string())?;
        attributes.push((key, value.into_owned()));
    }
    Ok(XmlElement {
        name: local_name(start.local_name().as_ref()),
        attributes,
        children: Vec::new(),
        text: String::new(),
    })
}

/// 解析整份 XML 文件，回傳根元素
pub fn parse_document(xml: &str) -> Result<XmlElement, String> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        match reader.read_event().map_err(|e| {
            format!("XML error at position {}: {}", reader.buffer_position(), e)
        })? {
            Event::Start(start) => stack.push(open_element(&start)?),
            Event::Empty(start) => {
                let element = open_element(&start)?;
                match stack.last_mut() {
                    Some(parent) => parent.children.push(element),
                    None => root = Some(element),
                }
            }
            Event::End(_) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| "unbalanced closing tag".to_string())?;
                match stack.last_mut() {
                    Some(parent) => parent.children.push(element),
                    None => root = Some(element),
                }
            }
            Event::Text(text) => {
                if let Some(current) = stack.last_mut() {
                    let text = text.unescape().map_err(|e| e.to_string())?;
                    current.text.push_str(&text);
                }
            }
            Event::CData(data) => {
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&String::from_utf8_lossy(&data.into_inner()));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err(format!("unclosed element <{}>", stack[stack.len() - 1].name));
    }
    root.ok_or_else(|| "document has no root element".to_string())
}

/// 解析 SOAP 回應。Fault 轉成 `TransportFault::SoapFault`，
/// 否則回傳 Body 第一個子元素的內容。
pub fn parse_envelope(xml: &str) -> Result<Value, TransportFault> {
    let malformed = |reason: String| TransportFault::MalformedEnvelope { reason };

    let root = parse_document(xml).map_err(malformed)?;
    if root.name != "Envelope" {
        return Err(malformed(format!("expected Envelope, found <{}>", root.name)));
    }
    let body = root
        .child("Body")
        .ok_or_else(|| malformed("missing Body element".to_string()))?;

    let Some(payload) = body.children.first() else {
        return Ok(Value::Object(Map::new()));
    };
    if payload.name == "Fault" {
        return Err(parse_fault(payload));
    }

    Ok(match payload.to_value() {
        Value::Null => Value::Object(Map::new()),
        value => value,
    })
}
