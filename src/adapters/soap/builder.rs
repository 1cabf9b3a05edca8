use quick_xml::escape::escape;
use serde_json::Value;

pub const SOAP_ENV_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";
pub const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";

const ATTRIBUTE_PREFIX: char = '@';

/// 組出 SOAP 1.1 請求。物件的鍵依插入順序輸出成子元素，
/// 陣列重複同一個元素名稱，null 輸出為 `xsi:nil="true"`。
/// 以 `@` 開頭的鍵是所在元素的屬性，例如 `{"@xmlns:a": ns, "a:string": [..]}`。
pub fn build_envelope(namespace: &str, input_element: &str, request: &Value) -> String {
    let mut out = String::with_capacity(1024);
    out.push_str(r#"<?xml version="1.0" encoding="utf-8"?>"#);
    out.push_str(&format!(
        r#"<soap:Envelope xmlns:soap="{}" xmlns:xsi="{}"><soap:Body>"#,
        SOAP_ENV_NS, XSI_NS
    ));
    out.push_str(&format!(
        r#"<{} xmlns="{}">"#,
        input_element,
        escape(namespace)
    ));
    write_content(&mut out, request);
    out.push_str(&format!("</{}>", input_element));
    out.push_str("</soap:Body></soap:Envelope>");
    out
}

fn write_content(out: &mut String, value: &Value) {
    match value {
        Value::Object(map) => {
            for (name, child) in map {
                if !name.starts_with(ATTRIBUTE_PREFIX) {
                    write_element(out, name, child);
                }
            }
        }
        Value::Null => {}
        Value::Array(items) => items.iter().for_each(|item| write_content(out, item)),
        scalar => out.push_str(&escape(&scalar_text(scalar))),
    }
}

fn write_element(out: &mut String, name: &str, value: &Value) {
    match value {
        Value::Null => {
            out.push('<');
            out.push_str(name);
            out.push_str(r#" xsi:nil="true"/>"#);
        }
        Value::Array(items) => {
            for item in items {
                write_element(out, name, item);
            }
        }
        _ => {
            out.push('<');
            out.push_str(name);
            write_attributes(out, value);
            out.push('>');
            write_content(out, value);
            out.push_str("</");
            out.push_str(name);
            out.push('>');
        }
    }
}

fn write_attributes(out: &mut String, value: &Value) {
    let Value::Object(map) = value else {
        return;
    };
    for (key, attr) in map {
        if let Some(attr_name) = key.strip_prefix(ATTRIBUTE_PREFIX) {
            out.push(' ');
            out.push_str(attr_name);
            out.push_str("=\"");
            out.push_str(&escape(&scalar_text(attr)));
            out.push('"');
        }
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}
