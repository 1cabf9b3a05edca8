//! 回應修補：去掉 `<Operation>Result` 外殼，並還原被序列化壓成單一物件的清單。

use serde_json::Value;

/// 需要還原成清單的位置：(外層欄位, 內層元素名稱)
const COLLECTIONS: [(&str, &str); 2] = [
    ("Shipments", "ProcessedShipment"),
    ("Notifications", "Notification"),
];

/// 有 `<operation>Result` 就取其內容，否則原樣回傳
pub fn unwrap_envelope(operation: &str, raw: Value) -> Value {
    let key = format!("{}Result", operation);
    match raw {
        Value::Object(mut map) if map.contains_key(&key) => {
            map.remove(&key).unwrap_or(Value::Null)
        }
        other => other,
    }
}

/// 只動上述兩個位置，其餘結構保持不變
pub fn repair_collections(mut result: Value) -> Value {
    if let Value::Object(map) = &mut result {
        for (wrapper, inner) in COLLECTIONS {
            let repaired = match map.get(wrapper) {
                Some(Value::Object(wrapped)) => match wrapped.get(inner) {
                    Some(Value::Array(items)) => Some(Value::Array(items.clone())),
                    Some(Value::Null) | None => None,
                    Some(single) => Some(Value::Array(vec![single.clone()])),
                },
                _ => None,
            };
            if let Some(list) = repaired {
                map.insert(wrapper.to_string(), list);
            }
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unwrap_envelope_with_and_without_result_key() {
        let raw = json!({"CalculateRateResult": {"HasErrors": false}});
        assert_eq!(
            unwrap_envelope("CalculateRate", raw),
            json!({"HasErrors": false})
        );

        let bare = json!({"HasErrors": false});
        assert_eq!(unwrap_envelope("CalculateRate", bare.clone()), bare);

        // 名稱需完全相符
        let other = json!({"calculateRateResult": 1});
        assert_eq!(unwrap_envelope("CalculateRate", other.clone()), other);
    }

    #[test]
    fn test_unwrap_envelope_keeps_null_result() {
        assert_eq!(
            unwrap_envelope("FetchCountries", json!({"FetchCountriesResult": null})),
            Value::Null
        );
        assert_eq!(unwrap_envelope("FetchCountries", Value::Null), Value::Null);
    }

    #[test]
    fn test_single_processed_shipment_becomes_list() {
        let repaired = repair_collections(json!({
            "HasErrors": false,
            "Shipments": {"ProcessedShipment": {"ID": "SHP1"}}
        }));
        assert_eq!(
            repaired,
            json!({"HasErrors": false, "Shipments": [{"ID": "SHP1"}]})
        );
    }

    #[test]
    fn test_list_is_unwrapped_without_change() {
        let repaired = repair_collections(json!({
            "Shipments": {"ProcessedShipment": [{"ID": "SHP1"}, {"ID": "SHP2"}]}
        }));
        assert_eq!(
            repaired,
            json!({"Shipments": [{"ID": "SHP1"}, {"ID": "SHP2"}]})
        );
    }

    #[test]
    fn test_notifications_repaired_and_absent_wrapper_untouched() {
        let repaired = repair_collections(json!({
            "HasErrors": true,
            "Notifications": {"Notification": {"Code": "ERR01", "Message": "Invalid"}}
        }));
        assert_eq!(
            repaired["Notifications"],
            json!([{"Code": "ERR01", "Message": "Invalid"}])
        );
        assert!(repaired.get("Shipments").is_none());

        let untouched = json!({"HasErrors": false, "TotalAmount": {"Value": "1"}});
        assert_eq!(repair_collections(untouched.clone()), untouched);
    }

    #[test]
    fn test_already_list_wrapper_left_alone() {
        let input = json!({"Notifications": [{"Code": "X"}]});
        assert_eq!(repair_collections(input.clone()), input);
    }
}
