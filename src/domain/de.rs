//! 回應解碼輔助函式。
//!
//! SOAP 解析器產生的葉節點一律是字串，集合在只有一個元素時也會退化成物件，
//! 因此回應型別以這些函式寬鬆地接受兩種形狀。

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub fn lenient_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Bool(b)) => b,
        Some(Value::String(s)) => matches!(s.trim(), "true" | "True" | "TRUE" | "1"),
        Some(Value::Number(n)) => n.as_i64() == Some(1),
        _ => false,
    })
}

pub fn lenient_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(lenient_opt_f64(deserializer)?.unwrap_or_default())
}

pub fn lenient_opt_f64<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<f64>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    match value {
        Some(Value::Number(n)) => Ok(n.as_f64()),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        Some(Value::Null) | None => Ok(None),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected a number, got {}",
            other
        ))),
    }
}

pub fn lenient_u32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let value = lenient_opt_f64(deserializer)?.unwrap_or_default();
    if value < 0.0 || value.fract() != 0.0 || value > f64::from(u32::MAX) {
        return Err(serde::de::Error::custom(format!(
            "expected a non-negative integer, got {}",
            value
        )));
    }
    Ok(value as u32)
}

/// 字串欄位：數字或布林轉成文字，null 轉成空字串
pub fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(lenient_opt_string(deserializer)?.unwrap_or_default())
}

pub fn lenient_opt_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    match value {
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(Value::Null) | None => Ok(None),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected a string, got {}",
            other
        ))),
    }
}

/// 集合項目在線路上的元素名稱，`ArrayOfCountry` 的項目是 `<Country>`
pub trait WireItem {
    const ELEMENT: &'static str;

    fn is_wrapper(name: &str) -> bool {
        name == Self::ELEMENT
    }
}

/// 集合欄位：null 為空、陣列照舊、單一物件為一個元素。
/// 只有在唯一的鍵是項目元素名稱時（例如 `{"Country": [...]}`）才取其內容。
pub fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + WireItem,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    flatten_list::<T>(value.unwrap_or(Value::Null))
        .into_iter()
        .map(|item| serde_json::from_value(item).map_err(serde::de::Error::custom))
        .collect()
}

/// 字串集合，例如 `{"string": ["a", "b"]}` 或 `{"string": "a"}`
pub fn lenient_string_list<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<String>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    let mut out = Vec::new();
    collect_scalars(value.unwrap_or(Value::Null), &mut out);
    Ok(out)
}

fn collect_scalars(value: Value, out: &mut Vec<String>) {
    match value {
        Value::Null => {}
        Value::String(s) => out.push(s),
        Value::Array(items) => items.into_iter().for_each(|item| collect_scalars(item, out)),
        Value::Object(map) => map.into_iter().for_each(|(_, item)| collect_scalars(item, out)),
        scalar => out.push(scalar.to_string()),
    }
}

fn flatten_list<T: WireItem>(value: Value) -> Vec<Value> {
    match value {
        Value::Object(map) if map.len() == 1 && map.keys().all(|name| T::is_wrapper(name)) => map
            .into_iter()
            .flat_map(|(_, inner)| match inner {
                Value::Null => Vec::new(),
                Value::Array(items) => items,
                item => vec![item],
            })
            .collect(),
        Value::Null => Vec::new(),
        Value::Array(items) => items,
        item => vec![item],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Sample {
        #[serde(default, deserialize_with = "lenient_bool")]
        flag: bool,
        #[serde(default, deserialize_with = "lenient_f64")]
        amount: f64,
        #[serde(default, deserialize_with = "lenient_string")]
        id: String,
        #[serde(default, deserialize_with = "lenient_list")]
        items: Vec<Item>,
        #[serde(default, deserialize_with = "lenient_list")]
        labels: Vec<Labelled>,
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        #[serde(rename = "Code")]
        code: String,
        #[serde(rename = "Name")]
        name: String,
    }

    impl WireItem for Item {
        const ELEMENT: &'static str = "Country";
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Labelled {
        #[serde(rename = "Label")]
        label: Option<Value>,
    }

    impl WireItem for Labelled {
        const ELEMENT: &'static str = "Shipment";
    }

    #[test]
    fn test_textual_scalars() {
        let sample: Sample =
            serde_json::from_value(json!({"flag": "true", "amount": "0.530", "id": 4455}))
                .unwrap();
        assert!(sample.flag);
        assert!((sample.amount - 0.53).abs() < f64::EPSILON);
        assert_eq!(sample.id, "4455");
        assert!(sample.items.is_empty());
    }

    #[test]
    fn test_native_scalars_and_missing_fields() {
        let sample: Sample = serde_json::from_value(json!({"flag": false, "amount": 12})).unwrap();
        assert!(!sample.flag);
        assert_eq!(sample.amount, 12.0);
        assert_eq!(sample.id, "");
    }

    #[test]
    fn test_list_shapes() {
        let single: Sample =
            serde_json::from_value(json!({"items": {"Code": "BH", "Name": "Bahrain"}})).unwrap();
        assert_eq!(single.items.len(), 1);

        let wrapped: Sample = serde_json::from_value(json!({
            "items": {"Country": [
                {"Code": "BH", "Name": "Bahrain"},
                {"Code": "SA", "Name": "Saudi Arabia"}
            ]}
        }))
        .unwrap();
        assert_eq!(wrapped.items.len(), 2);
        assert_eq!(wrapped.items[1].code, "SA");

        let wrapped_single: Sample = serde_json::from_value(json!({
            "items": {"Country": {"Code": "BH", "Name": "Bahrain"}}
        }))
        .unwrap();
        assert_eq!(
            wrapped_single.items,
            vec![Item {
                code: "BH".to_string(),
                name: "Bahrain".to_string()
            }]
        );

        let empty: Sample = serde_json::from_value(json!({"items": null})).unwrap();
        assert!(empty.items.is_empty());
    }

    #[test]
    fn test_single_key_item_is_not_unwrapped() {
        let sample: Sample =
            serde_json::from_value(json!({"labels": {"Label": {"Url": "x"}}})).unwrap();
        assert_eq!(sample.labels.len(), 1);
        assert_eq!(sample.labels[0].label, Some(json!({"Url": "x"})));

        let wrapped: Sample = serde_json::from_value(json!({
            "labels": {"Shipment": {"Label": {"Url": "x"}}}
        }))
        .unwrap();
        assert_eq!(wrapped.labels[0].label, Some(json!({"Url": "x"})));

        let empty_wrapper: Sample =
            serde_json::from_value(json!({"labels": {"Shipment": null}})).unwrap();
        assert!(empty_wrapper.labels.is_empty());
    }

    #[derive(Debug, Deserialize)]
    struct Strings {
        #[serde(default, deserialize_with = "lenient_string_list")]
        values: Vec<String>,
    }

    #[test]
    fn test_string_list_shapes() {
        let single: Strings =
            serde_json::from_value(json!({"values": {"string": "Manama"}})).unwrap();
        assert_eq!(single.values, vec!["Manama"]);

        let many: Strings =
            serde_json::from_value(json!({"values": {"string": ["Manama", "Riffa"]}})).unwrap();
        assert_eq!(many.values, vec!["Manama", "Riffa"]);

        let missing: Strings = serde_json::from_value(json!({})).unwrap();
        assert!(missing.values.is_empty());
    }
}
