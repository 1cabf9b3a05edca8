//! 將請求整理成 WSDL 規定的欄位順序。
//!
//! 只處理形狀與順序，不驗證業務值；必填欄位缺漏時原樣略過，交由遠端判斷。

use serde_json::{Map, Value};

const ADDRESS_FIELDS: [(&str, &[&str]); 6] = [
    ("Line2", &["line2"]),
    ("Line3", &["line3"]),
    ("City", &["city"]),
    ("StateOrProvinceCode", &["state"]),
    ("PostCode", &["postcode", "postCode"]),
    ("CountryCode", &["country"]),
];

/// 前段欄位一律出現，未提供時以 null 佔位
const RATE_LEADING_OPTIONAL: [&str; 3] = ["ProductType", "PaymentType", "PaymentOptions"];

/// 尾段欄位只有提供時才出現
const RATE_TRAILING: [&str; 7] = [
    "CustomsValueAmount",
    "CashOnDeliveryAmount",
    "InsuranceAmount",
    "CashAdditionalAmount",
    "CollectAmount",
    "Services",
    "Items",
];

/// 地址：Line1, Line2, Line3, City, StateOrProvinceCode, PostCode, CountryCode
pub fn normalize_address(address: &Value) -> Value {
    let mut out = Map::new();

    if let Some(line1) = lookup(address, "Line1", &["line1"]) {
        out.insert("Line1".to_string(), line1.clone());
    }

    for (key, aliases) in ADDRESS_FIELDS {
        let value = lookup(address, key, aliases);
        if key == "CountryCode" {
            // 必填，缺漏時不補值
            if let Some(v) = value {
                out.insert(key.to_string(), v.clone());
            }
            continue;
        }
        out.insert(key.to_string(), text_or_empty(value));
    }

    Value::Object(out)
}

/// 運費試算的貨件明細
pub fn normalize_shipment_for_rate(details: &Value) -> Value {
    let mut out = Map::new();

    out.insert("Dimensions".to_string(), present_or_null(details.get("Dimensions")));
    copy_if_present(details, &mut out, "ActualWeight");
    out.insert(
        "ChargeableWeight".to_string(),
        present_or_null(details.get("ChargeableWeight")),
    );
    out.insert(
        "DescriptionOfGoods".to_string(),
        text_or_empty(details.get("DescriptionOfGoods")),
    );
    out.insert(
        "GoodsOriginCountry".to_string(),
        text_or_empty(details.get("GoodsOriginCountry")),
    );
    copy_if_present(details, &mut out, "NumberOfPieces");
    copy_if_present(details, &mut out, "ProductGroup");
    for key in RATE_LEADING_OPTIONAL {
        out.insert(key.to_string(), present_or_null(details.get(key)));
    }

    for key in RATE_TRAILING {
        if let Some(value) = details.get(key).filter(|v| is_supplied(v)) {
            out.insert(key.to_string(), value.clone());
        }
    }

    Value::Object(out)
}

fn lookup<'a>(value: &'a Value, key: &str, aliases: &[&str]) -> Option<&'a Value> {
    value
        .get(key)
        .or_else(|| aliases.iter().find_map(|alias| value.get(*alias)))
}

fn copy_if_present(from: &Value, to: &mut Map<String, Value>, key: &str) {
    if let Some(value) = from.get(key) {
        to.insert(key.to_string(), value.clone());
    }
}

fn is_supplied(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

fn present_or_null(value: Option<&Value>) -> Value {
    match value {
        Some(v) if is_supplied(v) => v.clone(),
        _ => Value::Null,
    }
}

fn text_or_empty(value: Option<&Value>) -> Value {
    match value {
        Some(v) if is_supplied(v) => v.clone(),
        _ => Value::String(String::new()),
    }
}
