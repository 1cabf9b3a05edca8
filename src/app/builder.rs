//! 由簡化資料組出完整的 `Shipment`，選填欄位一律補齊。

use crate::domain::model::{
    Address, Contact, DimensionUnit, Dimensions, Money, Party, PaymentOption, PaymentType,
    ProductGroup, ProductType, Weight,
};
use crate::domain::shipping::{Shipment, ShipmentDetails};
use chrono::{SecondsFormat, Utc};

pub const DEFAULT_COD_CURRENCY: &str = "BHD";
pub const DOMESTIC_COUNTRY: &str = "BH";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimpleAddress {
    pub line1: String,
    pub line2: Option<String>,
    pub city: String,
    pub country: String,
    pub postcode: Option<String>,
    pub state: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimpleContact {
    pub name: String,
    pub company: Option<String>,
    pub phone: String,
    pub mobile: Option<String>,
    pub email: Option<String>,
}

/// 公分
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimpleDimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimpleShipmentData {
    pub reference: String,
    pub shipper_address: SimpleAddress,
    pub shipper_contact: SimpleContact,
    pub shipper_account_number: String,
    pub consignee_address: SimpleAddress,
    pub consignee_contact: SimpleContact,
    /// 公斤
    pub weight: f64,
    pub number_of_pieces: Option<u32>,
    pub description: String,
    pub dimensions: Option<SimpleDimensions>,
    /// 未指定時視為國內件
    pub is_domestic: Option<bool>,
    pub cod_amount: Option<f64>,
    pub currency: Option<String>,
}

/// 巴林國內件的精簡參數
#[derive(Debug, Clone, PartialEq)]
pub struct DomesticShipmentParams {
    pub reference: String,
    pub account_number: String,
    pub from_name: String,
    pub from_company: Option<String>,
    pub from_address: String,
    pub from_city: String,
    pub from_phone: String,
    pub from_email: Option<String>,
    pub to_name: String,
    pub to_company: Option<String>,
    pub to_address: String,
    pub to_city: String,
    pub to_phone: String,
    pub to_email: Option<String>,
    pub weight: f64,
    pub description: String,
    pub cod_amount: Option<f64>,
}

#[derive(Debug, Clone, Copy)]
enum ContactRole {
    Supplier,
    Recipient,
}

impl ContactRole {
    fn as_str(&self) -> &'static str {
        match self {
            ContactRole::Supplier => "Supplier",
            ContactRole::Recipient => "Recipient",
        }
    }
}

fn build_contact(simple: &SimpleContact, role: ContactRole) -> Contact {
    let blank = || Some(String::new());
    Contact {
        department: blank(),
        person_name: simple.name.clone(),
        title: blank(),
        company_name: simple.company.clone().unwrap_or_else(|| simple.name.clone()),
        phone_number1: simple.phone.clone(),
        phone_number1_ext: blank(),
        // 即使為空也必須送出
        phone_number2: blank(),
        phone_number2_ext: blank(),
        fax_number: blank(),
        cell_phone: simple.mobile.clone().unwrap_or_else(|| simple.phone.clone()),
        email_address: simple.email.clone().unwrap_or_default(),
        r#type: Some(role.as_str().to_string()),
    }
}

fn build_address(simple: &SimpleAddress) -> Address {
    Address {
        line1: simple.line1.clone(),
        line2: Some(simple.line2.clone().unwrap_or_default()),
        line3: Some(String::new()),
        city: Some(simple.city.clone()),
        state_or_province_code: Some(simple.state.clone().unwrap_or_default()),
        post_code: Some(simple.postcode.clone().unwrap_or_default()),
        country_code: simple.country.clone(),
        longitude: None,
        latitude: None,
    }
}

fn build_party(
    account_number: &str,
    address: &SimpleAddress,
    contact: &SimpleContact,
    role: ContactRole,
) -> Party {
    Party {
        reference1: Some(String::new()),
        reference2: Some(String::new()),
        account_number: Some(account_number.to_string()),
        party_address: build_address(address),
        contact: build_contact(contact, role),
    }
}

pub fn build_shipment(data: SimpleShipmentData) -> Shipment {
    let is_domestic = data.is_domestic.unwrap_or(true);
    let (product_group, product_type) = if is_domestic {
        (ProductGroup::Domestic, ProductType::Ond)
    } else {
        (ProductGroup::Express, ProductType::Ppx)
    };

    let dimensions = data.dimensions.unwrap_or(SimpleDimensions {
        length: 0.0,
        width: 0.0,
        height: 0.0,
    });

    // 0 視同未指定
    let cash_on_delivery_amount = data
        .cod_amount
        .filter(|amount| *amount != 0.0)
        .map(|amount| {
            Money::new(
                data.currency
                    .clone()
                    .unwrap_or_else(|| DEFAULT_COD_CURRENCY.to_string()),
                amount,
            )
        });

    Shipment {
        reference1: Some(data.reference.clone()),
        reference2: Some(String::new()),
        reference3: Some(String::new()),
        shipper: build_party(
            &data.shipper_account_number,
            &data.shipper_address,
            &data.shipper_contact,
            ContactRole::Supplier,
        ),
        consignee: build_party(
            "",
            &data.consignee_address,
            &data.consignee_contact,
            ContactRole::Recipient,
        ),
        third_party: None,
        shipping_date_time: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        due_date: None,
        comments: None,
        pickup_location: None,
        operations_instructions: None,
        accounting_instructions: None,
        details: ShipmentDetails {
            dimensions: Some(Dimensions {
                length: dimensions.length,
                width: dimensions.width,
                height: dimensions.height,
                unit: DimensionUnit::Cm,
            }),
            actual_weight: Weight::kg(data.weight),
            chargeable_weight: Some(Weight::kg(data.weight)),
            description_of_goods: data.description,
            goods_origin_country: data.shipper_address.country.clone(),
            number_of_pieces: data.number_of_pieces.filter(|n| *n > 0).unwrap_or(1),
            product_group,
            product_type,
            payment_type: PaymentType::Prepaid,
            payment_options: Some(PaymentOption::Cash),
            services: None,
            items: None,
            customs_value_amount: None,
            cash_on_delivery_amount,
            insurance_amount: None,
            cash_additional_amount: None,
            cash_additional_amount_description: None,
            collect_amount: None,
        },
        attachments: None,
        foreign_hawb: None,
        transport_type: None,
        pickup_guid: None,
        number: None,
    }
}

/// 寄件與收件地都在巴林
pub fn build_domestic_shipment(params: DomesticShipmentParams) -> Shipment {
    build_shipment(SimpleShipmentData {
        reference: params.reference,
        shipper_address: SimpleAddress {
            line1: params.from_address,
            city: params.from_city,
            country: DOMESTIC_COUNTRY.to_string(),
            ..Default::default()
        },
        shipper_contact: SimpleContact {
            name: params.from_name,
            company: params.from_company,
            phone: params.from_phone,
            mobile: None,
            email: params.from_email,
        },
        shipper_account_number: params.account_number,
        consignee_address: SimpleAddress {
            line1: params.to_address,
            city: params.to_city,
            country: DOMESTIC_COUNTRY.to_string(),
            ..Default::default()
        },
        consignee_contact: SimpleContact {
            name: params.to_name,
            company: params.to_company,
            phone: params.to_phone,
            mobile: None,
            email: params.to_email,
        },
        weight: params.weight,
        number_of_pieces: None,
        description: params.description,
        dimensions: None,
        is_domestic: Some(true),
        cod_amount: params.cod_amount,
        currency: None,
    })
}
