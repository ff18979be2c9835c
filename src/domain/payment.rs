use crate::domain::metafield::{MetaField, MetaFieldValue};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Payment {
    pub id: i32,
    pub amount: Decimal,
    /// 退款時設為 1
    pub is_refund: i32,
    pub method_id: i32,
    pub payment_date: Option<NaiveDate>,
    pub create_datetime: Option<NaiveDate>,
    pub result_id: i32,
    pub currency_id: i32,
    pub user_id: i32,
    pub payment_notes: String,
    pub payment_instruments: Vec<PaymentInformation>,
}

/// 付款工具（例如一張信用卡），內容放在動態欄位。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentInformation {
    pub payment_method_type_id: i32,
    pub payment_method_id: i32,
    pub processing_order: i32,
    pub meta_fields: Vec<MetaFieldValue>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentMethodType {
    pub id: i32,
    pub method_name: String,
    pub is_recurring: bool,
    pub template_id: i32,
    pub all_account_type: bool,
    pub account_types: Vec<i32>,
    pub meta_fields: Vec<MetaField>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentMethodTemplate {
    pub id: i32,
    pub template_name: Option<String>,
    pub meta_fields: Vec<MetaField>,
}
