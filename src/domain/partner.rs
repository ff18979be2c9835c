use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PartnerType {
    #[default]
    #[serde(rename = "STANDARD")]
    Standard,
    #[serde(rename = "MASTER")]
    Master,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Partner {
    pub id: i32,
    pub user_id: i32,
    #[serde(rename = "type")]
    pub partner_type: PartnerType,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommissionProcessConfiguration {
    pub entity_id: i32,
    pub next_run_date: Option<NaiveDate>,
    pub period_unit_id: i32,
    pub period_value: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommissionRun {
    pub id: i32,
    pub run_date: Option<NaiveDate>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Commission {
    pub id: i32,
    pub partner_id: i32,
    pub amount: Option<Decimal>,
}
