use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Invoice {
    pub id: i32,
    pub user_id: i32,
    pub number: Option<String>,
    pub total: Option<Decimal>,
    pub balance: Option<Decimal>,
    pub due_date: Option<NaiveDate>,
    pub status_id: Option<i32>,
}
