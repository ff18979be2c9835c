use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Currency {
    pub id: i32,
    pub description: String,
    pub symbol: String,
    pub code: String,
    pub country_code: String,
    pub in_use: bool,
    /// 對主幣別的匯率
    pub rate: Option<Decimal>,
    pub sys_rate: Option<Decimal>,
    pub from_date: Option<NaiveDate>,
}
