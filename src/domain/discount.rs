use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiscountStrategyType {
    #[default]
    #[serde(rename = "ONE_TIME_AMOUNT")]
    OneTimeAmount,
    #[serde(rename = "ONE_TIME_PERCENTAGE")]
    OneTimePercentage,
    #[serde(rename = "RECURRING_PERIOD_BASED")]
    RecurringPeriodBased,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Discount {
    pub id: i32,
    pub entity_id: i32,
    /// 折扣代碼，必須唯一
    pub code: String,
    pub description: String,
    #[serde(rename = "type")]
    pub strategy: DiscountStrategyType,
    pub rate: Decimal,
}
