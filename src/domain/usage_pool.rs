use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationMediumType {
    #[default]
    #[serde(rename = "EMAIL")]
    Email,
    #[serde(rename = "SMS")]
    Sms,
    #[serde(rename = "PDF")]
    Pdf,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UsagePoolResetValue {
    #[default]
    #[serde(rename = "ZERO")]
    Zero,
    #[serde(rename = "INITIAL_VALUE")]
    InitialValue,
}

/// 免費用量池
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UsagePool {
    pub id: i32,
    pub name: String,
    /// 週期開始時可用的免費用量
    pub quantity: Decimal,
    pub cycle_period_unit: String,
    pub cycle_period_value: i32,
    pub item_types: Vec<i32>,
    pub items: Vec<i32>,
    pub entity_id: i32,
    pub usage_pool_reset_value: UsagePoolResetValue,
    pub consumption_actions: Vec<UsagePoolConsumptionAction>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UsagePoolConsumptionAction {
    #[serde(rename = "type")]
    pub action_type: String,
    pub medium_type: NotificationMediumType,
    pub notification_id: Option<String>,
    /// 用量達到此百分比時觸發
    pub percentage: Decimal,
    pub product_id: Option<i32>,
}

/// 客戶與用量池的關聯，建立含用量池項目的訂單時由遠端系統產生。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomerUsagePool {
    pub id: i32,
    pub usage_pool_id: i32,
    pub customer_id: i32,
}
