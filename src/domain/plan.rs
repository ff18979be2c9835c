use crate::domain::item::{DatedPrices, PriceModel};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Plan {
    pub id: i32,
    /// 訂閱項目的 id
    pub item_id: i32,
    /// 既有 order period 的 id（不是 period unit id）
    pub period_id: i32,
    pub description: String,
    pub plan_items: Vec<PlanItem>,
    pub usage_pool_ids: Vec<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlanItem {
    pub id: i32,
    pub item_id: i32,
    pub model: Option<PriceModel>,
    pub models: DatedPrices,
    pub bundle: Option<PlanItemBundle>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlanItemBundle {
    pub period_id: i32,
    pub quantity: Decimal,
}
