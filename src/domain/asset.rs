use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssetStatus {
    pub id: i32,
    pub description: String,
    pub is_available: i32,
    pub is_default: i32,
    pub is_order_saved: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Asset {
    pub id: i32,
    pub entity_id: i32,
    pub entities: Vec<i32>,
    pub item_id: i32,
    pub global: bool,
    pub identifier: String,
    pub asset_status_id: i32,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssetAssignment {
    pub id: i32,
    pub asset_id: i32,
    pub order_line_id: Option<i32>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// 資產狀態轉換的歷史紀錄
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssetTransition {
    pub id: i32,
    pub asset_id: i32,
    pub previous_status_id: Option<i32>,
    pub new_status_id: i32,
    pub transition_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssetSearchResult {
    pub assets: Vec<Asset>,
    pub total: i32,
}
