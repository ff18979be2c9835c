use crate::domain::asset::AssetStatus;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// 定價模型：策略名稱、費率、幣別與額外屬性。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PriceModel {
    #[serde(rename = "type")]
    pub strategy: String,
    pub rate: Decimal,
    pub currency_id: i32,
    pub attributes: HashMap<String, String>,
}

pub const PRICE_ZERO: &str = "ZERO";
pub const PRICE_FLAT: &str = "FLAT";
pub const PRICE_GRADUATED: &str = "GRADUATED";

impl PriceModel {
    pub fn new(strategy: impl Into<String>, rate: Decimal, currency_id: i32) -> Self {
        Self {
            strategy: strategy.into(),
            rate,
            currency_id,
            attributes: HashMap::new(),
        }
    }

    pub fn add_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }
}

/// 生效日 → 定價模型
pub type DatedPrices = BTreeMap<NaiveDate, PriceModel>;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemCategory {
    pub id: i32,
    pub description: String,
    pub entity_id: i32,
    pub entities: Vec<i32>,
    pub global: bool,
    pub order_line_type_id: i32,
    pub one_per_order: bool,
    pub one_per_customer: bool,
    pub allow_asset_management: i32,
    pub asset_statuses: Vec<AssetStatus>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Item {
    pub id: i32,
    /// 產品代碼，必須唯一
    pub number: String,
    pub description: String,
    pub types: Vec<i32>,
    pub excluded_types: Vec<i32>,
    pub active_since: Option<NaiveDate>,
    pub active_until: Option<NaiveDate>,
    pub entity_id: i32,
    pub entities: Vec<i32>,
    pub global: bool,
    pub deleted: i32,
    pub asset_management_enabled: i32,
    pub default_prices: DatedPrices,
}
