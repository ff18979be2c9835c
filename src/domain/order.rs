use crate::domain::common::{Company, InternationalDescription};
use crate::domain::metafield::MetaFieldValue;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 訂單。id 為 0 表示尚未存入遠端系統。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Order {
    pub id: i32,
    pub user_id: i32,
    /// 計費方式：預付或後付
    pub billing_type_id: i32,
    pub prorate_flag: bool,
    /// order period 的 id
    pub period: i32,
    pub currency_id: i32,
    pub active_since: Option<NaiveDate>,
    pub active_until: Option<NaiveDate>,
    pub next_billable_day: Option<NaiveDate>,
    pub order_lines: Vec<OrderLine>,
}

/// 訂單明細。id 為 0 表示尚未存入遠端系統；`deleted` 非零表示要移除。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderLine {
    pub id: i32,
    pub type_id: i32,
    pub item_id: i32,
    pub description: String,
    pub quantity: Decimal,
    pub price: Decimal,
    pub amount: Decimal,
    /// true 時以產品本身的定價計費，false 時採用 `price` 欄位
    pub use_item: bool,
    pub deleted: i32,
    pub asset_ids: Vec<i32>,
    pub order_id: Option<i32>,
    /// 已存在之上層明細的 id；未存檔的上層明細改以 OrderGraph 的邊表示
    pub parent_line_id: Option<i32>,
    pub percentage: bool,
    pub meta_fields: Vec<MetaFieldValue>,
}

/// 訂單異動，由訂單明細推導而來。
///
/// `change_key` 是同一批異動內的流水鍵；`parent_change_key` 指向同批中
/// 上層明細的異動，`parent_order_line_id` 則指向已存檔的上層明細。
/// 兩者最多只會有一個被設定。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderChange {
    pub change_key: u32,
    pub order_change_type_id: i32,
    pub user_assigned_status_id: i32,
    pub start_date: Option<NaiveDate>,
    pub application_date: Option<NaiveDate>,
    pub order_id: Option<i32>,
    pub order_line_id: Option<i32>,
    pub use_item: Option<i32>,
    pub parent_order_line_id: Option<i32>,
    pub parent_change_key: Option<u32>,
    pub description: String,
    pub item_id: Option<i32>,
    pub asset_ids: Vec<i32>,
    pub price: Decimal,
    pub quantity: Decimal,
    /// 非零表示這筆異動會移除明細
    pub removal: i32,
    pub next_billable_date: Option<NaiveDate>,
    pub percentage: bool,
    pub meta_fields: Vec<MetaFieldValue>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplyToOrder {
    #[default]
    #[serde(rename = "NO")]
    No,
    #[serde(rename = "YES")]
    Yes,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatusFlag {
    #[default]
    #[serde(rename = "INVOICE")]
    Invoice,
    #[serde(rename = "NOT_INVOICE")]
    NotInvoice,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderPeriod {
    pub id: i32,
    pub entity_id: i32,
    pub period_unit_id: i32,
    pub value: i32,
    pub descriptions: Vec<InternationalDescription>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderStatus {
    pub id: i32,
    pub entity: Option<Company>,
    pub order_status_flag: Option<OrderStatusFlag>,
    pub description: String,
    pub descriptions: Vec<InternationalDescription>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderChangeType {
    pub id: i32,
    pub name: String,
    pub entity_id: i32,
    pub default_type: bool,
    pub allow_order_status_change: bool,
    pub item_types: Vec<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderChangeStatus {
    pub id: i32,
    pub entity_id: i32,
    pub apply_to_order: ApplyToOrder,
    pub deleted: i32,
    /// 在訂單畫面上顯示的順序
    pub order: i32,
    pub descriptions: Vec<InternationalDescription>,
}

impl OrderChangeStatus {
    pub fn add_description(&mut self, description: InternationalDescription) {
        self.descriptions.push(description);
    }
}
