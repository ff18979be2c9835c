//! 範例章節。每一章是一段線性的流程：建好請求物件、呼叫遠端計費 API、
//! 把回傳的 id 串進下一個呼叫，並把結果記到日誌。

pub mod account_types;
pub mod assets;
pub mod commissions;
pub mod currencies;
pub mod customers;
pub mod discounts;
pub mod invoices;
pub mod meta_fields;
pub mod order_config;
pub mod payments;
pub mod plans;
pub mod plugins;
pub mod preferences;
pub mod products;
pub mod purchase_orders;
pub mod usage_pools;

use chrono::NaiveDate;
use std::time::{SystemTime, UNIX_EPOCH};

/// 產生不重複的範例名稱，例如 `sampleProduct_1722850000000`。
pub fn sample_name(prefix: &str) -> String {
    format!("{}_{}", prefix, unique_suffix())
}

fn unique_suffix() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default()
}

/// 範例裡使用的固定日期都是合法的年月日
pub(crate) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("literal date")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_name_carries_prefix() {
        let name = sample_name("sampleProduct");
        assert!(name.starts_with("sampleProduct_"));
        assert!(name.len() > "sampleProduct_".len());
    }
}
