use crate::domain::common::InternationalDescription;
use crate::domain::metafield::{EntityType, MetaField};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 帳戶類型的計費週期設定：週期單位與下一個發票日。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MainSubscription {
    pub period_unit_id: i32,
    pub next_invoice_day_of_period: i32,
}

impl MainSubscription {
    pub fn new(period_unit_id: i32, next_invoice_day_of_period: i32) -> Self {
        Self {
            period_unit_id,
            next_invoice_day_of_period,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccountType {
    pub id: i32,
    pub names: Vec<InternationalDescription>,
    pub entity_id: i32,
    pub main_subscription: Option<MainSubscription>,
    pub credit_limit: Option<Decimal>,
    pub currency_id: i32,
    pub language_id: i32,
    pub credit_notification_limit1: Option<Decimal>,
    pub credit_notification_limit2: Option<Decimal>,
    pub invoice_delivery_method_id: i32,
}

impl AccountType {
    /// 設定指定語言的名稱，已存在時覆寫。
    pub fn set_name(&mut self, name: impl Into<String>, language_id: i32) {
        let name = name.into();
        match self.names.iter_mut().find(|n| n.language_id == language_id) {
            Some(existing) => existing.content = name,
            None => self
                .names
                .push(InternationalDescription::new(language_id, name)),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccountInformationType {
    pub id: i32,
    pub account_type_id: i32,
    pub name: String,
    pub entity_type: EntityType,
    pub entity_id: i32,
    pub display_order: i32,
    pub meta_fields: Vec<MetaField>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::constants;

    #[test]
    fn test_set_name_overwrites_same_language() {
        let mut account_type = AccountType::default();
        account_type.set_name("first", constants::LANGUAGE_ENGLISH_ID);
        account_type.set_name("second", constants::LANGUAGE_ENGLISH_ID);

        assert_eq!(account_type.names.len(), 1);
        assert_eq!(account_type.names[0].content, "second");
    }
}
