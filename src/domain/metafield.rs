use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataType {
    #[default]
    #[serde(rename = "STRING")]
    String,
    #[serde(rename = "INTEGER")]
    Integer,
    #[serde(rename = "DECIMAL")]
    Decimal,
    #[serde(rename = "BOOLEAN")]
    Boolean,
    #[serde(rename = "DATE")]
    Date,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityType {
    #[default]
    #[serde(rename = "CUSTOMER")]
    Customer,
    #[serde(rename = "ACCOUNT_TYPE")]
    AccountType,
    #[serde(rename = "PRODUCT")]
    Product,
    #[serde(rename = "PAYMENT_METHOD_TYPE")]
    PaymentMethodType,
}

/// 動態欄位定義
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MetaField {
    pub id: i32,
    pub entity_id: i32,
    pub name: String,
    pub data_type: DataType,
    pub entity_type: EntityType,
    pub disabled: bool,
    pub mandatory: bool,
    pub display_order: i32,
    pub primary: bool,
    pub field_usage: Option<String>,
    pub filename: Option<String>,
    pub validation_rule: Option<MetaFieldValidationRule>,
    pub default_value: Option<MetaFieldValue>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MetaFieldValidationRule {
    pub id: i32,
    pub rule_type: Option<String>,
}

/// 動態欄位值
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MetaFieldValue {
    pub id: i32,
    pub field_name: String,
    pub disabled: bool,
    pub mandatory: bool,
    pub data_type: DataType,
    pub display_order: i32,
    pub value: serde_json::Value,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MetaFieldGroup {
    pub id: i32,
    pub entity_id: i32,
    pub name: String,
    pub entity_type: EntityType,
    pub display_order: i32,
    pub meta_fields: Vec<MetaField>,
}

/// 複製一個動態欄位定義，驗證規則的 id 會被歸零以便重新建立。
pub fn copy_meta_field(meta_field: &MetaField) -> MetaField {
    let mut copy = meta_field.clone();
    copy.id = 0;
    if let Some(rule) = copy.validation_rule.as_mut() {
        rule.id = 0;
    }
    if let Some(default_value) = copy.default_value.as_mut() {
        default_value.id = 0;
    }
    copy
}

/// 複製動態欄位值；`clear_id` 會將每個值的 id 歸零。
pub fn copy_meta_field_values(source: &[MetaFieldValue], clear_id: bool) -> Vec<MetaFieldValue> {
    let mut copied: Vec<MetaFieldValue> = source.to_vec();
    if clear_id {
        for value in copied.iter_mut() {
            value.id = 0;
        }
    }
    copied
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_value(id: i32) -> MetaFieldValue {
        MetaFieldValue {
            id,
            field_name: "Salary".to_string(),
            data_type: DataType::Integer,
            display_order: 1,
            value: serde_json::json!(100),
            ..Default::default()
        }
    }

    #[test]
    fn test_copy_meta_field_values_clears_ids() {
        let source = vec![sample_value(11), sample_value(12)];

        let copied = copy_meta_field_values(&source, true);

        assert_eq!(copied.len(), 2);
        assert!(copied.iter().all(|v| v.id == 0));
        assert_eq!(copied[0].field_name, "Salary");
        // 原始資料不受影響
        assert_eq!(source[0].id, 11);
    }

    #[test]
    fn test_copy_meta_field_values_keeps_ids_when_asked() {
        let source = vec![sample_value(7)];
        let copied = copy_meta_field_values(&source, false);
        assert_eq!(copied[0].id, 7);
    }

    #[test]
    fn test_copy_meta_field_resets_validation_rule_id() {
        let field = MetaField {
            id: 3,
            name: "Phone".to_string(),
            validation_rule: Some(MetaFieldValidationRule {
                id: 9,
                rule_type: Some("regex".to_string()),
            }),
            default_value: Some(sample_value(4)),
            ..Default::default()
        };

        let copy = copy_meta_field(&field);

        assert_eq!(copy.id, 0);
        assert_eq!(copy.validation_rule.as_ref().unwrap().id, 0);
        assert_eq!(copy.default_value.as_ref().unwrap().id, 0);
        assert_eq!(copy.name, "Phone");
    }

    #[test]
    fn test_entity_type_wire_format() {
        let json = serde_json::to_string(&EntityType::AccountType).unwrap();
        assert_eq!(json, "\"ACCOUNT_TYPE\"");
    }
}
