use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    #[serde(rename = "ASC")]
    Asc,
    #[serde(rename = "DESC")]
    Desc,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterConstraint {
    #[default]
    #[serde(rename = "EQ")]
    Eq,
    #[serde(rename = "LIKE")]
    Like,
    #[serde(rename = "GT")]
    Gt,
    #[serde(rename = "LT")]
    Lt,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BasicFilter {
    pub field: String,
    pub constraint: FilterConstraint,
    pub value: serde_json::Value,
}

impl BasicFilter {
    pub fn new(field: impl Into<String>, constraint: FilterConstraint, value: serde_json::Value) -> Self {
        Self {
            field: field.into(),
            constraint,
            value,
        }
    }
}

/// 搜尋條件，支援分頁與排序
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchCriteria {
    pub offset: i32,
    pub max: i32,
    pub sort: String,
    pub direction: SortDirection,
    pub filters: Vec<BasicFilter>,
}
