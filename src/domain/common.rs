use serde::{Deserialize, Serialize};

/// 多語系描述
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InternationalDescription {
    pub language_id: i32,
    pub content: String,
}

impl InternationalDescription {
    pub fn new(language_id: i32, content: impl Into<String>) -> Self {
        Self {
            language_id,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Company {
    pub id: i32,
    pub description: Option<String>,
}
