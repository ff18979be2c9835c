use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PreferenceType {
    pub id: i32,
}

impl PreferenceType {
    pub fn new(id: i32) -> Self {
        Self { id }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preference {
    pub preference_type: PreferenceType,
    pub value: String,
}

impl Preference {
    pub fn new(preference_type: PreferenceType, value: impl Into<String>) -> Self {
        Self {
            preference_type,
            value: value.into(),
        }
    }
}
