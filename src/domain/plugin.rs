use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Plugin {
    pub id: i32,
    pub type_id: i32,
    pub processing_order: i32,
    pub owning_entity_id: i32,
    pub notes: Option<String>,
    pub parameters: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PluginType {
    pub id: i32,
    pub class_name: Option<String>,
    pub category_id: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PluginTypeCategory {
    pub id: i32,
    pub interface_name: Option<String>,
}
