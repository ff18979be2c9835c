use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    pub user_id: i32,
    pub user_name: String,
    pub entity_id: i32,
    pub language_id: i32,
    pub currency_id: i32,
    pub main_role_id: i32,
    pub status_id: i32,
    pub account_type_id: i32,
    pub customer_id: Option<i32>,
    pub contact: Option<Contact>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Contact {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub city: Option<String>,
}

/// 客戶代碼，識別碼格式為使用者名稱加上五位數字。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserCode {
    pub id: i32,
    pub user_id: i32,
    pub valid_from: Option<NaiveDate>,
    pub valid_to: Option<NaiveDate>,
    pub identifier: String,
}
