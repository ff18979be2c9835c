use serde::{Deserialize, Serialize};

/// 催收流程（舊稱 ageing）的單一階段。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AgeingStep {
    pub entity_id: i32,
    pub status_str: String,
    /// 逾期幾天後進入這個階段
    pub days: i32,
    pub payment_retry: bool,
    pub send_notification: bool,
    pub suspended: bool,
    pub welcome_message: String,
    pub failed_login_message: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProcessStatus {
    pub process_id: Option<i32>,
    pub state: String,
}
