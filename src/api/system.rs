use crate::api::client::BillingClient;
use crate::domain::common::Company;
use crate::utils::error::Result;
use serde_json::json;

impl BillingClient {
    /// 呼叫者所屬公司的 id
    pub async fn get_caller_company_id(&self) -> Result<i32> {
        self.call("getCallerCompanyId", json!({})).await
    }

    pub async fn get_caller_currency_id(&self) -> Result<i32> {
        self.call("getCallerCurrencyId", json!({})).await
    }

    pub async fn get_company(&self) -> Result<Company> {
        self.call("getCompany", json!({})).await
    }
}
