use crate::api::client::BillingClient;
use crate::domain::usage_pool::{CustomerUsagePool, UsagePool};
use crate::utils::error::Result;
use serde_json::json;

impl BillingClient {
    pub async fn create_usage_pool(&self, usage_pool: &UsagePool) -> Result<i32> {
        self.call("createUsagePool", json!({ "usagePool": usage_pool }))
            .await
    }

    pub async fn get_usage_pool(&self, usage_pool_id: i32) -> Result<UsagePool> {
        self.call("getUsagePoolWS", json!({ "usagePoolId": usage_pool_id }))
            .await
    }

    pub async fn update_usage_pool(&self, usage_pool: &UsagePool) -> Result<()> {
        self.call_void("updateUsagePool", json!({ "usagePool": usage_pool }))
            .await
    }

    pub async fn delete_usage_pool(&self, usage_pool_id: i32) -> Result<()> {
        self.call_void("deleteUsagePool", json!({ "usagePoolId": usage_pool_id }))
            .await
    }

    pub async fn get_all_usage_pools(&self) -> Result<Vec<UsagePool>> {
        self.call("getAllUsagePools", json!({})).await
    }

    pub async fn get_usage_pools_by_plan_id(&self, plan_id: i32) -> Result<Vec<UsagePool>> {
        self.call("getUsagePoolsByPlanId", json!({ "planId": plan_id }))
            .await
    }

    pub async fn get_customer_usage_pools_by_customer_id(
        &self,
        customer_id: i32,
    ) -> Result<Vec<CustomerUsagePool>> {
        self.call(
            "getCustomerUsagePoolsByCustomerId",
            json!({ "customerId": customer_id }),
        )
        .await
    }

    pub async fn get_customer_usage_pool_by_id(
        &self,
        customer_usage_pool_id: i32,
    ) -> Result<CustomerUsagePool> {
        self.call(
            "getCustomerUsagePoolById",
            json!({ "customerUsagePoolId": customer_usage_pool_id }),
        )
        .await
    }
}
