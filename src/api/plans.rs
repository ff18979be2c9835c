use crate::api::client::BillingClient;
use crate::domain::plan::{Plan, PlanItem};
use crate::utils::error::Result;
use chrono::NaiveDate;
use serde_json::json;

impl BillingClient {
    pub async fn create_plan(&self, plan: &Plan) -> Result<i32> {
        self.call("createPlan", json!({ "plan": plan })).await
    }

    pub async fn get_plan(&self, plan_id: i32) -> Result<Plan> {
        self.call("getPlanWS", json!({ "planId": plan_id })).await
    }

    pub async fn get_all_plans(&self) -> Result<Vec<Plan>> {
        self.call("getAllPlans", json!({})).await
    }

    /// 以訂閱項目反查方案
    pub async fn get_plans_by_subscription_item(&self, item_id: i32) -> Result<Vec<i32>> {
        self.call("getPlansBySubscriptionItem", json!({ "itemId": item_id }))
            .await
    }

    /// 以綁售項目反查方案
    pub async fn get_plans_by_affected_item(&self, item_id: i32) -> Result<Vec<i32>> {
        self.call("getPlansByAffectedItem", json!({ "itemId": item_id }))
            .await
    }

    pub async fn update_plan(&self, plan: &Plan) -> Result<()> {
        self.call_void("updatePlan", json!({ "plan": plan })).await
    }

    pub async fn delete_plan(&self, plan_id: i32) -> Result<()> {
        self.call_void("deletePlan", json!({ "planId": plan_id }))
            .await
    }

    pub async fn create_account_type_price(
        &self,
        account_type_id: i32,
        plan_item: &PlanItem,
        effective_from: NaiveDate,
    ) -> Result<()> {
        self.call_void(
            "createAccountTypePrice",
            json!({
                "accountTypeId": account_type_id,
                "planItem": plan_item,
                "effectiveFrom": effective_from,
            }),
        )
        .await
    }

    pub async fn create_customer_price(
        &self,
        user_id: i32,
        plan_item: &PlanItem,
        effective_from: NaiveDate,
    ) -> Result<()> {
        self.call_void(
            "createCustomerPrice",
            json!({
                "userId": user_id,
                "planItem": plan_item,
                "effectiveFrom": effective_from,
            }),
        )
        .await
    }

    pub async fn get_account_type_price(
        &self,
        account_type_id: i32,
        item_id: i32,
    ) -> Result<PlanItem> {
        self.call(
            "getAccountTypePrice",
            json!({ "accountTypeId": account_type_id, "itemId": item_id }),
        )
        .await
    }

    pub async fn get_customer_price(&self, user_id: i32, item_id: i32) -> Result<PlanItem> {
        self.call(
            "getCustomerPrice",
            json!({ "userId": user_id, "itemId": item_id }),
        )
        .await
    }

    pub async fn delete_account_type_price(
        &self,
        account_type_id: i32,
        item_id: i32,
    ) -> Result<()> {
        self.call_void(
            "deleteAccountTypePrice",
            json!({ "accountTypeId": account_type_id, "itemId": item_id }),
        )
        .await
    }

    pub async fn delete_customer_price(&self, user_id: i32, item_id: i32) -> Result<()> {
        self.call_void(
            "deleteCustomerPrice",
            json!({ "userId": user_id, "itemId": item_id }),
        )
        .await
    }
}
