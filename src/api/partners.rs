use crate::api::client::BillingClient;
use crate::domain::partner::{Commission, CommissionProcessConfiguration, CommissionRun, Partner};
use crate::domain::user::User;
use crate::utils::error::Result;
use serde_json::json;

impl BillingClient {
    pub async fn create_partner(&self, user: &User, partner: &Partner) -> Result<i32> {
        self.call("createPartner", json!({ "user": user, "partner": partner }))
            .await
    }

    pub async fn get_partner(&self, partner_id: i32) -> Result<Partner> {
        self.call("getPartner", json!({ "partnerId": partner_id }))
            .await
    }

    pub async fn update_partner(&self, user: &User, partner: &Partner) -> Result<()> {
        self.call_void("updatePartner", json!({ "user": user, "partner": partner }))
            .await
    }

    pub async fn delete_partner(&self, partner_id: i32) -> Result<()> {
        self.call_void("deletePartner", json!({ "partnerId": partner_id }))
            .await
    }

    pub async fn create_update_commission_process_configuration(
        &self,
        configuration: &CommissionProcessConfiguration,
    ) -> Result<()> {
        self.call_void(
            "createUpdateCommissionProcessConfiguration",
            json!({ "configuration": configuration }),
        )
        .await
    }

    /// 觸發佣金計算流程
    pub async fn calculate_partner_commissions(&self) -> Result<()> {
        self.call_void("calculatePartnerCommissions", json!({}))
            .await
    }

    pub async fn get_all_commission_runs(&self) -> Result<Vec<CommissionRun>> {
        self.call("getAllCommissionRuns", json!({})).await
    }

    pub async fn get_commissions_by_process_run_id(&self, run_id: i32) -> Result<Vec<Commission>> {
        self.call(
            "getCommissionsByProcessRunId",
            json!({ "processRunId": run_id }),
        )
        .await
    }

    pub async fn is_partner_commission_running(&self) -> Result<bool> {
        self.call("isPartnerCommissionRunning", json!({})).await
    }
}
