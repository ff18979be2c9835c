use crate::api::client::BillingClient;
use crate::domain::collections::{AgeingStep, ProcessStatus};
use crate::domain::payment::{Payment, PaymentMethodTemplate, PaymentMethodType};
use crate::utils::error::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::json;

impl BillingClient {
    pub async fn create_payment_method_type(
        &self,
        method_type: &PaymentMethodType,
    ) -> Result<i32> {
        self.call(
            "createPaymentMethodType",
            json!({ "paymentMethodType": method_type }),
        )
        .await
    }

    pub async fn get_payment_method_type(&self, method_type_id: i32) -> Result<PaymentMethodType> {
        self.call(
            "getPaymentMethodType",
            json!({ "paymentMethodTypeId": method_type_id }),
        )
        .await
    }

    pub async fn update_payment_method_type(
        &self,
        method_type: &PaymentMethodType,
    ) -> Result<()> {
        self.call_void(
            "updatePaymentMethodType",
            json!({ "paymentMethodType": method_type }),
        )
        .await
    }

    pub async fn delete_payment_method_type(&self, method_type_id: i32) -> Result<()> {
        self.call_void(
            "deletePaymentMethodType",
            json!({ "paymentMethodTypeId": method_type_id }),
        )
        .await
    }

    pub async fn get_payment_method_template(
        &self,
        method_id: i32,
    ) -> Result<PaymentMethodTemplate> {
        self.call("getPaymentMethodTemplate", json!({ "methodId": method_id }))
            .await
    }

    pub async fn create_payment(&self, payment: &Payment) -> Result<i32> {
        self.call("createPayment", json!({ "payment": payment }))
            .await
    }

    pub async fn get_payment(&self, payment_id: i32) -> Result<Payment> {
        self.call("getPayment", json!({ "paymentId": payment_id }))
            .await
    }

    pub async fn update_payment(&self, payment: &Payment) -> Result<()> {
        self.call_void("updatePayment", json!({ "payment": payment }))
            .await
    }

    pub async fn delete_payment(&self, payment_id: i32) -> Result<()> {
        self.call_void("deletePayment", json!({ "paymentId": payment_id }))
            .await
    }

    pub async fn get_payments_by_date(
        &self,
        user_id: i32,
        since: NaiveDate,
        until: NaiveDate,
    ) -> Result<Vec<i32>> {
        self.call(
            "getPaymentsByDate",
            json!({ "userId": user_id, "since": since, "until": until }),
        )
        .await
    }

    pub async fn get_latest_payment(&self, user_id: i32) -> Result<Payment> {
        self.call("getLatestPayment", json!({ "userId": user_id }))
            .await
    }

    pub async fn get_last_payments(&self, user_id: i32, number: i32) -> Result<Vec<i32>> {
        self.call(
            "getLastPayments",
            json!({ "userId": user_id, "number": number }),
        )
        .await
    }

    pub async fn get_last_payments_page(
        &self,
        user_id: i32,
        limit: i32,
        offset: i32,
    ) -> Result<Vec<i32>> {
        self.call(
            "getLastPaymentsPage",
            json!({ "userId": user_id, "limit": limit, "offset": offset }),
        )
        .await
    }

    /// 把一筆付款沖銷到一張發票上
    pub async fn create_payment_link(&self, invoice_id: i32, payment_id: i32) -> Result<()> {
        self.call_void(
            "createPaymentLink",
            json!({ "invoiceId": invoice_id, "paymentId": payment_id }),
        )
        .await
    }

    pub async fn remove_payment_link(&self, invoice_id: i32, payment_id: i32) -> Result<()> {
        self.call_void(
            "removePaymentLink",
            json!({ "invoiceId": invoice_id, "paymentId": payment_id }),
        )
        .await
    }

    pub async fn remove_all_payment_links(&self, payment_id: i32) -> Result<()> {
        self.call_void("removeAllPaymentLinks", json!({ "paymentId": payment_id }))
            .await
    }

    pub async fn get_total_revenue_by_user(&self, user_id: i32) -> Result<Decimal> {
        self.call("getTotalRevenueByUser", json!({ "userId": user_id }))
            .await
    }

    pub async fn save_ageing_configuration(
        &self,
        steps: &[AgeingStep],
        language_id: i32,
    ) -> Result<()> {
        self.call_void(
            "saveAgeingConfiguration",
            json!({ "steps": steps, "languageId": language_id }),
        )
        .await
    }

    pub async fn get_ageing_configuration(&self, language_id: i32) -> Result<Vec<AgeingStep>> {
        self.call("getAgeingConfiguration", json!({ "languageId": language_id }))
            .await
    }

    /// 觸發催收流程
    pub async fn trigger_ageing(&self, run_date: NaiveDate) -> Result<()> {
        self.call_void("triggerAgeing", json!({ "runDate": run_date }))
            .await
    }

    pub async fn is_ageing_process_running(&self) -> Result<bool> {
        self.call("isAgeingProcessRunning", json!({})).await
    }

    /// 流程未執行時回傳最近一次執行的狀態
    pub async fn get_ageing_process_status(&self) -> Result<ProcessStatus> {
        self.call("getAgeingProcessStatus", json!({})).await
    }
}
