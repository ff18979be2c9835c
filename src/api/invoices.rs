use crate::api::client::BillingClient;
use crate::domain::invoice::Invoice;
use crate::utils::error::Result;
use chrono::NaiveDate;
use serde_json::json;

impl BillingClient {
    /// 手動開立發票。`only_recurring` 為 true 時只在有週期性訂單時開立。
    pub async fn create_invoice(&self, user_id: i32, only_recurring: bool) -> Result<Vec<i32>> {
        self.call(
            "createInvoice",
            json!({ "userId": user_id, "onlyRecurring": only_recurring }),
        )
        .await
    }

    /// 由訂單開立發票；`invoice_id` 有值時把訂單併入既有發票。
    pub async fn create_invoice_from_order(
        &self,
        order_id: i32,
        invoice_id: Option<i32>,
    ) -> Result<i32> {
        self.call(
            "createInvoiceFromOrder",
            json!({ "orderId": order_id, "invoiceId": invoice_id }),
        )
        .await
    }

    pub async fn get_invoice(&self, invoice_id: i32) -> Result<Invoice> {
        self.call("getInvoiceWS", json!({ "invoiceId": invoice_id }))
            .await
    }

    pub async fn get_all_invoices(&self, user_id: i32) -> Result<Vec<i32>> {
        self.call("getAllInvoices", json!({ "userId": user_id }))
            .await
    }

    pub async fn get_all_invoices_for_user(&self, user_id: i32) -> Result<Vec<Invoice>> {
        self.call("getAllInvoicesForUser", json!({ "userId": user_id }))
            .await
    }

    pub async fn get_latest_invoice(&self, user_id: i32) -> Result<Invoice> {
        self.call("getLatestInvoice", json!({ "userId": user_id }))
            .await
    }

    pub async fn get_last_invoices(&self, user_id: i32, number: i32) -> Result<Vec<i32>> {
        self.call(
            "getLastInvoices",
            json!({ "userId": user_id, "number": number }),
        )
        .await
    }

    pub async fn get_latest_invoice_by_item_type(
        &self,
        user_id: i32,
        item_type_id: i32,
    ) -> Result<Invoice> {
        self.call(
            "getLatestInvoiceByItemType",
            json!({ "userId": user_id, "itemTypeId": item_type_id }),
        )
        .await
    }

    pub async fn get_last_invoices_by_item_type(
        &self,
        user_id: i32,
        item_type_id: i32,
        number: i32,
    ) -> Result<Vec<i32>> {
        self.call(
            "getLastInvoicesByItemType",
            json!({ "userId": user_id, "itemTypeId": item_type_id, "number": number }),
        )
        .await
    }

    pub async fn get_invoices_by_date(
        &self,
        since: NaiveDate,
        until: NaiveDate,
    ) -> Result<Vec<i32>> {
        self.call(
            "getInvoicesByDate",
            json!({ "since": since, "until": until }),
        )
        .await
    }

    pub async fn get_user_invoices_by_date(
        &self,
        user_id: i32,
        since: NaiveDate,
        until: NaiveDate,
    ) -> Result<Vec<i32>> {
        self.call(
            "getUserInvoicesByDate",
            json!({ "userId": user_id, "since": since, "until": until }),
        )
        .await
    }

    pub async fn get_user_invoices_page(
        &self,
        user_id: i32,
        limit: i32,
        offset: i32,
    ) -> Result<Vec<Invoice>> {
        self.call(
            "getUserInvoicesPage",
            json!({ "userId": user_id, "limit": limit, "offset": offset }),
        )
        .await
    }

    pub async fn get_unpaid_invoices(&self, user_id: i32) -> Result<Vec<i32>> {
        self.call("getUnpaidInvoices", json!({ "userId": user_id }))
            .await
    }

    /// 取得發票 PDF 的位元組
    pub async fn get_paper_invoice_pdf(&self, invoice_id: i32) -> Result<Vec<u8>> {
        self.call_bytes("getPaperInvoicePDF", json!({ "invoiceId": invoice_id }))
            .await
    }

    pub async fn delete_invoice(&self, invoice_id: i32) -> Result<()> {
        self.call_void("deleteInvoice", json!({ "invoiceId": invoice_id }))
            .await
    }
}
