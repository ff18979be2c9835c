use crate::api::BillingClient;
use crate::app::chapters::{account_types, customers, date, order_config, products, sample_name};
use crate::app::sequence::Chapter;
use crate::core::OrderGraph;
use crate::domain::constants;
use crate::domain::order::ApplyToOrder;
use crate::utils::error::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;

pub struct InvoicesChapter;

#[async_trait]
impl Chapter for InvoicesChapter {
    fn name(&self) -> &str {
        "invoices"
    }

    fn description(&self) -> &str {
        "Manual invoicing and the invoice search calls"
    }

    async fn run(&self, api: &BillingClient) -> Result<()> {
        run(api).await
    }
}

pub async fn run(api: &BillingClient) -> Result<()> {
    let company_id = api.get_caller_company_id().await?;

    let acc_type_id = api
        .create_account_type(&account_types::build_account_type(company_id))
        .await?;
    let user_id = api
        .create_user(&customers::build_user(
            acc_type_id,
            constants::CUSTOMER_ROLE_ID,
            company_id,
        ))
        .await?;

    let category_id = api
        .create_item_category(&products::build_item_category(company_id))
        .await?;
    let product_code = sample_name("sampleProduct");
    let item_id = api
        .create_item(&products::build_item(
            company_id,
            &product_code,
            category_id,
            0,
            products::with_flat_price(chrono::Utc::now().date_naive(), Decimal::from(10)),
        ))
        .await?;

    // 先開一張訂單
    let apply_status = order_config::build_order_change_status(company_id, ApplyToOrder::Yes, 1);
    let apply_status_id = api.create_order_change_status(&apply_status).await?;
    let order = super::purchase_orders::build_order(
        user_id,
        Some(date(2010, 2, 1)),
        None,
        constants::PERIOD_UNIT_MONTH,
        constants::ORDER_BILLING_POST_PAID,
        true,
        &[item_id],
    );
    let mut graph = OrderGraph::new();
    let node = graph.insert(order);
    let changes = graph.build_changes(node, apply_status_id)?;
    let order_id = api.create_order(graph.order(node)?, &changes).await?;

    // 不經過計費流程，手動開發票。
    // only_recurring 為 true 時，只有在存在週期性訂單時才開。
    let invoice_ids = api.create_invoice(user_id, false).await?;
    tracing::info!("Created {} invoices for user {}", invoice_ids.len(), user_id);

    // 由訂單開發票；第二個參數有值時會併入既有發票
    let invoice_id = api.create_invoice_from_order(order_id, None).await?;
    tracing::info!("Invoice from order: {}", invoice_id);

    let invoice = api.get_invoice(invoice_ids[0]).await?;
    tracing::info!("Created invoice: {:?}", invoice);

    // 各種發票查詢
    let invoice_ids = api.get_all_invoices(user_id).await?;
    let invoices = api.get_all_invoices_for_user(user_id).await?;
    tracing::info!(
        "User {} has {} invoice ids / {} invoices",
        user_id,
        invoice_ids.len(),
        invoices.len()
    );

    let latest_invoice = api.get_latest_invoice(user_id).await?;
    tracing::info!("Latest invoice: {}", latest_invoice.id);
    let _invoice_ids = api.get_last_invoices(user_id, 10).await?;

    // 最近的發票也能依產品分類過濾
    let _latest = api.get_latest_invoice_by_item_type(user_id, category_id).await?;
    let _invoice_ids = api
        .get_last_invoices_by_item_type(user_id, category_id, 10)
        .await?;

    // 日期區間查詢（全公司或單一客戶）
    let _ids = api
        .get_invoices_by_date(date(2010, 1, 1), date(2011, 1, 1))
        .await?;
    let _ids = api
        .get_user_invoices_by_date(user_id, date(2010, 1, 1), date(2011, 1, 1))
        .await?;

    // 分頁查詢
    let page = api.get_user_invoices_page(user_id, 20, 10).await?;
    tracing::info!("Invoice page holds {} invoices", page.len());

    let unpaid = api.get_unpaid_invoices(user_id).await?;
    tracing::info!("User {} has {} unpaid invoices", user_id, unpaid.len());

    // 產生發票 PDF
    let pdf_bytes = api.get_paper_invoice_pdf(invoice_ids[0]).await?;
    tracing::info!("Invoice PDF is {} bytes", pdf_bytes.len());

    api.delete_invoice(invoice_ids[0]).await?;

    Ok(())
}
