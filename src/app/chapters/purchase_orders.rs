use crate::api::BillingClient;
use crate::app::chapters::{account_types, customers, date, order_config, products, sample_name};
use crate::app::sequence::Chapter;
use crate::core::{change_from_line, OrderGraph};
use crate::domain::constants;
use crate::domain::order::{ApplyToOrder, Order, OrderLine};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

pub struct PurchaseOrdersChapter;

#[async_trait]
impl Chapter for PurchaseOrdersChapter {
    fn name(&self) -> &str {
        "purchase-orders"
    }

    fn description(&self) -> &str {
        "Orders, order lines and order change derivation"
    }

    async fn run(&self, api: &BillingClient) -> Result<()> {
        run(api).await
    }
}

pub async fn run(api: &BillingClient) -> Result<()> {
    let company_id = api.get_caller_company_id().await?;

    // 帳戶類型與客戶
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

    // 產品分類與產品
    let category_id = api
        .create_item_category(&products::build_item_category(company_id))
        .await?;
    let product_code = sample_name("sampleProduct");
    let item = products::build_item(
        company_id,
        &product_code,
        category_id,
        0,
        products::with_flat_price(chrono::Utc::now().date_naive(), Decimal::from(10)),
    );
    let item_id = api.create_item(&item).await?;

    // 會套用到訂單的異動狀態
    let apply_status = order_config::build_order_change_status(company_id, ApplyToOrder::Yes, 1);
    let apply_status_id = api.create_order_change_status(&apply_status).await?;

    // 建立訂單：異動批次由訂單階層推導出來
    let order = build_order(
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
    tracing::info!("Created order with id: {}", order_id);

    let order = api.get_order(order_id).await?;

    // 更新訂單：把第一條明細的數量改成 10
    let mut order_change = change_from_line(
        &order,
        &order.order_lines[0],
        apply_status_id,
        Some(date(2010, 2, 10)),
    );
    order_change.quantity = Decimal::from(10);
    api.update_order(&order, &[order_change]).await?;

    // 單獨抓一條訂單明細
    let mut order_line = api.get_order_line(order.order_lines[0].id).await?;

    order_line.description = format!(
        "Updated sampleApp order line for product id: {}",
        order_line.item_id
    );
    api.update_order_line(&order_line).await?;

    // 查客戶最近的訂單，也可以指定數量或依產品分類過濾
    let latest_order = api.get_latest_order(user_id).await?;
    tracing::info!("Latest order for user {}: {}", user_id, latest_order.id);
    let order_ids = api.get_last_orders(user_id, 10).await?;
    tracing::info!("User has {} recent orders", order_ids.len());
    let _latest_by_type = api.get_latest_order_by_item_type(user_id, category_id).await?;
    let _order_ids = api
        .get_last_orders_by_item_type(user_id, category_id, 10)
        .await?;

    api.delete_order(order_id).await?;

    Ok(())
}

pub fn build_order(
    user_id: i32,
    active_since: Option<NaiveDate>,
    active_until: Option<NaiveDate>,
    order_period_id: i32,
    billing_type_id: i32,
    prorate: bool,
    product_ids: &[i32],
) -> Order {
    let order_lines = product_ids
        .iter()
        .map(|&product_id| OrderLine {
            type_id: constants::ORDER_LINE_TYPE_ITEM,
            item_id: product_id,
            description: format!("sampleApp order line for product id: {}", product_id),
            quantity: Decimal::ONE,
            // use_item 為 true 時以產品定價計費，price 欄位只是備援
            use_item: true,
            price: Decimal::ONE,
            amount: Decimal::ONE,
            ..Default::default()
        })
        .collect();

    Order {
        user_id,
        billing_type_id,
        prorate_flag: prorate,
        period: order_period_id,
        currency_id: constants::PRIMARY_CURRENCY_ID,
        active_since,
        active_until,
        order_lines,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_order_creates_one_line_per_product() {
        let order = build_order(
            7,
            Some(date(2010, 2, 1)),
            None,
            constants::PERIOD_UNIT_MONTH,
            constants::ORDER_BILLING_POST_PAID,
            true,
            &[11, 12, 13],
        );

        assert_eq!(order.order_lines.len(), 3);
        assert_eq!(order.order_lines[1].item_id, 12);
        assert!(order.order_lines.iter().all(|l| l.use_item));
        assert!(order.prorate_flag);
    }
}
