use crate::api::BillingClient;
use crate::app::chapters::sample_name;
use crate::app::sequence::Chapter;
use crate::domain::common::{Company, InternationalDescription};
use crate::domain::constants;
use crate::domain::order::{
    ApplyToOrder, OrderChangeStatus, OrderChangeType, OrderPeriod, OrderStatus, OrderStatusFlag,
};
use crate::utils::error::Result;
use async_trait::async_trait;

pub struct OrderConfigChapter;

#[async_trait]
impl Chapter for OrderConfigChapter {
    fn name(&self) -> &str {
        "order-config"
    }

    fn description(&self) -> &str {
        "Order periods, order statuses, order change types and change statuses"
    }

    async fn run(&self, api: &BillingClient) -> Result<()> {
        run(api).await
    }
}

pub async fn run(api: &BillingClient) -> Result<()> {
    let company_id = api.get_caller_company_id().await?;

    // 訂單週期
    let monthly_period = build_order_period(company_id, constants::PERIOD_UNIT_MONTH, 1);
    let monthly_period_id = api.create_order_period(&monthly_period).await?;
    let daily_period = build_order_period(company_id, constants::PERIOD_UNIT_DAY, 1);
    let daily_period_id = api.create_order_period(&daily_period).await?;

    let order_periods = api.get_order_periods().await?;
    let mut monthly_period = order_periods
        .iter()
        .find(|p| p.id == monthly_period_id)
        .cloned()
        .unwrap_or_default();
    tracing::info!("Newly created monthly period: {:?}", monthly_period);
    let daily_period = order_periods.iter().find(|p| p.id == daily_period_id);
    tracing::info!("Newly created daily period: {:?}", daily_period);

    if let Some(description) = monthly_period.descriptions.first_mut() {
        description.content = "Updated description for an order period".to_string();
    }
    api.update_order_periods(std::slice::from_ref(&monthly_period))
        .await?;

    api.delete_order_period(monthly_period_id).await?;
    api.delete_order_period(daily_period_id).await?;

    // 訂單狀態
    let status_invoice_id = api
        .get_default_order_status_id(OrderStatusFlag::Invoice, company_id)
        .await?;
    let status_not_invoice_id = api
        .get_default_order_status_id(OrderStatusFlag::NotInvoice, company_id)
        .await?;

    let status_invoice = api.find_order_status_by_id(status_invoice_id).await?;
    tracing::info!("Existing INVOICE order status: {:?}", status_invoice);
    let status_not_invoice = api.find_order_status_by_id(status_not_invoice_id).await?;
    tracing::info!("Existing NOT INVOICE order status: {:?}", status_not_invoice);

    let company = api.get_company().await?;
    let status_not_invoice_id = api
        .create_update_order_status(&build_order_status(
            company,
            OrderStatusFlag::NotInvoice,
            "Not Invoice Order Status",
        ))
        .await?;
    let status_not_invoice = api.find_order_status_by_id(status_not_invoice_id).await?;
    tracing::info!("Newly created NOT INVOICE order status: {:?}", status_not_invoice);

    api.delete_order_status(&status_not_invoice).await?;

    // 訂單異動類型
    let category_ids = api
        .get_all_item_categories()
        .await?
        .into_iter()
        .map(|category| category.id)
        .collect();
    let change_type = build_order_change_type(company_id, category_ids);
    let change_type_id = api.create_update_order_change_type(&change_type).await?;

    let mut change_type = api.get_order_change_type_by_id(change_type_id).await?;
    tracing::info!("Newly created order change type: {:?}", change_type);

    // 建立與更新共用同一個呼叫
    change_type.name = sample_name("updatedOrderChangeType");
    api.create_update_order_change_type(&change_type).await?;
    let change_type = api.get_order_change_type_by_id(change_type_id).await?;
    tracing::info!("Updated order change type: {:?}", change_type);

    api.delete_order_change_type(change_type_id).await?;

    let change_types = api.get_order_change_types_for_company().await?;
    tracing::info!("Company has {} order change types", change_types.len());

    // 訂單異動狀態
    let change_status = build_order_change_status(company_id, ApplyToOrder::No, 1);
    let change_status_id = api.create_order_change_status(&change_status).await?;

    let mut change_status = api
        .get_order_change_statuses_for_company()
        .await?
        .into_iter()
        .find(|s| s.id == change_status_id)
        .unwrap_or_default();
    tracing::info!("Newly created order change status: {:?}", change_status);

    change_status.apply_to_order = ApplyToOrder::Yes;
    api.update_order_change_status(&change_status).await?;
    let change_status = api
        .get_order_change_statuses_for_company()
        .await?
        .into_iter()
        .find(|s| s.id == change_status_id);
    tracing::info!("Updated order change status: {:?}", change_status);

    api.delete_order_change_status(change_status_id).await?;

    Ok(())
}

pub fn build_order_period(company_id: i32, period_unit_id: i32, period_value: i32) -> OrderPeriod {
    OrderPeriod {
        entity_id: company_id,
        period_unit_id,
        value: period_value,
        descriptions: vec![InternationalDescription::new(
            constants::LANGUAGE_ENGLISH_ID,
            format!(
                "Sample app order period with unit id: {} and value: {}",
                period_unit_id, period_value
            ),
        )],
        ..Default::default()
    }
}

pub fn build_order_status(company: Company, flag: OrderStatusFlag, name: &str) -> OrderStatus {
    OrderStatus {
        entity: Some(company),
        order_status_flag: Some(flag),
        description: sample_name(name),
        descriptions: vec![InternationalDescription::new(
            constants::LANGUAGE_ENGLISH_ID,
            format!("Sample app order status with flag: {:?}", flag),
        )],
        ..Default::default()
    }
}

pub fn build_order_change_type(company_id: i32, item_types: Vec<i32>) -> OrderChangeType {
    OrderChangeType {
        name: sample_name("orderChangeType"),
        entity_id: company_id,
        default_type: false,
        allow_order_status_change: true,
        item_types,
        ..Default::default()
    }
}

pub fn build_order_change_status(
    company_id: i32,
    apply: ApplyToOrder,
    order: i32,
) -> OrderChangeStatus {
    let mut status = OrderChangeStatus {
        entity_id: company_id,
        apply_to_order: apply,
        deleted: 0,
        order,
        ..Default::default()
    };
    status.add_description(InternationalDescription::new(
        constants::LANGUAGE_ENGLISH_ID,
        sample_name("orderChangeStatus"),
    ));

    status
}
