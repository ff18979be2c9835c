use crate::api::BillingClient;
use crate::app::chapters::{account_types, customers, date, order_config, plans, products, sample_name};
use crate::app::sequence::Chapter;
use crate::core::OrderGraph;
use crate::domain::constants;
use crate::domain::order::ApplyToOrder;
use crate::domain::plan::Plan;
use crate::domain::usage_pool::{
    NotificationMediumType, UsagePool, UsagePoolConsumptionAction, UsagePoolResetValue,
};
use crate::utils::error::{BillingError, Result};
use async_trait::async_trait;
use rust_decimal::Decimal;

pub struct UsagePoolsChapter;

#[async_trait]
impl Chapter for UsagePoolsChapter {
    fn name(&self) -> &str {
        "usage-pools"
    }

    fn description(&self) -> &str {
        "Free usage pools and customer usage pool links"
    }

    async fn run(&self, api: &BillingClient) -> Result<()> {
        run(api).await
    }
}

pub async fn run(api: &BillingClient) -> Result<()> {
    let company_id = api.get_caller_company_id().await?;

    // 用量池需要產品分類、訂閱項目與一般產品
    let category_id = api
        .create_item_category(&products::build_item_category(company_id))
        .await?;
    let category_ids = vec![category_id];

    let today = chrono::Utc::now().date_naive();
    let subscription_code = sample_name("sampleSubProduct");
    let subscription_item_id = api
        .create_item(&products::build_item(
            company_id,
            &subscription_code,
            category_id,
            0,
            products::with_flat_price(today, Decimal::from(10)),
        ))
        .await?;

    let product_code = sample_name("sampleProduct");
    let item_id = api
        .create_item(&products::build_item(
            company_id,
            &product_code,
            category_id,
            0,
            products::with_flat_price(today, Decimal::from(10)),
        ))
        .await?;
    let item_ids = vec![item_id];

    let consumption_actions = vec![build_consumption_action(
        constants::FUP_CONSUMPTION_FEE,
        NotificationMediumType::Email,
        None,
        Decimal::from(50),
        Some(item_id),
    )];

    // 建立兩個用量池
    let usage_pool_one = build_usage_pool(
        company_id,
        &sample_name("200 National SMS"),
        Decimal::from(200),
        "Months",
        1,
        category_ids.clone(),
        item_ids.clone(),
        UsagePoolResetValue::Zero,
        consumption_actions.clone(),
    );
    let usage_pool_one_id = api.create_usage_pool(&usage_pool_one).await?;
    let usage_pool_two = build_usage_pool(
        company_id,
        &sample_name("200 National SMS"),
        Decimal::from(200),
        "Months",
        1,
        category_ids,
        item_ids,
        UsagePoolResetValue::Zero,
        consumption_actions,
    );
    let usage_pool_two_id = api.create_usage_pool(&usage_pool_two).await?;

    let mut usage_pool_one = api.get_usage_pool(usage_pool_one_id).await?;
    tracing::info!("Usage pool one: {:?}", usage_pool_one);
    let usage_pool_two = api.get_usage_pool(usage_pool_two_id).await?;
    tracing::info!("Usage pool two: {:?}", usage_pool_two);

    usage_pool_one.name = sample_name("Updated 200 National SMS");
    api.update_usage_pool(&usage_pool_one).await?;

    api.delete_usage_pool(usage_pool_two_id).await?;

    let usage_pools = api.get_all_usage_pools().await?;
    tracing::info!("There are {} usage pools", usage_pools.len());

    // 掛進方案之後就能用方案反查
    let plan = build_plan_with_usage_pool(api, subscription_item_id, item_id, usage_pool_one_id)
        .await?;
    let plan_id = api.create_plan(&plan).await?;
    let usage_pools = api.get_usage_pools_by_plan_id(plan_id).await?;
    tracing::info!("Plan {} uses {} usage pools", plan_id, usage_pools.len());

    // 客戶用量池：客戶訂了含用量池項目的訂單時，遠端系統會建立關聯
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
    let user = api.get_user(user_id).await?;
    let customer_id = user.customer_id.ok_or_else(|| BillingError::ProcessingError {
        message: format!("user {} has no customer id", user_id),
    })?;

    let apply_status = order_config::build_order_change_status(company_id, ApplyToOrder::Yes, 1);
    let apply_status_id = api.create_order_change_status(&apply_status).await?;
    let order = super::purchase_orders::build_order(
        user_id,
        Some(date(2010, 2, 1)),
        None,
        constants::PERIOD_UNIT_MONTH,
        constants::ORDER_BILLING_POST_PAID,
        true,
        &[subscription_item_id],
    );
    let mut graph = OrderGraph::new();
    let node = graph.insert(order);
    let changes = graph.build_changes(node, apply_status_id)?;
    api.create_order(graph.order(node)?, &changes).await?;

    let customer_usage_pools = api
        .get_customer_usage_pools_by_customer_id(customer_id)
        .await?;
    tracing::info!("Customer usage pools for {}:", user.user_name);
    for pool in &customer_usage_pools {
        tracing::info!("{:?}", pool);
    }

    if let Some(first) = customer_usage_pools.first() {
        let _pool = api.get_customer_usage_pool_by_id(first.id).await?;
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub fn build_usage_pool(
    company_id: i32,
    name: &str,
    quantity: Decimal,
    cycle_period_unit: &str,
    cycle_period_value: i32,
    item_type_ids: Vec<i32>,
    item_ids: Vec<i32>,
    reset_value: UsagePoolResetValue,
    consumption_actions: Vec<UsagePoolConsumptionAction>,
) -> UsagePool {
    UsagePool {
        name: name.to_string(),
        quantity,
        cycle_period_unit: cycle_period_unit.to_string(),
        cycle_period_value,
        item_types: item_type_ids,
        items: item_ids,
        entity_id: company_id,
        usage_pool_reset_value: reset_value,
        consumption_actions,
        ..Default::default()
    }
}

pub fn build_consumption_action(
    action_type: &str,
    medium_type: NotificationMediumType,
    notification_id: Option<String>,
    percentage: Decimal,
    product_id: Option<i32>,
) -> UsagePoolConsumptionAction {
    UsagePoolConsumptionAction {
        action_type: action_type.to_string(),
        medium_type,
        notification_id,
        percentage,
        product_id,
    }
}

async fn build_plan_with_usage_pool(
    api: &BillingClient,
    subscription_item_id: i32,
    item_id: i32,
    usage_pool_id: i32,
) -> Result<Plan> {
    let period_id = plans::monthly_period_id(api).await?;
    let plan_items = vec![plans::build_plan_item(
        item_id,
        products::flat_price_model(Decimal::from(5)),
        chrono::Utc::now().date_naive(),
        period_id,
        Decimal::from(5),
    )];
    let mut plan = plans::build_plan(subscription_item_id, period_id, plan_items);
    plan.usage_pool_ids = vec![usage_pool_id];

    Ok(plan)
}
