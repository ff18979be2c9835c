use crate::api::BillingClient;
use crate::app::chapters::{account_types, customers, date, order_config, products, sample_name};
use crate::app::sequence::Chapter;
use crate::core::OrderGraph;
use crate::domain::constants;
use crate::domain::item::PriceModel;
use crate::domain::order::ApplyToOrder;
use crate::domain::plan::{Plan, PlanItem, PlanItemBundle};
use crate::utils::error::{BillingError, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

pub struct PlansChapter;

#[async_trait]
impl Chapter for PlansChapter {
    fn name(&self) -> &str {
        "plans"
    }

    fn description(&self) -> &str {
        "Plans with bundled items, account type prices and customer prices"
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

    // 一個訂閱項目加兩個綁售項目
    let current_date = chrono::Utc::now().date_naive();
    let category_id = api
        .create_item_category(&products::build_item_category(company_id))
        .await?;
    let subscription_code = sample_name("sampleSubProduct");
    let bundled_one_code = sample_name("sampleBundleProductOne");
    let bundled_two_code = sample_name("sampleBundleProductTwo");
    let subscription_id = api
        .create_item(&products::build_item(
            company_id,
            &subscription_code,
            category_id,
            0,
            products::with_flat_price(current_date, Decimal::from(10)),
        ))
        .await?;
    let bundled_one_id = api
        .create_item(&products::build_item(
            company_id,
            &bundled_one_code,
            category_id,
            0,
            products::with_flat_price(current_date, Decimal::from(10)),
        ))
        .await?;
    let bundled_two_id = api
        .create_item(&products::build_item(
            company_id,
            &bundled_two_code,
            category_id,
            0,
            products::with_flat_price(current_date, Decimal::from(10)),
        ))
        .await?;

    // 從既有的訂單週期挑出每月一期的那個
    let period_id = monthly_period_id(api).await?;

    // 建立方案
    let plan_items = vec![
        build_plan_item(
            bundled_one_id,
            products::flat_price_model(Decimal::from(5)),
            current_date,
            period_id,
            Decimal::from(5),
        ),
        build_plan_item(
            bundled_two_id,
            products::flat_price_model(Decimal::from(20)),
            current_date,
            period_id,
            Decimal::ONE,
        ),
    ];
    let plan = build_plan(subscription_id, period_id, plan_items);
    let plan_id = api.create_plan(&plan).await?;

    let mut plan = api.get_plan(plan_id).await?;
    tracing::info!("Created plan: {:?}", plan);

    let plans = api.get_all_plans().await?;
    tracing::info!("There are {} plans in total", plans.len());

    // 用訂閱項目或綁售項目反查方案
    let plan_ids = api.get_plans_by_subscription_item(subscription_id).await?;
    tracing::info!("Plans by subscription item: {:?}", plan_ids);
    let plan_ids = api.get_plans_by_affected_item(bundled_one_id).await?;
    tracing::info!("Plans by affected item: {:?}", plan_ids);

    plan.description = sample_name("updatedPlan");
    api.update_plan(&plan).await?;
    let plan = api.get_plan(plan_id).await?;
    tracing::info!("Updated plan: {:?}", plan);

    // 用方案的訂閱項目開一張訂單
    let apply_status = order_config::build_order_change_status(company_id, ApplyToOrder::Yes, 1);
    let apply_status_id = api.create_order_change_status(&apply_status).await?;
    let order = super::purchase_orders::build_order(
        user_id,
        Some(date(2010, 2, 1)),
        None,
        constants::PERIOD_UNIT_MONTH,
        constants::ORDER_BILLING_POST_PAID,
        true,
        &[subscription_id],
    );
    let mut graph = OrderGraph::new();
    let node = graph.insert(order);
    let changes = graph.build_changes(node, apply_status_id)?;
    api.create_order(graph.order(node)?, &changes).await?;

    // 第二個帳戶類型與客戶，用來掛特殊價
    let acc_type_two_id = api
        .create_account_type(&account_types::build_account_type(company_id))
        .await?;
    let user_two_id = api
        .create_user(&customers::build_user(
            acc_type_id,
            constants::CUSTOMER_ROLE_ID,
            company_id,
        ))
        .await?;

    // 綁售項目可以對特定帳戶類型或客戶另外定價
    api.create_account_type_price(
        acc_type_two_id,
        &build_plan_item(
            bundled_one_id,
            products::flat_price_model(Decimal::from(50)),
            current_date,
            period_id,
            Decimal::from(5),
        ),
        date(2011, 2, 1),
    )
    .await?;
    api.create_customer_price(
        user_two_id,
        &build_plan_item(
            bundled_one_id,
            products::flat_price_model(Decimal::from(20)),
            current_date,
            period_id,
            Decimal::from(5),
        ),
        date(2011, 2, 1),
    )
    .await?;

    let general_price = plan
        .plan_items
        .iter()
        .find(|item| item.item_id == bundled_one_id)
        .and_then(|item| item.model.clone());
    tracing::info!("General plan item price: {:?}", general_price);
    let plan_item = api.get_account_type_price(acc_type_two_id, bundled_one_id).await?;
    tracing::info!("Account type price for account type two: {:?}", plan_item.model);
    let plan_item = api.get_customer_price(user_two_id, bundled_one_id).await?;
    tracing::info!("Customer price for user two: {:?}", plan_item.model);

    api.delete_account_type_price(acc_type_two_id, bundled_one_id)
        .await?;
    api.delete_customer_price(user_two_id, bundled_one_id).await?;

    api.delete_plan(plan_id).await?;

    Ok(())
}

/// 找出「每月一期」的訂單週期 id。
pub async fn monthly_period_id(api: &BillingClient) -> Result<i32> {
    api.get_order_periods()
        .await?
        .into_iter()
        .find(|period| period.value == 1 && period.period_unit_id == constants::PERIOD_UNIT_MONTH)
        .map(|period| period.id)
        .ok_or_else(|| BillingError::ProcessingError {
            message: "no monthly order period is configured".to_string(),
        })
}

pub fn build_plan(subscription_item_id: i32, period_id: i32, plan_items: Vec<PlanItem>) -> Plan {
    Plan {
        item_id: subscription_item_id,
        period_id,
        description: sample_name("samplePlan"),
        plan_items,
        ..Default::default()
    }
}

pub fn build_plan_item(
    item_id: i32,
    price_model: PriceModel,
    from_date: NaiveDate,
    period_id: i32,
    quantity: Decimal,
) -> PlanItem {
    PlanItem {
        item_id,
        model: Some(price_model.clone()),
        models: crate::domain::item::DatedPrices::from([(from_date, price_model)]),
        bundle: Some(PlanItemBundle {
            period_id,
            quantity,
        }),
        ..Default::default()
    }
}
