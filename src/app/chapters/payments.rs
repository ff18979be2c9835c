use crate::api::BillingClient;
use crate::app::chapters::{account_types, customers, date, meta_fields, order_config, products, sample_name};
use crate::app::sequence::Chapter;
use crate::core::OrderGraph;
use crate::domain::collections::AgeingStep;
use crate::domain::constants;
use crate::domain::metafield::{copy_meta_field, DataType, EntityType};
use crate::domain::order::ApplyToOrder;
use crate::domain::payment::{Payment, PaymentInformation, PaymentMethodType};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

pub struct PaymentsChapter;

const CC_MF_CARDHOLDER_NAME: &str = "cc.cardholder.name";
const CC_MF_NUMBER: &str = "cc.number";
const CC_MF_EXPIRY_DATE: &str = "cc.expiry.date";
const CC_MF_TYPE: &str = "cc.type";

#[async_trait]
impl Chapter for PaymentsChapter {
    fn name(&self) -> &str {
        "payments"
    }

    fn description(&self) -> &str {
        "Payments, payment method types and the collections (ageing) process"
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

    // 訂單加發票，待會的付款會沖銷到這張發票
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
    let invoice_id = api.create_invoice_from_order(order_id, None).await?;

    // 付款方式類型
    let pm_type = build_payment_method_type(api, company_id).await?;
    let pm_type_id = api.create_payment_method_type(&pm_type).await?;

    let mut pm_type = api.get_payment_method_type(pm_type_id).await?;
    tracing::info!("Created payment method type: {:?}", pm_type);

    pm_type.method_name = sample_name("upType");
    api.update_payment_method_type(&pm_type).await?;
    let pm_type = api.get_payment_method_type(pm_type_id).await?;
    tracing::info!("Updated payment method type: {:?}", pm_type);

    // 建立付款，付款工具是一張信用卡
    let payment_date = date(2010, 2, 1);
    let payment_information =
        build_credit_card(payment_date, pm_type_id, "Test User", "4123123419441152");
    let payment = build_payment(
        payment_information,
        payment_date,
        constants::PAYMENT_METHOD_VISA,
        user_id,
    );
    let payment_id = api.create_payment(&payment).await?;

    let mut payment = api.get_payment(payment_id).await?;
    tracing::info!("Created payment: {:?}", payment);

    // 各種付款查詢
    let payment_ids = api
        .get_payments_by_date(user_id, date(2010, 2, 1), date(2011, 2, 1))
        .await?;
    tracing::info!("Payments in range: {}", payment_ids.len());

    let latest_payment = api.get_latest_payment(user_id).await?;
    tracing::info!("Latest payment: {}", latest_payment.id);
    let _payment_ids = api.get_last_payments(user_id, 10).await?;
    let _payment_ids = api.get_last_payments_page(user_id, 20, 10).await?;

    // 付款與發票的沖銷連結
    api.create_payment_link(invoice_id, payment_id).await?;
    api.remove_payment_link(invoice_id, payment_id).await?;
    api.remove_all_payment_links(payment_id).await?;

    let total_payment = api.get_total_revenue_by_user(user_id).await?;
    tracing::info!("Total revenue for user {}: {}", user_id, total_payment);

    payment.amount = Decimal::ZERO;
    api.update_payment(&payment).await?;
    let payment = api.get_payment(payment_id).await?;
    tracing::info!("Updated payment: {:?}", payment);

    api.delete_payment(payment_id).await?;
    api.delete_payment_method_type(pm_type_id).await?;

    // 催收（舊稱 ageing）設定：四個階段
    let collections_steps = vec![
        build_ageing_step(company_id, "Payment Due", 0, false, false, false),
        build_ageing_step(company_id, "Grace Period", 2, false, true, false),
        build_ageing_step(company_id, "First Retry", 3, true, false, false),
        build_ageing_step(company_id, "Suspended", 7, false, false, true),
    ];
    api.save_ageing_configuration(&collections_steps, constants::LANGUAGE_ENGLISH_ID)
        .await?;

    let collections_steps = api
        .get_ageing_configuration(constants::LANGUAGE_ENGLISH_ID)
        .await?;
    for step in &collections_steps {
        tracing::info!("Collections step: {:?}", step);
    }

    api.trigger_ageing(date(2010, 2, 1)).await?;

    if api.is_ageing_process_running().await? {
        tracing::info!("The collections process is running currently");
    } else {
        tracing::info!("The collections process is not running currently");
    }

    // 流程沒在跑時，回傳的是最後一次執行的狀態
    let process_status = api.get_ageing_process_status().await?;
    tracing::info!("Collections process status: {:?}", process_status);

    Ok(())
}

/// 以 VISA 的付款方式範本為底建一個付款方式類型。
pub async fn build_payment_method_type(
    api: &BillingClient,
    company_id: i32,
) -> Result<PaymentMethodType> {
    let template = api
        .get_payment_method_template(constants::PAYMENT_METHOD_VISA)
        .await?;

    // 範本的動態欄位複製過來，改掛在新的付款方式類型上
    let meta_fields = template
        .meta_fields
        .iter()
        .map(|meta_field| {
            let mut copy = copy_meta_field(meta_field);
            copy.entity_id = company_id;
            copy.entity_type = EntityType::PaymentMethodType;
            copy
        })
        .collect();

    Ok(PaymentMethodType {
        method_name: sample_name("pmType"),
        is_recurring: false,
        template_id: template.id,
        all_account_type: true,
        account_types: Vec::new(),
        meta_fields,
        ..Default::default()
    })
}

pub fn build_credit_card(
    expiry: NaiveDate,
    method_type_id: i32,
    card_holder_name: &str,
    card_number: &str,
) -> PaymentInformation {
    PaymentInformation {
        payment_method_type_id: method_type_id,
        payment_method_id: constants::PAYMENT_METHOD_VISA,
        processing_order: 1,
        meta_fields: vec![
            meta_fields::build_meta_field_value(
                CC_MF_CARDHOLDER_NAME,
                false,
                true,
                DataType::String,
                1,
                serde_json::json!(card_holder_name),
            ),
            meta_fields::build_meta_field_value(
                CC_MF_NUMBER,
                false,
                true,
                DataType::String,
                2,
                serde_json::json!(card_number),
            ),
            meta_fields::build_meta_field_value(
                CC_MF_EXPIRY_DATE,
                false,
                true,
                DataType::String,
                3,
                serde_json::json!(expiry.format(constants::CC_DATE_FORMAT).to_string()),
            ),
            meta_fields::build_meta_field_value(
                CC_MF_TYPE,
                true,
                false,
                DataType::Integer,
                4,
                serde_json::json!(0),
            ),
        ],
    }
}

pub fn build_payment(
    payment_information: PaymentInformation,
    payment_date: NaiveDate,
    method_id: i32,
    user_id: i32,
) -> Payment {
    Payment {
        amount: Decimal::new(1500, 2),
        is_refund: 0,
        method_id,
        payment_date: Some(payment_date),
        create_datetime: Some(payment_date),
        result_id: constants::RESULT_ENTERED,
        currency_id: constants::PRIMARY_CURRENCY_ID,
        user_id,
        payment_notes: sample_name("sampleAppPayment"),
        payment_instruments: vec![payment_information],
        ..Default::default()
    }
}

pub fn build_ageing_step(
    company_id: i32,
    status: &str,
    days: i32,
    payment_retry: bool,
    send_notification: bool,
    suspended: bool,
) -> AgeingStep {
    AgeingStep {
        entity_id: company_id,
        status_str: status.to_string(),
        days,
        payment_retry,
        send_notification,
        suspended,
        welcome_message: sample_name("Welcome"),
        failed_login_message: sample_name("Login failed"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_credit_card_formats_expiry_date() {
        let card = build_credit_card(date(2028, 5, 1), 3, "Test User", "4123123419441152");

        let expiry = card
            .meta_fields
            .iter()
            .find(|f| f.field_name == CC_MF_EXPIRY_DATE)
            .expect("expiry meta field");
        assert_eq!(expiry.value, serde_json::json!("05/2028"));
    }

    #[test]
    fn test_build_payment_amount_and_result() {
        let card = build_credit_card(date(2028, 5, 1), 3, "Test User", "4123123419441152");
        let payment = build_payment(card, date(2010, 2, 1), constants::PAYMENT_METHOD_VISA, 9);

        assert_eq!(payment.amount, Decimal::new(1500, 2));
        assert_eq!(payment.result_id, constants::RESULT_ENTERED);
        assert_eq!(payment.payment_instruments.len(), 1);
        assert_eq!(payment.is_refund, 0);
    }
}
