use crate::api::BillingClient;
use crate::app::chapters::{meta_fields, sample_name};
use crate::app::sequence::Chapter;
use crate::domain::account::{AccountInformationType, AccountType, MainSubscription};
use crate::domain::constants;
use crate::domain::metafield::{DataType, EntityType};
use crate::utils::error::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;

pub struct AccountTypesChapter;

#[async_trait]
impl Chapter for AccountTypesChapter {
    fn name(&self) -> &str {
        "account-types"
    }

    fn description(&self) -> &str {
        "Create, update and delete account types and account information types"
    }

    async fn run(&self, api: &BillingClient) -> Result<()> {
        run(api).await
    }
}

pub async fn run(api: &BillingClient) -> Result<()> {
    let company_id = api.get_caller_company_id().await?;
    tracing::info!("Caller company id: {}", company_id);

    // 建立兩個帳戶類型
    let acc_type_one_id = api.create_account_type(&build_account_type(company_id)).await?;
    let acc_type_two_id = api.create_account_type(&build_account_type(company_id)).await?;

    // 取回確認建立成功
    let mut acc_type_one = api.get_account_type(acc_type_one_id).await?;
    tracing::info!("Account type one: {:?}", acc_type_one);
    let acc_type_two = api.get_account_type(acc_type_two_id).await?;
    tracing::info!("Account type two: {:?}", acc_type_two);

    let all_account_types = api.get_all_account_types().await?;
    tracing::info!("Company has {} account types", all_account_types.len());

    // 更新信用額度
    acc_type_one.credit_limit = Some(Decimal::from(100));
    api.update_account_type(&acc_type_one).await?;

    api.delete_account_type(acc_type_two_id).await?;

    // 帳戶資訊類型
    let acc_info_type = build_account_information_type(acc_type_one_id, company_id);
    let acc_info_type_id = api.create_account_information_type(&acc_info_type).await?;

    let mut acc_info_type = api.get_account_information_type(acc_info_type_id).await?;
    tracing::info!("Account information type: {:?}", acc_info_type);

    let information_types = api
        .get_information_types_for_account_type(acc_type_one_id)
        .await?;
    tracing::info!(
        "Account type {} has {} information types",
        acc_type_one_id,
        information_types.len()
    );

    acc_info_type.name = sample_name("updatedAccInfoType");
    api.update_account_information_type(&acc_info_type).await?;

    api.delete_account_information_type(acc_info_type_id).await?;

    Ok(())
}

pub fn build_account_type(company_id: i32) -> AccountType {
    let mut account_type = AccountType {
        entity_id: company_id,
        // 月繳，每期第一天開發票
        main_subscription: Some(MainSubscription::new(constants::PERIOD_UNIT_MONTH, 1)),
        credit_limit: Some(Decimal::ZERO),
        currency_id: constants::PRIMARY_CURRENCY_ID,
        language_id: constants::LANGUAGE_ENGLISH_ID,
        credit_notification_limit1: Some(Decimal::ZERO),
        credit_notification_limit2: Some(Decimal::ZERO),
        invoice_delivery_method_id: constants::EMAIL_DELIVERY_METHOD,
        ..Default::default()
    };
    account_type.set_name(sample_name("sampleAccType"), constants::LANGUAGE_ENGLISH_ID);

    account_type
}

pub fn build_account_information_type(
    account_type_id: i32,
    company_id: i32,
) -> AccountInformationType {
    AccountInformationType {
        account_type_id,
        name: sample_name("sampleAccInfoType"),
        entity_type: EntityType::AccountType,
        entity_id: company_id,
        display_order: 1,
        meta_fields: vec![
            meta_fields::build_meta_field(
                company_id,
                "First Name",
                DataType::String,
                EntityType::AccountType,
                false,
                false,
                1,
                false,
                serde_json::json!(""),
            ),
            meta_fields::build_meta_field(
                company_id,
                "Phone",
                DataType::String,
                EntityType::AccountType,
                false,
                false,
                2,
                false,
                serde_json::json!(""),
            ),
        ],
        ..Default::default()
    }
}
