use crate::api::BillingClient;
use crate::app::chapters::{account_types, date, sample_name};
use crate::app::sequence::Chapter;
use crate::domain::constants;
use crate::domain::user::{Contact, User, UserCode};
use crate::utils::error::Result;
use async_trait::async_trait;

pub struct CustomersChapter;

#[async_trait]
impl Chapter for CustomersChapter {
    fn name(&self) -> &str {
        "customers"
    }

    fn description(&self) -> &str {
        "Customer management: users, contacts and user codes"
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

    // 建立兩個客戶
    let user_one = build_user(acc_type_id, constants::CUSTOMER_ROLE_ID, company_id);
    let user_one_id = api.create_user(&user_one).await?;
    let user_two = build_user(acc_type_id, constants::CUSTOMER_ROLE_ID, company_id);
    let user_two_id = api.create_user(&user_two).await?;

    let mut user_one = api.get_user(user_one_id).await?;
    tracing::info!("User one: {:?}", user_one);
    let user_two = api.get_user(user_two_id).await?;
    tracing::info!("User two: {:?}", user_two);

    // 補上聯絡資訊
    let mut contact = build_contact();
    user_one.contact = Some(contact.clone());
    api.update_user(&user_one).await?;
    tracing::info!("User one contact info: {:?}", user_one.contact);

    api.delete_user(user_two_id).await?;

    // 兩種方式確認使用者是否存在
    let exists_by_name = api.user_exists_with_name(&user_one.user_name).await?;
    let exists_by_id = api.user_exists_with_id(user_two_id).await?;
    tracing::info!(
        "User one exists by name: {}, deleted user two exists by id: {}",
        exists_by_name,
        exists_by_id
    );

    let user_one_id = api.get_user_id(&user_one.user_name).await?;
    tracing::info!("User one id: {}", user_one_id);

    // 依狀態查詢使用者
    let status = constants::USER_STATUS_ACTIVE;
    let users_in_status = api.get_users_in_status(status).await?;
    let users_not_in_status = api.get_users_not_in_status(status).await?;
    let users_by_status = api.get_users_by_status(status, true).await?;
    tracing::info!(
        "Active: {}, not active: {}, by-status query: {}",
        users_in_status.len(),
        users_not_in_status.len(),
        users_by_status.len()
    );

    let contact_info = api.get_user_contacts(user_one_id).await?;
    tracing::info!("User one has {} contacts", contact_info.len());

    contact.city = Some("New York".to_string());
    api.update_user_contact(user_one_id, &contact).await?;

    // 客戶代碼
    let user_code_one = build_user_code(&user_one);
    let user_code_one_id = api.create_user_code(&user_code_one).await?;

    let mut user_code_one = user_code_one;
    user_code_one.id = user_code_one_id;
    api.update_user_code(&user_code_one).await?;
    tracing::info!("User code: {:?}", user_code_one);

    let user_one_codes = api.get_user_codes_for_user(user_one_id).await?;
    tracing::info!("User one has {} user codes", user_one_codes.len());

    let customers_by_user_code = api
        .get_customers_by_user_code(&user_code_one.identifier)
        .await?;
    let customers_by_linked_user = api.get_customers_linked_to_user(user_one_id).await?;
    tracing::info!(
        "Customers via user code: {}, linked customers: {}",
        customers_by_user_code.len(),
        customers_by_linked_user.len()
    );

    Ok(())
}

pub fn build_user(account_type_id: i32, role_id: i32, company_id: i32) -> User {
    User {
        account_type_id,
        user_name: sample_name("sampleUserName"),
        entity_id: company_id,
        language_id: constants::LANGUAGE_ENGLISH_ID,
        currency_id: constants::PRIMARY_CURRENCY_ID,
        main_role_id: role_id,
        status_id: constants::USER_STATUS_ACTIVE,
        ..Default::default()
    }
}

pub fn build_contact() -> Contact {
    Contact {
        first_name: "John".to_string(),
        last_name: "Smith".to_string(),
        email: "email@email.com".to_string(),
        ..Default::default()
    }
}

pub fn build_user_code(user: &User) -> UserCode {
    UserCode {
        user_id: user.user_id,
        valid_from: Some(date(2000, 1, 1)),
        valid_to: Some(date(2020, 1, 1)),
        // 客戶代碼的格式是使用者名稱加五位數字
        identifier: format!("{}00001", user.user_name),
        ..Default::default()
    }
}
