use anyhow::Result;
use billing_samples::app::chapters::account_types;
use billing_samples::{ApiConfig, BillingClient};
use httpmock::prelude::*;

fn client_for(server: &MockServer) -> BillingClient {
    let config = ApiConfig::from_toml_str(&format!(
        "[api]\nendpoint = \"{}\"\n",
        server.base_url()
    ))
    .unwrap();
    BillingClient::new(&config)
}

#[tokio::test]
async fn test_account_types_chapter_chains_ids_between_calls() -> Result<()> {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/api/getCallerCompanyId");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!(1));
    });

    // 兩個帳戶類型
    let create_account_type = server.mock(|when, then| {
        when.method(POST).path("/api/createAccountType");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!(10));
    });

    let account_type_json = serde_json::to_value(account_types::build_account_type(1)).unwrap();
    server.mock(|when, then| {
        when.method(POST).path("/api/getAccountType");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(account_type_json);
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/getAllAccountTypes");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([]));
    });

    // 更新後會帶新的信用額度
    let update_account_type = server.mock(|when, then| {
        when.method(POST)
            .path("/api/updateAccountType")
            .json_body_partial(r#"{ "accountType": { "creditLimit": "100" } }"#);
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({}));
    });
    let delete_account_type = server.mock(|when, then| {
        when.method(POST)
            .path("/api/deleteAccountType")
            .json_body_partial(r#"{ "accountTypeId": 10 }"#);
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({}));
    });

    // 帳戶資訊類型
    server.mock(|when, then| {
        when.method(POST).path("/api/createAccountInformationType");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!(70));
    });
    let information_type_json =
        serde_json::to_value(account_types::build_account_information_type(10, 1)).unwrap();
    server.mock(|when, then| {
        when.method(POST).path("/api/getAccountInformationType");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(information_type_json);
    });
    server.mock(|when, then| {
        when.method(POST)
            .path("/api/getInformationTypesForAccountType")
            .json_body_partial(r#"{ "accountTypeId": 10 }"#);
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([]));
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/updateAccountInformationType");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({}));
    });
    let delete_information_type = server.mock(|when, then| {
        when.method(POST)
            .path("/api/deleteAccountInformationType")
            .json_body_partial(r#"{ "informationTypeId": 70 }"#);
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({}));
    });

    let api = client_for(&server);
    account_types::run(&api).await?;

    assert_eq!(create_account_type.hits(), 2);
    update_account_type.assert();
    delete_account_type.assert();
    delete_information_type.assert();

    Ok(())
}
