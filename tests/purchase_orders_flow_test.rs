use anyhow::Result;
use billing_samples::app::chapters::purchase_orders;
use billing_samples::{ApiConfig, BillingClient};
use httpmock::prelude::*;
use rust_decimal_macros::dec;

fn client_for(server: &MockServer) -> BillingClient {
    let config = ApiConfig::from_toml_str(&format!(
        "[api]\nendpoint = \"{}\"\ntoken = \"test-token\"\n",
        server.base_url()
    ))
    .unwrap();
    BillingClient::new(&config)
}

fn persisted_order_json(order_id: i32, line_id: i32, item_id: i32) -> serde_json::Value {
    use billing_samples::domain::order::{Order, OrderLine};

    let order = Order {
        id: order_id,
        user_id: 20,
        order_lines: vec![OrderLine {
            id: line_id,
            item_id,
            order_id: Some(order_id),
            description: format!("sampleApp order line for product id: {}", item_id),
            quantity: dec!(1),
            price: dec!(10),
            amount: dec!(10),
            use_item: true,
            ..Default::default()
        }],
        ..Default::default()
    };

    serde_json::to_value(&order).unwrap()
}

/// 完整跑一次 purchase-orders 章節：
/// 建帳戶類型 → 建客戶 → 建產品 → 建訂單 → 查詢 → 更新 → 刪除，
/// 每個遠端呼叫都用 mock server 驗證有被打到。
#[tokio::test]
async fn test_purchase_orders_chapter_runs_the_full_flow() -> Result<()> {
    let server = MockServer::start();

    let company = server.mock(|when, then| {
        when.method(POST).path("/api/getCallerCompanyId");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!(1));
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/createAccountType");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!(10));
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/createUser");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!(20));
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/createItemCategory");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!(30));
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/createItem");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!(40));
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/createOrderChangeStatus");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!(50));
    });

    // createOrder 的請求必須帶著訂單與由明細推導出的異動批次
    let create_order = server.mock(|when, then| {
        when.method(POST)
            .path("/api/createOrder")
            .json_body_partial(r#"{ "order": { "userId": 20 } }"#);
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!(60));
    });

    let order_json = persisted_order_json(60, 600, 40);
    server.mock(|when, then| {
        when.method(POST).path("/api/getOrder");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(order_json.clone());
    });

    let update_order = server.mock(|when, then| {
        when.method(POST).path("/api/updateOrder");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({}));
    });

    server.mock(|when, then| {
        when.method(POST).path("/api/getOrderLine");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(order_json["orderLines"][0].clone());
    });
    let update_order_line = server.mock(|when, then| {
        when.method(POST).path("/api/updateOrderLine");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({}));
    });

    server.mock(|when, then| {
        when.method(POST).path("/api/getLatestOrder");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(order_json.clone());
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/getLastOrders");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([60]));
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/getLatestOrderByItemType");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(order_json.clone());
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/getLastOrdersByItemType");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([60]));
    });

    let delete_order = server.mock(|when, then| {
        when.method(POST).path("/api/deleteOrder");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({}));
    });

    let api = client_for(&server);
    purchase_orders::run(&api).await?;

    company.assert();
    create_order.assert();
    update_order.assert();
    update_order_line.assert();
    delete_order.assert();

    Ok(())
}
