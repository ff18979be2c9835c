use billing_samples::app::chapters::{account_types, purchase_orders};
use billing_samples::change_from_line;
use billing_samples::domain::constants;
use chrono::NaiveDate;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// 線上格式是 camelCase，金額是字串，日期是 ISO 格式。
#[test]
fn test_order_serializes_with_camel_case_keys() {
    let order = purchase_orders::build_order(
        7,
        Some(date(2010, 2, 1)),
        None,
        constants::PERIOD_UNIT_MONTH,
        constants::ORDER_BILLING_POST_PAID,
        true,
        &[11],
    );

    let json = serde_json::to_value(&order).unwrap();

    assert_eq!(json["userId"], 7);
    assert_eq!(json["billingTypeId"], constants::ORDER_BILLING_POST_PAID);
    assert_eq!(json["prorateFlag"], true);
    assert_eq!(json["activeSince"], "2010-02-01");
    assert_eq!(json["orderLines"][0]["itemId"], 11);
    assert_eq!(json["orderLines"][0]["useItem"], true);
    assert_eq!(json["orderLines"][0]["quantity"], "1");
}

#[test]
fn test_order_change_parent_links_serialize_separately() {
    let order = purchase_orders::build_order(
        7,
        Some(date(2010, 2, 1)),
        None,
        constants::PERIOD_UNIT_MONTH,
        constants::ORDER_BILLING_POST_PAID,
        true,
        &[11],
    );

    let mut line = order.order_lines[0].clone();
    line.parent_line_id = Some(77);
    let change = change_from_line(&order, &line, 41, order.active_since);

    let json = serde_json::to_value(&change).unwrap();

    assert_eq!(json["parentOrderLineId"], 77);
    assert_eq!(json["parentChangeKey"], serde_json::Value::Null);
    assert_eq!(json["userAssignedStatusId"], 41);
    assert_eq!(json["startDate"], "2010-02-01");
    assert_eq!(json["applicationDate"], "2010-02-01");
    assert_eq!(json["removal"], 0);
}

#[test]
fn test_account_type_round_trips_through_json() {
    let account_type = account_types::build_account_type(3);

    let json = serde_json::to_string(&account_type).unwrap();
    let parsed: billing_samples::domain::account::AccountType =
        serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.entity_id, 3);
    assert_eq!(parsed.names.len(), 1);
    assert_eq!(
        parsed.main_subscription.unwrap().period_unit_id,
        constants::PERIOD_UNIT_MONTH
    );
}

/// 回應缺欄位時要能用預設值解回來，遠端服務不保證每個欄位都回。
#[test]
fn test_partial_response_deserializes_with_defaults() {
    let order: billing_samples::domain::order::Order =
        serde_json::from_str(r#"{ "id": 9, "userId": 2 }"#).unwrap();

    assert_eq!(order.id, 9);
    assert_eq!(order.user_id, 2);
    assert!(order.order_lines.is_empty());
    assert!(order.active_since.is_none());
}
