use crate::api::BillingClient;
use crate::app::chapters::{account_types, customers, date, sample_name};
use crate::app::sequence::Chapter;
use crate::domain::constants;
use crate::domain::item::{DatedPrices, Item, ItemCategory, PriceModel, PRICE_FLAT, PRICE_GRADUATED, PRICE_ZERO};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

pub struct ProductsChapter;

#[async_trait]
impl Chapter for ProductsChapter {
    fn name(&self) -> &str {
        "products"
    }

    fn description(&self) -> &str {
        "Product categories, items and price models"
    }

    async fn run(&self, api: &BillingClient) -> Result<()> {
        run(api).await
    }
}

pub async fn run(api: &BillingClient) -> Result<()> {
    let company_id = api.get_caller_company_id().await?;

    let account_type_id = api
        .create_account_type(&account_types::build_account_type(company_id))
        .await?;
    api.create_user(&customers::build_user(
        account_type_id,
        constants::CUSTOMER_ROLE_ID,
        company_id,
    ))
    .await?;

    // 產品分類
    let category_id = api.create_item_category(&build_item_category(company_id)).await?;
    tracing::info!("Created category with id: {}", category_id);

    let mut category = api.get_item_category_by_id(category_id).await?;

    category.description = sample_name("updatedSampleCategory");
    api.update_item_category(&category).await?;

    let company_categories = api.get_all_item_categories_by_entity_id(company_id).await?;
    let all_categories = api.get_all_item_categories().await?;
    tracing::info!(
        "Categories in company: {}, overall: {}",
        company_categories.len(),
        all_categories.len()
    );

    // 產品
    let product_code = sample_name("sampleProduct");
    let today = chrono::Utc::now().date_naive();
    let item = build_item(
        company_id,
        &product_code,
        category_id,
        0,
        with_flat_price(today, Decimal::from(10)),
    );
    let item_id = api.create_item(&item).await?;
    tracing::info!("Created item with id: {}", item_id);

    // 也可以用產品代碼反查 id
    let item_id = api.get_item_id(&product_code).await?;

    // 客戶與定價欄位可以是 None，會回傳預設定價
    let mut item = api.get_item(item_id, None, None).await?;
    tracing::info!("Created item: {:?}", item);

    item.description = format!("Updated description for {}", product_code);
    api.update_item(&item).await?;
    tracing::info!("Updated item: {:?}", item);

    let all_items = api.get_all_items().await?;
    let items_by_category = api.get_item_by_category(category_id).await?;
    let items_by_entity = api.get_all_items_by_entity_id(company_id).await?;
    tracing::info!(
        "Items overall: {}, in category: {}, in company: {}",
        all_items.len(),
        items_by_category.len(),
        items_by_entity.len()
    );

    api.delete_item(item_id).await?;
    // 分類下的產品都刪掉之後，分類本身才能刪除
    api.delete_item_category(category_id).await?;

    Ok(())
}

pub fn build_item_category(company_id: i32) -> ItemCategory {
    ItemCategory {
        description: sample_name("sampleCategory"),
        entity_id: company_id,
        entities: vec![company_id],
        // global 為 true 時會蓋過上面的 entities 清單
        global: false,
        order_line_type_id: constants::ORDER_LINE_TYPE_ITEM,
        one_per_order: false,
        one_per_customer: false,
        allow_asset_management: 0,
        ..Default::default()
    }
}

pub fn build_item(
    company_id: i32,
    product_code: &str,
    category_id: i32,
    asset_managed: i32,
    prices: DatedPrices,
) -> Item {
    Item {
        number: product_code.to_string(),
        description: format!("Description for {}", product_code),
        types: vec![category_id],
        excluded_types: Vec::new(),
        active_since: Some(date(2006, 2, 1)),
        active_until: Some(date(2026, 2, 1)),
        entity_id: company_id,
        entities: vec![company_id],
        global: false,
        deleted: 0,
        asset_management_enabled: asset_managed,
        default_prices: prices,
        ..Default::default()
    }
}

pub fn zero_price_model() -> PriceModel {
    PriceModel::new(PRICE_ZERO, Decimal::ZERO, constants::PRIMARY_CURRENCY_ID)
}

pub fn flat_price_model(rate: Decimal) -> PriceModel {
    PriceModel::new(PRICE_FLAT, rate, constants::PRIMARY_CURRENCY_ID)
}

/// 階梯式定價，`included` 是費率內含的免費數量
pub fn graduated_price_model(rate: Decimal, included: &str) -> PriceModel {
    let mut model = PriceModel::new(PRICE_GRADUATED, rate, constants::PRIMARY_CURRENCY_ID);
    model.add_attribute("included", included);
    model
}

pub fn with_zero_price(from_date: NaiveDate) -> DatedPrices {
    DatedPrices::from([(from_date, zero_price_model())])
}

pub fn with_flat_price(from_date: NaiveDate, rate: Decimal) -> DatedPrices {
    DatedPrices::from([(from_date, flat_price_model(rate))])
}

pub fn with_graduated_price(from_date: NaiveDate, rate: Decimal, included: &str) -> DatedPrices {
    DatedPrices::from([(from_date, graduated_price_model(rate, included))])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graduated_price_model_carries_included_attribute() {
        let model = graduated_price_model(Decimal::from(10), "100");
        assert_eq!(model.strategy, PRICE_GRADUATED);
        assert_eq!(model.attributes.get("included").map(String::as_str), Some("100"));
    }

    #[test]
    fn test_with_flat_price_keys_by_start_date() {
        let from = date(2010, 2, 1);
        let prices = with_flat_price(from, Decimal::from(10));
        assert_eq!(prices.len(), 1);
        assert_eq!(prices.get(&from).unwrap().strategy, PRICE_FLAT);
    }
}
