use crate::api::BillingClient;
use crate::app::chapters::{account_types, customers, date, order_config, products, sample_name};
use crate::app::sequence::Chapter;
use crate::core::{change_from_line, OrderGraph};
use crate::domain::asset::{Asset, AssetStatus};
use crate::domain::constants;
use crate::domain::item::ItemCategory;
use crate::domain::order::ApplyToOrder;
use crate::domain::search::{BasicFilter, FilterConstraint, SearchCriteria, SortDirection};
use crate::utils::error::{BillingError, Result};
use async_trait::async_trait;
use rust_decimal::Decimal;

const ENABLED: i32 = 1;
const DISABLED: i32 = 0;

pub struct AssetsChapter {
    import_file: String,
    error_file: String,
}

impl AssetsChapter {
    pub fn new(import_file: String, error_file: String) -> Self {
        Self {
            import_file,
            error_file,
        }
    }
}

#[async_trait]
impl Chapter for AssetsChapter {
    fn name(&self) -> &str {
        "assets"
    }

    fn description(&self) -> &str {
        "Asset management: statuses, reservations, search and CSV import"
    }

    async fn run(&self, api: &BillingClient) -> Result<()> {
        run(api, &self.import_file, &self.error_file).await
    }
}

pub async fn run(api: &BillingClient, import_file: &str, error_file: &str) -> Result<()> {
    let company_id = api.get_caller_company_id().await?;

    // 開啟資產管理的產品分類
    let mut category = products::build_item_category(company_id);
    category.allow_asset_management = 1;
    add_asset_statuses(&mut category);
    let category_id = api.create_item_category(&category).await?;

    // 從分類裡撈出「可用」狀態
    let category = api.get_item_category_by_id(category_id).await?;
    let available_status = category
        .asset_statuses
        .iter()
        .find(|status| status.is_available == 1)
        .cloned()
        .ok_or_else(|| BillingError::ProcessingError {
            message: "category has no available asset status".to_string(),
        })?;

    // 資產型產品
    let product_code = sample_name("sampleProduct");
    let item = products::build_item(
        company_id,
        &product_code,
        category_id,
        1,
        products::with_flat_price(date(2010, 2, 1), Decimal::from(10)),
    );
    let item_id = api.create_item(&item).await?;

    // 兩個資產
    let asset_one_id = api
        .create_asset(&build_asset(company_id, item_id, &available_status))
        .await?;
    let asset_two_id = api
        .create_asset(&build_asset(company_id, item_id, &available_status))
        .await?;

    let asset_one = api.get_asset(asset_one_id).await?;
    tracing::info!("Asset one: {:?}", asset_one);
    let asset_two = api.get_asset(asset_two_id).await?;
    tracing::info!("Asset two: {:?}", asset_two);

    let account_type_id = api
        .create_account_type(&account_types::build_account_type(company_id))
        .await?;
    let user_id = api
        .create_user(&customers::build_user(
            account_type_id,
            constants::CUSTOMER_ROLE_ID,
            company_id,
        ))
        .await?;

    // 資產可以保留給客戶，再釋放
    api.reserve_asset(asset_one_id, user_id).await?;
    api.release_asset(asset_one_id, user_id).await?;

    // 用資產建立訂單
    let apply_status = order_config::build_order_change_status(company_id, ApplyToOrder::Yes, 1);
    let apply_status_id = api.create_order_change_status(&apply_status).await?;
    let mut order = super::purchase_orders::build_order(
        user_id,
        Some(date(2016, 2, 1)),
        None,
        constants::PERIOD_UNIT_MONTH,
        constants::ORDER_BILLING_POST_PAID,
        false,
        &[item_id],
    );
    order.order_lines[0].asset_ids = vec![asset_one_id];
    let order_change = change_from_line(
        &order,
        &order.order_lines[0],
        apply_status_id,
        Some(date(2016, 2, 1)),
    );
    let mut graph = OrderGraph::new();
    let node = graph.insert(order);
    let order_id = api
        .create_order(graph.order(node)?, &[order_change])
        .await?;

    // 依分類與依產品查資產
    let assets_for_category = api.get_assets_for_category(category_id).await?;
    tracing::info!("Assets in product category with id {}:", category_id);
    for asset_id in assets_for_category {
        let asset = api.get_asset(asset_id).await?;
        tracing::info!("{:?}", asset);
    }

    let assets_for_item = api.get_assets_for_item(item_id).await?;
    tracing::info!("Assets in product with id {}:", item_id);
    for asset_id in assets_for_item {
        let asset = api.get_asset(asset_id).await?;
        tracing::info!("{:?}", asset);
    }

    // 條件搜尋
    let criteria = find_by_criteria(
        0,
        10,
        "",
        SortDirection::Asc,
        vec![BasicFilter::new(
            "id",
            FilterConstraint::Eq,
            serde_json::json!(asset_one_id),
        )],
    );
    let search_result = api.find_assets(item_id, &criteria).await?;
    tracing::info!("Search result: {:?}", search_result);

    let transitions = api.get_asset_transitions(asset_one_id).await?;
    tracing::info!("Asset one has {} transitions", transitions.len());

    // 從 CSV 批次匯入資產；先在本機驗證檔案內容
    let row_count = validate_import_file(import_file)?;
    tracing::info!("Uploading {} assets from {}", row_count, import_file);
    api.start_import_asset_job(
        item_id,
        "Identifier",
        "Notes",
        "Global",
        "Entities",
        import_file,
        error_file,
    )
    .await?;

    let assignments = api.get_asset_assignments_for_asset(asset_one_id).await?;
    tracing::info!("Asset one has {} assignments", assignments.len());
    let assignments = api.get_asset_assignments_for_order(order_id).await?;
    tracing::info!("Order has {} asset assignments", assignments.len());

    // 用資產反查訂單
    let order_id = api.find_order_for_asset(asset_one_id, date(2000, 2, 1)).await?;
    tracing::info!("Order for asset one: {}", order_id);
    let order_ids = api
        .find_orders_for_asset_and_date_range(asset_one_id, date(2000, 2, 1), date(2015, 2, 1))
        .await?;
    tracing::info!("Orders for asset one in range: {}", order_ids.len());

    let mut asset_one = api.get_asset(asset_one_id).await?;
    asset_one.notes = Some("Updated asset".to_string());
    api.update_asset(&asset_one).await?;

    api.delete_asset(asset_two_id).await?;

    Ok(())
}

pub fn build_asset(company_id: i32, item_id: i32, status: &AssetStatus) -> Asset {
    Asset {
        entity_id: company_id,
        entities: vec![company_id],
        item_id,
        global: true,
        identifier: sample_name("sampleAsset"),
        asset_status_id: status.id,
        ..Default::default()
    }
}

/// 幫產品分類補上三種資產狀態：可用、訂單保存、保留。
pub fn add_asset_statuses(category: &mut ItemCategory) {
    category.asset_statuses.push(AssetStatus {
        description: "Available".to_string(),
        is_available: ENABLED,
        is_default: ENABLED,
        is_order_saved: DISABLED,
        ..Default::default()
    });

    category.asset_statuses.push(AssetStatus {
        description: "Order Saved".to_string(),
        is_available: DISABLED,
        is_default: DISABLED,
        is_order_saved: ENABLED,
        ..Default::default()
    });

    category.asset_statuses.push(AssetStatus {
        description: "Reserved".to_string(),
        is_available: DISABLED,
        is_default: DISABLED,
        is_order_saved: DISABLED,
        ..Default::default()
    });
}

pub fn find_by_criteria(
    offset: i32,
    max: i32,
    sort: &str,
    direction: SortDirection,
    filters: Vec<BasicFilter>,
) -> SearchCriteria {
    SearchCriteria {
        offset,
        max,
        sort: sort.to_string(),
        direction,
        filters,
    }
}

/// 檢查匯入檔：必須有 Identifier 欄位，回傳資料列數。
pub fn validate_import_file(path: &str) -> Result<usize> {
    let mut reader = csv::Reader::from_path(path)?;

    let has_identifier = reader
        .headers()?
        .iter()
        .any(|column| column == "Identifier");
    if !has_identifier {
        return Err(BillingError::ValidationError {
            message: format!("{}: missing required 'Identifier' column", path),
        });
    }

    let mut rows = 0;
    for record in reader.records() {
        record?;
        rows += 1;
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_add_asset_statuses_marks_exactly_one_available() {
        let mut category = ItemCategory::default();
        add_asset_statuses(&mut category);

        assert_eq!(category.asset_statuses.len(), 3);
        let available: Vec<_> = category
            .asset_statuses
            .iter()
            .filter(|s| s.is_available == ENABLED)
            .collect();
        assert_eq!(available.len(), 1);
        assert_eq!(available[0].description, "Available");
    }

    #[test]
    fn test_validate_import_file_counts_rows() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Identifier,Notes,Global,Entities").unwrap();
        writeln!(file, "asset-001,first,true,1").unwrap();
        writeln!(file, "asset-002,second,true,1").unwrap();

        let rows = validate_import_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(rows, 2);
    }

    #[test]
    fn test_validate_import_file_rejects_missing_identifier_column() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Name,Notes").unwrap();
        writeln!(file, "asset-001,first").unwrap();

        let err = validate_import_file(file.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(err, BillingError::ValidationError { .. }));
    }
}
