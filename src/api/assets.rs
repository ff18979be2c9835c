use crate::api::client::BillingClient;
use crate::domain::asset::{Asset, AssetAssignment, AssetSearchResult, AssetTransition};
use crate::domain::search::SearchCriteria;
use crate::utils::error::Result;
use chrono::NaiveDate;
use serde_json::json;

impl BillingClient {
    pub async fn create_asset(&self, asset: &Asset) -> Result<i32> {
        self.call("createAsset", json!({ "asset": asset })).await
    }

    pub async fn get_asset(&self, asset_id: i32) -> Result<Asset> {
        self.call("getAsset", json!({ "assetId": asset_id })).await
    }

    pub async fn update_asset(&self, asset: &Asset) -> Result<()> {
        self.call_void("updateAsset", json!({ "asset": asset }))
            .await
    }

    pub async fn delete_asset(&self, asset_id: i32) -> Result<()> {
        self.call_void("deleteAsset", json!({ "assetId": asset_id }))
            .await
    }

    pub async fn reserve_asset(&self, asset_id: i32, user_id: i32) -> Result<()> {
        self.call_void(
            "reserveAsset",
            json!({ "assetId": asset_id, "userId": user_id }),
        )
        .await
    }

    pub async fn release_asset(&self, asset_id: i32, user_id: i32) -> Result<()> {
        self.call_void(
            "releaseAsset",
            json!({ "assetId": asset_id, "userId": user_id }),
        )
        .await
    }

    pub async fn get_assets_for_category(&self, category_id: i32) -> Result<Vec<i32>> {
        self.call("getAssetsForCategory", json!({ "itemTypeId": category_id }))
            .await
    }

    pub async fn get_assets_for_item(&self, item_id: i32) -> Result<Vec<i32>> {
        self.call("getAssetsForItem", json!({ "itemId": item_id }))
            .await
    }

    pub async fn find_assets(
        &self,
        item_id: i32,
        criteria: &SearchCriteria,
    ) -> Result<AssetSearchResult> {
        self.call(
            "findAssets",
            json!({ "itemId": item_id, "searchCriteria": criteria }),
        )
        .await
    }

    pub async fn get_asset_transitions(&self, asset_id: i32) -> Result<Vec<AssetTransition>> {
        self.call("getAssetTransitions", json!({ "assetId": asset_id }))
            .await
    }

    /// 從 CSV 檔批次匯入資產。檔案路徑指的是遠端服務看得到的路徑。
    #[allow(clippy::too_many_arguments)]
    pub async fn start_import_asset_job(
        &self,
        item_id: i32,
        identifier_column: &str,
        notes_column: &str,
        global_column: &str,
        entities_column: &str,
        file_path: &str,
        error_file_path: &str,
    ) -> Result<()> {
        self.call_void(
            "startImportAssetJob",
            json!({
                "itemId": item_id,
                "identifierColumn": identifier_column,
                "notesColumn": notes_column,
                "globalColumn": global_column,
                "entitiesColumn": entities_column,
                "filePath": file_path,
                "errorFilePath": error_file_path,
            }),
        )
        .await
    }

    pub async fn get_asset_assignments_for_asset(
        &self,
        asset_id: i32,
    ) -> Result<Vec<AssetAssignment>> {
        self.call("getAssetAssignmentsForAsset", json!({ "assetId": asset_id }))
            .await
    }

    pub async fn get_asset_assignments_for_order(
        &self,
        order_id: i32,
    ) -> Result<Vec<AssetAssignment>> {
        self.call("getAssetAssignmentsForOrder", json!({ "orderId": order_id }))
            .await
    }

    pub async fn find_order_for_asset(&self, asset_id: i32, date: NaiveDate) -> Result<i32> {
        self.call(
            "findOrderForAsset",
            json!({ "assetId": asset_id, "date": date }),
        )
        .await
    }

    pub async fn find_orders_for_asset_and_date_range(
        &self,
        asset_id: i32,
        since: NaiveDate,
        until: NaiveDate,
    ) -> Result<Vec<i32>> {
        self.call(
            "findOrdersForAssetAndDateRange",
            json!({ "assetId": asset_id, "since": since, "until": until }),
        )
        .await
    }
}
