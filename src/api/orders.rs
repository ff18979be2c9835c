use crate::api::client::BillingClient;
use crate::domain::order::{
    Order, OrderChange, OrderChangeStatus, OrderChangeType, OrderLine, OrderPeriod, OrderStatus,
    OrderStatusFlag,
};
use crate::utils::error::Result;
use serde_json::json;

impl BillingClient {
    /// 建立訂單。`changes` 通常由 `OrderGraph::build_changes` 產生。
    pub async fn create_order(&self, order: &Order, changes: &[OrderChange]) -> Result<i32> {
        self.call(
            "createOrder",
            json!({ "order": order, "orderChanges": changes }),
        )
        .await
    }

    pub async fn get_order(&self, order_id: i32) -> Result<Order> {
        self.call("getOrder", json!({ "orderId": order_id })).await
    }

    pub async fn update_order(&self, order: &Order, changes: &[OrderChange]) -> Result<()> {
        self.call_void(
            "updateOrder",
            json!({ "order": order, "orderChanges": changes }),
        )
        .await
    }

    pub async fn delete_order(&self, order_id: i32) -> Result<()> {
        self.call_void("deleteOrder", json!({ "orderId": order_id }))
            .await
    }

    pub async fn get_order_line(&self, order_line_id: i32) -> Result<OrderLine> {
        self.call("getOrderLine", json!({ "orderLineId": order_line_id }))
            .await
    }

    pub async fn update_order_line(&self, order_line: &OrderLine) -> Result<()> {
        self.call_void("updateOrderLine", json!({ "orderLine": order_line }))
            .await
    }

    pub async fn get_latest_order(&self, user_id: i32) -> Result<Order> {
        self.call("getLatestOrder", json!({ "userId": user_id }))
            .await
    }

    pub async fn get_last_orders(&self, user_id: i32, number: i32) -> Result<Vec<i32>> {
        self.call(
            "getLastOrders",
            json!({ "userId": user_id, "number": number }),
        )
        .await
    }

    pub async fn get_latest_order_by_item_type(
        &self,
        user_id: i32,
        item_type_id: i32,
    ) -> Result<Order> {
        self.call(
            "getLatestOrderByItemType",
            json!({ "userId": user_id, "itemTypeId": item_type_id }),
        )
        .await
    }

    pub async fn get_last_orders_by_item_type(
        &self,
        user_id: i32,
        item_type_id: i32,
        number: i32,
    ) -> Result<Vec<i32>> {
        self.call(
            "getLastOrdersByItemType",
            json!({ "userId": user_id, "itemTypeId": item_type_id, "number": number }),
        )
        .await
    }

    pub async fn create_order_period(&self, period: &OrderPeriod) -> Result<i32> {
        self.call("createOrderPeriod", json!({ "orderPeriod": period }))
            .await
    }

    pub async fn get_order_periods(&self) -> Result<Vec<OrderPeriod>> {
        self.call("getOrderPeriods", json!({})).await
    }

    pub async fn update_order_periods(&self, periods: &[OrderPeriod]) -> Result<()> {
        self.call_void("updateOrderPeriods", json!({ "orderPeriods": periods }))
            .await
    }

    pub async fn delete_order_period(&self, period_id: i32) -> Result<()> {
        self.call_void("deleteOrderPeriod", json!({ "orderPeriodId": period_id }))
            .await
    }

    pub async fn get_default_order_status_id(
        &self,
        flag: OrderStatusFlag,
        entity_id: i32,
    ) -> Result<i32> {
        self.call(
            "getDefaultOrderStatusId",
            json!({ "flag": flag, "entityId": entity_id }),
        )
        .await
    }

    pub async fn find_order_status_by_id(&self, order_status_id: i32) -> Result<OrderStatus> {
        self.call(
            "findOrderStatusById",
            json!({ "orderStatusId": order_status_id }),
        )
        .await
    }

    pub async fn create_update_order_status(&self, status: &OrderStatus) -> Result<i32> {
        self.call("createUpdateOrderStatus", json!({ "orderStatus": status }))
            .await
    }

    pub async fn delete_order_status(&self, status: &OrderStatus) -> Result<()> {
        self.call_void("deleteOrderStatus", json!({ "orderStatus": status }))
            .await
    }

    pub async fn create_update_order_change_type(
        &self,
        change_type: &OrderChangeType,
    ) -> Result<i32> {
        self.call(
            "createUpdateOrderChangeType",
            json!({ "orderChangeType": change_type }),
        )
        .await
    }

    pub async fn get_order_change_type_by_id(&self, change_type_id: i32) -> Result<OrderChangeType> {
        self.call(
            "getOrderChangeTypeById",
            json!({ "orderChangeTypeId": change_type_id }),
        )
        .await
    }

    pub async fn delete_order_change_type(&self, change_type_id: i32) -> Result<()> {
        self.call_void(
            "deleteOrderChangeType",
            json!({ "orderChangeTypeId": change_type_id }),
        )
        .await
    }

    pub async fn get_order_change_types_for_company(&self) -> Result<Vec<OrderChangeType>> {
        self.call("getOrderChangeTypesForCompany", json!({})).await
    }

    pub async fn create_order_change_status(&self, status: &OrderChangeStatus) -> Result<i32> {
        self.call(
            "createOrderChangeStatus",
            json!({ "orderChangeStatus": status }),
        )
        .await
    }

    pub async fn get_order_change_statuses_for_company(&self) -> Result<Vec<OrderChangeStatus>> {
        self.call("getOrderChangeStatusesForCompany", json!({}))
            .await
    }

    pub async fn update_order_change_status(&self, status: &OrderChangeStatus) -> Result<()> {
        self.call_void(
            "updateOrderChangeStatus",
            json!({ "orderChangeStatus": status }),
        )
        .await
    }

    pub async fn delete_order_change_status(&self, status_id: i32) -> Result<()> {
        self.call_void(
            "deleteOrderChangeStatus",
            json!({ "orderChangeStatusId": status_id }),
        )
        .await
    }
}
