use crate::domain::constants;
use crate::domain::metafield::copy_meta_field_values;
use crate::domain::order::{Order, OrderChange, OrderLine};
use crate::utils::error::{BillingError, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::{HashMap, HashSet, VecDeque};

/// 圖中訂單節點的鍵
pub type NodeId = usize;

/// 圖中單一訂單明細的鍵
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineKey {
    pub node: NodeId,
    pub line: usize,
}

impl LineKey {
    pub fn new(node: NodeId, line: usize) -> Self {
        Self { node, line }
    }
}

/// 訂單階層。
///
/// 訂單放在以 `NodeId` 為鍵的平面表裡，上下層關係一律用鍵對鍵的邊表示，
/// 不依賴物件參照或參照相等。未存檔明細之間的上下層關係也一樣，
/// 存在 `line_parents` 邊表中；已存檔的上層明細直接寫在
/// `OrderLine::parent_line_id`。
#[derive(Debug, Default)]
pub struct OrderGraph {
    nodes: Vec<Order>,
    parents: HashMap<NodeId, NodeId>,
    children: HashMap<NodeId, Vec<NodeId>>,
    line_parents: HashMap<LineKey, LineKey>,
}

impl OrderGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// 放入一張訂單，回傳它在圖中的鍵。
    pub fn insert(&mut self, order: Order) -> NodeId {
        self.nodes.push(order);
        self.nodes.len() - 1
    }

    pub fn order(&self, node: NodeId) -> Result<&Order> {
        self.nodes
            .get(node)
            .ok_or(BillingError::UnknownNode { node })
    }

    pub fn order_mut(&mut self, node: NodeId) -> Result<&mut Order> {
        self.nodes
            .get_mut(node)
            .ok_or(BillingError::UnknownNode { node })
    }

    /// 建立上下層訂單關係；子訂單原本的上層關係會被取代。
    pub fn link(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.check_node(parent)?;
        self.check_node(child)?;
        self.parents.insert(child, parent);
        self.children.entry(parent).or_default().push(child);
        Ok(())
    }

    /// 連結兩條尚未存檔的明細（child 的上層是 parent）。
    pub fn link_lines(&mut self, child: LineKey, parent: LineKey) -> Result<()> {
        self.check_line(child)?;
        self.check_line(parent)?;
        self.line_parents.insert(child, parent);
        Ok(())
    }

    fn check_node(&self, node: NodeId) -> Result<()> {
        if node < self.nodes.len() {
            Ok(())
        } else {
            Err(BillingError::UnknownNode { node })
        }
    }

    fn check_line(&self, key: LineKey) -> Result<()> {
        self.check_node(key.node)?;
        if key.line < self.nodes[key.node].order_lines.len() {
            Ok(())
        } else {
            Err(BillingError::DanglingParentLine {
                node: key.node,
                line: key.line,
            })
        }
    }

    /// 沿上層邊往上走到根節點。
    ///
    /// 指向自己的上層邊視為根節點；更長的迴圈是資料錯誤，回報
    /// `OrderCycle` 而不是默默停下。
    pub fn root_of(&self, start: NodeId) -> Result<NodeId> {
        self.check_node(start)?;

        let mut current = start;
        let mut seen = HashSet::from([start]);
        while let Some(&parent) = self.parents.get(&current) {
            if parent == current {
                break;
            }
            if !seen.insert(parent) {
                return Err(BillingError::OrderCycle { node: parent });
            }
            current = parent;
        }

        Ok(current)
    }

    /// 廣度優先收集所有子孫訂單，每個節點只出現一次，
    /// 與圖的形狀（菱形、重複邊）無關。
    pub fn descendants_of(&self, root: NodeId) -> Vec<NodeId> {
        let mut seen: HashSet<NodeId> = HashSet::from([root]);
        let mut ordered = Vec::new();
        let mut queue: VecDeque<NodeId> = self
            .children
            .get(&root)
            .cloned()
            .unwrap_or_default()
            .into();

        while let Some(node) = queue.pop_front() {
            if seen.insert(node) {
                ordered.push(node);
                if let Some(children) = self.children.get(&node) {
                    queue.extend(children.iter().copied());
                }
            }
        }

        ordered
    }

    /// 從 `start` 所在的訂單階層推導出一批訂單異動。
    ///
    /// 先找出根訂單，再依序走訪根訂單與所有子孫訂單的每條明細，
    /// 每條明細產生一筆異動。最後補上批次內的上層連結：上層明細
    /// 已存檔時以 `parent_order_line_id` 連結，否則以同批異動的
    /// `parent_change_key` 連結，兩者不會同時出現。
    pub fn build_changes(&self, start: NodeId, status_id: i32) -> Result<Vec<OrderChange>> {
        self.check_node(start)?;

        // 生效日取自呼叫端指定的那張訂單，而不是根訂單
        let start_date = self.nodes[start].active_since;
        let root = self.root_of(start)?;

        let mut ordered_nodes = vec![root];
        ordered_nodes.extend(self.descendants_of(root));

        let mut changes: Vec<OrderChange> = Vec::new();
        let mut change_index: HashMap<LineKey, usize> = HashMap::new();

        for node in ordered_nodes {
            let order = &self.nodes[node];
            for (line_idx, line) in order.order_lines.iter().enumerate() {
                let mut change = change_from_line(order, line, status_id, start_date);
                change.change_key = changes.len() as u32;
                change_index.insert(LineKey::new(node, line_idx), changes.len());
                changes.push(change);
            }
        }

        for (child, parent) in &self.line_parents {
            let Some(&child_idx) = change_index.get(child) else {
                // 這條邊屬於別的階層
                continue;
            };
            if changes[child_idx].parent_order_line_id.is_some() {
                // 已存檔的上層明細以 id 連結，id 優先
                continue;
            }
            let parent_idx =
                change_index
                    .get(parent)
                    .ok_or(BillingError::DanglingParentLine {
                        node: parent.node,
                        line: parent.line,
                    })?;
            changes[child_idx].parent_change_key = Some(changes[*parent_idx].change_key);
        }

        Ok(changes)
    }
}

/// 由一條訂單明細建出一筆訂單異動。
///
/// 數量的規則：已存檔的明細代表「無異動」，數量為零；新明細帶原數量；
/// 標記刪除的明細帶負的數量，表示要移除多少。
pub fn change_from_line(
    order: &Order,
    line: &OrderLine,
    status_id: i32,
    start_date: Option<NaiveDate>,
) -> OrderChange {
    let mut change = OrderChange {
        order_change_type_id: constants::ORDER_CHANGE_TYPE_DEFAULT,
        user_assigned_status_id: status_id,
        start_date,
        application_date: start_date,
        ..Default::default()
    };

    // 已存檔的訂單以 id 連結；未存檔的訂單由提交時的批次決定
    match line.order_id {
        Some(order_id) if order_id > 0 => change.order_id = Some(order_id),
        _ if order.id > 0 => change.order_id = Some(order.id),
        _ => {}
    }

    if line.id > 0 {
        change.order_line_id = Some(line.id);
    } else {
        change.use_item = Some(line.use_item as i32);
    }

    if let Some(parent_id) = line.parent_line_id {
        if parent_id > 0 {
            change.parent_order_line_id = Some(parent_id);
        }
    }

    change.description = line.description.clone();
    change.item_id = Some(line.item_id);
    change.asset_ids = line.asset_ids.clone();
    change.price = line.price;

    change.quantity = if line.deleted == 0 {
        if line.id > 0 {
            Decimal::ZERO
        } else {
            line.quantity
        }
    } else {
        -line.quantity
    };
    change.removal = line.deleted;

    change.next_billable_date = order.next_billable_day;
    change.percentage = line.percentage;
    change.meta_fields = copy_meta_field_values(&line.meta_fields, true);

    change
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::metafield::MetaFieldValue;
    use rust_decimal_macros::dec;

    const APPLY_STATUS_ID: i32 = 41;

    fn new_line(item_id: i32, quantity: Decimal) -> OrderLine {
        OrderLine {
            type_id: constants::ORDER_LINE_TYPE_ITEM,
            item_id,
            description: format!("line for product {}", item_id),
            quantity,
            price: dec!(10),
            amount: dec!(10),
            use_item: true,
            ..Default::default()
        }
    }

    fn new_order(lines: Vec<OrderLine>) -> Order {
        Order {
            user_id: 7,
            billing_type_id: constants::ORDER_BILLING_POST_PAID,
            period: constants::PERIOD_UNIT_MONTH,
            currency_id: constants::PRIMARY_CURRENCY_ID,
            active_since: NaiveDate::from_ymd_opt(2010, 2, 1),
            order_lines: lines,
            ..Default::default()
        }
    }

    #[test]
    fn test_root_order_without_children_yields_one_change_per_line() {
        let mut graph = OrderGraph::new();
        let order = new_order(vec![
            new_line(1, dec!(1)),
            new_line(2, dec!(2)),
            new_line(3, dec!(3)),
        ]);
        let node = graph.insert(order);

        let changes = graph.build_changes(node, APPLY_STATUS_ID).unwrap();

        assert_eq!(changes.len(), 3);
        for (idx, change) in changes.iter().enumerate() {
            assert_eq!(change.change_key, idx as u32);
            assert_eq!(change.user_assigned_status_id, APPLY_STATUS_ID);
            assert!(change.parent_change_key.is_none());
            assert!(change.parent_order_line_id.is_none());
            assert_eq!(change.start_date, NaiveDate::from_ymd_opt(2010, 2, 1));
            assert_eq!(change.application_date, change.start_date);
        }
        assert_eq!(changes[1].quantity, dec!(2));
    }

    #[test]
    fn test_deleted_line_negates_quantity() {
        let mut line = new_line(5, dec!(4));
        line.deleted = 1;

        let order = new_order(vec![line]);
        let change = change_from_line(&order, &order.order_lines[0], APPLY_STATUS_ID, None);

        assert_eq!(change.quantity, dec!(-4));
        assert_eq!(change.removal, 1);
    }

    #[test]
    fn test_persisted_line_becomes_noop_change() {
        let mut line = new_line(5, dec!(4));
        line.id = 120;

        let order = new_order(vec![line]);
        let change = change_from_line(&order, &order.order_lines[0], APPLY_STATUS_ID, None);

        assert_eq!(change.quantity, Decimal::ZERO);
        assert_eq!(change.order_line_id, Some(120));
        // 已存檔的明細不需要 use-item 旗標
        assert!(change.use_item.is_none());
    }

    #[test]
    fn test_unsaved_line_carries_use_item_flag_and_quantity() {
        let order = new_order(vec![new_line(5, dec!(4))]);
        let change = change_from_line(&order, &order.order_lines[0], APPLY_STATUS_ID, None);

        assert_eq!(change.quantity, dec!(4));
        assert_eq!(change.use_item, Some(1));
        assert!(change.order_line_id.is_none());
    }

    #[test]
    fn test_persisted_parent_line_links_by_id_across_orders() {
        let mut graph = OrderGraph::new();

        // 已存檔的上層訂單，其明細也已存檔
        let mut parent_line = new_line(1, dec!(1));
        parent_line.id = 100;
        parent_line.order_id = Some(900);
        let mut parent_order = new_order(vec![parent_line]);
        parent_order.id = 900;

        // 未存檔的子訂單，明細指向上層的已存檔明細
        let mut child_line = new_line(2, dec!(5));
        child_line.parent_line_id = Some(100);
        let child_order = new_order(vec![child_line]);

        let parent_node = graph.insert(parent_order);
        let child_node = graph.insert(child_order);
        graph.link(parent_node, child_node).unwrap();

        let changes = graph.build_changes(child_node, APPLY_STATUS_ID).unwrap();

        // 兩張訂單的明細都在同一批異動裡
        assert_eq!(changes.len(), 2);
        let child_change = changes
            .iter()
            .find(|c| c.item_id == Some(2))
            .expect("change for the child line");
        assert_eq!(child_change.parent_order_line_id, Some(100));
        assert!(child_change.parent_change_key.is_none());
    }

    #[test]
    fn test_unsaved_parent_line_links_by_change_key() {
        let mut graph = OrderGraph::new();
        let order = new_order(vec![new_line(1, dec!(1)), new_line(2, dec!(1))]);
        let node = graph.insert(order);
        graph
            .link_lines(LineKey::new(node, 1), LineKey::new(node, 0))
            .unwrap();

        let changes = graph.build_changes(node, APPLY_STATUS_ID).unwrap();

        assert_eq!(changes.len(), 2);
        let parent_change = &changes[0];
        let child_change = &changes[1];
        assert_eq!(child_change.parent_change_key, Some(parent_change.change_key));
        assert!(child_change.parent_order_line_id.is_none());
        assert!(parent_change.parent_change_key.is_none());
    }

    #[test]
    fn test_every_parented_line_links_exactly_one_way() {
        let mut graph = OrderGraph::new();

        let mut persisted_parent = new_line(1, dec!(1));
        persisted_parent.id = 55;
        let mut by_id_child = new_line(2, dec!(1));
        by_id_child.parent_line_id = Some(55);

        let order = new_order(vec![persisted_parent, by_id_child, new_line(3, dec!(1))]);
        let node = graph.insert(order);
        // 第二條明細同時有已存檔的上層 id 與圖上的邊；id 應優先
        graph
            .link_lines(LineKey::new(node, 1), LineKey::new(node, 0))
            .unwrap();

        let changes = graph.build_changes(node, APPLY_STATUS_ID).unwrap();

        for change in &changes {
            let by_id = change.parent_order_line_id.is_some();
            let by_key = change.parent_change_key.is_some();
            assert!(!(by_id && by_key), "parent link must be id or key, not both");
        }
    }

    #[test]
    fn test_self_referential_parent_terminates_as_root() {
        let mut graph = OrderGraph::new();
        let node = graph.insert(new_order(vec![new_line(1, dec!(1))]));
        graph.link(node, node).unwrap();

        assert_eq!(graph.root_of(node).unwrap(), node);

        let changes = graph.build_changes(node, APPLY_STATUS_ID).unwrap();
        assert_eq!(changes.len(), 1);
    }

    #[test]
    fn test_multi_node_parent_cycle_is_an_error() {
        let mut graph = OrderGraph::new();
        let a = graph.insert(new_order(vec![new_line(1, dec!(1))]));
        let b = graph.insert(new_order(vec![new_line(2, dec!(1))]));
        graph.link(b, a).unwrap();
        graph.link(a, b).unwrap();

        let err = graph.build_changes(a, APPLY_STATUS_ID).unwrap_err();
        assert!(matches!(err, BillingError::OrderCycle { .. }));
    }

    #[test]
    fn test_diamond_child_graph_visits_each_order_once() {
        let mut graph = OrderGraph::new();
        let root = graph.insert(new_order(vec![new_line(1, dec!(1))]));
        let left = graph.insert(new_order(vec![new_line(2, dec!(1))]));
        let right = graph.insert(new_order(vec![new_line(3, dec!(1))]));
        let bottom = graph.insert(new_order(vec![new_line(4, dec!(1))]));

        graph.link(root, left).unwrap();
        graph.link(root, right).unwrap();
        graph.link(left, bottom).unwrap();
        graph.link(right, bottom).unwrap();

        assert_eq!(graph.descendants_of(root), vec![left, right, bottom]);

        let changes = graph.build_changes(root, APPLY_STATUS_ID).unwrap();
        assert_eq!(changes.len(), 4);
    }

    #[test]
    fn test_derivation_from_a_child_covers_the_whole_hierarchy() {
        let mut graph = OrderGraph::new();
        let root = graph.insert(new_order(vec![new_line(1, dec!(1))]));

        let mut child_order = new_order(vec![new_line(2, dec!(1))]);
        child_order.active_since = NaiveDate::from_ymd_opt(2011, 6, 15);
        let child = graph.insert(child_order);
        graph.link(root, child).unwrap();

        let changes = graph.build_changes(child, APPLY_STATUS_ID).unwrap();

        assert_eq!(changes.len(), 2);
        // 生效日取自呼叫端那張訂單
        for change in &changes {
            assert_eq!(change.start_date, NaiveDate::from_ymd_opt(2011, 6, 15));
        }
    }

    #[test]
    fn test_meta_field_ids_are_cleared_on_the_change() {
        let mut line = new_line(1, dec!(1));
        line.meta_fields = vec![MetaFieldValue {
            id: 77,
            field_name: "colour".to_string(),
            value: serde_json::json!("red"),
            ..Default::default()
        }];

        let order = new_order(vec![line]);
        let change = change_from_line(&order, &order.order_lines[0], APPLY_STATUS_ID, None);

        assert_eq!(change.meta_fields.len(), 1);
        assert_eq!(change.meta_fields[0].id, 0);
        assert_eq!(change.meta_fields[0].field_name, "colour");
    }

    #[test]
    fn test_unknown_node_is_reported() {
        let graph = OrderGraph::new();
        let err = graph.build_changes(3, APPLY_STATUS_ID).unwrap_err();
        assert!(matches!(err, BillingError::UnknownNode { node: 3 }));
    }

    #[test]
    fn test_order_id_preferred_from_the_line() {
        let mut line = new_line(1, dec!(1));
        line.order_id = Some(42);
        let mut order = new_order(vec![line]);
        order.id = 99;

        let change = change_from_line(&order, &order.order_lines[0], APPLY_STATUS_ID, None);
        assert_eq!(change.order_id, Some(42));
    }
}
