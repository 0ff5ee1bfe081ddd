//! 物料成本表

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::numeric::non_negative;

/// 物料單位成本
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemCost {
    /// 物料ID
    pub item_id: String,

    /// 單位成本
    pub unit_cost: Decimal,
}

impl ItemCost {
    pub fn new(item_id: String, unit_cost: Decimal) -> Self {
        Self { item_id, unit_cost }
    }
}

/// 以物料ID索引的成本表
///
/// 未登錄的物料成本為 0；負成本視為 0。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemCostTable {
    costs: HashMap<String, Decimal>,
}

impl ItemCostTable {
    /// 創建空的成本表
    pub fn new() -> Self {
        Self::default()
    }

    /// 登錄成本（同一物料以先登錄者為準）
    pub fn insert(&mut self, item_id: String, unit_cost: Decimal) {
        self.costs.entry(item_id).or_insert(unit_cost);
    }

    /// 建構器模式：登錄成本
    pub fn with_cost(mut self, item_id: &str, unit_cost: Decimal) -> Self {
        self.insert(item_id.to_string(), unit_cost);
        self
    }

    /// 查詢單位成本（未知物料為 0）
    pub fn unit_cost(&self, item_id: &str) -> Decimal {
        self.costs
            .get(item_id)
            .copied()
            .map(non_negative)
            .unwrap_or(Decimal::ZERO)
    }

    /// 是否登錄了此物料
    pub fn contains(&self, item_id: &str) -> bool {
        self.costs.contains_key(item_id)
    }

    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }
}

impl FromIterator<ItemCost> for ItemCostTable {
    fn from_iter<I: IntoIterator<Item = ItemCost>>(iter: I) -> Self {
        let mut table = Self::new();
        for cost in iter {
            table.insert(cost.item_id, cost.unit_cost);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_defaults_to_zero() {
        let table = ItemCostTable::new().with_cost("ITM-002", Decimal::new(95, 1));

        assert_eq!(table.unit_cost("ITM-002"), Decimal::new(95, 1));
        assert_eq!(table.unit_cost("ITM-404"), Decimal::ZERO);
        assert!(!table.contains("ITM-404"));
    }

    #[test]
    fn test_first_entry_wins() {
        let table: ItemCostTable = vec![
            ItemCost::new("ITM-001".to_string(), Decimal::new(12, 2)),
            ItemCost::new("ITM-001".to_string(), Decimal::from(99)),
        ]
        .into_iter()
        .collect();

        assert_eq!(table.len(), 1);
        assert_eq!(table.unit_cost("ITM-001"), Decimal::new(12, 2));
    }

    #[test]
    fn test_negative_cost_is_zero() {
        let table = ItemCostTable::new().with_cost("ITM-010", Decimal::from(-3));
        assert_eq!(table.unit_cost("ITM-010"), Decimal::ZERO);
    }
}
