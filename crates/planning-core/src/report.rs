//! 產能與成本報表

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 單一子件的產能分析
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentCapacity {
    /// 對應的 BOM 行
    pub row_key: Uuid,

    /// 物料ID
    pub item_id: String,

    /// 可用量（所有批次加總）
    pub available: Decimal,

    /// 每 1 個成品需求（含損耗）
    pub per_unit_need: Decimal,

    /// 每批需求
    pub per_batch_need: Decimal,

    /// 可生產批數（整數）
    pub batches_possible: Decimal,

    /// 僅受此料限制時可生產的成品數（整數）
    pub max_units: Decimal,
}

impl ComponentCapacity {
    /// 是否有實際需求（才有資格成為限制料）
    pub fn has_demand(&self) -> bool {
        self.per_batch_need > Decimal::ZERO
    }
}

/// 限制料
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimitingComponent {
    /// 在 BOM 行中的位置
    pub index: usize,

    /// 對應的 BOM 行
    pub row_key: Uuid,

    /// 物料ID
    pub item_id: String,

    /// 可生產批數
    pub batches_possible: Decimal,
}

/// 產能報表
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacityReport {
    /// 各子件分析（與 BOM 行順序相同）
    pub components: Vec<ComponentCapacity>,

    /// 限制料（沒有任何實際需求時為 None）
    pub limiting_component: Option<LimitingComponent>,

    /// 每批良品數
    pub good_units_per_batch: Decimal,

    /// 以現有庫存可得的良品數
    pub good_units_now: Decimal,
}

impl CapacityReport {
    /// 限制料可生產批數（無限制料時為 0）
    pub fn limiting_batches(&self) -> Decimal {
        self.limiting_component
            .as_ref()
            .map(|l| l.batches_possible)
            .unwrap_or(Decimal::ZERO)
    }

    /// 是否不受任何子件限制
    pub fn is_unconstrained(&self) -> bool {
        self.limiting_component.is_none()
    }

    /// 指定的 BOM 行是否為限制料
    pub fn is_limiting(&self, row_key: Uuid) -> bool {
        self.limiting_component
            .as_ref()
            .is_some_and(|l| l.row_key == row_key)
    }
}

/// 單一子件的成本明細
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostLine {
    /// 對應的 BOM 行
    pub row_key: Uuid,

    /// 物料ID
    pub item_id: String,

    /// 單位成本
    pub unit_cost: Decimal,

    /// 損耗率（%）
    pub scrap_pct: Decimal,

    /// 每 1 個成品需求（含損耗）
    pub per_unit_need: Decimal,

    /// 每批需求
    pub per_batch_need: Decimal,

    /// 每 1 個成品的料費（含損耗）
    pub unit_need_cost: Decimal,

    /// 每批料費
    pub batch_cost: Decimal,
}

/// 成本報表
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostReport {
    /// 各子件成本明細（與 BOM 行順序相同）
    pub lines: Vec<CostLine>,

    /// 每批料費合計
    pub cost_per_batch: Decimal,

    /// 每批良品數
    pub good_units_per_batch: Decimal,

    /// 每個良品的料費（無良品時為 0）
    pub cost_per_net_unit: Decimal,

    /// 1 個成品的標準料費（不含損耗）
    ///
    /// 只加總實際需求行；負損耗率、空白物料或用量 <= 0 的行不計入。
    pub rolled_cost_per_unit: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn component(key: u128, item_id: &str, batches: i64) -> ComponentCapacity {
        ComponentCapacity {
            row_key: Uuid::from_u128(key),
            item_id: item_id.to_string(),
            available: Decimal::from(batches * 1000),
            per_unit_need: Decimal::ONE,
            per_batch_need: Decimal::from(1000),
            batches_possible: Decimal::from(batches),
            max_units: Decimal::from(batches * 1000),
        }
    }

    fn report(limiting: Option<LimitingComponent>) -> CapacityReport {
        CapacityReport {
            components: vec![component(1, "ITM-001", 4), component(2, "ITM-002", 3)],
            limiting_component: limiting,
            good_units_per_batch: Decimal::from(950),
            good_units_now: Decimal::ZERO,
        }
    }

    #[test]
    fn test_limiting_accessors() {
        let report = report(Some(LimitingComponent {
            index: 1,
            row_key: Uuid::from_u128(2),
            item_id: "ITM-002".to_string(),
            batches_possible: Decimal::from(3),
        }));

        assert_eq!(report.limiting_batches(), Decimal::from(3));
        assert!(!report.is_unconstrained());
        assert!(report.is_limiting(Uuid::from_u128(2)));
        assert!(!report.is_limiting(Uuid::from_u128(1)));
    }

    #[test]
    fn test_unconstrained_report() {
        let report = report(None);

        assert_eq!(report.limiting_batches(), Decimal::ZERO);
        assert!(report.is_unconstrained());
        assert!(!report.is_limiting(Uuid::from_u128(1)));
    }

    #[test]
    fn test_has_demand() {
        let mut idle = component(3, "ITM-010", 0);
        idle.per_batch_need = Decimal::ZERO;

        assert!(component(1, "ITM-001", 4).has_demand());
        assert!(!idle.has_demand());
    }
}
