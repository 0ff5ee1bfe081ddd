//! 子件需求計算

use planning_core::numeric::{non_negative, pct_to_ratio};
use planning_core::BomComponentRow;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 子件需求
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ComponentNeed {
    /// 每 1 個成品需求（含損耗）
    pub per_unit_need: Decimal,
    /// 每批需求
    pub per_batch_need: Decimal,
}

impl ComponentNeed {
    /// 零需求
    pub const NONE: Self = Self {
        per_unit_need: Decimal::ZERO,
        per_batch_need: Decimal::ZERO,
    };

    /// 是否有實際需求
    pub fn has_demand(&self) -> bool {
        self.per_batch_need > Decimal::ZERO
    }
}

/// 需求計算器
pub struct RequirementCalculator;

impl RequirementCalculator {
    /// 計算單行需求
    ///
    /// * 每單位需求 = 用量 × (1 + 損耗率 / 100)
    /// * 每批需求 = 每單位需求 × max(0, 批量)
    ///
    /// 非實際需求的行（無物料、用量 <= 0、損耗率 < 0）一律回傳零需求。
    pub fn compute_need(row: &BomComponentRow, batch_size: Decimal) -> ComponentNeed {
        if !row.is_demand() {
            return ComponentNeed::NONE;
        }

        let scrap_factor = Decimal::ONE.saturating_add(pct_to_ratio(row.scrap_pct));
        let per_unit_need = row.qty_per_unit.saturating_mul(scrap_factor);
        let per_batch_need = per_unit_need.saturating_mul(non_negative(batch_size));

        ComponentNeed {
            per_unit_need,
            per_batch_need,
        }
    }
}

/// 計算單行需求
pub fn compute_need(row: &BomComponentRow, batch_size: Decimal) -> ComponentNeed {
    RequirementCalculator::compute_need(row, batch_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn row(qty: Decimal, scrap: Decimal) -> BomComponentRow {
        BomComponentRow::new("ITM-001".to_string(), qty, "pcs".to_string()).with_scrap_pct(scrap)
    }

    #[test]
    fn test_need_with_scrap() {
        let need = compute_need(&row(Decimal::from(2), Decimal::from(10)), Decimal::from(1000));

        assert_eq!(need.per_unit_need, Decimal::new(22, 1));
        assert_eq!(need.per_batch_need, Decimal::from(2200));
        assert!(need.has_demand());
    }

    #[test]
    fn test_need_without_scrap() {
        let need = compute_need(&row(Decimal::new(5, 1), Decimal::ZERO), Decimal::from(40));

        assert_eq!(need.per_unit_need, Decimal::new(5, 1));
        assert_eq!(need.per_batch_need, Decimal::from(20));
    }

    #[rstest]
    #[case(Decimal::ZERO, Decimal::ZERO)]
    #[case(Decimal::from(-3), Decimal::ZERO)]
    #[case(Decimal::from(2), Decimal::from(-5))]
    fn test_invalid_rows_have_no_demand(#[case] qty: Decimal, #[case] scrap: Decimal) {
        let need = compute_need(&row(qty, scrap), Decimal::from(1000));

        assert_eq!(need, ComponentNeed::NONE);
        assert!(!need.has_demand());
    }

    #[rstest]
    #[case(Decimal::ZERO)]
    #[case(Decimal::from(-100))]
    fn test_zero_or_negative_batch(#[case] batch_size: Decimal) {
        let need = compute_need(&row(Decimal::from(2), Decimal::from(10)), batch_size);

        // 單位需求仍然存在，但整批需求為 0
        assert_eq!(need.per_unit_need, Decimal::new(22, 1));
        assert_eq!(need.per_batch_need, Decimal::ZERO);
        assert!(!need.has_demand());
    }

    #[test]
    fn test_blank_item_has_no_demand() {
        let blank = BomComponentRow::new(String::new(), Decimal::from(2), "pcs".to_string());
        assert_eq!(compute_need(&blank, Decimal::from(1000)), ComponentNeed::NONE);
    }

    #[test]
    fn test_huge_values_saturate() {
        let need = compute_need(&row(Decimal::MAX, Decimal::from(50)), Decimal::MAX);
        assert_eq!(need.per_batch_need, Decimal::MAX);
    }
}
