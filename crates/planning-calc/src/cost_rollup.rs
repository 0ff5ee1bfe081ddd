//! 計劃成本彙總

use planning_core::numeric::safe_div;
use planning_core::{BomComponentRow, CostLine, CostReport, ItemCostTable, ReleaseParameters};
use rust_decimal::Decimal;

use crate::requirement::RequirementCalculator;

/// 成本彙總計算器
pub struct CostRollupCalculator;

impl CostRollupCalculator {
    /// 彙總每批與每個良品的計劃料費
    ///
    /// * 每批料費 = Σ 單位成本 × 每批需求（僅計實際需求的行）
    /// * 每良品料費 = 每批料費 / 每批良品數；無良品時為 0
    pub fn rollup(
        rows: &[BomComponentRow],
        params: &ReleaseParameters,
        costs: &ItemCostTable,
    ) -> CostReport {
        let lines: Vec<CostLine> = rows
            .iter()
            .map(|row| Self::cost_line(row, params.batch_size, costs))
            .collect();

        let cost_per_batch = lines
            .iter()
            .fold(Decimal::ZERO, |sum, line| sum.saturating_add(line.batch_cost));

        let rolled_cost_per_unit = rows
            .iter()
            .filter(|row| row.is_demand())
            .fold(Decimal::ZERO, |sum, row| {
                sum.saturating_add(costs.unit_cost(&row.item_id).saturating_mul(row.qty_per_unit))
            });

        let good_units_per_batch = params.good_units_per_batch();
        let cost_per_net_unit = safe_div(cost_per_batch, good_units_per_batch);

        tracing::debug!(
            "成本彙總: 每批 {}, 每批良品 {}, 每良品 {}",
            cost_per_batch,
            good_units_per_batch,
            cost_per_net_unit
        );

        CostReport {
            lines,
            cost_per_batch,
            good_units_per_batch,
            cost_per_net_unit,
            rolled_cost_per_unit,
        }
    }

    fn cost_line(row: &BomComponentRow, batch_size: Decimal, costs: &ItemCostTable) -> CostLine {
        let need = RequirementCalculator::compute_need(row, batch_size);
        let unit_cost = costs.unit_cost(&row.item_id);

        CostLine {
            row_key: row.key,
            item_id: row.item_id.clone(),
            unit_cost,
            scrap_pct: row.scrap_pct,
            per_unit_need: need.per_unit_need,
            per_batch_need: need.per_batch_need,
            unit_need_cost: unit_cost.saturating_mul(need.per_unit_need),
            batch_cost: unit_cost.saturating_mul(need.per_batch_need),
        }
    }
}

/// 彙總計劃成本
pub fn rollup_cost(
    rows: &[BomComponentRow],
    params: &ReleaseParameters,
    costs: &ItemCostTable,
) -> CostReport {
    CostRollupCalculator::rollup(rows, params, costs)
}

/// 每批良品數 = max(0, 批量) × clamp(良率, 0, 100) / 100
pub fn good_units_per_batch(batch_size: Decimal, yield_pct: Decimal) -> Decimal {
    ReleaseParameters::new(batch_size, yield_pct).good_units_per_batch()
}
