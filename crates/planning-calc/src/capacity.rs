//! 產能分析（限制料）

use planning_core::numeric::safe_floor_div;
use planning_core::{
    BomComponentRow, CapacityReport, ComponentCapacity, InventoryIndex, InventoryLot,
    LimitingComponent, ReleaseParameters,
};
use rayon::prelude::*;
use rust_decimal::Decimal;

use crate::requirement::RequirementCalculator;

/// 產能分析器
pub struct CapacityAnalyzer;

impl CapacityAnalyzer {
    /// 分析現有庫存可支撐的產能
    pub fn analyze(
        rows: &[BomComponentRow],
        inventory: &InventoryIndex,
        params: &ReleaseParameters,
    ) -> CapacityReport {
        let components: Vec<ComponentCapacity> = rows
            .iter()
            .map(|row| Self::analyze_row(row, inventory, params.batch_size))
            .collect();

        Self::build_report(components, params)
    }

    /// 平行分析各 BOM 行
    ///
    /// 逐行計算可平行，收集時保持輸入順序，限制料仍以循序方式選出，
    /// 結果與 [`CapacityAnalyzer::analyze`] 完全相同。
    pub fn analyze_parallel(
        rows: &[BomComponentRow],
        inventory: &InventoryIndex,
        params: &ReleaseParameters,
    ) -> CapacityReport {
        let components: Vec<ComponentCapacity> = rows
            .par_iter()
            .map(|row| Self::analyze_row(row, inventory, params.batch_size))
            .collect();

        Self::build_report(components, params)
    }

    /// 單行分析
    fn analyze_row(
        row: &BomComponentRow,
        inventory: &InventoryIndex,
        batch_size: Decimal,
    ) -> ComponentCapacity {
        let need = RequirementCalculator::compute_need(row, batch_size);
        let available = inventory.available(&row.item_id);

        let batches_possible = safe_floor_div(available, need.per_batch_need);
        let max_units = safe_floor_div(available, need.per_unit_need);

        tracing::debug!(
            "產能分析 {}: 可用 {}, 每批需求 {}, 可生產 {} 批",
            row.item_id,
            available,
            need.per_batch_need,
            batches_possible
        );

        ComponentCapacity {
            row_key: row.key,
            item_id: row.item_id.clone(),
            available,
            per_unit_need: need.per_unit_need,
            per_batch_need: need.per_batch_need,
            batches_possible,
            max_units,
        }
    }

    fn build_report(components: Vec<ComponentCapacity>, params: &ReleaseParameters) -> CapacityReport {
        let limiting_component = Self::select_limiting(&components);
        let good_units_per_batch = params.good_units_per_batch();

        let limiting_batches = limiting_component
            .as_ref()
            .map(|l| l.batches_possible)
            .unwrap_or(Decimal::ZERO);
        let good_units_now = limiting_batches
            .saturating_mul(good_units_per_batch)
            .floor();

        CapacityReport {
            components,
            limiting_component,
            good_units_per_batch,
            good_units_now,
        }
    }

    /// 選出限制料
    ///
    /// 只考慮每批需求 > 0 的子件，取可生產批數最小者；同分時取最先出現的行。
    pub fn select_limiting(components: &[ComponentCapacity]) -> Option<LimitingComponent> {
        let mut limiting: Option<(usize, &ComponentCapacity)> = None;

        for (index, component) in components.iter().enumerate() {
            if !component.has_demand() {
                continue;
            }
            let is_new_min = match limiting {
                Some((_, current)) => component.batches_possible < current.batches_possible,
                None => true,
            };
            if is_new_min {
                limiting = Some((index, component));
            }
        }

        limiting.map(|(index, component)| LimitingComponent {
            index,
            row_key: component.row_key,
            item_id: component.item_id.clone(),
            batches_possible: component.batches_possible,
        })
    }
}

/// 以批次清單分析產能（內部建立索引）
pub fn analyze_capacity(
    rows: &[BomComponentRow],
    lots: &[InventoryLot],
    params: &ReleaseParameters,
) -> CapacityReport {
    let inventory = InventoryIndex::new(lots);
    CapacityAnalyzer::analyze(rows, &inventory, params)
}
