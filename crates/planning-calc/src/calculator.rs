//! 生產計劃主計算器

use planning_core::{
    BomComponentRow, CapacityReport, InventoryIndex, InventoryLot, ItemCostTable, PlanningConfig,
    PlanningInput, ReleaseParameters,
};
use rust_decimal::Decimal;

use crate::capacity::CapacityAnalyzer;
use crate::cost_rollup::CostRollupCalculator;
use crate::{PlanningResult, PlanningWarning};

/// 生產計劃計算器
///
/// 庫存索引與成本表在建立時整理一次，之後每次表單變動只需呼叫 `calculate`。
pub struct PlanningCalculator {
    /// 以物料ID索引的庫存批次
    inventory: InventoryIndex,

    /// 物料成本
    costs: ItemCostTable,

    /// 引擎配置
    config: PlanningConfig,
}

impl PlanningCalculator {
    /// 創建新的計劃計算器
    pub fn new(lots: &[InventoryLot], costs: ItemCostTable, config: PlanningConfig) -> Self {
        Self {
            inventory: InventoryIndex::new(lots),
            costs,
            config,
        }
    }

    /// 以輸入包建立計算器並直接計算
    pub fn calculate_input(input: &PlanningInput, config: PlanningConfig) -> PlanningResult {
        let calculator = Self::new(&input.lots, input.costs.clone(), config);
        calculator.calculate(&input.rows, &input.release)
    }

    /// 主計算入口
    pub fn calculate(&self, rows: &[BomComponentRow], params: &ReleaseParameters) -> PlanningResult {
        tracing::info!(
            "開始產能與成本計算：BOM {} 行，庫存物料 {} 種，批量 {}，良率 {}%",
            rows.len(),
            self.inventory.item_count(),
            params.effective_batch_size(),
            params.effective_yield_pct()
        );

        let start_time = std::time::Instant::now();

        // Step 1: 產能分析
        let capacity = if self.config.use_parallel(rows.len()) {
            tracing::debug!("Step 1: 產能分析（平行）");
            CapacityAnalyzer::analyze_parallel(rows, &self.inventory, params)
        } else {
            tracing::debug!("Step 1: 產能分析");
            CapacityAnalyzer::analyze(rows, &self.inventory, params)
        };

        // Step 2: 成本彙總
        tracing::debug!("Step 2: 成本彙總");
        let cost = CostRollupCalculator::rollup(rows, params, &self.costs);

        // Step 3: 警告
        let warnings = self.collect_warnings(rows, &capacity);

        match &capacity.limiting_component {
            Some(limiting) => tracing::info!(
                "限制料 {}：可生產 {} 批，現可得良品 {}",
                limiting.item_id,
                limiting.batches_possible,
                capacity.good_units_now
            ),
            None => tracing::info!("沒有限制料（無實際需求）"),
        }
        tracing::info!("產能與成本計算完成，耗時 {:?}", start_time.elapsed());

        PlanningResult {
            capacity,
            cost,
            warnings,
        }
    }

    /// 收集計算警告（依 BOM 行順序）
    fn collect_warnings(
        &self,
        rows: &[BomComponentRow],
        capacity: &CapacityReport,
    ) -> Vec<PlanningWarning> {
        let mut warnings = Vec::new();

        for row in rows.iter().filter(|r| r.is_demand()) {
            if !self.costs.contains(&row.item_id) {
                warnings.push(PlanningWarning::info(
                    row.item_id.clone(),
                    "無成本資料，以 0 計算".to_string(),
                ));
            }
            if !self.inventory.has_lots(&row.item_id) {
                warnings.push(PlanningWarning::warning(
                    row.item_id.clone(),
                    "無庫存批次，可用量為 0".to_string(),
                ));
            }
        }

        if let Some(limiting) = &capacity.limiting_component {
            if limiting.batches_possible.is_zero() {
                warnings.push(PlanningWarning::warning(
                    limiting.item_id.clone(),
                    "限制料庫存不足一批".to_string(),
                ));
            }
        }

        warnings
    }

    /// 物料可用量
    pub fn available(&self, item_id: &str) -> Decimal {
        self.inventory.available(item_id)
    }

    /// 獲取庫存索引引用
    pub fn inventory(&self) -> &InventoryIndex {
        &self.inventory
    }

    /// 獲取成本表引用
    pub fn costs(&self) -> &ItemCostTable {
        &self.costs
    }

    /// 獲取配置引用
    pub fn config(&self) -> &PlanningConfig {
        &self.config
    }
}
