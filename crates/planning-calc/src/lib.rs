//! # Planning Calculation Engine
//!
//! 生產計劃計算引擎：子件需求、限制料產能、計劃成本

pub mod availability;
pub mod calculator;
pub mod capacity;
pub mod cost_rollup;
pub mod requirement;

// Re-export 主要類型
pub use availability::available_qty;
pub use calculator::PlanningCalculator;
pub use capacity::{analyze_capacity, CapacityAnalyzer};
pub use cost_rollup::{good_units_per_batch, rollup_cost, CostRollupCalculator};
pub use requirement::{compute_need, ComponentNeed, RequirementCalculator};

use planning_core::{CapacityReport, CostReport};
use serde::{Deserialize, Serialize};

/// 計劃計算結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanningResult {
    /// 產能報表
    pub capacity: CapacityReport,

    /// 成本報表
    pub cost: CostReport,

    /// 警告信息
    pub warnings: Vec<PlanningWarning>,
}

impl PlanningResult {
    /// 是否有警告等級以上的訊息
    pub fn has_warnings(&self) -> bool {
        self.warnings
            .iter()
            .any(|w| w.severity == WarningSeverity::Warning)
    }
}

/// 計劃警告
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanningWarning {
    pub item_id: String,
    pub message: String,
    pub severity: WarningSeverity,
}

impl PlanningWarning {
    pub fn new(item_id: String, message: String, severity: WarningSeverity) -> Self {
        Self {
            item_id,
            message,
            severity,
        }
    }

    pub fn info(item_id: String, message: String) -> Self {
        Self::new(item_id, message, WarningSeverity::Info)
    }

    pub fn warning(item_id: String, message: String) -> Self {
        Self::new(item_id, message, WarningSeverity::Warning)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningSeverity {
    Info,
    Warning,
}
