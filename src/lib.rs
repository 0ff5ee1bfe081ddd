//! # Production Planning
//!
//! BOM 產能與計劃成本引擎的對外入口。
//!
//! ```
//! use production_planning::prelude::*;
//!
//! let rows = vec![
//!     BomComponentRow::from_form("ITM-001", "2", "10", "pcs"),
//! ];
//! let lots = vec![InventoryLot::new("ITM-001".to_string(), "A1".to_string(), Decimal::from(5000))];
//! let costs = ItemCostTable::new().with_cost("ITM-001", Decimal::ONE);
//!
//! let calculator = PlanningCalculator::new(&lots, costs, PlanningConfig::default());
//! let result = calculator.calculate(&rows, &ReleaseParameters::default());
//!
//! assert_eq!(result.capacity.good_units_now, Decimal::from(1900));
//! ```

pub use planning_calc;
pub use planning_core;

/// 常用類型
pub mod prelude {
    pub use planning_calc::{
        analyze_capacity, available_qty, compute_need, good_units_per_batch, rollup_cost,
        CapacityAnalyzer, ComponentNeed, CostRollupCalculator, PlanningCalculator,
        PlanningResult, PlanningWarning, RequirementCalculator, WarningSeverity,
    };
    pub use planning_core::{
        validate_bom, BomComponentRow, BomHeader, BomIssue, BomStatus, CapacityReport,
        ComponentCapacity, CostLine, CostReport, InventoryIndex, InventoryLot, ItemCost,
        ItemCostTable, LimitingComponent, PlanningConfig, PlanningError, PlanningInput,
        ReleaseParameters,
    };
    pub use rust_decimal::Decimal;
}
