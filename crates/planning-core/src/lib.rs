//! # Planning Core
//!
//! 生產計劃引擎的核心資料模型與類型定義

pub mod bom;
pub mod config;
pub mod cost;
pub mod input;
pub mod inventory;
pub mod numeric;
pub mod report;

// Re-export 主要類型
pub use bom::{validate_bom, BomComponentRow, BomHeader, BomIssue, BomStatus};
pub use config::{PlanningConfig, ReleaseParameters};
pub use cost::{ItemCost, ItemCostTable};
pub use input::PlanningInput;
pub use inventory::{InventoryIndex, InventoryLot};
pub use report::{CapacityReport, ComponentCapacity, CostLine, CostReport, LimitingComponent};

/// 計劃引擎錯誤類型
///
/// 計算本身不會失敗；錯誤只發生在輸入與配置的邊界。
#[derive(Debug, thiserror::Error)]
pub enum PlanningError {
    #[error("無效的輸入資料: {0}")]
    InvalidInput(#[from] serde_json::Error),

    #[error("無效的配置: {0}")]
    InvalidConfig(String),

    #[error("無效的日期: {0}")]
    InvalidDate(String),
}

pub type Result<T> = std::result::Result<T, PlanningError>;
