//! BOM 模型與驗證

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

use crate::numeric::parse_decimal_lenient;

/// BOM 狀態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BomStatus {
    /// 草稿
    #[default]
    Draft,
    /// 生效
    Active,
    /// 凍結
    Hold,
    /// 作廢
    Obsolete,
}

/// BOM 表頭
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BomHeader {
    /// BOM 編號
    pub bom_id: String,

    /// 父件（成品）物料ID
    pub parent_item_id: String,

    /// 版次
    pub revision: String,

    /// 狀態
    pub status: BomStatus,

    /// 生效日期
    pub effective_date: Option<NaiveDate>,

    /// 說明
    pub description: Option<String>,
}

impl BomHeader {
    /// 創建新的 BOM 表頭（草稿，版次 v1）
    pub fn new(bom_id: String, parent_item_id: String) -> Self {
        Self {
            bom_id,
            parent_item_id,
            revision: "v1".to_string(),
            status: BomStatus::Draft,
            effective_date: None,
            description: None,
        }
    }

    /// 建構器模式：設置版次
    pub fn with_revision(mut self, revision: String) -> Self {
        self.revision = revision;
        self
    }

    /// 建構器模式：設置狀態
    pub fn with_status(mut self, status: BomStatus) -> Self {
        self.status = status;
        self
    }

    /// 建構器模式：設置生效日期
    pub fn with_effective_date(mut self, date: NaiveDate) -> Self {
        self.effective_date = Some(date);
        self
    }

    /// 建構器模式：設置說明
    pub fn with_description(mut self, description: String) -> Self {
        self.description = Some(description);
        self
    }
}

/// BOM 子件行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BomComponentRow {
    /// 行識別碼（僅供畫面標示限制料，不參與計算）
    ///
    /// JSON 未帶 `key` 時為 nil，由 [`crate::PlanningInput`] 依行位置補上。
    #[serde(default)]
    pub key: Uuid,

    /// 子件物料ID
    pub item_id: String,

    /// 單位用量（每 1 個成品）
    pub qty_per_unit: Decimal,

    /// 損耗率（%），加在單位用量之上
    #[serde(default)]
    pub scrap_pct: Decimal,

    /// 單位（僅供顯示，不做換算）
    #[serde(default)]
    pub uom: String,

    /// 備註
    #[serde(default)]
    pub notes: Option<String>,
}

impl BomComponentRow {
    /// 創建新的子件行（損耗率 0）
    pub fn new(item_id: String, qty_per_unit: Decimal, uom: String) -> Self {
        Self {
            key: Uuid::new_v4(),
            item_id,
            qty_per_unit,
            scrap_pct: Decimal::ZERO,
            uom,
            notes: None,
        }
    }

    /// 從表單原始文字建立子件行
    ///
    /// 數量與損耗率以寬鬆規則解析，空白或非數字視為 0。
    pub fn from_form(item_id: &str, qty: &str, scrap: &str, uom: &str) -> Self {
        Self::new(
            item_id.trim().to_string(),
            parse_decimal_lenient(qty),
            uom.trim().to_string(),
        )
        .with_scrap_pct(parse_decimal_lenient(scrap))
    }

    /// 建構器模式：設置損耗率
    pub fn with_scrap_pct(mut self, scrap_pct: Decimal) -> Self {
        self.scrap_pct = scrap_pct;
        self
    }

    /// 建構器模式：設置備註
    pub fn with_notes(mut self, notes: String) -> Self {
        self.notes = Some(notes);
        self
    }

    /// 建構器模式：設置行識別碼
    pub fn with_key(mut self, key: Uuid) -> Self {
        self.key = key;
        self
    }

    /// 是否構成實際需求
    ///
    /// 必須有物料、用量 > 0 且損耗率 >= 0，否則此行視為零需求。
    pub fn is_demand(&self) -> bool {
        !self.item_id.trim().is_empty()
            && self.qty_per_unit > Decimal::ZERO
            && self.scrap_pct >= Decimal::ZERO
    }

    /// 是否為完全空白的行（畫面上新增但尚未填寫）
    pub fn is_blank(&self) -> bool {
        self.item_id.trim().is_empty()
            && self.qty_per_unit.is_zero()
            && self.scrap_pct.is_zero()
            && self.uom.trim().is_empty()
            && self.notes.as_deref().map_or(true, |n| n.trim().is_empty())
    }
}

/// BOM 驗證問題
///
/// 只用於畫面提示（啟用前必須排除），不會中斷計算。行號從 1 開始。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BomIssue {
    #[error("Parent Item is required.")]
    ParentRequired,

    #[error("BOM ID is required.")]
    BomIdRequired,

    #[error("Add at least one component.")]
    NoComponents,

    #[error("Row {0}: Component item required.")]
    ComponentRequired(usize),

    #[error("Row {0}: Quantity must be > 0.")]
    QuantityNotPositive(usize),

    #[error("Row {0}: UoM required.")]
    UomRequired(usize),

    #[error("Row {0}: Scrap % cannot be negative.")]
    NegativeScrap(usize),

    #[error("Row {0}: Component cannot equal the parent item.")]
    ComponentEqualsParent(usize),

    #[error("Row {row}: Component {item_id} is already listed.")]
    DuplicateComponent { row: usize, item_id: String },
}

/// 驗證 BOM
///
/// 空白行會被略過；行號以非空白行重新編號，與畫面顯示一致。
pub fn validate_bom(header: &BomHeader, rows: &[BomComponentRow]) -> Vec<BomIssue> {
    let mut issues = Vec::new();
    let parent_id = header.parent_item_id.trim();

    if parent_id.is_empty() {
        issues.push(BomIssue::ParentRequired);
    }
    if header.bom_id.trim().is_empty() {
        issues.push(BomIssue::BomIdRequired);
    }

    let filled: Vec<&BomComponentRow> = rows.iter().filter(|r| !r.is_blank()).collect();
    if filled.is_empty() {
        issues.push(BomIssue::NoComponents);
    }

    let mut seen: HashSet<&str> = HashSet::new();
    for (idx, row) in filled.iter().enumerate() {
        let row_no = idx + 1;
        let item_id = row.item_id.trim();

        if item_id.is_empty() {
            issues.push(BomIssue::ComponentRequired(row_no));
        }
        if row.qty_per_unit <= Decimal::ZERO {
            issues.push(BomIssue::QuantityNotPositive(row_no));
        }
        if row.uom.trim().is_empty() {
            issues.push(BomIssue::UomRequired(row_no));
        }
        if row.scrap_pct < Decimal::ZERO {
            issues.push(BomIssue::NegativeScrap(row_no));
        }
        if !item_id.is_empty() && item_id == parent_id {
            issues.push(BomIssue::ComponentEqualsParent(row_no));
        }
        if !item_id.is_empty() && !seen.insert(item_id) {
            issues.push(BomIssue::DuplicateComponent {
                row: row_no,
                item_id: item_id.to_string(),
            });
        }
    }

    issues
}
