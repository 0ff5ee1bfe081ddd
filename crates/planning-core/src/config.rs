//! 計劃參數與引擎配置

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::numeric::{clamp_pct, non_negative, parse_decimal_lenient, pct_to_ratio};
use crate::{PlanningError, Result};

/// 預設批量（每批成品數）
pub const DEFAULT_BATCH_SIZE: u32 = 1000;

/// 預設計劃良率（%）
pub const DEFAULT_YIELD_PCT: u32 = 95;

/// 預設平行計算門檻（BOM 行數）
pub const DEFAULT_PARALLEL_ROW_THRESHOLD: usize = 256;

/// 投產參數
///
/// 原始欄位保持使用者輸入值，計算一律透過 `effective_*` 取得夾限後的值。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReleaseParameters {
    /// 每批目標成品數
    pub batch_size: Decimal,

    /// 計劃良率（%）
    pub yield_pct: Decimal,
}

impl ReleaseParameters {
    /// 創建新的投產參數
    pub fn new(batch_size: Decimal, yield_pct: Decimal) -> Self {
        Self {
            batch_size,
            yield_pct,
        }
    }

    /// 從表單原始文字建立
    pub fn from_form(batch_size: &str, yield_pct: &str) -> Self {
        Self::new(
            parse_decimal_lenient(batch_size),
            parse_decimal_lenient(yield_pct),
        )
    }

    /// 建構器模式：設置批量
    pub fn with_batch_size(mut self, batch_size: Decimal) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// 建構器模式：設置良率
    pub fn with_yield_pct(mut self, yield_pct: Decimal) -> Self {
        self.yield_pct = yield_pct;
        self
    }

    /// 有效批量（負數視為 0）
    pub fn effective_batch_size(&self) -> Decimal {
        non_negative(self.batch_size)
    }

    /// 有效良率（夾限到 [0, 100]）
    pub fn effective_yield_pct(&self) -> Decimal {
        clamp_pct(self.yield_pct)
    }

    /// 每批良品數 = 批量 × 良率 / 100
    ///
    /// 產能與成本共用此值，兩份報表因此保持一致。
    pub fn good_units_per_batch(&self) -> Decimal {
        self.effective_batch_size()
            .saturating_mul(pct_to_ratio(self.effective_yield_pct()))
    }
}

impl Default for ReleaseParameters {
    fn default() -> Self {
        Self::new(
            Decimal::from(DEFAULT_BATCH_SIZE),
            Decimal::from(DEFAULT_YIELD_PCT),
        )
    }
}

/// 計劃引擎配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanningConfig {
    /// 預設投產參數
    pub release: ReleaseParameters,

    /// BOM 行數達到此門檻時改用平行計算
    pub parallel_row_threshold: usize,
}

impl PlanningConfig {
    /// 創建預設配置
    pub fn new() -> Self {
        Self {
            release: ReleaseParameters::default(),
            parallel_row_threshold: DEFAULT_PARALLEL_ROW_THRESHOLD,
        }
    }

    /// 從 JSON 載入配置，缺少的欄位使用預設值
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// 建構器模式：設置預設投產參數
    pub fn with_release(mut self, release: ReleaseParameters) -> Self {
        self.release = release;
        self
    }

    /// 建構器模式：設置平行計算門檻
    pub fn with_parallel_row_threshold(mut self, threshold: usize) -> Self {
        self.parallel_row_threshold = threshold;
        self
    }

    /// 檢查配置
    pub fn validate(&self) -> Result<()> {
        if self.parallel_row_threshold == 0 {
            return Err(PlanningError::InvalidConfig(
                "parallel_row_threshold 必須大於 0".to_string(),
            ));
        }
        Ok(())
    }

    /// 是否應使用平行計算
    pub fn use_parallel(&self, row_count: usize) -> bool {
        row_count >= self.parallel_row_threshold
    }
}

impl Default for PlanningConfig {
    fn default() -> Self {
        Self::new()
    }
}
