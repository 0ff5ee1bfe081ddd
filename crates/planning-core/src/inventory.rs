//! 庫存批次模型

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::numeric::non_negative;
use crate::{PlanningError, Result};

/// 庫存批次（單次收料）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryLot {
    /// 物料ID
    pub item_id: String,

    /// 批號
    #[serde(default)]
    pub lot_no: String,

    /// 有效期限（無期限的批次排在最後）
    #[serde(default)]
    pub expiry_date: Option<NaiveDate>,

    /// 現有數量
    pub qty_on_hand: Decimal,
}

impl InventoryLot {
    /// 創建新的庫存批次
    pub fn new(item_id: String, lot_no: String, qty_on_hand: Decimal) -> Self {
        Self {
            item_id,
            lot_no,
            expiry_date: None,
            qty_on_hand,
        }
    }

    /// 從收料紀錄建立批次
    ///
    /// 有效期限為 ISO 日期（YYYY-MM-DD），空白表示無期限。
    pub fn from_record(
        item_id: &str,
        lot_no: &str,
        expiry: &str,
        qty_on_hand: Decimal,
    ) -> Result<Self> {
        let lot = Self::new(item_id.to_string(), lot_no.to_string(), qty_on_hand);
        match parse_expiry(expiry)? {
            Some(date) => Ok(lot.with_expiry_date(date)),
            None => Ok(lot),
        }
    }

    /// 建構器模式：設置有效期限
    pub fn with_expiry_date(mut self, expiry_date: NaiveDate) -> Self {
        self.expiry_date = Some(expiry_date);
        self
    }

    /// 可計入的數量（負數視為 0）
    pub fn usable_qty(&self) -> Decimal {
        non_negative(self.qty_on_hand)
    }

    /// FEFO 排序鍵：有期限者依日期，無期限者最後
    pub fn fefo_key(&self) -> (bool, Option<NaiveDate>) {
        (self.expiry_date.is_none(), self.expiry_date)
    }
}

/// 解析有效期限（空白為無期限）
pub fn parse_expiry(raw: &str) -> Result<Option<NaiveDate>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| PlanningError::InvalidDate(trimmed.to_string()))
}

/// 依 FEFO（先到期先出）排序批次
///
/// 穩定排序：同一到期日的批次維持原有順序。
pub fn sort_fefo(lots: &mut [InventoryLot]) {
    lots.sort_by_key(InventoryLot::fefo_key);
}

/// 以物料ID索引的庫存批次
///
/// 每次計算建立一次，取代逐筆線性搜尋；各物料的批次已按 FEFO 排序。
#[derive(Debug, Clone, Default)]
pub struct InventoryIndex {
    lots_by_item: HashMap<String, Vec<InventoryLot>>,
}

impl InventoryIndex {
    /// 從批次清單建立索引
    pub fn new(lots: &[InventoryLot]) -> Self {
        let mut lots_by_item: HashMap<String, Vec<InventoryLot>> = HashMap::new();
        for lot in lots {
            lots_by_item
                .entry(lot.item_id.clone())
                .or_insert_with(Vec::new)
                .push(lot.clone());
        }
        for item_lots in lots_by_item.values_mut() {
            sort_fefo(item_lots);
        }
        Self { lots_by_item }
    }

    /// 取得物料的 FEFO 批次（未知物料回傳空切片）
    pub fn fefo_lots(&self, item_id: &str) -> &[InventoryLot] {
        self.lots_by_item
            .get(item_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// 物料可用總量
    ///
    /// 僅加總，不逐批扣帳；FEFO 順序保留供日後逐批消耗使用。
    pub fn available(&self, item_id: &str) -> Decimal {
        self.fefo_lots(item_id)
            .iter()
            .fold(Decimal::ZERO, |sum, lot| sum.saturating_add(lot.usable_qty()))
    }

    /// 是否有任何批次
    pub fn has_lots(&self, item_id: &str) -> bool {
        !self.fefo_lots(item_id).is_empty()
    }

    /// 物料數量
    pub fn item_count(&self) -> usize {
        self.lots_by_item.len()
    }

    /// 批次總數
    pub fn lot_count(&self) -> usize {
        self.lots_by_item.values().map(Vec::len).sum()
    }
}
