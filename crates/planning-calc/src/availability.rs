//! 可用量解析

use planning_core::inventory::sort_fefo;
use planning_core::InventoryLot;
use rust_decimal::Decimal;

/// 取得物料的 FEFO 批次清單
pub fn fefo_lots(item_id: &str, lots: &[InventoryLot]) -> Vec<InventoryLot> {
    let mut matching: Vec<InventoryLot> = lots
        .iter()
        .filter(|lot| lot.item_id == item_id)
        .cloned()
        .collect();
    sort_fefo(&mut matching);
    matching
}

/// 物料可用總量
///
/// 依到期日排序後加總所有批次；目前不逐批扣帳，排序不影響結果。
/// 查無批次的物料回傳 0。
pub fn available_qty(item_id: &str, lots: &[InventoryLot]) -> Decimal {
    fefo_lots(item_id, lots)
        .iter()
        .fold(Decimal::ZERO, |sum, lot| sum.saturating_add(lot.usable_qty()))
}
