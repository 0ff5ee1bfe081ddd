//! 計劃輸入包（供畫面層以 JSON 傳入）

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::{BomComponentRow, InventoryLot, ItemCostTable, ReleaseParameters, Result};

/// 一次重算所需的全部輸入
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanningInput {
    /// BOM 子件行（順序即限制料同分時的先後）
    #[serde(default, deserialize_with = "deserialize_rows")]
    pub rows: Vec<BomComponentRow>,

    /// 投產參數
    #[serde(default)]
    pub release: ReleaseParameters,

    /// 庫存批次
    #[serde(default)]
    pub lots: Vec<InventoryLot>,

    /// 物料成本（item_id → 單位成本）
    #[serde(default)]
    pub costs: ItemCostTable,
}

impl PlanningInput {
    /// 從 JSON 解析
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// 轉為 JSON
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// 依行位置產生的行識別碼（第 1 行為 1）
pub fn positional_row_key(index: usize) -> Uuid {
    Uuid::from_u128(index as u128 + 1)
}

/// 解析子件行，未帶 `key` 的行以位置補上，同一份 JSON 每次解析結果相同
fn deserialize_rows<'de, D>(
    deserializer: D,
) -> std::result::Result<Vec<BomComponentRow>, D::Error>
where
    D: Deserializer<'de>,
{
    let mut rows = Vec::<BomComponentRow>::deserialize(deserializer)?;
    for (index, row) in rows.iter_mut().enumerate() {
        if row.key.is_nil() {
            row.key = positional_row_key(index);
        }
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_parse_input_bundle() {
        let json = r#"{
            "rows": [
                {"item_id": "ITM-001", "qty_per_unit": "2", "scrap_pct": "10", "uom": "pcs"}
            ],
            "release": {"batch_size": "1000", "yield_pct": "95"},
            "lots": [
                {"item_id": "ITM-001", "lot_no": "A1", "expiry_date": "2025-10-01", "qty_on_hand": "5000"}
            ],
            "costs": {"ITM-001": "0.12"}
        }"#;

        let input = PlanningInput::from_json_str(json).unwrap();

        assert_eq!(input.rows.len(), 1);
        assert_eq!(input.rows[0].scrap_pct, Decimal::from(10));
        assert_eq!(input.release.batch_size, Decimal::from(1000));
        assert_eq!(input.lots[0].qty_on_hand, Decimal::from(5000));
        assert_eq!(input.costs.unit_cost("ITM-001"), Decimal::new(12, 2));
    }

    #[test]
    fn test_missing_row_keys_follow_position() {
        let json = r#"{
            "rows": [
                {"item_id": "ITM-001", "qty_per_unit": "2"},
                {"key": "67e55044-10b1-426f-9247-bb680e5fe0c8", "item_id": "ITM-002", "qty_per_unit": "1"},
                {"item_id": "ITM-003", "qty_per_unit": "1"}
            ]
        }"#;

        let first = PlanningInput::from_json_str(json).unwrap();
        let second = PlanningInput::from_json_str(json).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.rows[0].key, positional_row_key(0));
        assert_eq!(
            first.rows[1].key.to_string(),
            "67e55044-10b1-426f-9247-bb680e5fe0c8"
        );
        assert_eq!(first.rows[2].key, positional_row_key(2));
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let input = PlanningInput::from_json_str("{}").unwrap();

        assert!(input.rows.is_empty());
        assert!(input.lots.is_empty());
        assert!(input.costs.is_empty());
        assert_eq!(input.release, ReleaseParameters::default());
    }

    #[test]
    fn test_malformed_input_is_an_error() {
        assert!(PlanningInput::from_json_str("[1, 2").is_err());
    }
}
