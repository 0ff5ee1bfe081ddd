//! BOM 產能與計劃成本示例
//!
//! 以物料主檔與 FEFO 批次的模擬資料，計算前組件（ITM-006）的限制料與料費

use production_planning::planning_core::numeric::parse_decimal_lenient;
use production_planning::prelude::*;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("===== BOM Capacity & Planned Cost =====\n");

    // 步驟 1: 物料成本
    let costs: ItemCostTable = [
        ("ITM-001", "0.12"),
        ("ITM-002", "9.5"),
        ("ITM-003", "1.2"),
        ("ITM-004", "2.1"),
        ("ITM-005", "1.85"),
        ("ITM-007", "7.2"),
        ("ITM-008", "14.0"),
        ("ITM-009", "0.03"),
    ]
    .into_iter()
    .map(|(id, cost)| ItemCost::new(id.to_string(), parse_decimal_lenient(cost)))
    .collect();

    // 步驟 2: 庫存批次
    let lots = [
        ("ITM-001", "A1", "2025-10-01", 5000),
        ("ITM-001", "B1", "2026-02-01", 7000),
        ("ITM-003", "P1", "2025-12-31", 6000),
        ("ITM-004", "L1", "2026-03-01", 4000),
        ("ITM-007", "S1", "2026-04-01", 2000),
        ("ITM-009", "SCR", "2026-06-01", 20000),
    ]
    .into_iter()
    .map(|(item, lot, exp, qty)| InventoryLot::from_record(item, lot, exp, Decimal::from(qty)))
    .collect::<Result<Vec<_>, _>>()?;

    // 步驟 3: BOM
    let header = BomHeader::new("BOM-011".to_string(), "ITM-006".to_string())
        .with_description("Front Assembly".to_string());
    let rows = vec![
        BomComponentRow::from_form("ITM-001", "4", "5", "pcs"),
        BomComponentRow::from_form("ITM-003", "1", "0", "pcs"),
        BomComponentRow::from_form("ITM-009", "6", "2", "ea"),
        BomComponentRow::from_form("ITM-004", "1", "0", "pcs"),
        BomComponentRow::from_form("ITM-007", "1", "0", "pcs"),
    ];

    let issues = validate_bom(&header, &rows);
    if issues.is_empty() {
        println!("[1] BOM {} is valid\n", header.bom_id);
    } else {
        println!("[1] BOM {} has {} issue(s):", header.bom_id, issues.len());
        for issue in &issues {
            println!("    - {}", issue);
        }
        println!();
    }

    // 步驟 4: 計算
    let params = ReleaseParameters::from_form("1000", "95");
    let calculator = PlanningCalculator::new(&lots, costs, PlanningConfig::default());
    let result = calculator.calculate(&rows, &params);

    println!("[2] Capacity by component (FEFO)");
    println!(
        "    {:<8} {:>10} {:>10} {:>12} {:>8}",
        "Item", "Available", "Need/1pc", "Need/batch", "Batches"
    );
    for component in &result.capacity.components {
        let marker = if result.capacity.is_limiting(component.row_key) { "*" } else { " " };
        println!(
            "  {} {:<8} {:>10} {:>10} {:>12} {:>8}",
            marker,
            component.item_id,
            component.available,
            component.per_unit_need,
            component.per_batch_need,
            component.batches_possible
        );
    }
    match &result.capacity.limiting_component {
        Some(limiting) => println!("    Limiting: {}", limiting.item_id),
        None => println!("    No limiting component"),
    }
    println!(
        "    Good units per batch: {}, good units now: {}\n",
        result.capacity.good_units_per_batch.round_dp(2),
        result.capacity.good_units_now
    );

    println!("[3] Planned cost");
    for line in &result.cost.lines {
        println!(
            "    {:<8} €{:>8} × {:>10} = €{:>12}",
            line.item_id,
            line.unit_cost.round_dp(4),
            line.per_batch_need.round_dp(4),
            line.batch_cost.round_dp(4)
        );
    }
    println!("    Total per batch:    €{}", result.cost.cost_per_batch.round_dp(2));
    println!("    Cost per net unit:  €{}", result.cost.cost_per_net_unit.round_dp(4));
    println!("    Rolled cost (1 pc): €{}\n", result.cost.rolled_cost_per_unit.round_dp(2));

    if !result.warnings.is_empty() {
        println!("[4] Warnings");
        for warning in &result.warnings {
            println!("    [{:?}] {}: {}", warning.severity, warning.item_id, warning.message);
        }
    }

    Ok(())
}
