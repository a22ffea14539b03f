//! 簡單 RAB 計算示例

use chrono::NaiveDate;
use rab_calc::RabCalculator;
use rab_core::{AllocationPercentages, LineItem, RabOrder};
use rust_decimal::Decimal;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== 簡單 RAB 計算示例 ===\n");

    // 建立訂單
    let order = RabOrder::new("RAB-2024-001".to_string())
        .with_buyer("PT GARMINDO SEJAHTERA".to_string())
        .with_order_date(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap())
        .with_line_item(
            LineItem::new("KEMEJA-PRIA".to_string(), 10)
                .with_size("L".to_string())
                .with_material(Decimal::new(25, 1), Decimal::from(20000))
                .with_service("CMT".to_string(), Decimal::from(5000))
                .with_service("OBRAS".to_string(), Decimal::from(3000))
                .with_utility("LISTRIK".to_string(), Decimal::from(1000))
                .with_price_off(Decimal::from(80000))
                .with_margin_percentage(Decimal::from(10)),
        )
        .with_line_item(
            LineItem::new("CELANA".to_string(), 20)
                .with_material(Decimal::new(12, 1), Decimal::from(25000))
                .with_service("CMT".to_string(), Decimal::from(4000))
                .with_price_off(Decimal::from(40000))
                .with_margin_percentage(Decimal::from(5)),
        )
        .with_percentages(AllocationPercentages::new(
            Decimal::from(40),
            Decimal::from(10),
            Decimal::from(5),
        ));

    println!("行項清單:");
    for item in &order.line_items {
        println!(
            "  - 品名: {}, 件數: {}, Price Off: {}",
            item.product_name, item.quantity, item.price_off
        );
    }

    // 執行計算
    let report = RabCalculator::calculate(&order);

    println!("\n行項成本:");
    for result in &report.line_results {
        println!(
            "  - {}: HPP {}, Margin 目標價 {}, Sisa Untung/件 {}",
            result.product_name, result.hpp, result.margin_target, result.remaining_profit
        );
    }

    println!("\n訂單彙總:");
    println!("  布料合計:        {}", report.aggregate.total_material);
    println!("  加工合計:        {}", report.aggregate.total_operational_service);
    println!("  水電合計:        {}", report.aggregate.total_utility);
    println!("  PO 金額:         {}", report.aggregate.po_value);
    println!("  毛利:            {}", report.aggregate.gross_profit_value);
    println!("  利潤合計:        {}", report.aggregate.total_profit);
    println!(
        "  對帳狀態:        {}",
        if report.is_balanced() { "BALANCE" } else { "NOT BALANCE" }
    );
    println!("  利潤率:          {}%", report.aggregate.profit_percent.round_dp(2));

    println!("\n利潤分配 (40% / 10% / 5%):");
    println!("  維護/開發:       {}", report.allocation.maintenance_develop_cost);
    println!("  獎勵金:          {}", report.allocation.incentive_cost);
    println!("  行銷:            {}", report.allocation.marketing_cost);
    println!("  提撥後剩餘利潤:  {}", report.allocation.net_remaining_profit);
    println!(
        "  提撥後利潤率:    {}%",
        report.allocation.eroded_profit_percent.round_dp(2)
    );

    if let Some(elapsed) = report.calculation_time_ms {
        println!("\n計算耗時: {} ms", elapsed);
    }

    Ok(())
}
