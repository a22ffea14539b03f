//! 服裝代工訂單批次計算示例
//!
//! 示範從表單 payload 寬鬆解析、一次性轉嚴格類型，
//! 再對多張訂單平行計算。

use rab_calc::BatchCalculator;
use rab_core::{LineItem, RabOrder, RawRabOrder};
use rust_decimal::Decimal;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    // 第一張訂單來自表單 payload（欄位形狀不齊）
    let payload = serde_json::json!({
        "orderNumber": "RAB-2024-101",
        "buyer": "CV SERAGAM JAYA",
        "orderDate": "2024-04-02",
        "maintenanceDevelopPct": "40",
        "incentivePct": 10,
        "marketingPct": "5",
        "lineItems": [
            {
                "productName": "SERAGAM-SD",
                "quantity": "250",
                "materialNeedPerUnit": 1.5,
                "materialPricePerUnit": "30000",
                "operationalServiceNames": ["CMT", "SABLON"],
                "operationalServiceValues": ["7000", 2000],
                "utilityNames": ["LISTRIK"],
                "utilityValues": [500],
                "priceOff": "65000",
                "marginPercentage": 10
            },
            {
                "productName": "TOPI",
                "quantity": 250,
                "materialNeedPerUnit": "0.3",
                "materialPricePerUnit": 12000,
                "priceOff": "8000"
            }
        ]
    });
    let raw: RawRabOrder = serde_json::from_value(payload)?;
    let from_form = raw.coerce();

    // 第二張訂單直接用建構器組出來
    let from_builder = RabOrder::new("RAB-2024-102".to_string())
        .with_buyer("PT GARMINDO SEJAHTERA".to_string())
        .with_line_item(
            LineItem::new("JAKET".to_string(), 120)
                .with_material(Decimal::from(2), Decimal::from(40000))
                .with_service("CMT".to_string(), Decimal::from(15000))
                .with_utility("LISTRIK".to_string(), Decimal::from(800))
                .with_price_off(Decimal::from(135000))
                .with_margin_percentage(Decimal::from(12)),
        );

    let orders = vec![from_form, from_builder];
    let reports = BatchCalculator::calculate_all(&orders);

    for report in &reports {
        println!(
            "{}: PO {} / 毛利 {} / 提撥後剩餘利潤 {} / {}",
            report.order_number,
            report.aggregate.po_value,
            report.aggregate.gross_profit_value,
            report.allocation.net_remaining_profit,
            if report.is_balanced() { "BALANCE" } else { "NOT BALANCE" }
        );
        for warning in &report.warnings {
            println!("  警告: {}", warning.message);
        }
    }

    Ok(())
}
