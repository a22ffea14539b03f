//! 批次計算
//!
//! 訂單之間沒有共享狀態，逐張計算彼此獨立，
//! 可以直接用 rayon 平行化。

use rab_core::RabOrder;
use rayon::prelude::*;

use crate::calculator::RabCalculator;
use crate::RabReport;

/// 批次計算器
pub struct BatchCalculator;

impl BatchCalculator {
    /// 平行計算多張訂單的 RAB 報告
    ///
    /// 輸出順序與輸入訂單順序一致。
    pub fn calculate_all(orders: &[RabOrder]) -> Vec<RabReport> {
        tracing::info!("開始批次 RAB 計算：訂單 {} 張", orders.len());

        let start_time = std::time::Instant::now();

        let reports: Vec<RabReport> = orders.par_iter().map(RabCalculator::calculate).collect();

        tracing::info!(
            "批次計算完成，耗時 {:?}，報告 {} 份",
            start_time.elapsed(),
            reports.len()
        );

        reports
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rab_core::LineItem;
    use rust_decimal::Decimal;

    fn order(number: &str, price_off: i64) -> RabOrder {
        RabOrder::new(number.to_string()).with_line_item(
            LineItem::new("KEMEJA".to_string(), 10)
                .with_material(Decimal::from(2), Decimal::from(15000))
                .with_price_off(Decimal::from(price_off)),
        )
    }

    #[test]
    fn test_batch_preserves_order() {
        let orders = vec![
            order("RAB-2024-001", 40000),
            order("RAB-2024-002", 50000),
            order("RAB-2024-003", 60000),
        ];

        let reports = BatchCalculator::calculate_all(&orders);

        assert_eq!(reports.len(), 3);
        assert_eq!(reports[0].order_number, "RAB-2024-001");
        assert_eq!(reports[1].order_number, "RAB-2024-002");
        assert_eq!(reports[2].order_number, "RAB-2024-003");
    }

    #[test]
    fn test_batch_matches_sequential() {
        let orders = vec![
            order("RAB-2024-004", 45000),
            order("RAB-2024-005", 55000),
        ];

        let batch = BatchCalculator::calculate_all(&orders);
        let sequential: Vec<_> = orders.iter().map(RabCalculator::calculate).collect();

        for (parallel, serial) in batch.iter().zip(&sequential) {
            assert_eq!(parallel.aggregate, serial.aggregate);
            assert_eq!(parallel.allocation, serial.allocation);
            assert_eq!(parallel.line_results, serial.line_results);
        }
    }

    #[test]
    fn test_batch_empty_input() {
        let reports = BatchCalculator::calculate_all(&[]);
        assert!(reports.is_empty());
    }
}
