//! RAB 主計算器

use rab_core::RabOrder;
use rust_decimal::Decimal;

use crate::aggregation::{AggregationCalculator, OrderAggregate};
use crate::allocation::AllocationCalculator;
use crate::breakdown::BreakdownCalculator;
use crate::costing::{CostingCalculator, LineItemResult};
use crate::{RabReport, RabWarning};

/// RAB 計算器
///
/// 無狀態：同一張訂單重算多少次都得到同樣的報告。
pub struct RabCalculator;

impl RabCalculator {
    /// 主 RAB 計算入口
    pub fn calculate(order: &RabOrder) -> RabReport {
        tracing::info!(
            "開始 RAB 計算：單號 {}，行項 {} 筆",
            order.order_number,
            order.line_items.len()
        );

        let start_time = std::time::Instant::now();

        // Step 1: 行項成本計算
        tracing::debug!("Step 1: 行項成本計算");
        let line_results: Vec<LineItemResult> = order
            .line_items
            .iter()
            .map(CostingCalculator::calculate)
            .collect();
        tracing::debug!("行項結果: {} 筆", line_results.len());

        // Step 2: 訂單彙總
        tracing::debug!("Step 2: 訂單彙總");
        let aggregate = AggregationCalculator::from_results(&line_results);

        // Step 3: 利潤分配
        tracing::debug!("Step 3: 利潤分配");
        let allocation = AllocationCalculator::apply(&aggregate, &order.percentages);

        // Step 4: 成本占比追溯
        tracing::debug!("Step 4: 成本占比追溯");
        let contributions = BreakdownCalculator::perform(&line_results, &aggregate);

        // Step 5: 對帳與警告檢查
        tracing::debug!("Step 5: 對帳與警告檢查");
        let warnings = Self::collect_warnings(order, &aggregate);

        let mut report = RabReport {
            order_id: order.id,
            order_number: order.order_number.clone(),
            line_results,
            aggregate,
            allocation,
            contributions,
            warnings,
            calculation_time_ms: None,
        };
        report.calculation_time_ms = Some(start_time.elapsed().as_millis());

        tracing::info!("RAB 計算完成，耗時 {:?}", start_time.elapsed());
        tracing::info!(
            "對帳狀態: {}",
            if report.is_balanced() {
                "BALANCE"
            } else {
                "NOT BALANCE"
            }
        );

        report
    }

    fn collect_warnings(order: &RabOrder, aggregate: &OrderAggregate) -> Vec<RabWarning> {
        let mut warnings = Vec::new();

        if !aggregate.is_balanced() {
            warnings.push(RabWarning::warning(
                order.order_number.clone(),
                format!(
                    "利潤對帳不平衡，差額 {}",
                    aggregate.profit_discrepancy
                ),
            ));
        }

        if order.percentages.exceeds_full_allocation() {
            warnings.push(RabWarning::warning(
                order.order_number.clone(),
                format!(
                    "提撥比例合計 {}% 超過 100%，剩餘利潤將轉負",
                    order.percentages.total()
                ),
            ));
        }

        if order.line_items.is_empty() {
            warnings.push(RabWarning::info(
                order.order_number.clone(),
                "訂單沒有行項，輸出全零彙總".to_string(),
            ));
        } else if aggregate.total_cost() <= Decimal::ZERO {
            warnings.push(RabWarning::info(
                order.order_number.clone(),
                "訂單總成本為 0，利潤率以 0 呈現".to_string(),
            ));
        }

        warnings
    }
}
