//! 成本占比追溯
//!
//! 回答「這張訂單的成本與利潤是由哪些行項貢獻的」：
//! 每個行項對總成本、PO 金額、利潤各占多少百分比。

use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::aggregation::OrderAggregate;
use crate::costing::LineItemResult;

/// 單一行項的占比記錄
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostContribution {
    /// 行項ID
    pub line_item_id: Uuid,
    /// 品名
    pub product_name: String,
    /// 行項成本（布料 + 加工 + 水電合計）
    pub total_cost: Decimal,
    /// 占訂單總成本比例（%）
    pub cost_share_pct: Decimal,
    /// 行項 PO 金額
    pub po_value: Decimal,
    /// 占訂單 PO 金額比例（%）
    pub po_share_pct: Decimal,
    /// 行項利潤（Margin + Sisa Untung）
    pub profit: Decimal,
    /// 占訂單利潤合計比例（%）
    pub profit_share_pct: Decimal,
}

/// 成本占比計算器
pub struct BreakdownCalculator;

impl BreakdownCalculator {
    /// 對每個行項結果計算其在訂單彙總中的占比
    pub fn perform(
        results: &[LineItemResult],
        aggregate: &OrderAggregate,
    ) -> Vec<CostContribution> {
        let total_cost = aggregate.total_cost();

        results
            .iter()
            .map(|result| {
                let line_cost = result.grand_total_material_cost
                    + result.total_operational_service
                    + result.total_utility;
                let profit = result.total_margin + result.total_remaining_profit;

                CostContribution {
                    line_item_id: result.line_item_id,
                    product_name: result.product_name.clone(),
                    total_cost: line_cost,
                    cost_share_pct: Self::share(line_cost, total_cost),
                    po_value: result.total_price_off,
                    po_share_pct: Self::share(result.total_price_off, aggregate.po_value),
                    profit,
                    profit_share_pct: Self::share(profit, aggregate.total_profit),
                }
            })
            .collect()
    }

    // 分母 ≤ 0 時占比回 0
    fn share(part: Decimal, whole: Decimal) -> Decimal {
        if whole > Decimal::ZERO {
            part / whole * Decimal::ONE_HUNDRED
        } else {
            Decimal::ZERO
        }
    }
}
