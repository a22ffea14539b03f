//! 訂單彙總計算

use rab_core::LineItem;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::costing::{CostingCalculator, LineItemResult};

/// 訂單層級的彙總結果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderAggregate {
    /// 布料成本合計
    pub total_material: Decimal,
    /// Jasa Operasional 合計
    pub total_operational_service: Decimal,
    /// Utilitas 合計
    pub total_utility: Decimal,
    /// Price Off 合計
    pub total_off: Decimal,
    /// Margin 合計
    pub total_margin: Decimal,
    /// Sisa Untung 合計
    pub total_remaining_profit: Decimal,
    /// PO 金額（與 total_off 同值，報表欄位對稱保留）
    pub po_value: Decimal,
    /// 毛利（PO 金額扣三類成本）
    pub gross_profit_value: Decimal,
    /// 利潤合計（Margin + Sisa Untung）
    pub total_profit: Decimal,
    /// 兩條利潤路徑的對帳差額（0 才算 BALANCE）
    pub profit_discrepancy: Decimal,
    /// 利潤率（% 對總成本）
    pub profit_percent: Decimal,
}

impl OrderAggregate {
    /// 空訂單的全零彙總
    pub fn empty() -> Self {
        Self {
            total_material: Decimal::ZERO,
            total_operational_service: Decimal::ZERO,
            total_utility: Decimal::ZERO,
            total_off: Decimal::ZERO,
            total_margin: Decimal::ZERO,
            total_remaining_profit: Decimal::ZERO,
            po_value: Decimal::ZERO,
            gross_profit_value: Decimal::ZERO,
            total_profit: Decimal::ZERO,
            profit_discrepancy: Decimal::ZERO,
            profit_percent: Decimal::ZERO,
        }
    }

    /// 三類成本合計（利潤率的分母）
    pub fn total_cost(&self) -> Decimal {
        self.total_material + self.total_operational_service + self.total_utility
    }

    /// 對帳是否平衡（差額恰為 0）
    pub fn is_balanced(&self) -> bool {
        self.profit_discrepancy == Decimal::ZERO
    }
}

/// 訂單彙總計算器
pub struct AggregationCalculator;

impl AggregationCalculator {
    /// 對整張訂單的行項做成本計算並彙總
    pub fn aggregate(items: &[LineItem]) -> OrderAggregate {
        let results: Vec<LineItemResult> =
            items.iter().map(CostingCalculator::calculate).collect();
        Self::from_results(&results)
    }

    /// 由既有的行項結果彙總
    ///
    /// 單純累加，與行項順序無關。`profit_discrepancy` 是給使用者看的
    /// 對帳交叉值：兩條路徑不一致時照實輸出差額，不得歸零。
    pub fn from_results(results: &[LineItemResult]) -> OrderAggregate {
        let mut total_material = Decimal::ZERO;
        let mut total_operational_service = Decimal::ZERO;
        let mut total_utility = Decimal::ZERO;
        let mut total_off = Decimal::ZERO;
        let mut total_margin = Decimal::ZERO;
        let mut total_remaining_profit = Decimal::ZERO;

        for result in results {
            total_material += result.grand_total_material_cost;
            total_operational_service += result.total_operational_service;
            total_utility += result.total_utility;
            total_off += result.total_price_off;
            total_margin += result.total_margin;
            total_remaining_profit += result.total_remaining_profit;
        }

        let po_value = total_off;
        let gross_profit_value =
            po_value - total_material - total_operational_service - total_utility;
        let total_profit = total_margin + total_remaining_profit;
        let profit_discrepancy = gross_profit_value - total_profit;

        let total_cost = total_material + total_operational_service + total_utility;
        // 分母 ≤ 0 時利潤率回 0，不產生除零
        let profit_percent = if total_cost > Decimal::ZERO {
            total_profit / total_cost * Decimal::ONE_HUNDRED
        } else {
            Decimal::ZERO
        };

        OrderAggregate {
            total_material,
            total_operational_service,
            total_utility,
            total_off,
            total_margin,
            total_remaining_profit,
            po_value,
            gross_profit_value,
            total_profit,
            profit_discrepancy,
            profit_percent,
        }
    }
}
