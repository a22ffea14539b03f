//! 利潤分配計算

use rab_core::AllocationPercentages;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::aggregation::OrderAggregate;

/// 利潤分配結果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfitAllocation {
    /// 維護/開發提撥
    pub maintenance_develop_cost: Decimal,
    /// 獎勵金提撥
    pub incentive_cost: Decimal,
    /// 行銷提撥
    pub marketing_cost: Decimal,
    /// 提撥後剩餘利潤
    pub net_remaining_profit: Decimal,
    /// Percent Keuntungan Tergerus（提撥後利潤率，%）
    pub eroded_profit_percent: Decimal,
}

impl ProfitAllocation {
    /// 三項提撥合計
    pub fn allocated_total(&self) -> Decimal {
        self.maintenance_develop_cost + self.incentive_cost + self.marketing_cost
    }
}

/// 利潤分配計算器
pub struct AllocationCalculator;

impl AllocationCalculator {
    /// 對彙總結果套用三項提撥比例
    ///
    /// 分配基數固定是 Sisa Untung 合計（不是 totalProfit 也不是 Margin）。
    /// 比例彼此獨立，不驗證也不正規化：合計超過 100% 時
    /// 剩餘利潤轉負照實輸出。
    pub fn apply(
        aggregate: &OrderAggregate,
        percentages: &AllocationPercentages,
    ) -> ProfitAllocation {
        let base = aggregate.total_remaining_profit;

        let maintenance_develop_cost =
            percentages.maintenance_develop_pct * base / Decimal::ONE_HUNDRED;
        let incentive_cost = percentages.incentive_pct * base / Decimal::ONE_HUNDRED;
        let marketing_cost = percentages.marketing_pct * base / Decimal::ONE_HUNDRED;

        let net_remaining_profit =
            base - (maintenance_develop_cost + incentive_cost + marketing_cost);

        // 分母 ≤ 0 時回 0，與彙總的利潤率同一套防護
        let total_cost = aggregate.total_cost();
        let eroded_profit_percent = if total_cost > Decimal::ZERO {
            (aggregate.total_margin + net_remaining_profit) / total_cost * Decimal::ONE_HUNDRED
        } else {
            Decimal::ZERO
        };

        ProfitAllocation {
            maintenance_develop_cost,
            incentive_cost,
            marketing_cost,
            net_remaining_profit,
            eroded_profit_percent,
        }
    }
}
