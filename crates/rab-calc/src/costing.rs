//! 行項成本計算

use rab_core::LineItem;
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

/// 行項成本計算結果
///
/// 全部是衍生值，永遠由原始欄位重算，不回存資料庫。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineItemResult {
    /// 行項ID
    pub line_item_id: Uuid,
    /// 品名
    pub product_name: String,
    /// 單件布料成本 = 布料單價 × 用料量
    pub total_material_cost: Decimal,
    /// 布料成本合計 = 單件布料成本 × 件數
    pub grand_total_material_cost: Decimal,
    /// 單件 Jasa Operasional 小計
    pub operational_service_sum: Decimal,
    /// Jasa Operasional 合計
    pub total_operational_service: Decimal,
    /// 單件 Utilitas 小計
    pub utility_sum: Decimal,
    /// Utilitas 合計
    pub total_utility: Decimal,
    /// Price Off 合計 = 約定售價 × 件數
    pub total_price_off: Decimal,
    /// HPP（單件製造成本）
    pub hpp: Decimal,
    /// Margin 目標價（單件）
    pub margin_target: Decimal,
    /// 名目 Margin（單件）
    pub nominal_margin: Decimal,
    /// Sisa Untung（單件剩餘利潤）
    pub remaining_profit: Decimal,
    /// 售價對 HPP 的毛利率（%）
    pub percent: Decimal,
    /// Margin 合計
    pub total_margin: Decimal,
    /// Sisa Untung 合計
    pub total_remaining_profit: Decimal,
}

/// 行項成本計算器
pub struct CostingCalculator;

impl CostingCalculator {
    /// 計算單一行項的全部衍生值
    ///
    /// 全函數：任何輸入都能算完。缺項在輸入邊界已補 0，
    /// 除零走防護分支，結果不會出現 NaN/Infinity。
    pub fn calculate(item: &LineItem) -> LineItemResult {
        let quantity = Decimal::from(item.quantity);

        // 布料成本
        let total_material_cost = item.material_price_per_unit * item.material_need_per_unit;
        let grand_total_material_cost = total_material_cost * quantity;

        // 加工服務與水電雜支（空陣列小計為 0）
        let operational_service_sum = item.service_values().sum::<Decimal>();
        let total_operational_service = operational_service_sum * quantity;

        let utility_sum = item.utility_values().sum::<Decimal>();
        let total_utility = utility_sum * quantity;

        let total_price_off = item.price_off * quantity;

        // HPP = 布料 + 加工 + 水電（皆為單件）
        let hpp = total_material_cost + operational_service_sum + utility_sum;

        // Margin 目標價 = HPP 加上百分比加成
        let margin_target = hpp + hpp * item.margin_percentage / Decimal::ONE_HUNDRED;
        let nominal_margin = margin_target - hpp;

        // Sisa Untung = 約定售價 - Margin 目標價
        let remaining_profit = item.price_off - margin_target;

        // HPP ≤ 0 時毛利率回 0，不產生除零
        let percent = if hpp > Decimal::ZERO {
            (item.price_off - hpp) / hpp * Decimal::ONE_HUNDRED
        } else {
            Decimal::ZERO
        };

        let total_margin = nominal_margin * quantity;
        let total_remaining_profit = remaining_profit * quantity;

        LineItemResult {
            line_item_id: item.id,
            product_name: item.product_name.clone(),
            total_material_cost,
            grand_total_material_cost,
            operational_service_sum,
            total_operational_service,
            utility_sum,
            total_utility,
            total_price_off,
            hpp,
            margin_target,
            nominal_margin,
            remaining_profit,
            percent,
            total_margin,
            total_remaining_profit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rab_core::LineItem;

    #[test]
    fn test_costing_full_scenario() {
        let item = LineItem::new("KEMEJA-PRIA".to_string(), 10)
            .with_material(Decimal::new(25, 1), Decimal::from(20000))
            .with_service("CMT".to_string(), Decimal::from(5000))
            .with_service("OBRAS".to_string(), Decimal::from(3000))
            .with_utility("LISTRIK".to_string(), Decimal::from(1000))
            .with_price_off(Decimal::from(80000))
            .with_margin_percentage(Decimal::from(10));

        let result = CostingCalculator::calculate(&item);

        // 布料: 20000 × 2.5 = 50000，合計 500000
        assert_eq!(result.total_material_cost, Decimal::from(50000));
        assert_eq!(result.grand_total_material_cost, Decimal::from(500000));

        // 加工: 5000 + 3000 = 8000，合計 80000
        assert_eq!(result.operational_service_sum, Decimal::from(8000));
        assert_eq!(result.total_operational_service, Decimal::from(80000));

        // 水電: 1000，合計 10000
        assert_eq!(result.utility_sum, Decimal::from(1000));
        assert_eq!(result.total_utility, Decimal::from(10000));

        assert_eq!(result.total_price_off, Decimal::from(800000));

        // HPP = 50000 + 8000 + 1000 = 59000
        assert_eq!(result.hpp, Decimal::from(59000));

        // Margin 10%: 目標價 64900，名目 5900
        assert_eq!(result.margin_target, Decimal::from(64900));
        assert_eq!(result.nominal_margin, Decimal::from(5900));

        // Sisa Untung = 80000 - 64900 = 15100
        assert_eq!(result.remaining_profit, Decimal::from(15100));

        // percent = (80000 - 59000) / 59000 × 100 ≈ 35.59
        let expected_percent =
            (Decimal::from(80000) - Decimal::from(59000)) / Decimal::from(59000)
                * Decimal::ONE_HUNDRED;
        assert_eq!(result.percent, expected_percent);
        assert_eq!(result.percent.round_dp(2), Decimal::new(3559, 2));

        assert_eq!(result.total_margin, Decimal::from(59000));
        assert_eq!(result.total_remaining_profit, Decimal::from(151000));
    }

    #[test]
    fn test_zero_hpp_guards_percent() {
        let item = LineItem::new("SAMPEL".to_string(), 5)
            .with_price_off(Decimal::from(1000));

        let result = CostingCalculator::calculate(&item);

        // HPP 為 0：percent 必須回 0 而非 Infinity
        assert_eq!(result.hpp, Decimal::ZERO);
        assert_eq!(result.percent, Decimal::ZERO);
        assert_eq!(result.remaining_profit, Decimal::from(1000));
        assert_eq!(result.total_remaining_profit, Decimal::from(5000));
    }

    #[test]
    fn test_all_zero_item_yields_all_zero_result() {
        let item = LineItem::new(String::new(), 0);
        let result = CostingCalculator::calculate(&item);

        assert_eq!(result.total_material_cost, Decimal::ZERO);
        assert_eq!(result.grand_total_material_cost, Decimal::ZERO);
        assert_eq!(result.operational_service_sum, Decimal::ZERO);
        assert_eq!(result.utility_sum, Decimal::ZERO);
        assert_eq!(result.total_price_off, Decimal::ZERO);
        assert_eq!(result.hpp, Decimal::ZERO);
        assert_eq!(result.margin_target, Decimal::ZERO);
        assert_eq!(result.nominal_margin, Decimal::ZERO);
        assert_eq!(result.remaining_profit, Decimal::ZERO);
        assert_eq!(result.percent, Decimal::ZERO);
        assert_eq!(result.total_margin, Decimal::ZERO);
        assert_eq!(result.total_remaining_profit, Decimal::ZERO);
    }

    #[test]
    fn test_price_below_cost_goes_negative() {
        // 售價低於成本：Sisa Untung 為負，照實輸出不截斷
        let item = LineItem::new("CELANA".to_string(), 4)
            .with_material(Decimal::ONE, Decimal::from(30000))
            .with_price_off(Decimal::from(25000));

        let result = CostingCalculator::calculate(&item);

        assert_eq!(result.hpp, Decimal::from(30000));
        assert_eq!(result.remaining_profit, Decimal::from(-5000));
        assert_eq!(result.total_remaining_profit, Decimal::from(-20000));
        assert!(result.percent < Decimal::ZERO);
    }

    #[test]
    fn test_calculation_is_idempotent() {
        let item = LineItem::new("JAKET".to_string(), 12)
            .with_material(Decimal::new(18, 1), Decimal::from(45000))
            .with_service("CMT".to_string(), Decimal::from(12000))
            .with_utility("AIR".to_string(), Decimal::new(7505, 1))
            .with_price_off(Decimal::from(150000))
            .with_margin_percentage(Decimal::new(125, 1));

        let first = CostingCalculator::calculate(&item);
        let second = CostingCalculator::calculate(&item);

        assert_eq!(first, second);
    }
}
