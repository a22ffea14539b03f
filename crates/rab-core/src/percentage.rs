//! 利潤分配比例模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 訂單層級的利潤分配比例
///
/// 三個比例彼此獨立，全部以總剩餘利潤（Sisa Untung）為基數。
/// 引擎不驗證也不正規化比例；合計是否超過 100 由表單層提示，
/// 分配計算照原值套用。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AllocationPercentages {
    /// 維護/開發比例（%）
    pub maintenance_develop_pct: Decimal,

    /// 獎勵金比例（%）
    pub incentive_pct: Decimal,

    /// 行銷比例（%）
    pub marketing_pct: Decimal,
}

impl AllocationPercentages {
    /// 創建新的分配比例
    pub fn new(
        maintenance_develop_pct: Decimal,
        incentive_pct: Decimal,
        marketing_pct: Decimal,
    ) -> Self {
        Self {
            maintenance_develop_pct,
            incentive_pct,
            marketing_pct,
        }
    }

    /// 建構器模式：設置維護/開發比例
    pub fn with_maintenance_develop(mut self, pct: Decimal) -> Self {
        self.maintenance_develop_pct = pct;
        self
    }

    /// 建構器模式：設置獎勵金比例
    pub fn with_incentive(mut self, pct: Decimal) -> Self {
        self.incentive_pct = pct;
        self
    }

    /// 建構器模式：設置行銷比例
    pub fn with_marketing(mut self, pct: Decimal) -> Self {
        self.marketing_pct = pct;
        self
    }

    /// 三個比例的合計
    pub fn total(&self) -> Decimal {
        self.maintenance_develop_pct + self.incentive_pct + self.marketing_pct
    }

    /// 檢查合計是否超過 100%（僅供表單層提示用）
    pub fn exceeds_full_allocation(&self) -> bool {
        self.total() > Decimal::ONE_HUNDRED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_zero() {
        let pct = AllocationPercentages::default();

        assert_eq!(pct.maintenance_develop_pct, Decimal::ZERO);
        assert_eq!(pct.incentive_pct, Decimal::ZERO);
        assert_eq!(pct.marketing_pct, Decimal::ZERO);
        assert_eq!(pct.total(), Decimal::ZERO);
        assert!(!pct.exceeds_full_allocation());
    }

    #[test]
    fn test_percentage_builder() {
        let pct = AllocationPercentages::default()
            .with_maintenance_develop(Decimal::from(40))
            .with_incentive(Decimal::from(10))
            .with_marketing(Decimal::from(5));

        assert_eq!(pct.total(), Decimal::from(55));
        assert!(!pct.exceeds_full_allocation());
    }

    #[test]
    fn test_exceeds_full_allocation() {
        // 合計允許超過 100，引擎只提示不阻止
        let pct = AllocationPercentages::new(
            Decimal::from(60),
            Decimal::from(30),
            Decimal::from(20),
        );

        assert_eq!(pct.total(), Decimal::from(110));
        assert!(pct.exceeds_full_allocation());
    }
}
