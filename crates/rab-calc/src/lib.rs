//! # RAB Calculation Engine
//!
//! 核心 RAB/RABP 計算引擎

pub mod aggregation;
pub mod allocation;
pub mod batch;
pub mod breakdown;
pub mod calculator;
pub mod costing;

use serde::Serialize;
use uuid::Uuid;

// Re-export 主要類型
pub use aggregation::{AggregationCalculator, OrderAggregate};
pub use allocation::{AllocationCalculator, ProfitAllocation};
pub use batch::BatchCalculator;
pub use breakdown::{BreakdownCalculator, CostContribution};
pub use calculator::RabCalculator;
pub use costing::{CostingCalculator, LineItemResult};

/// RAB 計算報告（一張訂單的完整結果）
#[derive(Debug, Clone, Serialize)]
pub struct RabReport {
    /// 訂單ID
    pub order_id: Uuid,

    /// RAB 單號
    pub order_number: String,

    /// 行項成本計算結果
    pub line_results: Vec<LineItemResult>,

    /// 訂單彙總
    pub aggregate: OrderAggregate,

    /// 利潤分配結果
    pub allocation: ProfitAllocation,

    /// 成本占比追溯
    pub contributions: Vec<CostContribution>,

    /// 警告信息
    pub warnings: Vec<RabWarning>,

    /// 計算耗時（毫秒）
    pub calculation_time_ms: Option<u128>,
}

impl RabReport {
    /// 毛利與（Margin + Sisa Untung）兩條路徑是否對帳平衡
    pub fn is_balanced(&self) -> bool {
        self.aggregate.is_balanced()
    }

    /// 添加警告
    pub fn add_warning(&mut self, warning: RabWarning) {
        self.warnings.push(warning);
    }
}

/// RAB 警告
#[derive(Debug, Clone, Serialize)]
pub struct RabWarning {
    pub order_number: String,
    pub message: String,
    pub severity: WarningSeverity,
}

impl RabWarning {
    pub fn new(order_number: String, message: String, severity: WarningSeverity) -> Self {
        Self {
            order_number,
            message,
            severity,
        }
    }

    pub fn info(order_number: String, message: String) -> Self {
        Self::new(order_number, message, WarningSeverity::Info)
    }

    pub fn warning(order_number: String, message: String) -> Self {
        Self::new(order_number, message, WarningSeverity::Warning)
    }

    pub fn error(order_number: String, message: String) -> Self {
        Self::new(order_number, message, WarningSeverity::Error)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WarningSeverity {
    Info,
    Warning,
    Error,
}
