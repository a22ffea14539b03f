//! 成本行項模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 具名單件成本項目
///
/// 一筆加工費（Jasa Operasional）或水電雜費（Utilitas）。
/// 名稱只供儲存與報表呈現使用，計算引擎只讀取金額。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostComponent {
    /// 項目名稱（如 CMT 車縫、繡花、電費）
    pub name: String,

    /// 單件金額
    pub value: Decimal,
}

impl CostComponent {
    /// 創建新的成本項目
    pub fn new(name: String, value: Decimal) -> Self {
        Self { name, value }
    }
}

/// 成本行項（一個產品/尺寸一列）
///
/// 只保存原始輸入欄位；所有衍生金額（HPP、Margin、剩餘利潤等）
/// 一律由計算引擎在每次讀取時重算，不回存。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    /// 行項ID
    pub id: Uuid,

    /// 產品名稱
    pub product_name: String,

    /// 尺寸
    pub size: Option<String>,

    /// 訂購件數
    pub quantity: u32,

    /// 單件用料量（如公尺）
    pub material_need_per_unit: Decimal,

    /// 物料單價
    pub material_price_per_unit: Decimal,

    /// 加工費項目（單件計價，可為空）
    pub operational_services: Vec<CostComponent>,

    /// 水電雜費項目（單件計價，可為空）
    pub utilities: Vec<CostComponent>,

    /// Price Off（單件協議售價）
    pub price_off: Decimal,

    /// Margin 百分比（加在 HPP 之上）
    pub margin_percentage: Decimal,
}

impl LineItem {
    /// 創建新的成本行項（數值欄位全部預設為 0）
    pub fn new(product_name: String, quantity: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            product_name,
            size: None,
            quantity,
            material_need_per_unit: Decimal::ZERO,
            material_price_per_unit: Decimal::ZERO,
            operational_services: Vec::new(),
            utilities: Vec::new(),
            price_off: Decimal::ZERO,
            margin_percentage: Decimal::ZERO,
        }
    }

    /// 建構器模式：設置尺寸
    pub fn with_size(mut self, size: String) -> Self {
        self.size = Some(size);
        self
    }

    /// 建構器模式：設置用料量與物料單價
    pub fn with_material(mut self, need_per_unit: Decimal, price_per_unit: Decimal) -> Self {
        self.material_need_per_unit = need_per_unit;
        self.material_price_per_unit = price_per_unit;
        self
    }

    /// 建構器模式：添加一筆加工費
    pub fn with_service(mut self, name: String, value: Decimal) -> Self {
        self.operational_services.push(CostComponent::new(name, value));
        self
    }

    /// 建構器模式：添加一筆水電雜費
    pub fn with_utility(mut self, name: String, value: Decimal) -> Self {
        self.utilities.push(CostComponent::new(name, value));
        self
    }

    /// 建構器模式：設置 Price Off
    pub fn with_price_off(mut self, price_off: Decimal) -> Self {
        self.price_off = price_off;
        self
    }

    /// 建構器模式：設置 Margin 百分比
    pub fn with_margin_percentage(mut self, margin_percentage: Decimal) -> Self {
        self.margin_percentage = margin_percentage;
        self
    }

    /// 加工費單件金額迭代器
    pub fn service_values(&self) -> impl Iterator<Item = Decimal> + '_ {
        self.operational_services.iter().map(|c| c.value)
    }

    /// 水電雜費單件金額迭代器
    pub fn utility_values(&self) -> impl Iterator<Item = Decimal> + '_ {
        self.utilities.iter().map(|c| c.value)
    }
}
