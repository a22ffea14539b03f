//! 行項編輯草稿
//!
//! 表單編輯走草稿：先從訂單取出 [`LineItemDraft`]，改完再寫回。
//! 鎖定旗標在草稿建立時拍板，之後每次變更都先檢查。

use rust_decimal::Decimal;

use crate::line_item::{CostComponent, LineItem};
use crate::{RabError, Result};

/// 成本行項的編輯草稿
#[derive(Debug, Clone)]
pub struct LineItemDraft {
    item: LineItem,
    locked: bool,
}

impl LineItemDraft {
    /// 創建草稿
    pub fn new(item: LineItem, locked: bool) -> Self {
        Self { item, locked }
    }

    /// 鎖定草稿
    pub fn lock(&mut self) {
        self.locked = true;
    }

    /// 解除鎖定
    pub fn unlock(&mut self) {
        self.locked = false;
    }

    /// 檢查是否鎖定
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// 目前的行項內容
    pub fn item(&self) -> &LineItem {
        &self.item
    }

    /// 取出行項（消耗草稿）
    pub fn into_item(self) -> LineItem {
        self.item
    }

    fn ensure_editable(&self) -> Result<()> {
        if self.locked {
            return Err(RabError::Locked);
        }
        Ok(())
    }

    /// 設置訂購件數
    pub fn set_quantity(&mut self, quantity: u32) -> Result<()> {
        self.ensure_editable()?;
        self.item.quantity = quantity;
        Ok(())
    }

    /// 設置用料量與布料單價
    pub fn set_material(&mut self, need_per_unit: Decimal, price_per_unit: Decimal) -> Result<()> {
        self.ensure_editable()?;
        self.item.material_need_per_unit = need_per_unit;
        self.item.material_price_per_unit = price_per_unit;
        Ok(())
    }

    /// 設置 Price Off（約定單件售價）
    pub fn set_price_off(&mut self, price_off: Decimal) -> Result<()> {
        self.ensure_editable()?;
        self.item.price_off = price_off;
        Ok(())
    }

    /// 設置 Margin 百分比
    pub fn set_margin_percentage(&mut self, margin_percentage: Decimal) -> Result<()> {
        self.ensure_editable()?;
        self.item.margin_percentage = margin_percentage;
        Ok(())
    }

    /// 追加一項 Jasa Operasional（加工服務）
    pub fn push_service(&mut self, name: String, value: Decimal) -> Result<()> {
        self.ensure_editable()?;
        self.item
            .operational_services
            .push(CostComponent::new(name, value));
        Ok(())
    }

    /// 追加一項 Utilitas（水電雜支）
    pub fn push_utility(&mut self, name: String, value: Decimal) -> Result<()> {
        self.ensure_editable()?;
        self.item.utilities.push(CostComponent::new(name, value));
        Ok(())
    }

    /// 送出前驗證
    ///
    /// 計算引擎對任何輸入都能算（缺項當 0），這裡擋的是
    /// 業務上不該送出的半成品行項。
    pub fn validate_for_submit(&self) -> Result<()> {
        if self.item.product_name.trim().is_empty() {
            return Err(RabError::Validation("品名不得為空".to_string()));
        }
        if self.item.quantity == 0 {
            return Err(RabError::Validation("訂購件數必須大於 0".to_string()));
        }
        if self.item.material_need_per_unit <= Decimal::ZERO {
            return Err(RabError::Validation("用料量必須大於 0".to_string()));
        }
        if self.item.material_price_per_unit <= Decimal::ZERO {
            return Err(RabError::Validation("布料單價必須大於 0".to_string()));
        }
        Ok(())
    }
}
