//! RAB 訂單模型

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::draft::LineItemDraft;
use crate::line_item::LineItem;
use crate::percentage::AllocationPercentages;
use crate::{RabError, Result};

/// RAB 訂單（一張生產成本預算單）
///
/// `locked` 是寫入權限旗標：鎖定後禁止編輯行項，
/// 但不影響計算，衍生金額照常重算。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RabOrder {
    /// 訂單ID
    pub id: Uuid,

    /// RAB 單號
    pub order_number: String,

    /// 買方/客戶
    pub buyer: Option<String>,

    /// 訂單日期
    pub order_date: Option<NaiveDate>,

    /// 是否鎖定（鎖定後禁止編輯）
    pub locked: bool,

    /// 成本行項
    pub line_items: Vec<LineItem>,

    /// 利潤分配比例
    pub percentages: AllocationPercentages,
}

impl RabOrder {
    /// 創建新的 RAB 訂單
    pub fn new(order_number: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            order_number,
            buyer: None,
            order_date: None,
            locked: false,
            line_items: Vec::new(),
            percentages: AllocationPercentages::default(),
        }
    }

    /// 建構器模式：設置買方
    pub fn with_buyer(mut self, buyer: String) -> Self {
        self.buyer = Some(buyer);
        self
    }

    /// 建構器模式：設置訂單日期
    pub fn with_order_date(mut self, order_date: NaiveDate) -> Self {
        self.order_date = Some(order_date);
        self
    }

    /// 建構器模式：添加成本行項
    pub fn with_line_item(mut self, item: LineItem) -> Self {
        self.line_items.push(item);
        self
    }

    /// 建構器模式：設置利潤分配比例
    pub fn with_percentages(mut self, percentages: AllocationPercentages) -> Self {
        self.percentages = percentages;
        self
    }

    /// 建構器模式：設置為鎖定狀態
    pub fn as_locked(mut self) -> Self {
        self.locked = true;
        self
    }

    /// 鎖定訂單
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

    /// 添加成本行項（鎖定時拒絕）
    pub fn add_line_item(&mut self, item: LineItem) -> Result<()> {
        if self.locked {
            return Err(RabError::Locked);
        }
        self.line_items.push(item);
        Ok(())
    }

    /// 以訂單目前的鎖定旗標取出某行項的編輯草稿
    pub fn draft_line(&self, index: usize) -> Option<LineItemDraft> {
        self.line_items
            .get(index)
            .cloned()
            .map(|item| LineItemDraft::new(item, self.locked))
    }

    /// 寫回編輯後的行項（鎖定時拒絕）
    pub fn replace_line(&mut self, index: usize, item: LineItem) -> Result<()> {
        if self.locked {
            return Err(RabError::Locked);
        }
        match self.line_items.get_mut(index) {
            Some(slot) => {
                *slot = item;
                Ok(())
            }
            None => Err(RabError::Validation(format!(
                "行項索引超出範圍: {}",
                index
            ))),
        }
    }

    /// 全部行項的訂購件數合計
    pub fn total_quantity(&self) -> u64 {
        self.line_items.iter().map(|i| u64::from(i.quantity)).sum()
    }
}
