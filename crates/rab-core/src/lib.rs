//! # RAB Core
//!
//! RAB/RABP（生產成本預算）核心資料模型與類型定義

pub mod draft;
pub mod line_item;
pub mod order;
pub mod percentage;
pub mod raw;

// Re-export 主要類型
pub use draft::LineItemDraft;
pub use line_item::{CostComponent, LineItem};
pub use order::RabOrder;
pub use percentage::AllocationPercentages;
pub use raw::{RawLineItem, RawRabOrder};

/// RAB 錯誤類型
///
/// 計算本身是全函數（任何輸入都能完成），錯誤只發生在
/// 表單編輯與送出驗證等業務規則上。
#[derive(Debug, thiserror::Error)]
pub enum RabError {
    #[error("RAB 已鎖定，禁止編輯")]
    Locked,

    #[error("欄位驗證失敗: {0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, RabError>;
