//! # Supply Core
//!
//! 核心資料模型與類型定義

pub mod chat;
pub mod config;
pub mod record;
pub mod spending;
pub mod value;

// Re-export 主要類型
pub use chat::ChatMessage;
pub use config::DashboardConfig;
pub use record::{RecordField, SupplyRecord};
pub use spending::MonthlySpendingPoint;

/// 供應儀表板錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum SupplyError {
    #[error("匯入失敗: {0}")]
    Import(String),

    #[error("匯出失敗: {0}")]
    Export(String),

    #[error("不支援的檔案格式: {0}")]
    UnsupportedFormat(String),

    #[error("活頁簿中沒有任何工作表")]
    EmptyWorkbook,

    #[error("記錄索引超出範圍: {index}（共 {len} 筆）")]
    RecordIndexOutOfRange { index: usize, len: usize },

    #[error("配置錯誤: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SupplyError>;
