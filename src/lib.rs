//! # Supply Dashboard
//!
//! 供應儀表板：匯入供應記錄、行內編輯、月度支出圖表資料、
//! 庫存建議與聊天回覆，並可匯出回試算表。

pub mod session;

pub use session::DashboardSession;

// Re-export 主要類型
pub use supply_calc::{
    aggregate_monthly_spending, generate_suggestions, respond_to_message, Notification,
    NotificationSink, TracingNotifier,
};
pub use supply_core::{
    ChatMessage, DashboardConfig, MonthlySpendingPoint, SupplyError, SupplyRecord,
};
