//! # Supply Calculation Engine
//!
//! 由供應記錄推導圖表資料與建議訊息。所有計算皆為純函數，
//! 參考時間一律由呼叫端傳入。

pub mod chat;
pub mod notification;
pub mod spending;
pub mod suggestion;

// Re-export 主要類型
pub use chat::{respond_to_message, CHAT_KEYWORDS};
pub use notification::{
    notify_if_actionable, Notification, NotificationSink, RecordingNotifier, TracingNotifier,
};
pub use spending::aggregate_monthly_spending;
pub use suggestion::{
    generate_suggestions, has_actionable_suggestions, suggestions_text, DELIVERY_DELAY_DAYS,
    LOW_STOCK_THRESHOLD, NO_URGENT_RECOMMENDATIONS,
};
