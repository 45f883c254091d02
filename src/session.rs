//! 儀表板工作階段
//!
//! 保存目前的記錄、建議與聊天紀錄。建議的計算是純函數，
//! 是否寫入聊天紀錄或發出通知由這裡決定。

use chrono::NaiveDateTime;
use supply_calc::{
    aggregate_monthly_spending, generate_suggestions, has_actionable_suggestions,
    notify_if_actionable, respond_to_message, Notification, NotificationSink,
};
use supply_core::{
    ChatMessage, DashboardConfig, MonthlySpendingPoint, Result, SupplyError, SupplyRecord,
};

/// 儀表板工作階段
#[derive(Debug, Clone, Default)]
pub struct DashboardSession {
    records: Vec<SupplyRecord>,
    suggestions: Vec<String>,
    chat_log: Vec<ChatMessage>,
    config: DashboardConfig,
}

impl DashboardSession {
    /// 創建空的工作階段
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// 以既有記錄創建（不觸發建議計算）
    pub fn with_records(records: Vec<SupplyRecord>, config: DashboardConfig) -> Self {
        Self {
            records,
            config,
            ..Self::default()
        }
    }

    pub fn records(&self) -> &[SupplyRecord] {
        &self.records
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn chat_log(&self) -> &[ChatMessage] {
        &self.chat_log
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// 匯入：整批取代記錄後重新計算建議
    pub fn replace_records(
        &mut self,
        records: Vec<SupplyRecord>,
        reference: NaiveDateTime,
    ) -> &[String] {
        tracing::info!("取代記錄：{} 筆", records.len());
        self.records = records;
        self.refresh(reference)
    }

    /// 行內編輯單筆記錄
    pub fn edit(
        &mut self,
        index: usize,
        field: &str,
        value: &str,
        reference: NaiveDateTime,
    ) -> Result<()> {
        let len = self.records.len();
        let record = self
            .records
            .get_mut(index)
            .ok_or(SupplyError::RecordIndexOutOfRange { index, len })?;

        record.set_field(field, value);
        tracing::info!("編輯記錄 #{}：{} = {:?}", index, field, value);

        self.refresh(reference);
        Ok(())
    }

    /// 重新計算建議；有需要處理的建議時附加一則助理訊息
    pub fn refresh(&mut self, reference: NaiveDateTime) -> &[String] {
        self.suggestions = generate_suggestions(&self.records, reference);

        if has_actionable_suggestions(&self.suggestions) {
            self.chat_log.push(ChatMessage::new(
                self.config.assistant_sender.clone(),
                self.suggestions.join("\n"),
            ));
        }

        &self.suggestions
    }

    /// 圖表資料
    pub fn monthly_spending(&self) -> Vec<MonthlySpendingPoint> {
        aggregate_monthly_spending(&self.records)
    }

    /// 送出聊天訊息；回傳助理的回覆（無回覆時為 `None`）
    pub fn send_chat(&mut self, message: &str, reference: NaiveDateTime) -> Option<String> {
        self.chat_log
            .push(ChatMessage::new(self.config.user_sender.clone(), message));

        let response = respond_to_message(message, &self.records, reference)?;
        self.chat_log.push(ChatMessage::new(
            self.config.assistant_sender.clone(),
            response.clone(),
        ));
        Some(response)
    }

    /// 開啟儀表板時的通知
    pub fn notify_on_open(&self, sink: &dyn NotificationSink, reference: NaiveDateTime) -> bool {
        let suggestions = generate_suggestions(&self.records, reference);
        notify_if_actionable(sink, &suggestions, &Notification::from_config(&self.config))
    }
}
