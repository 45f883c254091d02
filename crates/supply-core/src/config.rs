//! 儀表板配置

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::{Result, SupplyError};

/// 工作表名稱上限（Excel 限制）
const MAX_SHEET_NAME_LEN: usize = 31;

/// 儀表板配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// 匯出工作表名稱（同時作為預設檔名）
    pub sheet_name: String,

    /// 匯出時附加在最後一列的註記
    pub annotation_note: String,

    /// 助理訊息的發送者名稱
    pub assistant_sender: String,

    /// 使用者訊息的發送者名稱
    pub user_sender: String,

    /// 通知內容
    pub notification_message: String,

    /// 通知顯示秒數
    pub notification_duration_secs: u64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            sheet_name: "Data".to_string(),
            annotation_note: "BY JANIO VILLALBA".to_string(),
            assistant_sender: "AI Assistant".to_string(),
            user_sender: "You".to_string(),
            notification_message: "⚠️ AI Recommendations Available - Check Chat or Dashboard"
                .to_string(),
            notification_duration_secs: 6,
        }
    }
}

impl DashboardConfig {
    /// 創建預設配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 由 JSON 文字載入（未提供的欄位使用預設值）
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| SupplyError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// 由 JSON 檔案載入
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// 建構器模式：設置工作表名稱
    pub fn with_sheet_name(mut self, name: impl Into<String>) -> Self {
        self.sheet_name = name.into();
        self
    }

    /// 建構器模式：設置匯出註記
    pub fn with_annotation_note(mut self, note: impl Into<String>) -> Self {
        self.annotation_note = note.into();
        self
    }

    /// 建構器模式：設置助理名稱
    pub fn with_assistant_sender(mut self, sender: impl Into<String>) -> Self {
        self.assistant_sender = sender.into();
        self
    }

    /// 建構器模式：設置使用者名稱
    pub fn with_user_sender(mut self, sender: impl Into<String>) -> Self {
        self.user_sender = sender.into();
        self
    }

    /// 建構器模式：設置通知內容與顯示秒數
    pub fn with_notification(mut self, message: impl Into<String>, duration_secs: u64) -> Self {
        self.notification_message = message.into();
        self.notification_duration_secs = duration_secs;
        self
    }

    /// 通知顯示時間
    pub fn notification_duration(&self) -> Duration {
        Duration::from_secs(self.notification_duration_secs)
    }

    /// 預設匯出檔名
    pub fn export_file_name(&self) -> String {
        format!("{}.xlsx", self.sheet_name)
    }

    /// 檢查配置
    pub fn validate(&self) -> Result<()> {
        let len = self.sheet_name.chars().count();
        if len == 0 {
            return Err(SupplyError::Config("工作表名稱不可為空".to_string()));
        }
        if len > MAX_SHEET_NAME_LEN {
            return Err(SupplyError::Config(format!(
                "工作表名稱過長: {} 個字元（上限 {}）",
                len, MAX_SHEET_NAME_LEN
            )));
        }
        Ok(())
    }
}
