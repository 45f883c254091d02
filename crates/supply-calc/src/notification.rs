//! 通知

use std::sync::Mutex;
use std::time::Duration;

use supply_core::DashboardConfig;

use crate::suggestion::has_actionable_suggestions;

/// 一則短暫顯示的通知
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub duration: Duration,
}

impl Notification {
    pub fn new(message: impl Into<String>, duration: Duration) -> Self {
        Self {
            message: message.into(),
            duration,
        }
    }

    /// 依配置建立通知
    pub fn from_config(config: &DashboardConfig) -> Self {
        Self::new(
            config.notification_message.clone(),
            config.notification_duration(),
        )
    }
}

impl Default for Notification {
    fn default() -> Self {
        Self::from_config(&DashboardConfig::default())
    }
}

/// 通知接收端
pub trait NotificationSink {
    fn notify(&self, notification: &Notification);
}

/// 以 `tracing` 記錄通知
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl NotificationSink for TracingNotifier {
    fn notify(&self, notification: &Notification) {
        tracing::warn!(
            duration_secs = notification.duration.as_secs(),
            "{}",
            notification.message
        );
    }
}

/// 保留收到的通知
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    received: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// 目前收到的通知
    pub fn notifications(&self) -> Vec<Notification> {
        self.received
            .lock()
            .map(|received| received.clone())
            .unwrap_or_default()
    }
}

impl NotificationSink for RecordingNotifier {
    fn notify(&self, notification: &Notification) {
        if let Ok(mut received) = self.received.lock() {
            received.push(notification.clone());
        }
    }
}

/// 有需要處理的建議時才發出通知，回傳是否已通知
pub fn notify_if_actionable(
    sink: &dyn NotificationSink,
    suggestions: &[String],
    notification: &Notification,
) -> bool {
    if !has_actionable_suggestions(suggestions) {
        return false;
    }

    sink.notify(notification);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suggestion::NO_URGENT_RECOMMENDATIONS;

    #[test]
    fn test_default_notification() {
        let notification = Notification::default();
        assert_eq!(
            notification.message,
            "⚠️ AI Recommendations Available - Check Chat or Dashboard"
        );
        assert_eq!(notification.duration, Duration::from_secs(6));
    }

    #[test]
    fn test_notify_when_actionable() {
        let sink = RecordingNotifier::new();
        let suggestions = vec!["Low stock warning: \"Gloves\" is below 5 units.".to_string()];

        let notified = notify_if_actionable(&sink, &suggestions, &Notification::default());

        assert!(notified);
        assert_eq!(sink.notifications(), vec![Notification::default()]);
    }

    #[test]
    fn test_skip_fallback_and_empty() {
        let sink = RecordingNotifier::new();

        let fallback = vec![NO_URGENT_RECOMMENDATIONS.to_string()];
        assert!(!notify_if_actionable(&sink, &fallback, &Notification::default()));
        assert!(!notify_if_actionable(&sink, &[], &Notification::default()));
        assert!(sink.notifications().is_empty());
    }

    #[test]
    fn test_from_config() {
        let config = DashboardConfig::new().with_notification("Heads up", 2);
        let notification = Notification::from_config(&config);
        assert_eq!(notification, Notification::new("Heads up", Duration::from_secs(2)));
    }
}
