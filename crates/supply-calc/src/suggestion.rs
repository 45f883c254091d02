//! 建議產生
//!
//! 依固定門檻逐筆檢查記錄：
//! 1. 低庫存：庫存存在且低於 [`LOW_STOCK_THRESHOLD`]
//! 2. 到貨延遲：已請購、未到貨，且距參考時間超過 [`DELIVERY_DELAY_DAYS`] 天
//!
//! 一筆記錄可產生 0、1 或 2 則建議；全部都沒有時回傳單一的備用訊息。

use chrono::{Duration, NaiveDateTime};
use rust_decimal::Decimal;
use supply_core::value::parse_date_time;
use supply_core::SupplyRecord;

/// 低庫存門檻（單位數）
pub const LOW_STOCK_THRESHOLD: i64 = 5;

/// 到貨延遲門檻（天）
pub const DELIVERY_DELAY_DAYS: i64 = 3;

/// 無建議時的備用訊息
pub const NO_URGENT_RECOMMENDATIONS: &str = "No urgent recommendations at this time.";

/// 產生建議清單
pub fn generate_suggestions(records: &[SupplyRecord], reference: NaiveDateTime) -> Vec<String> {
    let mut suggestions = Vec::new();

    for record in records {
        if is_low_stock(record) {
            suggestions.push(format!(
                "Low stock warning: \"{}\" is below {} units.",
                record.item, LOW_STOCK_THRESHOLD
            ));
        }

        if let Some(requested) = delayed_since(record, reference) {
            suggestions.push(format!(
                "Delivery delay: \"{}\" has not arrived since {}.",
                record.item, requested
            ));
        }
    }

    tracing::debug!(
        "建議產生：記錄 {} 筆，建議 {} 則",
        records.len(),
        suggestions.len()
    );

    if suggestions.is_empty() {
        suggestions.push(NO_URGENT_RECOMMENDATIONS.to_string());
    }

    suggestions
}

/// 建議清單合併為多行文字
pub fn suggestions_text(records: &[SupplyRecord], reference: NaiveDateTime) -> String {
    generate_suggestions(records, reference).join("\n")
}

/// 是否有需要處理的建議（第一則不是備用訊息）
pub fn has_actionable_suggestions(suggestions: &[String]) -> bool {
    suggestions
        .first()
        .is_some_and(|first| first != NO_URGENT_RECOMMENDATIONS)
}

fn is_low_stock(record: &SupplyRecord) -> bool {
    record
        .stock
        .is_some_and(|stock| stock < Decimal::from(LOW_STOCK_THRESHOLD))
}

/// 回傳延遲記錄的原始請購日期文字
fn delayed_since(record: &SupplyRecord, reference: NaiveDateTime) -> Option<&str> {
    if record.is_received() {
        return None;
    }

    let raw = record.requested_date.as_deref().filter(|d| !d.is_empty())?;
    let Some(requested) = parse_date_time(raw) else {
        tracing::debug!("請購日期無法解析，略過延遲檢查: {:?} ({})", raw, record.item);
        return None;
    };

    // 保留小數天數：3 天又 1 小時即視為超過 3 天
    let elapsed = reference.signed_duration_since(requested);
    (elapsed > Duration::days(DELIVERY_DELAY_DAYS)).then_some(raw)
}
