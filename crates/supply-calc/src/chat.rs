//! 聊天回覆

use chrono::NaiveDateTime;
use supply_core::SupplyRecord;

use crate::suggestion::suggestions_text;

/// 觸發庫存建議的關鍵字（小寫比對）
pub const CHAT_KEYWORDS: [&str; 3] = ["supply", "stock", "recommendation"];

/// 回覆聊天訊息
///
/// 訊息含任一關鍵字時回傳多行建議文字；否則回傳 `None`，
/// 由呼叫端交給其他處理流程。
pub fn respond_to_message(
    message: &str,
    records: &[SupplyRecord],
    reference: NaiveDateTime,
) -> Option<String> {
    let lower = message.to_lowercase();
    if !CHAT_KEYWORDS.iter().any(|keyword| lower.contains(keyword)) {
        return None;
    }

    Some(suggestions_text(records, reference))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suggestion::{generate_suggestions, NO_URGENT_RECOMMENDATIONS};
    use chrono::NaiveDate;
    use rstest::rstest;
    use rust_decimal::Decimal;

    fn reference() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 10)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn records() -> Vec<SupplyRecord> {
        vec![
            SupplyRecord::new("Gloves").with_stock(Decimal::from(3)),
            SupplyRecord::new("Masks").with_requested_date("2024-01-01"),
        ]
    }

    #[rstest]
    #[case("what's my stock level?")]
    #[case("Any SUPPLY issues")]
    #[case("give me a recommendation")]
    #[case("Supply levels?")]
    fn test_keyword_matches(#[case] message: &str) {
        let records = records();
        let expected = generate_suggestions(&records, reference()).join("\n");

        assert_eq!(
            respond_to_message(message, &records, reference()),
            Some(expected)
        );
    }

    #[rstest]
    #[case("hello")]
    #[case("")]
    #[case("how are deliveries going")]
    fn test_no_keyword(#[case] message: &str) {
        assert_eq!(respond_to_message(message, &records(), reference()), None);
    }

    #[test]
    fn test_keyword_with_no_issues() {
        let response = respond_to_message("stock?", &[], reference());
        assert_eq!(response.as_deref(), Some(NO_URGENT_RECOMMENDATIONS));
    }
}
