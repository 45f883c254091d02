//! 寬鬆值解析
//!
//! 匯入資料來自使用者的試算表，數值與日期欄位都可能缺漏或格式錯誤。
//! 這裡的函數一律回傳 `Option`，無法解析時視為缺值，而不是錯誤。

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

/// 解析數值文字
///
/// 支援一般小數與科學記號（如 `1.5e3`），空白或非數值回傳 `None`。
pub fn parse_decimal(text: &str) -> Option<Decimal> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    Decimal::from_str(trimmed)
        .ok()
        .or_else(|| Decimal::from_scientific(trimmed).ok())
}

/// 由浮點數轉換（JSON 數字、試算表數值儲存格）
///
/// 以最短的十進位表示法轉換，`0.1` 得到 `0.1` 而不是二進位展開值。
pub fn decimal_from_f64(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    Decimal::from_str(&value.to_string())
        .ok()
        .or_else(|| Decimal::from_f64(value))
        .map(|d| d.normalize())
}

/// 解析日期時間文字
///
/// 接受的格式：
/// * `YYYY-MM-DD`（視為當日 00:00）
/// * `YYYY-MM-DDTHH:MM[:SS[.fff]]` 或以空白分隔
/// * 帶時區的 RFC 3339（轉為 UTC）
pub fn parse_date_time(text: &str) -> Option<NaiveDateTime> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date.and_time(NaiveTime::MIN));
    }

    const LOCAL_FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
    ];
    for format in LOCAL_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(dt);
        }
    }

    DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .map(|dt| dt.naive_utc())
}

/// 將空字串正規化為 `None`
pub fn non_empty(text: Option<String>) -> Option<String> {
    text.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("12", Some(Decimal::from(12)))]
    #[case(" 3.5 ", Some(Decimal::new(35, 1)))]
    #[case("-2", Some(Decimal::from(-2)))]
    #[case("1e3", Some(Decimal::from(1000)))]
    #[case("", None)]
    #[case("   ", None)]
    #[case("abc", None)]
    #[case("12 units", None)]
    fn test_parse_decimal(#[case] input: &str, #[case] expected: Option<Decimal>) {
        assert_eq!(parse_decimal(input), expected);
    }

    #[test]
    fn test_decimal_from_f64() {
        assert_eq!(decimal_from_f64(2.5), Some(Decimal::new(25, 1)));
        assert_eq!(decimal_from_f64(4.0), Some(Decimal::from(4)));
        assert_eq!(decimal_from_f64(0.1), Some(Decimal::new(1, 1)));
        assert_eq!(decimal_from_f64(19.99), Some(Decimal::new(1999, 2)));
        assert_eq!(decimal_from_f64(0.1).unwrap().to_string(), "0.1");
        assert_eq!(decimal_from_f64(f64::NAN), None);
        assert_eq!(decimal_from_f64(f64::INFINITY), None);
    }

    #[test]
    fn test_parse_date_only() {
        let parsed = parse_date_time("2024-01-01").unwrap();
        assert_eq!(
            parsed,
            NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
        );
    }

    #[rstest]
    #[case("2024-01-01T10:30:00")]
    #[case("2024-01-01T10:30")]
    #[case("2024-01-01 10:30:00")]
    #[case("2024-01-01T10:30:00.000")]
    #[case("2024-01-01T10:30:00Z")]
    #[case("2024-01-01T12:30:00+02:00")]
    fn test_parse_date_time_variants(#[case] input: &str) {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap();
        assert_eq!(parse_date_time(input), Some(expected));
    }

    #[rstest]
    #[case("")]
    #[case("soon")]
    #[case("2024-13-01")]
    #[case("01/02/2024")]
    fn test_parse_date_time_invalid(#[case] input: &str) {
        assert_eq!(parse_date_time(input), None);
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(Some("x".to_string())), Some("x".to_string()));
        assert_eq!(non_empty(Some("  ".to_string())), None);
        assert_eq!(non_empty(None), None);
    }
}
