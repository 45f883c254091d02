//! 月度支出模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 月度支出點（圖表資料）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySpendingPoint {
    /// 月份（`YYYY-MM`）
    pub month: String,

    /// 當月金額合計
    pub amount: Decimal,
}

impl MonthlySpendingPoint {
    /// 創建金額為 0 的月份
    pub fn new(month: String) -> Self {
        Self {
            month,
            amount: Decimal::ZERO,
        }
    }

    /// 累加金額
    pub fn add(&mut self, amount: Decimal) {
        self.amount = self.amount.saturating_add(amount);
    }
}

/// 依月份排序（`YYYY-MM` 字典序即時間序）
pub fn sort_chronologically(points: &mut [MonthlySpendingPoint]) {
    points.sort_by(|a, b| a.month.cmp(&b.month));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_amount() {
        let mut point = MonthlySpendingPoint::new("2024-01".to_string());
        point.add(Decimal::from(10));
        point.add(Decimal::new(55, 1));
        assert_eq!(point.amount, Decimal::new(155, 1));
    }

    #[test]
    fn test_sort_chronologically() {
        let mut points = vec![
            MonthlySpendingPoint::new("2024-03".to_string()),
            MonthlySpendingPoint::new("2023-12".to_string()),
            MonthlySpendingPoint::new("2024-01".to_string()),
        ];

        sort_chronologically(&mut points);

        let months: Vec<_> = points.iter().map(|p| p.month.as_str()).collect();
        assert_eq!(months, vec!["2023-12", "2024-01", "2024-03"]);
    }
}
