//! 月度支出彙總

use std::collections::HashMap;

use supply_core::{MonthlySpendingPoint, SupplyRecord};

/// 彙總每月支出
///
/// 每筆記錄以請購日期前 7 碼為月份，累加 `庫存 × 單價`。
/// 沒有請購日期的記錄略過。輸出依月份首次出現的順序，不排序。
pub fn aggregate_monthly_spending(records: &[SupplyRecord]) -> Vec<MonthlySpendingPoint> {
    let mut points: Vec<MonthlySpendingPoint> = Vec::new();
    let mut index_by_month: HashMap<String, usize> = HashMap::new();

    for record in records {
        let Some(month) = record.requested_month() else {
            continue;
        };

        let index = *index_by_month.entry(month.clone()).or_insert_with(|| {
            points.push(MonthlySpendingPoint::new(month));
            points.len() - 1
        });
        points[index].add(record.line_cost());
    }

    tracing::debug!(
        "月度支出彙總：記錄 {} 筆，月份 {} 個",
        records.len(),
        points.len()
    );

    points
}
