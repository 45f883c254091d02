//! 儀表板示例

use chrono::NaiveDate;
use rust_decimal::Decimal;
use supply_calc::TracingNotifier;
use supply_core::{DashboardConfig, SupplyRecord};
use supply_dashboard::DashboardSession;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 通知以 warn! 輸出，需安裝訂閱者才看得到
    tracing_subscriber::fmt().with_target(false).init();

    println!("=== 供應儀表板示例 ===\n");

    let today = NaiveDate::from_ymd_opt(2024, 1, 10)
        .and_then(|d| d.and_hms_opt(9, 0, 0))
        .ok_or("無效的日期")?;

    // 創建供應記錄
    let records = vec![
        SupplyRecord::new("Gloves")
            .with_stock(Decimal::from(3))
            .with_price(Decimal::new(250, 2))
            .with_requested_date("2024-01-02")
            .with_received_date("2024-01-04"),
        SupplyRecord::new("Masks")
            .with_stock(Decimal::from(40))
            .with_price(Decimal::new(80, 2))
            .with_requested_date("2024-01-01"),
        SupplyRecord::new("Gowns")
            .with_stock(Decimal::from(12))
            .with_price(Decimal::from(15))
            .with_requested_date("2023-12-18")
            .with_received_date("2023-12-20"),
    ];

    let mut session = DashboardSession::new(DashboardConfig::default());
    session.replace_records(records, today);
    let notified = session.notify_on_open(&TracingNotifier, today);
    println!("開啟通知: {}\n", if notified { "已發送" } else { "無" });

    println!("月度支出:");
    for point in session.monthly_spending() {
        println!("  - {}: {}", point.month, point.amount);
    }

    println!("\n建議:");
    for suggestion in session.suggestions() {
        println!("  - {}", suggestion);
    }

    // 補貨後重新計算
    session.edit(0, "stock", "30", today)?;
    session.edit(1, "receivedDate", "2024-01-09", today)?;

    println!("\n補貨後:");
    for suggestion in session.suggestions() {
        println!("  - {}", suggestion);
    }

    if let Some(answer) = session.send_chat("Any stock recommendations?", today) {
        println!("\n聊天回覆:\n{}", answer);
    }

    Ok(())
}
