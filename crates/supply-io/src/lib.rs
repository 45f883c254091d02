//! # Supply IO
//!
//! 試算表匯入匯出：
//! * 匯入：讀取第一個工作表，首列為欄位名稱（xlsx/xls/ods 透過 calamine，csv 透過 csv）
//! * 匯出：記錄後附一列空白分隔列與一列註記，寫成單一工作表

pub mod export;
pub mod import;
pub mod table;

// Re-export 主要類型
pub use export::{export_csv, export_path, export_xlsx, export_xlsx_to_buffer};
pub use import::{import_csv, import_csv_reader, import_path, import_workbook};
pub use table::{Cell, SheetTable, NOTE_COLUMN};

use std::path::Path;

/// 支援的檔案格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// Excel / OpenDocument 活頁簿
    Workbook,
    /// 逗號分隔文字
    Csv,
}

impl FileFormat {
    /// 依副檔名判斷格式
    pub fn from_path(path: &Path) -> supply_core::Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Ok(FileFormat::Workbook),
            "csv" => Ok(FileFormat::Csv),
            _ => Err(supply_core::SupplyError::UnsupportedFormat(
                path.display().to_string(),
            )),
        }
    }
}
