//! 匯出表格
//!
//! 將記錄展開成「欄位名稱 → 儲存格」的列，欄位順序為所有列中首次出現的順序。

use rust_decimal::Decimal;
use supply_core::{DashboardConfig, RecordField, SupplyRecord};

/// 註記列的欄位名稱
pub const NOTE_COLUMN: &str = "Note";

/// 儲存格
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Number(Decimal),
    Text(String),
}

impl Cell {
    /// 顯示文字（csv 使用）
    pub fn to_text(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Number(n) => n.to_string(),
            Cell::Text(s) => s.clone(),
        }
    }
}

/// 單一工作表的表格內容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetTable {
    /// 欄位名稱
    pub headers: Vec<String>,

    /// 資料列（與 `headers` 對齊）
    pub rows: Vec<Vec<Cell>>,
}

impl SheetTable {
    /// 由記錄建立匯出表格（附加空白分隔列與註記列）
    pub fn from_records(records: &[SupplyRecord], config: &DashboardConfig) -> Self {
        let mut keyed_rows: Vec<Vec<(String, Cell)>> = records.iter().map(record_cells).collect();
        keyed_rows.push(Vec::new());
        keyed_rows.push(vec![(
            NOTE_COLUMN.to_string(),
            Cell::Text(config.annotation_note.clone()),
        )]);

        let mut headers: Vec<String> = Vec::new();
        for row in &keyed_rows {
            for (column, _) in row {
                if !headers.contains(column) {
                    headers.push(column.clone());
                }
            }
        }

        let rows = keyed_rows
            .into_iter()
            .map(|row| {
                headers
                    .iter()
                    .map(|header| {
                        row.iter()
                            .find(|(column, _)| column == header)
                            .map(|(_, cell)| cell.clone())
                            .unwrap_or(Cell::Empty)
                    })
                    .collect()
            })
            .collect();

        Self { headers, rows }
    }
}

/// 單筆記錄的欄位（缺值欄位不列入）
fn record_cells(record: &SupplyRecord) -> Vec<(String, Cell)> {
    let mut cells = Vec::new();

    for field in RecordField::ALL {
        let cell = match field {
            RecordField::Item => Some(record.item.clone())
                .filter(|item| !item.is_empty())
                .map(Cell::Text),
            RecordField::Stock => record.stock.map(Cell::Number),
            RecordField::Price => record.price.map(Cell::Number),
            RecordField::RequestedDate => record.requested_date.clone().map(Cell::Text),
            RecordField::ReceivedDate => record.received_date.clone().map(Cell::Text),
        };
        if let Some(cell) = cell {
            cells.push((field.column_name().to_string(), cell));
        }
    }

    for (column, value) in &record.extra {
        cells.push((column.clone(), Cell::Text(value.clone())));
    }

    cells
}
