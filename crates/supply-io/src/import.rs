//! 試算表匯入

use std::io::Read;
use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use chrono::{NaiveDateTime, NaiveTime};
use supply_core::value::decimal_from_f64;
use supply_core::{Result, SupplyError, SupplyRecord};

use crate::FileFormat;

/// 依副檔名匯入
pub fn import_path(path: impl AsRef<Path>) -> Result<Vec<SupplyRecord>> {
    let path = path.as_ref();
    match FileFormat::from_path(path)? {
        FileFormat::Workbook => import_workbook(path),
        FileFormat::Csv => import_csv(path),
    }
}

/// 匯入活頁簿的第一個工作表
pub fn import_workbook(path: impl AsRef<Path>) -> Result<Vec<SupplyRecord>> {
    let path = path.as_ref();
    let mut workbook =
        open_workbook_auto(path).map_err(|e| SupplyError::Import(e.to_string()))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(SupplyError::EmptyWorkbook)?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| SupplyError::Import(format!("{}: {}", sheet_name, e)))?;

    let rows = range
        .rows()
        .map(|row| row.iter().map(cell_text).collect::<Vec<_>>());
    let records = rows_to_records(rows);

    tracing::info!(
        "匯入活頁簿 {}（工作表 {}）：{} 筆記錄",
        path.display(),
        sheet_name,
        records.len()
    );

    Ok(records)
}

/// 匯入 csv 檔案
pub fn import_csv(path: impl AsRef<Path>) -> Result<Vec<SupplyRecord>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)?;
    let records = import_csv_reader(file)?;

    tracing::info!("匯入 csv {}：{} 筆記錄", path.display(), records.len());

    Ok(records)
}

/// 由任意來源讀取 csv
pub fn import_csv_reader<R: Read>(reader: R) -> Result<Vec<SupplyRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (line_num, result) in csv_reader.records().enumerate() {
        let record =
            result.map_err(|e| SupplyError::Import(format!("csv 第 {} 行: {}", line_num + 1, e)))?;
        rows.push(record.iter().map(str::to_string).collect::<Vec<_>>());
    }

    Ok(rows_to_records(rows.into_iter()))
}

/// 首列為欄位名稱，其餘每列轉為一筆記錄；整列皆空白者略過
fn rows_to_records(mut rows: impl Iterator<Item = Vec<String>>) -> Vec<SupplyRecord> {
    let Some(header_row) = rows.next() else {
        return Vec::new();
    };
    let headers = normalize_headers(header_row);

    let mut records = Vec::new();
    for row in rows {
        if row.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }

        let mut record = SupplyRecord::default();
        for (header, cell) in headers.iter().zip(row.iter()) {
            if cell.trim().is_empty() {
                continue;
            }
            record.set_field(header, cell);
        }
        records.push(record);
    }

    records
}

/// 去除欄位名稱空白；空白欄位名稱依序命名為 `__EMPTY`、`__EMPTY_1`…
fn normalize_headers(header_row: Vec<String>) -> Vec<String> {
    let mut unnamed = 0;
    header_row
        .into_iter()
        .map(|header| {
            let header = header.trim().to_string();
            if !header.is_empty() {
                return header;
            }
            let name = match unnamed {
                0 => "__EMPTY".to_string(),
                n => format!("__EMPTY_{}", n),
            };
            unnamed += 1;
            name
        })
        .collect()
}

/// 儲存格轉為文字
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(s) | Data::DateTimeIso(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => decimal_from_f64(*f)
            .map(|d| d.to_string())
            .unwrap_or_default(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(format_date_time)
            .unwrap_or_else(|| dt.as_f64().to_string()),
        other => other.to_string(),
    }
}

/// 日期儲存格：午夜只保留日期
fn format_date_time(dt: NaiveDateTime) -> String {
    if dt.time() == NaiveTime::MIN {
        dt.format("%Y-%m-%d").to_string()
    } else {
        dt.format("%Y-%m-%dT%H:%M:%S").to_string()
    }
}
