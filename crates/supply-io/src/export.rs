//! 試算表匯出

use std::io::Write;
use std::path::Path;

use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};
use supply_core::{DashboardConfig, Result, SupplyError, SupplyRecord};

use crate::table::{Cell, SheetTable};
use crate::FileFormat;

/// 依副檔名匯出
pub fn export_path(
    records: &[SupplyRecord],
    path: impl AsRef<Path>,
    config: &DashboardConfig,
) -> Result<()> {
    let path = path.as_ref();
    match FileFormat::from_path(path)? {
        FileFormat::Workbook => export_xlsx(records, path, config),
        FileFormat::Csv => {
            let file = std::fs::File::create(path)?;
            export_csv(records, file, config)
        }
    }
}

/// 匯出為 xlsx 檔案
pub fn export_xlsx(
    records: &[SupplyRecord],
    path: impl AsRef<Path>,
    config: &DashboardConfig,
) -> Result<()> {
    let path = path.as_ref();
    let mut workbook = build_workbook(records, config)?;
    workbook.save(path).map_err(export_error)?;

    tracing::info!("匯出 {} 筆記錄至 {}", records.len(), path.display());
    Ok(())
}

/// 匯出為 xlsx 位元組
pub fn export_xlsx_to_buffer(
    records: &[SupplyRecord],
    config: &DashboardConfig,
) -> Result<Vec<u8>> {
    let mut workbook = build_workbook(records, config)?;
    workbook.save_to_buffer().map_err(export_error)
}

/// 匯出為 csv
pub fn export_csv<W: Write>(
    records: &[SupplyRecord],
    writer: W,
    config: &DashboardConfig,
) -> Result<()> {
    let table = SheetTable::from_records(records, config);
    let mut csv_writer = csv::WriterBuilder::new().flexible(true).from_writer(writer);

    csv_writer
        .write_record(&table.headers)
        .map_err(|e| SupplyError::Export(e.to_string()))?;
    for row in &table.rows {
        csv_writer
            .write_record(row.iter().map(Cell::to_text))
            .map_err(|e| SupplyError::Export(e.to_string()))?;
    }
    csv_writer.flush()?;

    tracing::debug!("csv 匯出：{} 列", table.rows.len() + 1);
    Ok(())
}

fn build_workbook(records: &[SupplyRecord], config: &DashboardConfig) -> Result<Workbook> {
    config.validate()?;
    let table = SheetTable::from_records(records, config);

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(config.sheet_name.as_str())
        .map_err(export_error)?;
    write_table(worksheet, &table).map_err(export_error)?;

    Ok(workbook)
}

fn write_table(worksheet: &mut Worksheet, table: &SheetTable) -> std::result::Result<(), XlsxError> {
    for (col, header) in table.headers.iter().enumerate() {
        worksheet.write_string(0, column(col)?, header.as_str())?;
    }

    for (index, row) in table.rows.iter().enumerate() {
        let row_num = u32::try_from(index + 1).map_err(|_| XlsxError::RowColumnLimitError)?;
        for (col, cell) in row.iter().enumerate() {
            match cell {
                Cell::Empty => {}
                Cell::Number(n) => match n.to_f64() {
                    Some(value) => {
                        worksheet.write_number(row_num, column(col)?, value)?;
                    }
                    None => {
                        worksheet.write_string(row_num, column(col)?, n.to_string().as_str())?;
                    }
                },
                Cell::Text(s) => {
                    worksheet.write_string(row_num, column(col)?, s.as_str())?;
                }
            }
        }
    }

    Ok(())
}

fn column(index: usize) -> std::result::Result<u16, XlsxError> {
    u16::try_from(index).map_err(|_| XlsxError::RowColumnLimitError)
}

fn export_error(err: XlsxError) -> SupplyError {
    SupplyError::Export(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::import::{import_csv_reader, import_path};
    use rust_decimal::Decimal;

    fn sample_records() -> Vec<SupplyRecord> {
        vec![
            SupplyRecord::new("Gloves")
                .with_stock(Decimal::from(3))
                .with_price(Decimal::new(250, 2))
                .with_requested_date("2024-01-01"),
            SupplyRecord::new("Masks")
                .with_stock(Decimal::from(40))
                .with_received_date("2024-01-07")
                .with_extra("supplier", "ACME"),
        ]
    }

    #[test]
    fn test_export_csv_trailing_rows() {
        let mut buffer = Vec::new();
        export_csv(&sample_records(), &mut buffer, &DashboardConfig::default()).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines,
            vec![
                "item,stock,price,requestedDate,receivedDate,supplier,Note",
                "Gloves,3,2.50,2024-01-01,,,",
                "Masks,40,,,2024-01-07,ACME,",
                ",,,,,,",
                ",,,,,,BY JANIO VILLALBA",
            ]
        );
    }

    #[test]
    fn test_csv_round_trip_keeps_records() {
        let records = sample_records();
        let mut buffer = Vec::new();
        export_csv(&records, &mut buffer, &DashboardConfig::default()).unwrap();

        let imported = import_csv_reader(buffer.as_slice()).unwrap();

        // 空白分隔列略過，註記列成為一筆只有 Note 的記錄
        assert_eq!(imported.len(), 3);
        assert_eq!(imported[0], records[0]);
        assert_eq!(imported[1], records[1]);
        assert_eq!(imported[2].field_text("Note"), Some("BY JANIO VILLALBA".to_string()));
    }

    #[test]
    fn test_xlsx_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Data.xlsx");
        let records = sample_records();

        export_xlsx(&records, &path, &DashboardConfig::default()).unwrap();
        let imported = import_path(&path).unwrap();

        assert_eq!(imported.len(), 3);
        assert_eq!(imported[0].item, "Gloves");
        assert_eq!(imported[0].stock, Some(Decimal::from(3)));
        assert_eq!(imported[0].price, Some(Decimal::new(25, 1)));
        assert_eq!(imported[0].requested_date.as_deref(), Some("2024-01-01"));
        assert_eq!(imported[1].field_text("supplier"), Some("ACME".to_string()));
        assert_eq!(imported[2].field_text("Note"), Some("BY JANIO VILLALBA".to_string()));
    }

    #[test]
    fn test_xlsx_round_trip_keeps_fractional_price() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Data.xlsx");
        let records = vec![SupplyRecord::new("Swabs")
            .with_stock(Decimal::from(10))
            .with_price(Decimal::new(1, 1))
            .with_requested_date("2024-01-01")];

        export_xlsx(&records, &path, &DashboardConfig::default()).unwrap();
        let imported = import_path(&path).unwrap();

        assert_eq!(imported[0].price, Some(Decimal::new(1, 1)));
        assert_eq!(imported[0].field_text("price"), Some("0.1".to_string()));
        assert_eq!(imported[0].line_cost(), Decimal::from(1));
    }

    #[test]
    fn test_export_to_buffer() {
        let bytes = export_xlsx_to_buffer(&sample_records(), &DashboardConfig::default()).unwrap();
        // xlsx 為 zip 容器
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_export_rejects_invalid_sheet_name() {
        let config = DashboardConfig::new().with_sheet_name("");
        let result = export_xlsx_to_buffer(&sample_records(), &config);
        assert!(matches!(result, Err(SupplyError::Config(_))));
    }

    #[test]
    fn test_export_path_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let csv_path = dir.path().join("out.csv");

        export_path(&sample_records(), &csv_path, &DashboardConfig::default()).unwrap();

        let text = std::fs::read_to_string(&csv_path).unwrap();
        assert!(text.ends_with(",BY JANIO VILLALBA\n"));

        let result = export_path(&sample_records(), dir.path().join("out.txt"), &DashboardConfig::default());
        assert!(matches!(result, Err(SupplyError::UnsupportedFormat(_))));
    }
}
