//! # Result Export
//!
//! Writes the parameter/result table of one evaluation to a date-named
//! spreadsheet (XLSX), a plain CSV file, or JSON for tooling.
//!
//! The table always holds ten rows in this order:
//! Fed, Hed, b, h, d1, fyk, fck, d, Md, Rd_max. Values are unrounded and read
//! from the already computed [`CorbelResult`]; nothing is recomputed here.
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use corbel_core::calculations::{evaluate, CorbelInput};
//! use corbel_core::export::{export_file_name, export_rows, render_csv, ExportFormat};
//!
//! let input = CorbelInput::default();
//! let result = evaluate(&input).unwrap();
//! let rows = export_rows(&input, &result);
//! assert_eq!(rows.len(), 10);
//!
//! let date = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
//! assert_eq!(export_file_name(date, ExportFormat::Csv), "resultats_console_2026-10-17.csv");
//! assert!(render_csv(&rows).unwrap().starts_with("Parameter,Value,Unit\n"));
//! ```

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use rust_xlsxwriter::{Format, Workbook};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::calculations::corbel::{CorbelInput, CorbelResult};
use crate::errors::{CalcError, CalcResult};
use crate::file_io::write_atomic;
use crate::units::{KiloNewtonMeters, KiloNewtons, Meters, MegaPascals, Unit};

/// File name prefix for exports
pub const EXPORT_FILE_PREFIX: &str = "resultats_console";

/// Column headers shared by every format
pub const EXPORT_HEADERS: [&str; 3] = ["Parameter", "Value", "Unit"];

/// Output format of an export file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
    Xlsx,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Csv, ExportFormat::Json, ExportFormat::Xlsx];

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
        }
    }

    /// Name shown in file dialogs
    pub fn description(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Json => "JSON",
            ExportFormat::Xlsx => "Excel workbook",
        }
    }

    /// Parse a user-supplied format name
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "csv" => Some(ExportFormat::Csv),
            "json" => Some(ExportFormat::Json),
            "xlsx" | "excel" => Some(ExportFormat::Xlsx),
            _ => None,
        }
    }
}

/// One parameter of the export table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRow {
    #[serde(rename = "Parameter")]
    pub parameter: String,
    #[serde(rename = "Value")]
    pub value: f64,
    #[serde(rename = "Unit")]
    pub unit: String,
}

impl ExportRow {
    fn new<U: Unit>(parameter: &str, quantity: U) -> Self {
        Self {
            parameter: parameter.to_string(),
            value: quantity.raw(),
            unit: U::SYMBOL.to_string(),
        }
    }
}

/// Build the ten-row parameter table
pub fn export_rows(input: &CorbelInput, result: &CorbelResult) -> Vec<ExportRow> {
    vec![
        ExportRow::new::<KiloNewtons>("Fed", input.vertical_force()),
        ExportRow::new::<KiloNewtons>("Hed", input.horizontal_force()),
        ExportRow::new::<Meters>("b", input.width()),
        ExportRow::new::<Meters>("h", input.depth()),
        ExportRow::new::<Meters>("d1", input.cover()),
        ExportRow::new::<MegaPascals>("fyk", input.steel_strength()),
        ExportRow::new::<MegaPascals>("fck", input.concrete_strength()),
        ExportRow::new::<Meters>("d", result.lever_arm()),
        ExportRow::new::<KiloNewtonMeters>("Md", result.design_moment()),
        ExportRow::new::<KiloNewtonMeters>("Rd_max", result.max_resisting_moment()),
    ]
}

/// `resultats_console_<YYYY-MM-DD>.<ext>`
pub fn export_file_name(date: NaiveDate, format: ExportFormat) -> String {
    format!("{}_{}.{}", EXPORT_FILE_PREFIX, date.format("%Y-%m-%d"), format.extension())
}

/// Render rows as CSV with a `Parameter,Value,Unit` header
pub fn render_csv(rows: &[ExportRow]) -> CalcResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| CalcError::serialization(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| CalcError::serialization(e.to_string()))
}

/// Render rows as a pretty JSON array
pub fn render_json(rows: &[ExportRow]) -> CalcResult<String> {
    Ok(serde_json::to_string_pretty(rows)?)
}

/// Render rows as a single-sheet workbook with a bold header row
pub fn render_xlsx(rows: &[ExportRow]) -> CalcResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Results")?;

    for (col, title) in EXPORT_HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *title, &header)?;
    }
    for (i, row) in rows.iter().enumerate() {
        let line = (i + 1) as u32;
        worksheet.write_string(line, 0, row.parameter.as_str())?;
        worksheet.write_number(line, 1, row.value)?;
        worksheet.write_string(line, 2, row.unit.as_str())?;
    }
    worksheet.set_column_width(0, 12)?;

    Ok(workbook.save_to_buffer()?)
}

/// Render rows in the given format
pub fn render(rows: &[ExportRow], format: ExportFormat) -> CalcResult<Vec<u8>> {
    match format {
        ExportFormat::Csv => Ok(render_csv(rows)?.into_bytes()),
        ExportFormat::Json => Ok(render_json(rows)?.into_bytes()),
        ExportFormat::Xlsx => render_xlsx(rows),
    }
}

/// Write the export file for one evaluation into `dir`.
///
/// Returns the path of the written file.
pub fn save_export(
    dir: &Path,
    date: NaiveDate,
    format: ExportFormat,
    input: &CorbelInput,
    result: &CorbelResult,
) -> CalcResult<PathBuf> {
    let path = dir.join(export_file_name(date, format));
    save_export_to(&path, format, input, result)?;
    Ok(path)
}

/// Write the export file for one evaluation to an explicit path
pub fn save_export_to(
    path: &Path,
    format: ExportFormat,
    input: &CorbelInput,
    result: &CorbelResult,
) -> CalcResult<()> {
    let rows = export_rows(input, result);
    let contents = render(&rows, format)?;
    write_atomic(path, &contents)?;
    info!(path = %path.display(), ?format, rows = rows.len(), "export written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::corbel::evaluate;

    fn sample() -> (CorbelInput, CorbelResult) {
        let input = CorbelInput::default();
        let result = evaluate(&input).unwrap();
        (input, result)
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
    }

    #[test]
    fn test_rows_order_and_units() {
        let (input, result) = sample();
        let rows = export_rows(&input, &result);

        let names: Vec<_> = rows.iter().map(|r| r.parameter.as_str()).collect();
        assert_eq!(names, ["Fed", "Hed", "b", "h", "d1", "fyk", "fck", "d", "Md", "Rd_max"]);

        let units: Vec<_> = rows.iter().map(|r| r.unit.as_str()).collect();
        assert_eq!(units, ["kN", "kN", "m", "m", "m", "MPa", "MPa", "m", "kNm", "kNm"]);
    }

    #[test]
    fn test_rows_carry_unrounded_result() {
        let (input, result) = sample();
        let rows = export_rows(&input, &result);
        assert_eq!(rows[7].value, result.lever_arm_m);
        assert_eq!(rows[8].value, result.design_moment_knm);
        assert_eq!(rows[9].value, result.max_resisting_moment_knm);
    }

    #[test]
    fn test_file_name() {
        assert_eq!(export_file_name(date(), ExportFormat::Json), "resultats_console_2026-10-17.json");
    }

    #[test]
    fn test_csv_layout() {
        let (input, result) = sample();
        let csv = render_csv(&export_rows(&input, &result)).unwrap();
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "Parameter,Value,Unit");
        assert_eq!(lines[1], "Fed,32.25,kN");
        let fyk: Vec<_> = lines[6].split(',').collect();
        assert_eq!(fyk[0], "fyk");
        assert_eq!(fyk[1].parse::<f64>().unwrap(), 500.0);
        assert_eq!(fyk[2], "MPa");
    }

    #[test]
    fn test_csv_quotes_fields_with_separators() {
        let rows = vec![ExportRow {
            parameter: "a,b".to_string(),
            value: 1.5,
            unit: "say \"hi\"".to_string(),
        }];
        let csv = render_csv(&rows).unwrap();
        assert_eq!(csv.lines().nth(1), Some("\"a,b\",1.5,\"say \"\"hi\"\"\""));
    }

    #[test]
    fn test_csv_keeps_full_precision() {
        let (input, result) = sample();
        let csv = render_csv(&export_rows(&input, &result)).unwrap();
        let d_line = csv.lines().find(|l| l.starts_with("d,")).unwrap();
        let value: f64 = d_line.split(',').nth(1).unwrap().parse().unwrap();
        assert_eq!(value, result.lever_arm_m);
    }

    #[test]
    fn test_xlsx_is_zip_workbook() {
        let (input, result) = sample();
        let bytes = render_xlsx(&export_rows(&input, &result)).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn test_save_export_xlsx() {
        let dir = tempfile::tempdir().unwrap();
        let (input, result) = sample();

        let path = save_export(dir.path(), date(), ExportFormat::Xlsx, &input, &result).unwrap();

        assert_eq!(path, dir.path().join("resultats_console_2026-10-17.xlsx"));
        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn test_json_roundtrip() {
        let (input, result) = sample();
        let rows = export_rows(&input, &result);
        let json = render_json(&rows).unwrap();
        let parsed: Vec<ExportRow> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, rows);
        assert_eq!(parsed[7].value.to_bits(), result.lever_arm_m.to_bits());
    }

    #[test]
    fn test_format_names() {
        assert_eq!(ExportFormat::from_name("CSV"), Some(ExportFormat::Csv));
        assert_eq!(ExportFormat::from_name(" json "), Some(ExportFormat::Json));
        assert_eq!(ExportFormat::from_name("XLSX"), Some(ExportFormat::Xlsx));
        assert_eq!(ExportFormat::from_name("pdf"), None);
        assert_eq!(serde_json::to_string(&ExportFormat::Json).unwrap(), "\"json\"");
    }

    #[test]
    fn test_save_export_writes_dated_file() {
        let dir = tempfile::tempdir().unwrap();
        let (input, result) = sample();

        let path = save_export(dir.path(), date(), ExportFormat::Csv, &input, &result).unwrap();

        assert_eq!(path, dir.path().join("resultats_console_2026-10-17.csv"));
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("Rd_max,"));
        assert!(!dir.path().join("resultats_console_2026-10-17.csv.tmp").exists());
    }
}
