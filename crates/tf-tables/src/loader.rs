//! CSV loading of property tables.

use std::fs;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, info, warn};

use crate::column::{Column, PHASE_HEADER, normalize_header};
use crate::critical::CriticalTable;
use crate::encoding::decode_text;
use crate::error::{TableError, TableResult};
use crate::row::PropertyRow;
use crate::sources::TableSources;
use crate::table::{PropertyTable, TableKind};
use crate::table_set::TableSet;

const CRITICAL_TABLE_NAME: &str = "critical-properties";

/// Where a CSV column lands in a [`PropertyRow`].
#[derive(Debug, Clone, Copy, PartialEq)]
enum Target {
    Value(Column),
    Phase,
    Ignored,
}

/// Load all four tables named by `sources`.
pub fn load_tables(sources: &TableSources) -> TableResult<TableSet> {
    let sat_t = load_property_table(
        &sources.path_for(TableKind::SaturatedByTemperature),
        TableKind::SaturatedByTemperature,
    )?;
    let sat_p = load_property_table(
        &sources.path_for(TableKind::SaturatedByPressure),
        TableKind::SaturatedByPressure,
    )?;
    let grid = load_property_table(
        &sources.path_for(TableKind::SuperheatedCompressed),
        TableKind::SuperheatedCompressed,
    )?;
    let critical = load_critical_table(&sources.critical_path())?;
    TableSet::new(sat_t, sat_p, grid, critical)
}

pub fn load_property_table(path: &Path, kind: TableKind) -> TableResult<PropertyTable> {
    let text = read_text(path)?;
    let table = parse_property_table(&text, kind)?;
    if table.is_empty() {
        warn!(table = %kind, path = %path.display(), "table loaded with no rows");
    } else {
        info!(table = %kind, rows = table.len(), path = %path.display(), "loaded table");
    }
    Ok(table)
}

pub fn load_critical_table(path: &Path) -> TableResult<CriticalTable> {
    let text = read_text(path)?;
    let table = parse_critical_table(&text)?;
    info!(table = CRITICAL_TABLE_NAME, rows = table.len(), path = %path.display(), "loaded table");
    Ok(table)
}

fn read_text(path: &Path) -> TableResult<String> {
    let bytes = fs::read(path).map_err(|e| TableError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let (text, encoding) = decode_text(&bytes);
    debug!(path = %path.display(), %encoding, "decoded table file");
    Ok(text)
}

/// Parse CSV text into a table of `kind`.
///
/// Headers are matched against the column schema; unknown headers are
/// skipped. Blank or unparsable numeric cells become absent values.
pub fn parse_property_table(text: &str, kind: TableKind) -> TableResult<PropertyTable> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| TableError::Csv {
            table: kind.name(),
            message: format!("failed to read headers: {e}"),
        })?
        .clone();

    let targets = map_headers(&headers, kind);
    for &key in kind.key_columns() {
        if !targets.contains(&Target::Value(key)) {
            return Err(TableError::MissingColumn {
                table: kind.name(),
                column: key.header(),
            });
        }
    }

    let mut rows = Vec::new();
    for (line, result) in reader.records().enumerate() {
        let record = result.map_err(|e| TableError::Csv {
            table: kind.name(),
            message: format!("record {}: {e}", line + 1),
        })?;
        let row = parse_row(&record, &targets);
        if row.present_columns().next().is_some() || row.phase().is_some() {
            rows.push(row);
        }
    }

    Ok(PropertyTable::new(kind, rows))
}

fn map_headers(headers: &StringRecord, kind: TableKind) -> Vec<Target> {
    let mut targets: Vec<Target> = Vec::with_capacity(headers.len());
    for header in headers.iter() {
        let target = if normalize_header(header) == normalize_header(PHASE_HEADER) {
            Target::Phase
        } else if let Some(col) = Column::from_header(header) {
            Target::Value(col)
        } else {
            Target::Ignored
        };

        let target = match target {
            Target::Ignored => {
                debug!(table = %kind, header, "column not in schema, ignored");
                Target::Ignored
            }
            t if targets.contains(&t) => {
                debug!(table = %kind, header, "duplicate column ignored");
                Target::Ignored
            }
            t => t,
        };
        targets.push(target);
    }
    targets
}

fn parse_row(record: &StringRecord, targets: &[Target]) -> PropertyRow {
    let mut row = PropertyRow::new();
    for (cell, target) in record.iter().zip(targets) {
        match *target {
            Target::Value(col) => row.set(col, cell.parse::<f64>().ok()),
            Target::Phase if !cell.is_empty() => row.set_phase(Some(cell.to_owned())),
            _ => {}
        }
    }
    row
}

/// Parse the critical-properties CSV into text records.
pub fn parse_critical_table(text: &str) -> TableResult<CriticalTable> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| TableError::Csv {
            table: CRITICAL_TABLE_NAME,
            message: format!("failed to read headers: {e}"),
        })?
        .iter()
        .map(str::to_owned)
        .collect();

    let rows = reader
        .records()
        .map(|r| {
            r.map(|rec| rec.iter().map(str::to_owned).collect::<Vec<_>>())
                .map_err(|e| TableError::Csv {
                    table: CRITICAL_TABLE_NAME,
                    message: e.to_string(),
                })
        })
        .collect::<TableResult<Vec<_>>>()?;

    Ok(CriticalTable::new(headers, rows))
}
