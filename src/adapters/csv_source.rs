use crate::domain::dialect::Dialect;
use crate::domain::model::{Row, SourceTable};
use crate::utils::error::Result;
use csv::ReaderBuilder;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Parses header-delimited CSV into column names and raw rows.
///
/// Rows may be shorter or longer than the header; pairing values with
/// fields happens when records are built.
pub fn read_table(bytes: &[u8], dialect: &Dialect) -> Result<SourceTable> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let mut reader = ReaderBuilder::new()
        .delimiter(dialect.delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let columns = reader.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let line = record
            .position()
            .map(|position| position.line())
            .unwrap_or_default();
        rows.push(Row {
            line,
            values: record.iter().map(str::to_string).collect(),
        });
    }

    Ok(SourceTable { columns, rows })
}
