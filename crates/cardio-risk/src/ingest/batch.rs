use std::io::Read;

use super::RawFields;
use crate::assessment::FieldName;

/// Reads a CSV export into one raw field map per data row, in file order.
///
/// Headers resolve through [`FieldName::from_key`]; unknown columns (patient ids,
/// outcome labels) are skipped. Empty cells are absent, and when a field appears
/// in two columns the leftmost wins.
pub fn read_rows<R: Read>(reader: R) -> Result<Vec<RawFields>, csv::Error> {
    read_rows_up_to(reader, usize::MAX)
}

/// Like [`read_rows`], but stops once `max_rows` rows have been read.
///
/// Rows past the cap are never parsed; callers detect an oversized export by
/// asking for one row more than they accept.
pub fn read_rows_up_to<R: Read>(
    reader: R,
    max_rows: usize,
) -> Result<Vec<RawFields>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let columns: Vec<Option<FieldName>> = csv_reader
        .headers()?
        .iter()
        .map(FieldName::from_key)
        .collect();

    let mut rows = Vec::new();
    for record in csv_reader.records().take(max_rows) {
        let record = record?;
        let mut fields = RawFields::new();
        for (column, value) in columns.iter().zip(record.iter()) {
            let Some(field) = column else {
                continue;
            };
            if value.is_empty() || fields.get(*field).is_some() {
                continue;
            }
            fields.insert(*field, value);
        }
        rows.push(fields);
    }

    Ok(rows)
}
