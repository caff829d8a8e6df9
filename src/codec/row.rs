//! Flat row representation of expense records
//!
//! A row is exactly five fields: date, name, category, amount, description.
//! Amounts are written without a currency symbol; on the way back in, the
//! importing ledger's currency is attached.

use std::io::{Read, Write};

use csv::{ReaderBuilder, StringRecord, WriterBuilder};

use super::amount::{format_amount, parse_amount};
use super::date::{format_date, parse_date};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Currency, ExpenseRecord};

/// Number of fields in a row
pub const ROW_WIDTH: usize = 5;

/// Flatten a record into `[date, name, category, bare amount, description]`
pub fn to_row(record: &ExpenseRecord) -> [String; ROW_WIDTH] {
    [
        format_date(record.date),
        record.name.clone(),
        record.category.clone(),
        format_amount(record.amount, ""),
        record.description.clone(),
    ]
}

/// Rebuild a record from a row, attaching `currency` to the amount
pub fn from_row<S: AsRef<str>>(row: &[S], currency: Currency) -> LedgerResult<ExpenseRecord> {
    if row.len() != ROW_WIDTH {
        return Err(LedgerError::Format(format!(
            "expected {} fields, found {}",
            ROW_WIDTH,
            row.len()
        )));
    }

    let date =
        parse_date(row[0].as_ref()).map_err(|e| LedgerError::Format(format!("date: {}", e)))?;
    let amount = parse_amount(row[3].as_ref(), currency.symbol())
        .map_err(|e| LedgerError::Format(format!("amount: {}", e)))?;

    Ok(ExpenseRecord::new(
        date,
        row[1].as_ref(),
        row[2].as_ref(),
        amount,
        currency,
        row[4].as_ref(),
    ))
}

/// Write records as headerless CSV
pub fn write_rows<'a, W, I>(writer: W, records: I) -> LedgerResult<()>
where
    W: Write,
    I: IntoIterator<Item = &'a ExpenseRecord>,
{
    let mut csv_writer = WriterBuilder::new().has_headers(false).from_writer(writer);

    for record in records {
        csv_writer
            .write_record(to_row(record))
            .map_err(|e| LedgerError::export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| LedgerError::export(e.to_string()))
}

/// Read every row of a headerless CSV into records
///
/// Fails on the first malformed row, naming its 1-based line.
pub fn read_rows<R: Read>(reader: R, currency: Currency) -> LedgerResult<Vec<ExpenseRecord>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    let mut row = StringRecord::new();

    loop {
        let more = csv_reader.read_record(&mut row).map_err(|e| {
            if e.is_io_error() {
                LedgerError::import(e.to_string())
            } else {
                LedgerError::Format(e.to_string())
            }
        })?;
        if !more {
            break;
        }

        // Empty lines never reach here, but whitespace-only ones do
        if row.len() == 1 && row[0].trim().is_empty() {
            continue;
        }

        let line = row.position().map(|p| p.line()).unwrap_or_default();
        let fields: Vec<&str> = row.iter().collect();
        let record = from_row(&fields, currency).map_err(|e| match e {
            LedgerError::Format(msg) => LedgerError::Format(format!("row {}: {}", line, msg)),
            other => other,
        })?;
        records.push(record);
    }

    Ok(records)
}
