//! CSV export and import of the whole ledger

use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

use super::Ledger;
use crate::audit::{AuditEntry, Operation};
use crate::codec;
use crate::error::{LedgerError, LedgerResult};
use crate::models::ExpenseRecord;

impl Ledger {
    /// Write every record to `path`, returning how many were written
    ///
    /// Rows are encoded and the export audited before the file is touched,
    /// so a failed audit leaves no file behind.
    pub fn export_csv(&self, path: &Path) -> LedgerResult<usize> {
        let mut encoded = Vec::new();
        let count = self.export_to(&mut encoded)?;
        self.log(|| AuditEntry::transfer(Operation::Export, path.display().to_string(), count))?;

        std::fs::write(path, &encoded)
            .map_err(|e| LedgerError::export(format!("{}: {}", path.display(), e)))?;

        Ok(count)
    }

    /// Write every record as CSV rows to any writer
    pub fn export_to<W: Write>(&self, writer: W) -> LedgerResult<usize> {
        codec::write_rows(writer, &self.expenses)?;
        Ok(self.expenses.len())
    }

    /// Add every row of `path` to the ledger, returning how many were added
    ///
    /// Imported amounts take the ledger's current currency. Nothing is added
    /// unless the whole file decodes and the import is audited.
    pub fn import_csv(&mut self, path: &Path) -> LedgerResult<usize> {
        let file = File::open(path)
            .map_err(|e| LedgerError::import(format!("{}: {}", path.display(), e)))?;

        let records = codec::read_rows(BufReader::new(file), self.currency)?;
        let count = records.len();
        self.log(|| AuditEntry::transfer(Operation::Import, path.display().to_string(), count))?;

        self.insert_all(records);
        Ok(count)
    }

    /// Add every CSV row from any reader
    pub fn import_from<R: Read>(&mut self, reader: R) -> LedgerResult<usize> {
        let records = codec::read_rows(reader, self.currency)?;
        let count = records.len();
        self.insert_all(records);
        Ok(count)
    }

    fn insert_all(&mut self, records: Vec<ExpenseRecord>) {
        for record in records {
            self.insert_sorted(record);
        }
    }
}
