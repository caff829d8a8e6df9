//! Audit log viewing

use std::io::Write;

use crate::audit::AuditLogger;
use crate::error::LedgerResult;

/// Print the last `limit` audit entries, oldest first
pub fn handle_audit_command<W: Write>(
    logger: &AuditLogger,
    limit: usize,
    mut out: W,
) -> LedgerResult<()> {
    let entries = logger.read_recent(limit)?;

    if entries.is_empty() {
        writeln!(out, "No audit entries in {}", logger.path().display())?;
        return Ok(());
    }

    for entry in &entries {
        writeln!(out, "{}", entry.format_human_readable())?;
    }

    Ok(())
}
