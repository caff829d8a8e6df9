//! Audit logging for the expense ledger
//!
//! Records every add, edit, delete and file transfer in an append-only
//! audit log, with before/after values for edits.
//!
//! # Architecture
//!
//! - `AuditEntry`: a single entry with timestamp, operation, entity
//!   information and optional before/after values.
//! - `AuditLogger`: writes entries to the log file as JSON lines.
//! - `generate_diff`: builds the human-readable summary of an edit.
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_ledger::audit::AuditLogger;
//! use expense_ledger::ledger::Ledger;
//!
//! let ledger = Ledger::new(currency).with_audit(AuditLogger::new(paths.audit_log()));
//! ```

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
