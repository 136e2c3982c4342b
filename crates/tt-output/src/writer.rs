//! The `TimetableWriter` trait implemented by all backend writers.

use tt_core::TenantId;
use tt_engine::TimetableResult;

use crate::OutputResult;

/// Trait implemented by the CSV, JSON, and SQLite writers.
///
/// Writing a tenant's timetable replaces whatever the backend previously held
/// for that tenant.  Other tenants are left untouched.
pub trait TimetableWriter {
    /// Store `result` as the current timetable for `tenant`.
    fn write_timetable(&mut self, tenant: &TenantId, result: &TimetableResult) -> OutputResult<()>;

    /// Flush and close all underlying handles.  Later writes fail with
    /// [`OutputError::Finished`][crate::OutputError::Finished].
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

/// A file-name-safe rendering of `tenant`.
///
/// ASCII alphanumerics and `-` pass through; every other byte, `_` included,
/// becomes `_` followed by two upper-case hex digits.  `_` only ever starts
/// an escape, so distinct tenants always get distinct stems.
pub(crate) fn tenant_file_stem(tenant: &TenantId) -> String {
    let mut stem = String::with_capacity(tenant.as_str().len());
    for byte in tenant.as_str().bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'-' {
            stem.push(byte as char);
        } else {
            stem.push_str(&format!("_{byte:02X}"));
        }
    }
    stem
}
