//! Folding write results back into locally held collections, so a screen
//! can reflect a create or update without re-fetching.
//!
//! Every function takes the collection by value and hands it back; callers
//! own the state and nothing here keeps a reference between calls.

use crate::model::attendance::{AttendanceRecord, BulkMarkResult};
use crate::model::employee::Employee;

/// Newest first: the created record goes in front.
pub fn apply_single_create(
    mut existing: Vec<AttendanceRecord>,
    created: AttendanceRecord,
) -> Vec<AttendanceRecord> {
    existing.insert(0, created);
    existing
}

/// Prepends the created records in the order the backend returned them.
/// Skipped entries only feed user feedback and never touch the collection.
pub fn apply_bulk_create(
    existing: Vec<AttendanceRecord>,
    result: &BulkMarkResult,
) -> Vec<AttendanceRecord> {
    if result.created.is_empty() {
        return existing;
    }

    let mut merged = Vec::with_capacity(result.created.len() + existing.len());
    merged.extend(result.created.iter().cloned());
    merged.extend(existing);
    merged
}

/// Swaps in `updated` at the position of the record with `id`. An unknown
/// id leaves the collection as it was.
pub fn apply_update(
    mut existing: Vec<AttendanceRecord>,
    id: i64,
    updated: AttendanceRecord,
) -> Vec<AttendanceRecord> {
    if let Some(slot) = existing.iter_mut().find(|r| r.id == id) {
        *slot = updated;
    }
    existing
}

pub fn apply_employee_create(mut existing: Vec<Employee>, created: Employee) -> Vec<Employee> {
    existing.insert(0, created);
    existing
}

/// Drops the employee with the given business identifier (not the row id).
pub fn apply_employee_removal(mut existing: Vec<Employee>, employee_id: &str) -> Vec<Employee> {
    existing.retain(|e| e.employee_id != employee_id);
    existing
}
