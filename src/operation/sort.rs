//! Chronological ordering of operations.

use crate::operation::Operation;

/// Return a copy of `operations` ordered from the earliest to the latest.
///
/// Operations that happened at the same moment keep their relative order, so
/// tables and charts built from the result do not jitter between renders.
pub fn sort_operations(operations: &[Operation]) -> Vec<Operation> {
    let mut sorted = operations.to_vec();
    sorted.sort_by_key(|operation| operation.occurred_at);
    sorted
}

/// Borrowing version of [sort_operations] for the aggregation functions.
pub(crate) fn sorted_refs(operations: &[Operation]) -> Vec<&Operation> {
    let mut sorted: Vec<&Operation> = operations.iter().collect();
    sorted.sort_by_key(|operation| operation.occurred_at);
    sorted
}
