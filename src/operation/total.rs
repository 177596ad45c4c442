//! Account balance totals.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::operation::{AmountKind, Operation};

/// The net sum of all operation amounts, i.e. the account balance.
///
/// Returns zero for an empty slice. The sum saturates at [Decimal::MAX] and
/// [Decimal::MIN] instead of overflowing.
pub fn total_amount(operations: &[Operation]) -> Decimal {
    operations
        .iter()
        .fold(Decimal::ZERO, |total, operation| total.saturating_add(operation.amount))
}

/// Income and expenses summed separately.
///
/// `expense` is a positive magnitude, so `net == income - expense`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OperationTotals {
    /// Sum of all positive amounts.
    pub income: Decimal,
    /// Sum of the magnitudes of all negative amounts.
    pub expense: Decimal,
    /// Sum of all amounts, equal to [total_amount].
    pub net: Decimal,
}

impl OperationTotals {
    /// Whether the balance is positive, negative or zero.
    pub fn balance_kind(&self) -> AmountKind {
        AmountKind::of(self.net)
    }
}

/// Sum income and expenses of `operations`, saturating like [total_amount].
pub fn totals(operations: &[Operation]) -> OperationTotals {
    operations
        .iter()
        .fold(OperationTotals::default(), |mut totals, operation| {
            match operation.kind() {
                AmountKind::Income => {
                    totals.income = totals.income.saturating_add(operation.amount)
                }
                AmountKind::Expense => {
                    totals.expense = totals.expense.saturating_sub(operation.amount)
                }
                AmountKind::Neutral => {}
            }
            totals.net = totals.net.saturating_add(operation.amount);
            totals
        })
}
