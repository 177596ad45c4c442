//! Filters for narrowing down the operations of an account.

use serde::Deserialize;
use time::Date;

use crate::{
    operation::{AmountKind, Operation},
    timezone::AccountTimezone,
};

/// Criteria an operation must meet to be listed.
///
/// Unset criteria match everything. Dates are calendar days in the account's
/// timezone and both ends are inclusive.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OperationFilter {
    /// The earliest day to include.
    #[serde(default)]
    pub date_from: Option<Date>,
    /// The latest day to include.
    #[serde(default)]
    pub date_to: Option<Date>,
    /// `Some(true)` keeps only recurring operations, `Some(false)` only one-off ones.
    #[serde(default)]
    pub periodic: Option<bool>,
    /// Keep only income or only expenses.
    #[serde(default, rename = "type")]
    pub kind: Option<AmountKind>,
}

impl OperationFilter {
    /// Whether `operation` meets every criterion.
    pub fn matches(&self, operation: &Operation, timezone: AccountTimezone) -> bool {
        let date = timezone.date_of(operation.occurred_at);

        self.date_from.is_none_or(|from| date >= from)
            && self.date_to.is_none_or(|to| date <= to)
            && self
                .periodic
                .is_none_or(|periodic| operation.is_periodic() == periodic)
            && self.kind.is_none_or(|kind| operation.kind() == kind)
    }

    /// The operations that meet every criterion, in their original order.
    pub fn apply(&self, operations: &[Operation], timezone: AccountTimezone) -> Vec<Operation> {
        operations
            .iter()
            .filter(|operation| self.matches(operation, timezone))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use time::{
        OffsetDateTime,
        macros::{date, datetime, offset},
    };

    use super::OperationFilter;
    use crate::{
        operation::{AmountKind, Operation, Period, Recurrence},
        timezone::AccountTimezone,
    };

    fn create_test_operation(id: &str, amount: Decimal, occurred_at: OffsetDateTime) -> Operation {
        Operation::build(amount, occurred_at, "").finalize(id)
    }

    fn ids(operations: &[Operation]) -> Vec<&str> {
        operations.iter().map(|operation| operation.id.as_ref()).collect()
    }

    fn test_operations() -> Vec<Operation> {
        let rent = Recurrence::new(Period::Monthly, datetime!(2025-01-01 00:00 UTC), None).unwrap();

        vec![
            create_test_operation("a", dec!(100), datetime!(2025-01-01 10:00 UTC)),
            Operation::build(dec!(-900), datetime!(2025-01-15 10:00 UTC), "Rent")
                .recurrence(Some(rent))
                .finalize("b"),
            create_test_operation("c", dec!(-20), datetime!(2025-01-31 23:30 UTC)),
            create_test_operation("d", dec!(0), datetime!(2025-02-01 10:00 UTC)),
        ]
    }

    #[test]
    fn default_matches_everything() {
        let operations = test_operations();

        let got = OperationFilter::default().apply(&operations, AccountTimezone::UTC);

        assert_eq!(got, operations);
    }

    #[test]
    fn date_range_is_inclusive() {
        let filter = OperationFilter {
            date_from: Some(date!(2025 - 01 - 15)),
            date_to: Some(date!(2025 - 01 - 31)),
            ..Default::default()
        };

        let got = filter.apply(&test_operations(), AccountTimezone::UTC);

        assert_eq!(ids(&got), vec!["b", "c"]);
    }

    #[test]
    fn date_range_uses_account_offset() {
        // "c" happens on 1 February in a UTC+1 account.
        let filter = OperationFilter {
            date_to: Some(date!(2025 - 01 - 31)),
            ..Default::default()
        };

        let got = filter.apply(&test_operations(), AccountTimezone::from(offset!(+1)));

        assert_eq!(ids(&got), vec!["a", "b"]);
    }

    #[test]
    fn date_range_follows_daylight_saving() {
        // Both happen at 23:30 in Auckland, on 10 January and 10 July.
        let operations = vec![
            create_test_operation("summer", dec!(1), datetime!(2025-01-10 10:30 UTC)),
            create_test_operation("winter", dec!(1), datetime!(2025-07-10 11:30 UTC)),
        ];
        let filter = OperationFilter {
            date_to: Some(date!(2025 - 07 - 10)),
            ..Default::default()
        };
        let auckland = AccountTimezone::from_name("Pacific/Auckland").unwrap();

        let got = filter.apply(&operations, auckland);

        assert_eq!(ids(&got), vec!["summer", "winter"]);
    }

    #[test]
    fn periodic_only() {
        let filter = OperationFilter {
            periodic: Some(true),
            ..Default::default()
        };

        assert_eq!(ids(&filter.apply(&test_operations(), AccountTimezone::UTC)), vec!["b"]);
    }

    #[test]
    fn one_off_only() {
        let filter = OperationFilter {
            periodic: Some(false),
            ..Default::default()
        };

        assert_eq!(
            ids(&filter.apply(&test_operations(), AccountTimezone::UTC)),
            vec!["a", "c", "d"]
        );
    }

    #[test]
    fn by_kind() {
        let expenses = OperationFilter {
            kind: Some(AmountKind::Expense),
            ..Default::default()
        };
        let income = OperationFilter {
            kind: Some(AmountKind::Income),
            ..Default::default()
        };

        assert_eq!(ids(&expenses.apply(&test_operations(), AccountTimezone::UTC)), vec!["b", "c"]);
        assert_eq!(ids(&income.apply(&test_operations(), AccountTimezone::UTC)), vec!["a"]);
    }

    #[test]
    fn deserializes_query() {
        let filter: OperationFilter = serde_json::from_str(
            r#"{"date_from": "2025-01-01", "type": "expense", "periodic": false}"#,
        )
        .unwrap();

        assert_eq!(filter.date_from, Some(date!(2025 - 01 - 01)));
        assert_eq!(filter.date_to, None);
        assert_eq!(filter.kind, Some(AmountKind::Expense));
        assert_eq!(filter.periodic, Some(false));
    }
}
