//! Day-by-day income and expense series for the account charts.
//!
//! Operations are split into calendar days in the account's timezone.
//! Each day becomes one entry of a [ChartSeries], with income and expense
//! kept apart so both can be plotted as positive values.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize, Serializer, ser::SerializeSeq};
use time::Date;

use crate::{
    Error,
    timezone::AccountTimezone,
    operation::{AmountKind, Operation, date::format_day_label, sort::sorted_refs},
};

/// How the values of consecutive days relate to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartVariant {
    /// Each day carries the running totals up to and including that day.
    Accumulate,
    /// Each day only carries its own totals.
    Separate,
}

impl FromStr for ChartVariant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "accumulate" => Ok(Self::Accumulate),
            "separate" => Ok(Self::Separate),
            other => Err(Error::InvalidChartVariant(other.to_owned())),
        }
    }
}

/// Income and expense totals per calendar day, in three parallel vectors.
///
/// `dates` is strictly increasing and all three vectors have the same length.
/// Expenses are stored as positive magnitudes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartSeries {
    /// The days that had at least one non-zero operation.
    #[serde(serialize_with = "serialize_day_labels")]
    pub dates: Vec<Date>,
    /// Money earned on (or up to) each day.
    pub income: Vec<Decimal>,
    /// Money spent on (or up to) each day.
    pub expense: Vec<Decimal>,
}

impl ChartSeries {
    /// The number of days in the series.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Whether the series has no days.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// The dates formatted as chart labels, e.g. `11.11.2025`.
    pub fn labels(&self) -> Vec<String> {
        self.dates.iter().copied().map(format_day_label).collect()
    }

    /// Turn per-day totals into running totals.
    ///
    /// Calling this on a [ChartVariant::Separate] series gives the
    /// [ChartVariant::Accumulate] series for the same operations.
    pub fn accumulated(&self) -> ChartSeries {
        let running_sum = |values: &[Decimal]| {
            values
                .iter()
                .scan(Decimal::ZERO, |total, value| {
                    *total = total.saturating_add(*value);
                    Some(*total)
                })
                .collect::<Vec<_>>()
        };

        ChartSeries {
            dates: self.dates.clone(),
            income: running_sum(&self.income),
            expense: running_sum(&self.expense),
        }
    }
}

fn serialize_day_labels<S: Serializer>(dates: &[Date], serializer: S) -> Result<S::Ok, S::Error> {
    let mut seq = serializer.serialize_seq(Some(dates.len()))?;
    for date in dates {
        seq.serialize_element(&format_day_label(*date))?;
    }
    seq.end()
}

/// Both chart variants for the same operations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDatasets {
    /// Running totals, drawn as a line chart.
    pub accumulate: ChartSeries,
    /// Per-day totals, drawn as a histogram.
    pub separate: ChartSeries,
}

struct DayBucket {
    date: Date,
    income: Decimal,
    expense: Decimal,
}

/// Build the chart series for `operations`.
///
/// Operations are ordered chronologically first, so the input may be in any
/// order. `timezone` is the account timezone and decides which calendar day
/// each operation falls on, using the offset in effect at that operation.
/// Operations with a zero amount are ignored. Sums saturate at the limits of
/// [Decimal] instead of overflowing.
///
/// Returns `None` if there are no operations at all.
pub fn build_chart_dataset(
    operations: &[Operation],
    variant: ChartVariant,
    timezone: AccountTimezone,
) -> Option<ChartSeries> {
    if operations.is_empty() {
        return None;
    }

    let mut buckets: Vec<DayBucket> = Vec::new();

    for operation in sorted_refs(operations) {
        let (income, expense) = match operation.kind() {
            AmountKind::Income => (operation.amount, Decimal::ZERO),
            AmountKind::Expense => (Decimal::ZERO, -operation.amount),
            AmountKind::Neutral => continue,
        };

        let date = timezone.date_of(operation.occurred_at);

        // A daylight saving shift at midnight can move the local day back,
        // such operations stay in the later day.
        if buckets.last().is_none_or(|current| current.date < date) {
            let (start_income, start_expense) = match (variant, buckets.last()) {
                (ChartVariant::Accumulate, Some(previous)) => (previous.income, previous.expense),
                _ => (Decimal::ZERO, Decimal::ZERO),
            };

            buckets.push(DayBucket {
                date,
                income: start_income,
                expense: start_expense,
            });
        }

        let bucket = buckets.last_mut().expect("day bucket just added");
        bucket.income = bucket.income.saturating_add(income);
        bucket.expense = bucket.expense.saturating_add(expense);
    }

    tracing::trace!(
        "Built {variant:?} chart with {} days from {} operations",
        buckets.len(),
        operations.len()
    );

    let mut series = ChartSeries {
        dates: Vec::with_capacity(buckets.len()),
        income: Vec::with_capacity(buckets.len()),
        expense: Vec::with_capacity(buckets.len()),
    };

    for bucket in buckets {
        series.dates.push(bucket.date);
        series.income.push(bucket.income);
        series.expense.push(bucket.expense);
    }

    Some(series)
}

/// Build both chart variants for `operations`.
///
/// Returns `None` if there are no operations at all.
pub fn build_chart_datasets(
    operations: &[Operation],
    timezone: AccountTimezone,
) -> Option<ChartDatasets> {
    let separate = build_chart_dataset(operations, ChartVariant::Separate, timezone)?;

    Some(ChartDatasets {
        accumulate: separate.accumulated(),
        separate,
    })
}
