//! Operations recorded against an account and the views derived from them.
//!
//! Every function here takes the operations by reference and builds a new
//! value, so the same slice can feed the table, the charts and the totals.

mod chart;
mod core;
mod date;
mod filter;
mod recurrence;
mod sort;
mod total;

pub use chart::{ChartDatasets, ChartSeries, ChartVariant, build_chart_dataset, build_chart_datasets};
pub use core::{AmountKind, Operation, OperationBuilder, OperationId};
pub use date::{format_day_label, parse_occurred_at};
pub use filter::OperationFilter;
pub use recurrence::{Period, Recurrence};
pub use sort::sort_operations;
pub use total::{OperationTotals, total_amount, totals};
