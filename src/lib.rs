//! Accounter is an app for tracking personal and shared finances.
//!
//! This library holds the parts of the app that do not depend on transport or
//! storage: ordering and charting the operations recorded against an account,
//! and deciding what each account member is allowed to do.
//!
//! Everything here is a pure function over values handed in by the caller,
//! so it is safe to call from any thread and on every change to the data.

#![warn(missing_docs)]

mod logging;
mod member;
mod operation;
mod permission;
mod role;
mod store;
mod timezone;

pub use logging::setup_logging;
pub use member::{AccountMember, UserId, sort_members};
pub use operation::{
    AmountKind, ChartDatasets, ChartSeries, ChartVariant, Operation, OperationBuilder,
    OperationFilter, OperationId, OperationTotals, Period, Recurrence, build_chart_dataset,
    build_chart_datasets, format_day_label, parse_occurred_at, sort_operations, total_amount,
    totals,
};
pub use permission::{Action, authorize, is_allowed};
pub use role::{MemberRole, compare, compare_sign, satisfies, sort_by_privilege};
pub use store::{AccountOperations, AccountOverview, OperationsAction};
pub use timezone::AccountTimezone;

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A role string did not name one of the known member roles.
    ///
    /// Roles form a closed set, so this indicates a bug or a corrupted
    /// payload upstream and is never mapped to a default role.
    #[error("\"{0}\" is not a valid member role")]
    InvalidRole(String),

    /// An occurrence timestamp was neither an RFC 3339 date-time nor an
    /// ISO 8601 calendar date.
    ///
    /// Callers should pass in the offending string and the parser error as a
    /// string.
    #[error("could not parse date \"{0}\": {1}")]
    InvalidDate(String, String),

    /// A chart variant string was neither `accumulate` nor `separate`.
    #[error("\"{0}\" is not a valid chart variant")]
    InvalidChartVariant(String),

    /// An amount kind string was not `income`, `expense` or `neutral`.
    #[error("\"{0}\" is not a valid amount kind")]
    InvalidAmountKind(String),

    /// A recurrence ended on or before the moment it started.
    #[error("invalid recurrence: {0}")]
    InvalidRecurrence(String),

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),

    /// The member's role does not allow the requested action.
    #[error("the member is not allowed to perform this action")]
    Forbidden,

    /// Tried to grant a role that cannot be handed out to other members.
    ///
    /// Every account has exactly one owner, the member who created it.
    #[error("the role \"{0}\" cannot be assigned to a member")]
    UnassignableRole(MemberRole),

    /// The requested resource was not found.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An error occurred while serializing or deserializing JSON.
    #[error("could not (de)serialize JSON: {0}")]
    JSONSerializationError(String),
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Error::JSONSerializationError(value.to_string())
    }
}
