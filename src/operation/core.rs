//! Defines the core data model for operations.

use std::{fmt::Display, str::FromStr};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{
    Error,
    member::UserId,
    operation::{date::occurred_at, recurrence::Recurrence},
};

/// Opaque identifier of an operation.
///
/// The backend hands out integers, locally created operations use strings.
/// Both are kept as text since the ID is only used to tell operations apart.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "RawOperationId", into = "String")]
pub struct OperationId(String);

impl OperationId {
    /// Create an ID from its text form.
    pub fn new(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl AsRef<str> for OperationId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for OperationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for OperationId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for OperationId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<i64> for OperationId {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl From<OperationId> for String {
    fn from(value: OperationId) -> Self {
        value.0
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawOperationId {
    Number(i64),
    Text(String),
}

impl From<RawOperationId> for OperationId {
    fn from(value: RawOperationId) -> Self {
        match value {
            RawOperationId::Number(id) => id.into(),
            RawOperationId::Text(id) => id.into(),
        }
    }
}

/// Which way money moved in an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AmountKind {
    /// Money came in, the amount is positive.
    Income,
    /// Money went out, the amount is negative.
    Expense,
    /// The amount is zero.
    Neutral,
}

impl AmountKind {
    /// Classify an amount by its sign.
    pub fn of(amount: Decimal) -> Self {
        if amount > Decimal::ZERO {
            Self::Income
        } else if amount < Decimal::ZERO {
            Self::Expense
        } else {
            Self::Neutral
        }
    }
}

impl FromStr for AmountKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            "neutral" => Ok(Self::Neutral),
            other => Err(Error::InvalidAmountKind(other.to_owned())),
        }
    }
}

/// An expense or income recorded against an account.
///
/// Operations are treated as immutable values: the functions in this crate
/// take them by reference and hand back new collections.
///
/// To create a new `Operation`, use [Operation::build].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    /// The ID of the operation.
    pub id: OperationId,
    /// The amount of money earned (positive) or spent (negative).
    pub amount: Decimal,
    /// When the operation happened.
    #[serde(with = "occurred_at", alias = "date")]
    pub occurred_at: OffsetDateTime,
    /// A text description of what the operation was for.
    #[serde(default, alias = "title")]
    pub description: String,
    /// The schedule of a repeating operation.
    #[serde(default, alias = "periodic", skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<Recurrence>,
    /// The member who recorded the operation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<UserId>,
}

impl Operation {
    /// Create a new operation.
    ///
    /// Shortcut for [OperationBuilder] for discoverability.
    pub fn build(amount: Decimal, occurred_at: OffsetDateTime, description: &str) -> OperationBuilder {
        OperationBuilder {
            amount,
            occurred_at,
            description: description.to_owned(),
            recurrence: None,
            created_by: None,
        }
    }

    /// Whether the operation is income, an expense or neither.
    pub fn kind(&self) -> AmountKind {
        AmountKind::of(self.amount)
    }

    /// Whether the operation repeats on a schedule.
    pub fn is_periodic(&self) -> bool {
        self.recurrence.is_some()
    }
}

/// A builder for creating [Operation] instances.
///
/// # Examples
///
/// ```
/// use accounter_core::{Operation, Period, Recurrence};
/// use rust_decimal::Decimal;
/// use time::macros::datetime;
///
/// let rent = Operation::build(Decimal::from(-1200), datetime!(2025-01-01 00:00 UTC), "Rent")
///     .recurrence(Some(
///         Recurrence::new(Period::Monthly, datetime!(2025-01-01 00:00 UTC), None).unwrap(),
///     ))
///     .finalize("rent-2025-01");
///
/// assert!(rent.is_periodic());
/// ```
#[derive(Debug, PartialEq, Clone)]
pub struct OperationBuilder {
    /// The monetary amount of the operation.
    ///
    /// Positive values represent income, negative values represent expenses.
    pub amount: Decimal,
    /// When the operation happened.
    pub occurred_at: OffsetDateTime,
    /// A human-readable description of the operation.
    pub description: String,
    /// The schedule of a repeating operation.
    pub recurrence: Option<Recurrence>,
    /// The member who recorded the operation.
    pub created_by: Option<UserId>,
}

impl OperationBuilder {
    /// Set the recurrence of the operation.
    pub fn recurrence(mut self, recurrence: Option<Recurrence>) -> Self {
        self.recurrence = recurrence;
        self
    }

    /// Set the member who recorded the operation.
    pub fn created_by(mut self, user_id: Option<UserId>) -> Self {
        self.created_by = user_id;
        self
    }

    /// Build the final [Operation] with the given ID.
    pub fn finalize(self, id: impl Into<OperationId>) -> Operation {
        Operation {
            id: id.into(),
            amount: self.amount,
            occurred_at: self.occurred_at,
            description: self.description,
            recurrence: self.recurrence,
            created_by: self.created_by,
        }
    }
}
