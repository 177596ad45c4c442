//! State container for the operations of the account being viewed.
//!
//! The container only owns the list of operations. Every change goes through
//! [AccountOperations::dispatch] and the derived [AccountOverview] is rebuilt
//! from scratch with the pure functions in [crate::operation].

use rust_decimal::Decimal;
use serde::Serialize;
use crate::{
    Error,
    operation::{
        ChartDatasets, Operation, OperationId, OperationTotals, build_chart_datasets,
        sort_operations, totals,
    },
    timezone::AccountTimezone,
};

/// A change to the list of operations.
#[derive(Debug, Clone, PartialEq)]
pub enum OperationsAction {
    /// Replace every operation, e.g. after fetching the account.
    Replace(Vec<Operation>),
    /// Append a newly recorded operation.
    ///
    /// An operation whose ID is already listed replaces the listed one.
    Add(Operation),
    /// Replace the operation with the same ID.
    Update(Operation),
    /// Remove the operation with the given ID.
    Remove(OperationId),
}

/// Everything the account page shows about its operations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountOverview {
    /// The operations from the earliest to the latest.
    pub operations: Vec<Operation>,
    /// The account balance.
    pub total_amount: Decimal,
    /// Income and expenses summed separately.
    pub totals: OperationTotals,
    /// The chart series, `None` when there are no operations yet.
    pub charts: Option<ChartDatasets>,
}

impl AccountOverview {
    /// Derive the overview of `operations` in an account kept in `timezone`.
    pub fn new(operations: &[Operation], timezone: AccountTimezone) -> Self {
        let totals = totals(operations);

        Self {
            operations: sort_operations(operations),
            total_amount: totals.net,
            totals,
            charts: build_chart_datasets(operations, timezone),
        }
    }
}

/// The operations of one account and the overview derived from them.
#[derive(Debug, Clone)]
pub struct AccountOperations {
    timezone: AccountTimezone,
    operations: Vec<Operation>,
    overview: AccountOverview,
}

impl AccountOperations {
    /// Create an empty container for an account kept in `timezone`.
    pub fn new(timezone: AccountTimezone) -> Self {
        Self {
            timezone,
            operations: Vec::new(),
            overview: AccountOverview::new(&[], timezone),
        }
    }

    /// Apply `action` and rebuild the overview.
    ///
    /// # Errors
    ///
    /// Returns [Error::NotFound] if an update or removal refers to an
    /// operation that is not in the container. The container is left
    /// unchanged in that case.
    pub fn dispatch(&mut self, action: OperationsAction) -> Result<&AccountOverview, Error> {
        match action {
            OperationsAction::Replace(operations) => {
                tracing::debug!("Replacing operations with {} new ones", operations.len());
                self.operations = operations;
            }
            OperationsAction::Add(operation) => match self.position(&operation.id) {
                Ok(index) => {
                    tracing::debug!("Operation {} already listed, replacing it", operation.id);
                    self.operations[index] = operation;
                }
                Err(_) => {
                    tracing::debug!("Adding operation {}", operation.id);
                    self.operations.push(operation);
                }
            },
            OperationsAction::Update(operation) => {
                let index = self.position(&operation.id)?;
                tracing::debug!("Updating operation {}", operation.id);
                self.operations[index] = operation;
            }
            OperationsAction::Remove(id) => {
                let index = self.position(&id)?;
                tracing::debug!("Removing operation {id}");
                self.operations.remove(index);
            }
        }

        self.overview = AccountOverview::new(&self.operations, self.timezone);

        Ok(&self.overview)
    }

    /// The operations in the order they were added.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// The overview as of the last action.
    pub fn overview(&self) -> &AccountOverview {
        &self.overview
    }

    fn position(&self, id: &OperationId) -> Result<usize, Error> {
        self.operations
            .iter()
            .position(|operation| &operation.id == id)
            .ok_or(Error::NotFound)
    }
}
