use crate::ids::AccountId;
use crate::Result;

use std::str::FromStr;

use rust_decimal::Decimal;

use serde::Deserialize;

use thiserror::Error;

/// Represents one row of the operations file, before validation
#[derive(Deserialize, Debug, Clone)]
pub struct InputOperation {
    #[serde(rename = "type")]
    pub typ: InputOperationType,

    pub account: String,
    pub amount: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InputOperationType {
    Open,
    Deposit,
    Withdraw,
    Statement,
}

#[derive(Error, Debug)]
pub enum InputParseError {
    #[error("Error parsing input operation: invalid account id: {0:?}")]
    InvalidAccount(InputOperation),

    #[error("Error parsing input operation: amount value missing: {0:?}")]
    NoAmount(InputOperation),

    #[error("Error parsing input operation: amount is not a decimal number: {0:?}")]
    InvalidAmount(InputOperation),
}

/// Typed operation, ready to be run against the account service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Open(AccountId),
    Deposit(AccountId, Decimal),
    Withdraw(AccountId, Decimal),
    Statement(AccountId),
}

impl InputOperation {
    /// Amounts are passed through unrounded and unchecked; the account service validates them
    pub fn parse_operation(self) -> Result<Operation> {
        let account_id = AccountId::parse(&self.account)
            .map_err(|_| InputParseError::InvalidAccount(self.clone()))?;

        let operation = match self.typ {
            InputOperationType::Open => Operation::Open(account_id),
            InputOperationType::Deposit => Operation::Deposit(account_id, self.parse_amount()?),
            InputOperationType::Withdraw => Operation::Withdraw(account_id, self.parse_amount()?),
            InputOperationType::Statement => Operation::Statement(account_id),
        };

        return Ok(operation);
    }

    fn parse_amount(&self) -> Result<Decimal> {
        let amount = self
            .amount
            .as_deref()
            .map(str::trim)
            .filter(|amount| !amount.is_empty())
            .ok_or_else(|| InputParseError::NoAmount(self.clone()))?;

        let amount = Decimal::from_str(amount)
            .map_err(|_| InputParseError::InvalidAmount(self.clone()))?;

        return Ok(amount);
    }
}
