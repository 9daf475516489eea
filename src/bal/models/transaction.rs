use crate::ids::AccountId;
use crate::Money;

use std::fmt;

use chrono::NaiveDate;

/// One posted operation against an account.
///
/// `amount` is always a non-negative magnitude; the direction is carried by `transaction_type`.
/// `account_balance` is the balance of the account once this transaction has been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub account_id: AccountId,
    pub date: NaiveDate,
    pub amount: Money,
    pub transaction_type: TransactionType,
    pub account_balance: Money,
}

impl Transaction {
    pub fn new(
        account_id: AccountId,
        date: NaiveDate,
        amount: Money,
        transaction_type: TransactionType,
        account_balance: Money,
    ) -> Self {
        return Self {
            account_id,
            date,
            amount,
            transaction_type,
            account_balance,
        };
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionType {
    Deposit,
    Withdraw,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Self::Deposit => "DEPOSIT",
            Self::Withdraw => "WITHDRAW",
        };

        return write!(f, "{name}");
    }
}
