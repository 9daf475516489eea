use crate::clock::Clock;
use crate::ids::AccountId;
use crate::models::{Transaction, TransactionType};
use crate::repositories::{AccountRepository, TransactionRepository};
use crate::statement::StatementPrinter;
use crate::{Money, MoneyError, ServiceResult};

use std::io;

use rust_decimal::Decimal;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AccountServiceError {
    #[error("Account not found: {0}")]
    AccountNotFound(AccountId),

    #[error("Invalid transaction: {0}")]
    InvalidTransaction(String),

    #[error("Overdraft: {0}")]
    Overdraft(String),

    #[error("Couldn't print account statement: {0}")]
    Output(#[from] io::Error),
}

impl From<MoneyError> for AccountServiceError {
    fn from(err: MoneyError) -> Self {
        Self::InvalidTransaction(err.to_string())
    }
}

/// Validates and posts deposits and withdrawals, and prints account statements.
///
/// The balance of an account is never stored here: it is always read back from the last
/// transaction in `transactions`. Posting takes `&mut self`, so one service (and the store it
/// owns) has a single writer at a time.
pub struct AccountService<A, T, P, C> {
    accounts: A,
    transactions: T,
    printer: P,
    clock: C,
}

impl<A, T, P, C> AccountService<A, T, P, C>
where
    A: AccountRepository,
    T: TransactionRepository,
    P: StatementPrinter,
    C: Clock,
{
    pub fn new(accounts: A, transactions: T, printer: P, clock: C) -> Self {
        return Self {
            accounts,
            transactions,
            printer,
            clock,
        };
    }

    /// Posts a deposit of `amount`, rounded half-to-even to two decimal places.
    ///
    /// Fails with `AccountNotFound` for an unknown account, and with `InvalidTransaction` when
    /// `amount` is not strictly positive or too large to keep two decimal places. A positive
    /// amount that rounds to 0.00 is still posted. Nothing is written unless every check passes.
    pub fn deposit(&mut self, account_id: AccountId, amount: Decimal) -> ServiceResult<Transaction> {
        log::debug!("Deposit of {amount} requested on {account_id}");

        let amount = self.validate_input(&account_id, amount)?;
        let balance = self.get_last_balance(&account_id);

        let new_balance = balance.checked_add(amount)?;

        return Ok(self.add_transaction(account_id, amount, TransactionType::Deposit, new_balance));
    }

    /// Posts a withdrawal of `amount`, rounded half-to-even to two decimal places.
    ///
    /// On top of the deposit checks, fails with `Overdraft` when the current balance is exactly
    /// zero, and with `InvalidTransaction` when the withdrawal would leave a negative balance.
    pub fn withdraw(&mut self, account_id: AccountId, amount: Decimal) -> ServiceResult<Transaction> {
        log::debug!("Withdrawal of {amount} requested on {account_id}");

        let amount = self.validate_input(&account_id, amount)?;
        let balance = self.get_last_balance(&account_id);

        if balance.is_zero() {
            Err(AccountServiceError::Overdraft("Balance is empty".to_string()))?
        }

        let new_balance = balance.checked_sub(amount)?;

        if new_balance.is_negative() {
            Err(AccountServiceError::InvalidTransaction(format!(
                "Balance can't be negative: withdrawing {amount} from {balance}"
            )))?
        }

        return Ok(self.add_transaction(account_id, amount, TransactionType::Withdraw, new_balance));
    }

    /// Hands the whole history of an account, oldest first, to the statement printer
    pub fn print_account_statement(&mut self, account_id: AccountId) -> ServiceResult {
        self.ensure_exists(&account_id)?;

        let transactions = self.transactions.get_all(&account_id);
        log::debug!("Printing statement of {} transactions for {account_id}", transactions.len());

        self.printer.print(&transactions)?;

        return Ok(());
    }

    /// Current balance of an account, derived from its last transaction
    pub fn balance(&self, account_id: AccountId) -> ServiceResult<Money> {
        self.ensure_exists(&account_id)?;

        return Ok(self.get_last_balance(&account_id));
    }

    pub fn accounts_mut(&mut self) -> &mut A {
        return &mut self.accounts;
    }

    pub fn transactions(&self) -> &T {
        return &self.transactions;
    }

    pub fn printer(&self) -> &P {
        return &self.printer;
    }

    fn ensure_exists(&self, account_id: &AccountId) -> ServiceResult {
        if !self.accounts.exists(account_id) {
            Err(AccountServiceError::AccountNotFound(*account_id))?
        }

        return Ok(());
    }

    fn validate_input(&self, account_id: &AccountId, amount: Decimal) -> ServiceResult<Money> {
        self.ensure_exists(account_id)?;

        if amount <= Decimal::ZERO {
            Err(AccountServiceError::InvalidTransaction(format!(
                "Amount can't be negative or zero: {amount}"
            )))?
        }

        let rounded = Money::new(amount)?;

        return Ok(rounded);
    }

    fn get_last_balance(&self, account_id: &AccountId) -> Money {
        return self
            .transactions
            .get_last(account_id)
            .map(|transaction| transaction.account_balance)
            .unwrap_or_else(Money::zero);
    }

    fn add_transaction(
        &mut self,
        account_id: AccountId,
        amount: Money,
        transaction_type: TransactionType,
        account_balance: Money,
    ) -> Transaction {
        let transaction = Transaction::new(
            account_id,
            self.clock.today(),
            amount,
            transaction_type,
            account_balance,
        );

        log::debug!("Posting transaction: {transaction:?}");

        return self.transactions.append(transaction);
    }
}
