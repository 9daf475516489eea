mod accounts;

pub use accounts::AccountRegistry;

use crate::ids::AccountId;
use crate::models::Transaction;

/// Answers whether an account id is known
pub trait AccountRepository {
    fn exists(&self, account_id: &AccountId) -> bool;
}

/// Append-only keeper of every account's transaction history
pub trait TransactionRepository {
    /// Stores `transaction` and returns the copy that was actually persisted
    fn append(&mut self, transaction: Transaction) -> Transaction;

    fn get_last(&self, account_id: &AccountId) -> Option<Transaction>;

    /// All transactions for `account_id`, oldest first
    fn get_all(&self, account_id: &AccountId) -> Vec<Transaction>;
}
