use crate::ids::AccountId;
use crate::models::Transaction;
use crate::repositories::TransactionRepository;

use std::collections::HashMap;

/// Represents a WORM (Write Once, Read Many) data structure holding the history of every account
#[derive(Debug, Default)]
pub struct Ledger {
    history: Vec<Transaction>,
    lookup_map: HashMap<AccountId, Vec<usize>>,
}

impl Ledger {
    pub fn new() -> Self {
        return Self::default();
    }

    fn get_by_index(&self, index: &usize) -> Option<&Transaction> {
        return self.history.get(*index);
    }

    /// Finds ledger indicies for an account, in posting order
    fn find_indicies_for_account(&self, account_id: &AccountId) -> &[usize] {
        return self
            .lookup_map
            .get(account_id)
            .map(|indicies| indicies.as_slice())
            .unwrap_or(&[]);
    }

    pub fn len(&self) -> usize {
        return self.history.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.len() == 0;
    }
}

impl TransactionRepository for Ledger {
    fn append(&mut self, transaction: Transaction) -> Transaction {
        let index = self.history.len();
        let account_id = transaction.account_id;

        self.history.push(transaction.clone());
        self.lookup_map.entry(account_id).or_default().push(index);

        log::debug!("Appended transaction for {account_id} at index: {index}");

        return transaction;
    }

    fn get_last(&self, account_id: &AccountId) -> Option<Transaction> {
        return self
            .find_indicies_for_account(account_id)
            .last()
            .and_then(|idx| self.get_by_index(idx))
            .cloned();
    }

    fn get_all(&self, account_id: &AccountId) -> Vec<Transaction> {
        return self
            .find_indicies_for_account(account_id)
            .iter()
            .filter_map(|idx| self.get_by_index(idx))
            .cloned()
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use crate::models::TransactionType;
    use crate::Money;

    use chrono::NaiveDate;

    use super::*;

    fn some_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2022, 1, 20).unwrap()
    }

    fn build_transaction(account_id: AccountId, cents: i64, balance_cents: i64) -> Transaction {
        Transaction::new(
            account_id,
            some_date(),
            Money::from_cents(cents),
            TransactionType::Deposit,
            Money::from_cents(balance_cents),
        )
    }

    #[test]
    fn append() {
        let mut ledger = Ledger::new();
        let some_id = AccountId::random();
        let other_id = AccountId::random();

        let transaction1 = build_transaction(some_id, 100, 100);
        let stored = ledger.append(transaction1.clone());
        assert_eq!(stored, transaction1);

        let transaction2 = build_transaction(other_id, 200, 200);
        ledger.append(transaction2.clone());

        let transaction3 = build_transaction(some_id, 300, 400);
        ledger.append(transaction3.clone());

        assert_eq!(
            ledger.history,
            vec![transaction1, transaction2, transaction3]
        );
        assert_eq!(
            ledger.lookup_map,
            vec![(some_id, vec![0, 2]), (other_id, vec![1])]
                .into_iter()
                .collect()
        );
        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn get_last() {
        let mut ledger = Ledger::new();
        let some_id = AccountId::random();
        let other_id = AccountId::random();

        assert!(ledger.get_last(&some_id).is_none());

        ledger.append(build_transaction(some_id, 100, 100));
        let last = ledger.append(build_transaction(some_id, 50, 150));
        ledger.append(build_transaction(other_id, 70, 70));

        assert_eq!(ledger.get_last(&some_id), Some(last));
        assert!(ledger.get_last(&AccountId::random()).is_none());
    }

    #[test]
    fn get_all() {
        let mut ledger = Ledger::new();
        let some_id = AccountId::random();
        let other_id = AccountId::random();

        assert!(ledger.is_empty());
        assert!(ledger.get_all(&some_id).is_empty());

        let transaction1 = ledger.append(build_transaction(some_id, 100, 100));
        ledger.append(build_transaction(other_id, 70, 70));
        let transaction3 = ledger.append(build_transaction(some_id, 50, 150));

        assert_eq!(ledger.get_all(&some_id), vec![transaction1, transaction3]);
        assert_eq!(ledger.get_all(&other_id).len(), 1);
    }

    #[test]
    fn get_by_index() {
        let mut ledger = Ledger::new();
        let transaction = ledger.append(build_transaction(AccountId::random(), 100, 100));

        assert_eq!(ledger.get_by_index(&0), Some(&transaction));
        assert!(ledger.get_by_index(&1).is_none());
    }
}
