use super::AccountRepository;

use crate::ids::AccountId;

use std::collections::HashSet;

/// In-memory set of known accounts
#[derive(Debug, Default)]
pub struct AccountRegistry {
    known: HashSet<AccountId>,
}

impl AccountRegistry {
    pub fn new() -> Self {
        return Self::default();
    }

    /// Registers `account_id`, returning false if it was already known
    pub fn open(&mut self, account_id: AccountId) -> bool {
        let inserted = self.known.insert(account_id);

        if !inserted {
            log::debug!("Account already open: {account_id}");
        }

        return inserted;
    }

    pub fn len(&self) -> usize {
        return self.known.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.len() == 0;
    }
}

impl AccountRepository for AccountRegistry {
    fn exists(&self, account_id: &AccountId) -> bool {
        return self.known.contains(account_id);
    }
}

impl FromIterator<AccountId> for AccountRegistry {
    fn from_iter<I: IntoIterator<Item = AccountId>>(iter: I) -> Self {
        return Self {
            known: iter.into_iter().collect(),
        };
    }
}
