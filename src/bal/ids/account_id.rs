use std::fmt;

use uuid::Uuid;

/// Opaque identifier naming one account's ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountId(Uuid);

impl AccountId {
    pub fn random() -> Self {
        return Self(Uuid::new_v4());
    }

    pub fn parse(string: &str) -> Result<Self, uuid::Error> {
        let uuid = Uuid::parse_str(string.trim())?;
        return Ok(Self(uuid));
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.0.hyphenated());
    }
}
