pub mod clock;
pub mod ids;
pub mod input;
mod ledger;
pub mod models;
mod money;
pub mod repositories;
mod result;
pub mod services;
pub mod statement;

pub use ledger::Ledger;
pub use money::{Money, MoneyError};
pub use result::{Result, ServiceResult};

use std::io::Write;

use clock::Clock;
use repositories::AccountRegistry;
use statement::{FormattedStatementPrinter, ListStatementFormatter};

/// Account service backed by the in-memory ledger, printing statements to `W`
pub type LedgerAccountService<W, C> = services::AccountService<
    AccountRegistry,
    Ledger,
    FormattedStatementPrinter<ListStatementFormatter, W>,
    C,
>;

pub fn build_account_service<W: Write, C: Clock>(sink: W, clock: C) -> LedgerAccountService<W, C> {
    let printer = FormattedStatementPrinter::new(ListStatementFormatter::new(), sink);
    let account_service =
        services::AccountService::new(AccountRegistry::new(), Ledger::new(), printer, clock);

    return account_service;
}
