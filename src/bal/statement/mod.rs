mod formatter;
mod printer;

pub use formatter::{ListStatementFormatter, StatementFormatter};
pub use printer::{FormattedStatementPrinter, StatementPrinter};
