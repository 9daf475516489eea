use super::StatementFormatter;

use crate::models::Transaction;

use std::io::{self, Write};

/// Emits an account statement to some output sink
pub trait StatementPrinter {
    fn print(&mut self, transactions: &[Transaction]) -> io::Result<()>;
}

/// Formats a statement with `F` and writes each line, in order, to `W`
#[derive(Debug)]
pub struct FormattedStatementPrinter<F, W> {
    formatter: F,
    sink: W,
}

impl<F: StatementFormatter, W: Write> FormattedStatementPrinter<F, W> {
    pub fn new(formatter: F, sink: W) -> Self {
        return Self { formatter, sink };
    }

    pub fn sink(&self) -> &W {
        return &self.sink;
    }
}

impl<F: StatementFormatter, W: Write> StatementPrinter for FormattedStatementPrinter<F, W> {
    fn print(&mut self, transactions: &[Transaction]) -> io::Result<()> {
        let lines = self.formatter.format(transactions);

        log::debug!("Printing {} statement lines", lines.len());

        for line in lines.iter() {
            writeln!(self.sink, "{line}")?;
        }

        self.sink.flush()?;

        return Ok(());
    }
}

#[cfg(test)]
mod tests {
    use crate::ids::AccountId;
    use crate::models::TransactionType;
    use crate::Money;

    use std::cell::RefCell;

    use chrono::NaiveDate;

    use super::*;

    /// Answers canned lines and remembers what it was asked to format
    struct StubFormatter {
        lines: Vec<String>,
        calls: RefCell<Vec<Vec<Transaction>>>,
    }

    impl StatementFormatter for StubFormatter {
        fn format(&self, transactions: &[Transaction]) -> Vec<String> {
            self.calls.borrow_mut().push(transactions.to_vec());
            self.lines.clone()
        }
    }

    struct BrokenSink;

    impl Write for BrokenSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn some_transactions() -> Vec<Transaction> {
        let account_id = AccountId::random();
        let date = NaiveDate::from_ymd_opt(2022, 1, 20).unwrap();

        vec![
            Transaction::new(
                account_id,
                date,
                Money::from_cents(10000),
                TransactionType::Deposit,
                Money::from_cents(10000),
            ),
            Transaction::new(
                account_id,
                date,
                Money::from_cents(520),
                TransactionType::Withdraw,
                Money::from_cents(9480),
            ),
        ]
    }

    #[test]
    fn print_writes_formatted_lines_in_order() {
        let transactions = some_transactions();
        let formatter = StubFormatter {
            lines: vec!["header".to_string(), "first".to_string(), "second".to_string()],
            calls: RefCell::new(vec![]),
        };

        let mut printer = FormattedStatementPrinter::new(formatter, Vec::new());
        printer.print(&transactions).unwrap();

        assert_eq!(*printer.formatter.calls.borrow(), vec![transactions]);

        let output = String::from_utf8(printer.sink().clone()).unwrap();
        assert_eq!(output, "header\nfirst\nsecond\n");
    }

    #[test]
    fn print_nothing_for_empty_statement() {
        let formatter = StubFormatter {
            lines: vec![],
            calls: RefCell::new(vec![]),
        };

        let mut printer = FormattedStatementPrinter::new(formatter, Vec::new());
        printer.print(&[]).unwrap();

        assert!(printer.sink().is_empty());
    }

    #[test]
    fn print_reports_sink_failure() {
        let formatter = StubFormatter {
            lines: vec!["header".to_string()],
            calls: RefCell::new(vec![]),
        };

        let mut printer = FormattedStatementPrinter::new(formatter, BrokenSink);
        let err = printer.print(&some_transactions()).unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
