use crate::models::Transaction;

/// Turns an account's history into printable lines
pub trait StatementFormatter {
    fn format(&self, transactions: &[Transaction]) -> Vec<String>;
}

/// Renders the account id as a header line, then one line per transaction.
///
/// An empty history renders nothing at all, not even the header.
#[derive(Debug, Default, Clone, Copy)]
pub struct ListStatementFormatter;

impl ListStatementFormatter {
    pub fn new() -> Self {
        return Self;
    }

    fn format_line(transaction: &Transaction) -> String {
        return format!(
            "Transaction{{date={}, amount={}, type={}, accountBalance={}}}",
            transaction.date,
            transaction.amount,
            transaction.transaction_type,
            transaction.account_balance,
        );
    }
}

impl StatementFormatter for ListStatementFormatter {
    fn format(&self, transactions: &[Transaction]) -> Vec<String> {
        let header = transactions
            .first()
            .map(|transaction| transaction.account_id.to_string());

        return header
            .into_iter()
            .chain(transactions.iter().map(Self::format_line))
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use crate::ids::AccountId;
    use crate::models::TransactionType;
    use crate::Money;

    use chrono::NaiveDate;

    use super::*;

    const SOME_ACCOUNT_ID: &str = "a7dcc471-df3b-4fca-bd2f-8f2e17e78e41";

    fn build_transaction(
        (year, month, day): (i32, u32, u32),
        cents: i64,
        transaction_type: TransactionType,
        balance_cents: i64,
    ) -> Transaction {
        Transaction::new(
            AccountId::parse(SOME_ACCOUNT_ID).unwrap(),
            NaiveDate::from_ymd_opt(year, month, day).unwrap(),
            Money::from_cents(cents),
            transaction_type,
            Money::from_cents(balance_cents),
        )
    }

    #[test]
    fn format_history() {
        let transactions = vec![
            build_transaction((2022, 1, 20), 10000, TransactionType::Deposit, 10000),
            build_transaction((2022, 2, 16), 520, TransactionType::Withdraw, 9480),
            build_transaction((2022, 3, 1), 2200, TransactionType::Deposit, 11680),
            build_transaction((2022, 4, 30), 5290, TransactionType::Withdraw, 6390),
        ];

        let lines = ListStatementFormatter::new().format(&transactions);

        assert_eq!(
            lines,
            vec![
                SOME_ACCOUNT_ID,
                "Transaction{date=2022-01-20, amount=100.00, type=DEPOSIT, accountBalance=100.00}",
                "Transaction{date=2022-02-16, amount=5.20, type=WITHDRAW, accountBalance=94.80}",
                "Transaction{date=2022-03-01, amount=22.00, type=DEPOSIT, accountBalance=116.80}",
                "Transaction{date=2022-04-30, amount=52.90, type=WITHDRAW, accountBalance=63.90}",
            ]
        );
    }

    #[test]
    fn format_empty_history() {
        assert!(ListStatementFormatter::new().format(&[]).is_empty());
    }
}
