mod args;
mod config;
mod reader;

use bal::clock::Clock;
use bal::input::{InputOperation, Operation};
use bal::{build_account_service, LedgerAccountService, Result};

use std::io::{self, Write};

fn main() -> Result {
    let config = config::configure_app()?;

    log::debug!("Application configured with {config:?}. Beginning process...");

    let stdout = io::stdout();
    let mut account_service = build_account_service(stdout.lock(), config.clock());

    process_data(&mut account_service)?;

    log::debug!("Application finished successfully!");

    Ok(())
}

/// Read the operations file and run every operation, in order, against the account service
fn process_data<W: Write, C: Clock>(account_service: &mut LedgerAccountService<W, C>) -> Result {
    let input_source = args::parse_input_arg()?;
    log::debug!("Found input source as input arg: {input_source:?}");

    let mut rdr = reader::build_csv_reader(input_source)?;

    log::debug!("Deserializing reader...");
    for record in rdr.deserialize::<InputOperation>() {
        log::debug!("Parsing record into InputOperation: {record:?}");
        let input_operation = match record {
            Ok(input_operation) => input_operation,
            Err(e) => {
                log::warn!("{e}");
                continue;
            }
        };

        log::debug!("Parsing input_operation into Operation: {input_operation:?}");
        let operation = match input_operation.parse_operation() {
            Ok(operation) => operation,
            Err(e) => {
                log::warn!("{e}");
                continue;
            }
        };

        if let Err(e) = run_operation(account_service, operation) {
            log::warn!("{e}");
        }
    }

    Ok(())
}

fn run_operation<W: Write, C: Clock>(
    account_service: &mut LedgerAccountService<W, C>,
    operation: Operation,
) -> Result {
    log::debug!("Running operation: {operation:?}");

    match operation {
        Operation::Open(account_id) => {
            if !account_service.accounts_mut().open(account_id) {
                log::warn!("Account already open: {account_id}");
            }
        }
        Operation::Deposit(account_id, amount) => {
            let transaction = account_service.deposit(account_id, amount)?;
            log::debug!("Posted: {transaction:?}");
        }
        Operation::Withdraw(account_id, amount) => {
            let transaction = account_service.withdraw(account_id, amount)?;
            log::debug!("Posted: {transaction:?}");
        }
        Operation::Statement(account_id) => account_service.print_account_statement(account_id)?,
    }

    Ok(())
}
