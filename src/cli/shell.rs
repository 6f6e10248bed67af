use chrono::NaiveDate;

use crate::cli::io::PromptSource;
use crate::cli::{output, CliError};
use crate::currency::CurrencyFormat;
use crate::errors::ValidationError;
use crate::ledger::{Transaction, DATE_FORMAT};
use crate::services::{ServiceError, SummaryService, TransactionService};
use crate::storage::LedgerStore;
use crate::validation;

const MENU_ITEMS: [&str; 3] = [
    "Add a new transaction",
    "View transactions and summary within a date range",
    "Exit",
];

const CHART_WIDTH: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Menu-driven session over one ledger table.
pub struct Shell<'a, P> {
    store: &'a dyn LedgerStore,
    prompts: P,
    format: CurrencyFormat,
    clock: fn() -> NaiveDate,
}

impl<'a, P: PromptSource> Shell<'a, P> {
    pub fn new(store: &'a dyn LedgerStore, prompts: P, format: CurrencyFormat) -> Self {
        Self {
            store,
            prompts,
            format,
            clock: validation::today,
        }
    }

    /// Replaces the source of "today" used for the default transaction date.
    pub fn with_clock(mut self, clock: fn() -> NaiveDate) -> Self {
        self.clock = clock;
        self
    }

    pub fn run(&mut self) -> Result<(), CliError> {
        loop {
            output::section("Personal Finance Tracker");
            let Some(choice) = self.prompts.select("Enter your choice", &MENU_ITEMS)? else {
                break;
            };
            let outcome = match choice {
                0 => self.add_transaction(),
                1 => self.view_range(),
                _ => Ok(LoopControl::Exit),
            };
            match outcome {
                Ok(LoopControl::Continue) => {}
                Ok(LoopControl::Exit) => break,
                Err(CliError::Service(err)) => {
                    tracing::error!(error = %err, "operation failed");
                    output::error(err);
                }
                Err(err) => return Err(err),
            }
        }
        output::info("Exiting...");
        Ok(())
    }

    /// Prompts until `parse` accepts the answer; `None` when input ends.
    fn ask<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, ValidationError>,
    ) -> Result<Option<T>, CliError> {
        loop {
            let Some(raw) = self.prompts.text(prompt)? else {
                return Ok(None);
            };
            match parse(&raw) {
                Ok(value) => return Ok(Some(value)),
                Err(err) => {
                    tracing::warn!(prompt, input = %raw, "rejected input");
                    output::warning(err);
                }
            }
        }
    }

    fn add_transaction(&mut self) -> Result<LoopControl, CliError> {
        let today = (self.clock)();
        let Some(date) = self.ask(
            "Enter the date of the transaction (dd-mm-yyyy) or press Enter for today's date",
            |raw| validation::parse_date(raw, Some(today)),
        )?
        else {
            return Ok(LoopControl::Exit);
        };
        let Some(amount) = self.ask("Enter the amount", validation::validate_amount)? else {
            return Ok(LoopControl::Exit);
        };
        let Some(category) = self.ask(
            "Enter the category ('I' for Income or 'E' for Expense)",
            validation::validate_category,
        )?
        else {
            return Ok(LoopControl::Exit);
        };
        let Some(description) = self.prompts.text("Enter a description (optional)")? else {
            return Ok(LoopControl::Exit);
        };

        let transaction = Transaction::new(
            date,
            amount,
            category,
            validation::collect_description(&description),
        )
        .map_err(ServiceError::from)?;
        TransactionService::record(self.store, &transaction)?;
        output::success(format!(
            "Transaction added: {} {} {}",
            transaction.date_label(),
            self.format.format(transaction.amount()),
            transaction.category
        ));
        Ok(LoopControl::Continue)
    }

    fn view_range(&mut self) -> Result<LoopControl, CliError> {
        let Some(start) = self.ask("Enter the start date (dd-mm-yyyy)", |raw| {
            validation::parse_date(raw, None)
        })?
        else {
            return Ok(LoopControl::Exit);
        };
        let Some(end) = self.ask("Enter the end date (dd-mm-yyyy)", |raw| {
            validation::parse_date(raw, None)
        })?
        else {
            return Ok(LoopControl::Exit);
        };

        if start > end {
            output::warning(format!(
                "Start date {} is after end date {}; nothing to show.",
                start.format(DATE_FORMAT),
                end.format(DATE_FORMAT)
            ));
            return Ok(LoopControl::Continue);
        }

        let report = SummaryService::view_range(self.store, start, end)?;
        output::block(report.render(&self.format));

        if !report.is_empty() {
            match self.prompts.confirm("Do you want to see a chart?")? {
                Some(true) => output::block(report.render_chart(&self.format, CHART_WIDTH)),
                Some(false) => {}
                None => return Ok(LoopControl::Exit),
            }
        }
        Ok(LoopControl::Continue)
    }
}
