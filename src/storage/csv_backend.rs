use std::{
    fs::{self, File, OpenOptions},
    io::{self, Read, Seek, SeekFrom, Write},
    path::{Path, PathBuf},
};

use csv::{ReaderBuilder, StringRecord, Terminator, Trim, WriterBuilder};
use serde::Deserialize;

use crate::{
    errors::StorageError,
    ledger::{parse_ledger_date, Category, Transaction},
    utils::paths::ensure_dir,
};

use super::{LedgerStore, Result, HEADER};

/// Ledger table kept in a single CSV file.
///
/// Writes are plain appends without locking; two processes appending to the
/// same file at once can interleave rows.
#[derive(Debug, Clone)]
pub struct CsvStorage {
    path: PathBuf,
}

#[derive(Debug, Deserialize)]
struct LedgerRow {
    date: String,
    amount: String,
    category: String,
    #[serde(default)]
    description: String,
}

impl LedgerRow {
    fn into_transaction(self, line: u64) -> Result<Transaction> {
        let date =
            parse_ledger_date(self.date.trim()).ok_or_else(|| StorageError::DateParse {
                line,
                value: self.date.clone(),
            })?;
        let amount = self
            .amount
            .trim()
            .parse::<f64>()
            .map_err(|_| StorageError::CorruptRow {
                line,
                reason: format!("amount `{}` is not a number", self.amount),
            })?;
        let category = self
            .category
            .parse::<Category>()
            .map_err(|reason| StorageError::CorruptRow { line, reason })?;
        Transaction::new(date, amount, category, self.description).map_err(|err| {
            StorageError::CorruptRow {
                line,
                reason: err.to_string(),
            }
        })
    }
}

impl CsvStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn write_error(&self, source: io::Error) -> StorageError {
        StorageError::Write {
            path: self.path.clone(),
            source,
        }
    }

    fn read_error(&self, err: csv::Error) -> StorageError {
        if err.is_io_error() {
            return StorageError::Read {
                path: self.path.clone(),
                reason: err.to_string(),
            };
        }
        StorageError::CorruptRow {
            line: err.position().map(|pos| pos.line()).unwrap_or_default(),
            reason: err.to_string(),
        }
    }

    fn write_header(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                ensure_dir(parent).map_err(|err| self.write_error(err))?;
            }
        }
        let mut file = File::create(&self.path).map_err(|err| self.write_error(err))?;
        let header = encode_record(&HEADER).map_err(|err| self.write_error(err))?;
        file.write_all(&header)
            .and_then(|_| file.flush())
            .map_err(|err| self.write_error(err))
    }
}

impl LedgerStore for CsvStorage {
    fn initialize(&self) -> Result<()> {
        let needs_header = match fs::metadata(&self.path) {
            Ok(meta) => meta.len() == 0,
            Err(err) if err.kind() == io::ErrorKind::NotFound => true,
            Err(err) => return Err(self.write_error(err)),
        };
        if needs_header {
            self.write_header()?;
            tracing::info!(path = %self.path.display(), "initialized ledger table");
        }
        Ok(())
    }

    fn append(&self, transaction: &Transaction) -> Result<()> {
        let amount = transaction.amount().to_string();
        let row = encode_record(&[
            transaction.date_label().as_str(),
            amount.as_str(),
            transaction.category.label(),
            transaction.description.as_str(),
        ])
        .map_err(|err| self.write_error(err))?;

        self.initialize()?;

        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .open(&self.path)
            .map_err(|err| self.write_error(err))?;
        let mut buffer = Vec::with_capacity(row.len() + 1);
        if !ends_with_newline(&mut file).map_err(|err| self.write_error(err))? {
            buffer.push(b'\n');
        }
        buffer.extend_from_slice(&row);
        file.write_all(&buffer)
            .and_then(|_| file.flush())
            .map_err(|err| self.write_error(err))?;

        tracing::debug!(
            path = %self.path.display(),
            date = %transaction.date_label(),
            category = %transaction.category,
            "appended transaction"
        );
        Ok(())
    }

    fn read_all(&self) -> Result<Vec<Transaction>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "ledger table missing, reading as empty");
                return Ok(Vec::new());
            }
            Err(err) => {
                return Err(StorageError::Read {
                    path: self.path.clone(),
                    reason: err.to_string(),
                })
            }
        };

        let mut reader = ReaderBuilder::new().trim(Trim::Headers).from_reader(file);
        let headers = reader
            .headers()
            .map_err(|err| self.read_error(err))?
            .clone();

        let mut transactions = Vec::new();
        let mut record = StringRecord::new();
        while reader
            .read_record(&mut record)
            .map_err(|err| self.read_error(err))?
        {
            let line = record
                .position()
                .map(|pos| pos.line())
                .unwrap_or_default();
            let row: LedgerRow = record
                .deserialize(Some(&headers))
                .map_err(|err| StorageError::CorruptRow {
                    line,
                    reason: err.to_string(),
                })?;
            transactions.push(row.into_transaction(line)?);
        }

        tracing::debug!(
            path = %self.path.display(),
            rows = transactions.len(),
            "read ledger table"
        );
        Ok(transactions)
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

/// Serializes one CSV record (with quoting) into memory so it can be written in a single call.
fn encode_record(fields: &[&str]) -> io::Result<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record(fields)?;
    writer
        .into_inner()
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err.to_string()))
}

fn ends_with_newline(file: &mut File) -> io::Result<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(true);
    }
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}
