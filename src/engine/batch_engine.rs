use crate::models::{InstructionRecord, TransferInstruction};
use crate::validation::{validate_instruction, InstructionReport};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::BufReader;
use tokio::sync::mpsc;
use tokio::task::{spawn_blocking, JoinHandle};
use tracing::{debug, error, warn};

/// The verdicts for one data row of the input file.
#[derive(Debug, Clone)]
pub struct RowReport {
    /// 1-based data row number, the header is not counted.
    pub row: usize,
    pub instruction: TransferInstruction,
    pub report: InstructionReport
}

/// Async pipeline that validates a CSV file of transfer instructions.
pub struct BatchEngine {
    backpressure: usize
}

impl BatchEngine {
    pub fn new() -> Self {
        Self {
            backpressure: 256
        }
    }

    /// Overrides the capacity of the channel between the CSV reader and the validator.
    pub fn with_backpressure(mut self, backpressure: usize) -> Self {
        self.backpressure = backpressure.max(1);
        self
    }

    /// Reads every instruction in the file and returns one report per readable row, in file order.
    ///
    /// Rows that cannot be deserialized are logged and skipped, so their row numbers are missing
    /// from the output rather than failing the whole batch.
    pub async fn run(&self, path: &str) -> anyhow::Result<Vec<RowReport>> {
        let (sender, receiver) = mpsc::channel::<(usize, TransferInstruction)>(self.backpressure);
        let csv_handle = self.spawn_csv_reader(path.to_string(), sender);
        let reports = self.validate_instructions(receiver).await;

        if let Err(error) = csv_handle.await {
            error!("CSV ingestion failed: {error}");
        }

        Ok(reports)
    }

    fn spawn_csv_reader(&self, path: String, sender: mpsc::Sender<(usize, TransferInstruction)>) -> JoinHandle<()> {
        spawn_blocking(move || {
            let file = match File::open(&path) {
                Ok(file) => file,
                Err(error) => {
                    error!("Error opening CSV at path: {path} | {error}");
                    return;
                }
            };

            let mut reader = ReaderBuilder::new()
                .trim(Trim::All)
                .flexible(true)
                .from_reader(BufReader::new(file));

            for (index, result) in reader.deserialize::<InstructionRecord>().enumerate() {
                let row = index + 1;

                match result {
                    Ok(record) => {
                        if sender.blocking_send((row, record.into())).is_err() {
                            break;
                        }
                    }
                    Err(error) => {
                        error!("CSV deserialization error on row [{row}]: {error}");
                    }
                }
            }
        })
    }

    async fn validate_instructions(&self, mut receiver: mpsc::Receiver<(usize, TransferInstruction)>) -> Vec<RowReport> {
        let mut reports = Vec::new();

        while let Some((row, instruction)) = receiver.recv().await {
            let report = validate_instruction(&instruction);

            if report.is_valid() {
                debug!("Row [{row}]:[{}] passed validation", instruction.transfer_type);
            } else {
                for error in report.errors() {
                    warn!("Row [{row}]:[{}] {}: {error}", instruction.transfer_type, error.field());
                }
            }

            reports.push(RowReport { row, instruction, report });
        }

        reports
    }
}

impl Default for BatchEngine {
    fn default() -> Self {
        Self::new()
    }
}
