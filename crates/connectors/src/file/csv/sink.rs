use crate::file::csv::error::FileError;
use model::records::batch::Batch;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::info;

/// When an append emits a header row.
///
/// `Never` reproduces the legacy pipeline exactly: every append writes data
/// rows only, so a file built up across daily runs carries no header at all.
/// `WriteOnce` emits the header only when the append creates the file;
/// `Always` emits it on every append.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeaderPolicy {
    #[default]
    Never,
    WriteOnce,
    Always,
}

/// Append-only CSV sink at a fixed path.
///
/// Columns are whatever the batch carries; nothing reconciles them with
/// columns already in the file, so appends with a different upstream schema
/// produce ragged rows. No locking either: overlapping writers targeting the
/// same path can interleave. Serializing runs is the scheduler's job.
pub struct CsvSink {
    path: PathBuf,
    header_policy: HeaderPolicy,
}

impl CsvSink {
    pub fn new(path: impl Into<PathBuf>, header_policy: HeaderPolicy) -> Self {
        CsvSink {
            path: path.into(),
            header_policy,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends the batch, creating the containing directory on first use.
    /// A zero-row batch touches nothing on disk. Returns the number of data
    /// rows written.
    pub fn append(&self, batch: &Batch) -> Result<usize, FileError> {
        if batch.is_empty() {
            return Ok(0);
        }

        let parent = self
            .path
            .parent()
            .ok_or_else(|| FileError::InvalidSinkPath(self.path.display().to_string()))?;
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }

        let newly_created = !self.path.exists();
        let file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let write_header = match self.header_policy {
            HeaderPolicy::Never => false,
            HeaderPolicy::WriteOnce => newly_created,
            HeaderPolicy::Always => true,
        };

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        if write_header {
            writer.write_record(&batch.columns)?;
        }

        for row in &batch.rows {
            let record: Vec<String> = batch
                .columns
                .iter()
                .map(|column| {
                    row.get(column)
                        .map(|value| value.as_csv_field())
                        .unwrap_or_default()
                })
                .collect();
            writer.write_record(&record)?;
        }

        writer.flush()?;

        info!(
            rows = batch.len(),
            path = %self.path.display(),
            "Batch appended to sink"
        );

        Ok(batch.len())
    }
}
