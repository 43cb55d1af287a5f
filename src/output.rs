use crate::handshake::summary::SessionRecord;
use clap::ValueEnum;
use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

pub const CSV_HEADER: &str = "capture_file,tcp_stream_id,client_hello,server_hello,negotiated_tls_version,negotiated_cipher_suite";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Csv,
    Json,
}

#[derive(Debug, Error)]
pub enum OutputError {
    /// Writing zero records would produce a headerless artifact, so it is
    /// refused outright.
    #[error("no TLS handshakes found in the capture; nothing to write")]
    EmptyResultSet,

    #[error("failed to write summary: {0}")]
    Io(#[from] io::Error),

    #[error("failed to serialize summary: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// The capture's own path with its extension swapped for the format's.
pub fn default_output_path(capture: &Path, format: OutputFormat) -> PathBuf {
    let extension = match format {
        OutputFormat::Csv => "csv",
        OutputFormat::Json => "json",
    };
    capture.with_extension(extension)
}

pub fn write_summary(
    path: &Path,
    format: OutputFormat,
    records: &[SessionRecord],
) -> Result<(), OutputError> {
    if records.is_empty() {
        return Err(OutputError::EmptyResultSet);
    }

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    match format {
        OutputFormat::Csv => write_csv(&mut writer, records)?,
        OutputFormat::Json => serde_json::to_writer_pretty(&mut writer, records)?,
    }
    writer.flush()?;

    info!(path = ?path, records = records.len(), "wrote session summary");
    Ok(())
}

fn write_csv<W: Write>(writer: &mut W, records: &[SessionRecord]) -> io::Result<()> {
    writeln!(writer, "{CSV_HEADER}")?;
    for record in records {
        writeln!(
            writer,
            "{},{},{},{},{},{}",
            csv_field(&record.capture_file),
            record.tcp_stream_id,
            csv_field(&record.client_hello),
            csv_field(&record.server_hello),
            csv_field(&record.negotiated_tls_version),
            csv_field(&record.negotiated_cipher_suite),
        )?;
    }
    Ok(())
}

fn csv_field(value: &str) -> Cow<'_, str> {
    if value.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}
