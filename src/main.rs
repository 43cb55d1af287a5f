use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use hellograb::capture::CaptureReader;
use hellograb::handshake::correlate;
use hellograb::handshake::summary::summarize;
use hellograb::logging::init_logging;
use hellograb::output::{self, OutputFormat};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, warn};

#[derive(Parser)]
#[command(
    name = "hellograb",
    version,
    about = "Extract negotiated TLS versions and cipher suites from a packet capture"
)]
struct Cli {
    /// Capture file to read (pcap or pcapng)
    capture: PathBuf,

    /// Where to write the summary; defaults to the capture path with its
    /// extension swapped for the format's
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Summary format
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// Send logs to a file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let _guard = match init_logging(cli.verbose, cli.log_file.as_deref()) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("{err:#}");
            return ExitCode::FAILURE;
        }
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut reader = CaptureReader::open(&cli.capture)?;
    let pairs = correlate(&mut reader);
    if let Some(err) = reader.take_error() {
        return Err(err).context("capture read failed");
    }
    info!(
        packets = reader.packet_count(),
        streams = reader.stream_count(),
        pairs = pairs.len(),
        "finished reading capture"
    );

    let label = cli.capture.display().to_string();
    let mut sessions = Vec::with_capacity(pairs.len());
    for pair in &pairs {
        // A malformed ServerHello skips that one session, not the run.
        match summarize(pair, &label) {
            Ok(record) => {
                println!(
                    "Found TLS connection! TCP stream {} used {} and {}",
                    record.tcp_stream_id,
                    record.negotiated_tls_version,
                    record.negotiated_cipher_suite
                );
                sessions.push(record);
            }
            Err(err) => warn!(error = %err, "skipping session"),
        }
    }

    let path = cli
        .output
        .clone()
        .unwrap_or_else(|| output::default_output_path(&cli.capture, cli.format));
    output::write_summary(&path, cli.format, &sessions)?;
    println!("Saved {} session(s) to {}", sessions.len(), path.display());
    Ok(())
}
