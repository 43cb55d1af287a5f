use super::{HandshakePair, tables};
use serde::Serialize;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SummaryError {
    /// The ServerHello side of a pair lacks a field the summary needs,
    /// usually from a truncated capture. Distinct from an *unknown* wire
    /// value, which falls back to its hex form instead.
    #[error("server hello on stream {stream} is missing its {field} field")]
    MalformedHandshakeRecord { stream: u64, field: &'static str },
}

/// One summarized TLS session. Field order matches the CSV column order.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SessionRecord {
    pub capture_file: String,
    pub tcp_stream_id: u64,
    pub client_hello: String,
    pub server_hello: String,
    pub negotiated_tls_version: String,
    pub negotiated_cipher_suite: String,
}

/// Decode a matched pair into its output record.
///
/// The version and cipher suite reported are the ones the server selected,
/// taken from the ServerHello. Pure function; the caller decides whether a
/// [`SummaryError`] skips the record or aborts the run.
pub fn summarize(pair: &HandshakePair, capture_file: &str) -> Result<SessionRecord, SummaryError> {
    let version = pair
        .version
        .ok_or(SummaryError::MalformedHandshakeRecord {
            stream: pair.stream_id,
            field: "version",
        })?;
    let cipher = pair
        .cipher_suite
        .ok_or(SummaryError::MalformedHandshakeRecord {
            stream: pair.stream_id,
            field: "cipher suite",
        })?;

    let negotiated_tls_version = match tables::version_name(version) {
        Some(name) => name.to_string(),
        None => {
            let code = tables::wire_hex(version);
            info!(stream = pair.stream_id, code = %code, "TLS version not in table, reporting raw code");
            code
        }
    };
    let negotiated_cipher_suite = match tables::cipher_suite_name(cipher) {
        Some(name) => name.to_string(),
        None => {
            let code = tables::wire_hex(cipher);
            info!(stream = pair.stream_id, code = %code, "cipher suite not in table, reporting raw code");
            code
        }
    };

    Ok(SessionRecord {
        capture_file: capture_file.to_string(),
        tcp_stream_id: pair.stream_id,
        client_hello: pair.client_hello.clone(),
        server_hello: pair.server_hello.clone(),
        negotiated_tls_version,
        negotiated_cipher_suite,
    })
}
