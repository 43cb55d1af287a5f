//! Pairs ClientHello and ServerHello messages that share a TCP stream.

pub mod summary;
pub mod tables;

#[cfg(test)]
mod tests;

use crate::packet::{DecodedPacket, HandshakeKind, HighestLayer};
use std::collections::HashMap;
use tracing::debug;

/// A ClientHello matched with the first ServerHello seen on its stream.
///
/// The hello bodies are kept as hex strings for audit output; `version` and
/// `cipher_suite` are the ServerHello's raw wire values, still undecoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandshakePair {
    pub stream_id: u64,
    pub client_hello: String,
    pub server_hello: String,
    pub version: Option<u16>,
    pub cipher_suite: Option<u16>,
}

/// Scan a decoded packet sequence once and emit hello pairs per TCP stream.
///
/// Each ClientHello, in order of appearance, pairs with the first ServerHello
/// observed anywhere on the same stream; a ClientHello with no ServerHello is
/// dropped. Renegotiating streams therefore pair every ClientHello with the
/// same ServerHello; stream-id reuse across capture restarts is not
/// disambiguated.
pub fn correlate(packets: impl IntoIterator<Item = DecodedPacket>) -> Vec<HandshakePair> {
    let mut client_hellos: Vec<DecodedPacket> = Vec::new();
    let mut first_server_hello: HashMap<u64, DecodedPacket> = HashMap::new();

    for packet in packets {
        if packet.highest_layer != HighestLayer::Tls {
            continue;
        }
        let Some(tls) = &packet.tls else { continue };
        match tls.handshake {
            Some(HandshakeKind::ClientHello) => client_hellos.push(packet),
            Some(HandshakeKind::ServerHello) => {
                first_server_hello.entry(packet.stream_id).or_insert(packet);
            }
            _ => {}
        }
    }

    debug!(
        client_hellos = client_hellos.len(),
        server_hello_streams = first_server_hello.len(),
        "correlating handshake packets"
    );

    client_hellos
        .into_iter()
        .filter_map(|ch| {
            let sh = first_server_hello.get(&ch.stream_id)?;
            let sh_tls = sh.tls.as_ref()?;
            let ch_tls = ch.tls.as_ref()?;
            Some(HandshakePair {
                stream_id: ch.stream_id,
                client_hello: ch_tls.record.clone(),
                server_hello: sh_tls.record.clone(),
                version: sh_tls.version,
                cipher_suite: sh_tls.cipher_suite,
            })
        })
        .collect()
}
