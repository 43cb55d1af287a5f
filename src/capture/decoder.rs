use super::stream::StreamTable;
use crate::flow::{Endpoint, FlowKey, IPAddress};
use crate::packet::{DecodedPacket, HandshakeKind, HighestLayer, TlsRecord};
use etherparse::{NetHeaders, PacketHeaders, TransportHeader};
use tls_parser::{TlsMessage, TlsMessageHandshake, parse_tls_plaintext};
use tracing::trace;

/// Decode one Ethernet frame into a [`DecodedPacket`].
///
/// Only TCP packets come out; everything else (non-IP, UDP, truncated
/// headers) returns `None` and is skipped by the reader.
pub fn decode_frame(frame: &[u8], streams: &mut StreamTable) -> Option<DecodedPacket> {
    let headers = match PacketHeaders::from_ethernet_slice(frame) {
        Ok(headers) => headers,
        Err(err) => {
            trace!(error = ?err, "failed to parse packet headers");
            return None;
        }
    };

    let (src_ip, dst_ip) = match &headers.net {
        Some(NetHeaders::Ipv4(ip, _)) => (IPAddress::V4(ip.source), IPAddress::V4(ip.destination)),
        Some(NetHeaders::Ipv6(ip, _)) => (IPAddress::V6(ip.source), IPAddress::V6(ip.destination)),
        _ => return None,
    };

    let payload = headers.payload.slice();
    let Some(TransportHeader::Tcp(tcp)) = headers.transport else {
        return None;
    };

    let key = FlowKey::new(
        Endpoint::new(src_ip, tcp.source_port),
        Endpoint::new(dst_ip, tcp.destination_port),
    );
    let stream_id = streams.id_for(key);

    let tls = looks_like_tls(payload).then(|| decode_tls_record(payload));
    let highest_layer = if tls.is_some() {
        HighestLayer::Tls
    } else {
        HighestLayer::Tcp
    };

    Some(DecodedPacket {
        stream_id,
        highest_layer,
        tls,
    })
}

pub fn looks_like_tls(payload: &[u8]) -> bool {
    if payload.len() < 5 {
        return false;
    }
    let content_type = payload[0];
    let version_major = payload[1];
    (20..=23).contains(&content_type) && version_major == 3
}

/// Pull handshake fields out of the first hello message in the payload.
///
/// A record that does not parse cleanly (a fragment continuing in a later
/// segment, or an encrypted handshake message) still yields a TLS-tagged
/// record, just with no handshake fields.
fn decode_tls_record(payload: &[u8]) -> TlsRecord {
    let record = hex::encode(payload);
    let mut handshake = None;
    let mut version = None;
    let mut cipher_suite = None;

    match parse_tls_plaintext(payload) {
        Ok((_rem, plaintext)) => {
            for msg in &plaintext.msg {
                let TlsMessage::Handshake(hs) = msg else {
                    continue;
                };
                match hs {
                    TlsMessageHandshake::ClientHello(ch) => {
                        handshake = Some(HandshakeKind::ClientHello);
                        version = Some(ch.version.0);
                        cipher_suite = None;
                        break;
                    }
                    TlsMessageHandshake::ServerHello(sh) => {
                        handshake = Some(HandshakeKind::ServerHello);
                        version = Some(sh.version.0);
                        cipher_suite = Some(sh.cipher.0);
                        break;
                    }
                    _ => handshake = Some(HandshakeKind::Other),
                }
            }
        }
        Err(err) => {
            trace!(error = ?err, "TLS record did not fully parse");
        }
    }

    TlsRecord {
        handshake,
        version,
        cipher_suite,
        record,
    }
}
