use super::decoder::{decode_frame, looks_like_tls};
use super::stream::StreamTable;
use crate::flow::{Endpoint, FlowKey, IPAddress};
use crate::handshake::{correlate, summary::summarize};
use crate::packet::{HandshakeKind, HighestLayer};
use etherparse::PacketBuilder;

const CLIENT: [u8; 4] = [10, 0, 0, 1];
const SERVER: [u8; 4] = [93, 184, 216, 34];

fn build_tcp_packet(src: [u8; 4], dst: [u8; 4], sport: u16, dport: u16, payload: &[u8]) -> Vec<u8> {
    let builder = PacketBuilder::ethernet2([1, 2, 3, 4, 5, 6], [6, 5, 4, 3, 2, 1])
        .ipv4(src, dst, 64)
        .tcp(sport, dport, 1, 64240);
    let mut packet = Vec::with_capacity(builder.size(payload.len()));
    builder.write(&mut packet, payload).unwrap();
    packet
}

fn build_udp_packet(payload: &[u8]) -> Vec<u8> {
    let builder = PacketBuilder::ethernet2([1, 2, 3, 4, 5, 6], [6, 5, 4, 3, 2, 1])
        .ipv4([192, 168, 1, 10], [192, 168, 1, 20], 64)
        .udp(5353, 53);
    let mut packet = Vec::with_capacity(builder.size(payload.len()));
    builder.write(&mut packet, payload).unwrap();
    packet
}

fn wrap_handshake(msg_type: u8, record_version: u16, body: &[u8]) -> Vec<u8> {
    let mut handshake = vec![msg_type, 0, 0, 0];
    let len = (body.len() as u32).to_be_bytes();
    handshake[1..4].copy_from_slice(&len[1..4]);
    handshake.extend_from_slice(body);

    let mut record = vec![22];
    record.extend_from_slice(&record_version.to_be_bytes());
    record.extend_from_slice(&(handshake.len() as u16).to_be_bytes());
    record.extend_from_slice(&handshake);
    record
}

fn client_hello_record(version: u16, ciphers: &[u16]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(&version.to_be_bytes());
    body.extend_from_slice(&[0u8; 32]); // random
    body.push(0); // empty session id
    body.extend_from_slice(&((ciphers.len() * 2) as u16).to_be_bytes());
    for cipher in ciphers {
        body.extend_from_slice(&cipher.to_be_bytes());
    }
    body.push(1); // one compression method: null
    body.push(0);
    wrap_handshake(1, 0x0301, &body)
}

fn server_hello_record(version: u16, cipher: u16) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(&version.to_be_bytes());
    body.extend_from_slice(&[0u8; 32]); // random
    body.push(0); // empty session id
    body.extend_from_slice(&cipher.to_be_bytes());
    body.push(0); // null compression
    wrap_handshake(2, 0x0303, &body)
}

#[test]
fn client_hello_fields_are_extracted() {
    let payload = client_hello_record(0x0303, &[0x009c, 0x1301]);
    let packet = build_tcp_packet(CLIENT, SERVER, 51000, 443, &payload);
    let mut streams = StreamTable::default();

    let decoded = decode_frame(&packet, &mut streams).expect("decode client hello");
    assert_eq!(decoded.highest_layer, HighestLayer::Tls);
    let tls = decoded.tls.expect("tls fields");
    assert_eq!(tls.handshake, Some(HandshakeKind::ClientHello));
    assert_eq!(tls.version, Some(0x0303));
    assert_eq!(tls.cipher_suite, None);
    assert_eq!(tls.record, hex::encode(&payload));
}

#[test]
fn server_hello_fields_are_extracted() {
    let payload = server_hello_record(0x0303, 0x009c);
    let packet = build_tcp_packet(SERVER, CLIENT, 443, 51000, &payload);
    let mut streams = StreamTable::default();

    let decoded = decode_frame(&packet, &mut streams).expect("decode server hello");
    let tls = decoded.tls.expect("tls fields");
    assert_eq!(tls.handshake, Some(HandshakeKind::ServerHello));
    assert_eq!(tls.version, Some(0x0303));
    assert_eq!(tls.cipher_suite, Some(0x009c));
}

#[test]
fn plain_tcp_payload_is_not_tls() {
    let packet = build_tcp_packet(CLIENT, SERVER, 51000, 80, b"GET / HTTP/1.1\r\n\r\n");
    let mut streams = StreamTable::default();

    let decoded = decode_frame(&packet, &mut streams).expect("decode http");
    assert_eq!(decoded.highest_layer, HighestLayer::Tcp);
    assert!(decoded.tls.is_none());
}

#[test]
fn truncated_tls_record_keeps_layer_but_no_fields() {
    // Record header claims 80 bytes but the segment carries 3.
    let fragment = [0x16, 0x03, 0x03, 0x00, 0x50, 0x02, 0x00, 0x00];
    assert!(looks_like_tls(&fragment));

    let packet = build_tcp_packet(SERVER, CLIENT, 443, 51000, &fragment);
    let mut streams = StreamTable::default();

    let decoded = decode_frame(&packet, &mut streams).expect("decode fragment");
    assert_eq!(decoded.highest_layer, HighestLayer::Tls);
    let tls = decoded.tls.expect("tls fields");
    assert_eq!(tls.handshake, None);
    assert_eq!(tls.version, None);
    assert_eq!(tls.cipher_suite, None);
}

#[test]
fn application_data_has_no_handshake_fields() {
    let mut payload = vec![0x17, 0x03, 0x03, 0x00, 0x04];
    payload.extend_from_slice(&[0xde, 0xad, 0xbe, 0xef]);
    let packet = build_tcp_packet(CLIENT, SERVER, 51000, 443, &payload);
    let mut streams = StreamTable::default();

    let decoded = decode_frame(&packet, &mut streams).expect("decode appdata");
    assert_eq!(decoded.highest_layer, HighestLayer::Tls);
    assert_eq!(decoded.tls.unwrap().handshake, None);
}

#[test]
fn udp_packets_are_skipped() {
    let packet = build_udp_packet(&[1, 2, 3]);
    let mut streams = StreamTable::default();
    assert!(decode_frame(&packet, &mut streams).is_none());
}

#[test]
fn both_directions_share_one_stream_id() {
    let mut streams = StreamTable::default();
    let out = build_tcp_packet(CLIENT, SERVER, 51000, 443, b"x");
    let back = build_tcp_packet(SERVER, CLIENT, 443, 51000, b"y");

    let a = decode_frame(&out, &mut streams).unwrap();
    let b = decode_frame(&back, &mut streams).unwrap();
    assert_eq!(a.stream_id, b.stream_id);
    assert_eq!(streams.len(), 1);
}

#[test]
fn new_flows_get_increasing_stream_ids() {
    let mut streams = StreamTable::default();
    let first = decode_frame(
        &build_tcp_packet(CLIENT, SERVER, 51000, 443, b"x"),
        &mut streams,
    )
    .unwrap();
    let second = decode_frame(
        &build_tcp_packet(CLIENT, SERVER, 51001, 443, b"x"),
        &mut streams,
    )
    .unwrap();
    assert_eq!(first.stream_id, 0);
    assert_eq!(second.stream_id, 1);
}

#[test]
fn stream_table_is_direction_insensitive() {
    let mut table = StreamTable::default();
    let a = Endpoint::new(IPAddress::V4(CLIENT), 51000);
    let b = Endpoint::new(IPAddress::V4(SERVER), 443);
    let id = table.id_for(FlowKey::new(a, b));
    assert_eq!(table.id_for(FlowKey::new(b, a)), id);
    assert!(!table.is_empty());
}

#[test]
fn decoded_capture_correlates_end_to_end() {
    let mut streams = StreamTable::default();
    let packets: Vec<_> = [
        build_tcp_packet(CLIENT, SERVER, 51000, 443, &client_hello_record(0x0303, &[0x009c])),
        build_tcp_packet(SERVER, CLIENT, 443, 51000, &server_hello_record(0x0303, 0x009c)),
        build_tcp_packet(CLIENT, SERVER, 51000, 443, &[0x17, 0x03, 0x03, 0x00, 0x01, 0xaa]),
    ]
    .iter()
    .filter_map(|frame| decode_frame(frame, &mut streams))
    .collect();

    let pairs = correlate(packets);
    assert_eq!(pairs.len(), 1);

    let record = summarize(&pairs[0], "synthetic.pcapng").expect("summarize");
    assert_eq!(record.tcp_stream_id, 0);
    assert_eq!(record.negotiated_tls_version, "TLSv1.2");
    assert_eq!(
        record.negotiated_cipher_suite,
        "TLS_RSA_WITH_AES_128_GCM_SHA256"
    );
    assert_eq!(
        record.client_hello,
        hex::encode(client_hello_record(0x0303, &[0x009c]))
    );
}
