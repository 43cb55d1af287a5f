use super::summary::{SessionRecord, SummaryError, summarize};
use super::{HandshakePair, correlate, tables};
use crate::packet::{DecodedPacket, HandshakeKind, HighestLayer, TlsRecord};

fn hello(
    stream_id: u64,
    kind: HandshakeKind,
    version: Option<u16>,
    cipher_suite: Option<u16>,
) -> DecodedPacket {
    let record = match kind {
        HandshakeKind::ClientHello => format!("16030100{stream_id:02x}"),
        HandshakeKind::ServerHello => format!("16030300{stream_id:02x}"),
        HandshakeKind::Other => "160303000b".to_string(),
    };
    DecodedPacket {
        stream_id,
        highest_layer: HighestLayer::Tls,
        tls: Some(TlsRecord {
            handshake: Some(kind),
            version,
            cipher_suite,
            record,
        }),
    }
}

fn client_hello(stream_id: u64) -> DecodedPacket {
    hello(stream_id, HandshakeKind::ClientHello, Some(0x0303), None)
}

fn server_hello(stream_id: u64, version: u16, cipher_suite: u16) -> DecodedPacket {
    hello(
        stream_id,
        HandshakeKind::ServerHello,
        Some(version),
        Some(cipher_suite),
    )
}

fn plain_tcp(stream_id: u64) -> DecodedPacket {
    DecodedPacket {
        stream_id,
        highest_layer: HighestLayer::Tcp,
        tls: None,
    }
}

#[test]
fn version_table_covers_all_known_codes() {
    let known = [
        (0x0300, "SSLv3"),
        (0x0301, "TLSv1.0"),
        (0x0302, "TLSv1.1"),
        (0x0303, "TLSv1.2"),
        (0x0304, "TLSv1.3"),
    ];
    for (code, name) in known {
        assert_eq!(tables::version_name(code), Some(name));
    }
    assert_eq!(tables::version_name(0x0305), None);
    assert_eq!(tables::version_name(0x0002), None);
}

#[test]
fn cipher_table_hits_and_misses() {
    assert_eq!(
        tables::cipher_suite_name(0x009c),
        Some("TLS_RSA_WITH_AES_128_GCM_SHA256")
    );
    assert_eq!(
        tables::cipher_suite_name(0x1301),
        Some("TLS_AES_128_GCM_SHA256")
    );
    assert_eq!(
        tables::cipher_suite_name(0xc030),
        Some("TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384")
    );
    assert_eq!(tables::cipher_suite_name(0x9999), None);
}

#[test]
fn wire_hex_uses_no_padding() {
    assert_eq!(tables::wire_hex(0x5), "0x5");
    assert_eq!(tables::wire_hex(0x9c), "0x9c");
    assert_eq!(tables::wire_hex(0x9999), "0x9999");
    assert_eq!(tables::wire_hex(0x0303), "0x303");
}

#[test]
fn wire_hex_round_trips() {
    for code in [0u16, 0x5, 0x9c, 0x303, 0x1301, 0x9999, u16::MAX] {
        let formatted = tables::wire_hex(code);
        let stripped = formatted.strip_prefix("0x").expect("0x prefix");
        assert_eq!(u16::from_str_radix(stripped, 16), Ok(code));
    }
}

#[test]
fn single_stream_yields_one_record() {
    // Scenario A: one ClientHello and one ServerHello on stream 0.
    let packets = vec![
        plain_tcp(0),
        client_hello(0),
        server_hello(0, 0x0303, 0x009c),
    ];
    let pairs = correlate(packets);
    assert_eq!(pairs.len(), 1);

    let record = summarize(&pairs[0], "session.pcapng").expect("summarize");
    assert_eq!(record.capture_file, "session.pcapng");
    assert_eq!(record.tcp_stream_id, 0);
    assert_eq!(record.negotiated_tls_version, "TLSv1.2");
    assert_eq!(
        record.negotiated_cipher_suite,
        "TLS_RSA_WITH_AES_128_GCM_SHA256"
    );
}

#[test]
fn client_hello_without_server_hello_yields_nothing() {
    // Scenario B: the server side never answered.
    let packets = vec![client_hello(1), plain_tcp(1)];
    assert!(correlate(packets).is_empty());
}

#[test]
fn server_hello_alone_yields_nothing() {
    let packets = vec![server_hello(3, 0x0303, 0x009c)];
    assert!(correlate(packets).is_empty());
}

#[test]
fn streams_do_not_leak_fields_into_each_other() {
    // Scenario C: two interleaved streams, each with its own negotiation.
    let packets = vec![
        client_hello(0),
        client_hello(1),
        server_hello(1, 0x0304, 0x1301),
        server_hello(0, 0x0303, 0x009c),
    ];
    let pairs = correlate(packets);
    assert_eq!(pairs.len(), 2);

    let rec0 = summarize(&pairs[0], "two.pcap").unwrap();
    let rec1 = summarize(&pairs[1], "two.pcap").unwrap();
    assert_eq!(rec0.tcp_stream_id, 0);
    assert_eq!(rec0.negotiated_tls_version, "TLSv1.2");
    assert_eq!(rec0.negotiated_cipher_suite, "TLS_RSA_WITH_AES_128_GCM_SHA256");
    assert_eq!(rec1.tcp_stream_id, 1);
    assert_eq!(rec1.negotiated_tls_version, "TLSv1.3");
    assert_eq!(rec1.negotiated_cipher_suite, "TLS_AES_128_GCM_SHA256");
}

#[test]
fn unknown_cipher_suite_falls_back_to_hex() {
    // Scenario D: unassigned cipher-suite code.
    let packets = vec![client_hello(0), server_hello(0, 0x0303, 0x9999)];
    let pairs = correlate(packets);
    let record = summarize(&pairs[0], "odd.pcap").unwrap();
    assert_eq!(record.negotiated_cipher_suite, "0x9999");
    assert_eq!(record.negotiated_tls_version, "TLSv1.2");
}

#[test]
fn unknown_version_falls_back_to_hex() {
    let packets = vec![client_hello(0), server_hello(0, 0x7f1c, 0x1301)];
    let pairs = correlate(packets);
    let record = summarize(&pairs[0], "draft.pcap").unwrap();
    assert_eq!(record.negotiated_tls_version, "0x7f1c");
}

#[test]
fn missing_version_is_malformed_but_recoverable() {
    // Scenario E: one truncated ServerHello must not poison other pairs.
    let broken = hello(1, HandshakeKind::ServerHello, None, Some(0x009c));
    let packets = vec![
        client_hello(0),
        server_hello(0, 0x0303, 0x009c),
        client_hello(1),
        broken,
    ];
    let pairs = correlate(packets);
    assert_eq!(pairs.len(), 2);

    let results: Vec<Result<SessionRecord, SummaryError>> =
        pairs.iter().map(|p| summarize(p, "mixed.pcap")).collect();
    assert!(results[0].is_ok());
    assert_eq!(
        results[1],
        Err(SummaryError::MalformedHandshakeRecord {
            stream: 1,
            field: "version",
        })
    );
}

#[test]
fn missing_cipher_suite_is_malformed() {
    let broken = hello(0, HandshakeKind::ServerHello, Some(0x0303), None);
    let pairs = correlate(vec![client_hello(0), broken]);
    assert_eq!(
        summarize(&pairs[0], "x.pcap"),
        Err(SummaryError::MalformedHandshakeRecord {
            stream: 0,
            field: "cipher suite",
        })
    );
}

#[test]
fn correlate_is_idempotent() {
    let packets = vec![
        client_hello(0),
        server_hello(0, 0x0303, 0x009c),
        client_hello(2),
        server_hello(2, 0x0304, 0x1302),
        client_hello(5),
    ];
    let first = correlate(packets.clone());
    let second = correlate(packets);
    assert_eq!(first, second);
}

#[test]
fn renegotiation_pairs_every_client_hello_with_first_server_hello() {
    let packets = vec![
        client_hello(4),
        server_hello(4, 0x0303, 0x009c),
        client_hello(4),
        server_hello(4, 0x0303, 0x009d),
    ];
    let pairs = correlate(packets);
    assert_eq!(pairs.len(), 2);
    assert_eq!(pairs[0].cipher_suite, Some(0x009c));
    assert_eq!(pairs[1].cipher_suite, Some(0x009c));
}

#[test]
fn non_hello_handshake_messages_are_filtered_out() {
    let packets = vec![
        hello(0, HandshakeKind::Other, Some(0x0303), None),
        client_hello(0),
        server_hello(0, 0x0303, 0x009c),
        DecodedPacket {
            stream_id: 0,
            highest_layer: HighestLayer::Tls,
            tls: Some(TlsRecord {
                handshake: None,
                version: None,
                cipher_suite: None,
                record: "1703030010".to_string(),
            }),
        },
    ];
    let pairs = correlate(packets);
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].stream_id, 0);
}

#[test]
fn pair_copies_both_hello_records() {
    let pairs = correlate(vec![client_hello(7), server_hello(7, 0x0303, 0x009c)]);
    assert_eq!(pairs[0].client_hello, "1603010007");
    assert_eq!(pairs[0].server_hello, "1603030007");
}
