#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighestLayer {
    Tcp,
    Tls,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandshakeKind {
    ClientHello,
    ServerHello,
    Other,
}

/// Fields pulled out of one TLS record as it appeared on the wire.
///
/// `version` and `cipher_suite` are raw wire values; decoding them into
/// names happens at summary time. `record` keeps the hex-encoded record
/// bytes for audit output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlsRecord {
    pub handshake: Option<HandshakeKind>,
    pub version: Option<u16>,
    pub cipher_suite: Option<u16>,
    pub record: String,
}

/// One packet after header and record-layer decoding.
///
/// `tls` is present exactly when `highest_layer` is [`HighestLayer::Tls`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedPacket {
    pub stream_id: u64,
    pub highest_layer: HighestLayer,
    pub tls: Option<TlsRecord>,
}
