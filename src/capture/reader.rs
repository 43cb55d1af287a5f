use super::CaptureError;
use super::decoder::decode_frame;
use super::stream::StreamTable;
use crate::packet::DecodedPacket;
use pcap_parser::traits::{PcapNGPacketBlock, PcapReaderIterator};
use pcap_parser::*;
use std::fs::File;
use std::path::Path;
use tracing::{debug, info, trace, warn};

const BUFFER_CAPACITY: usize = 65536;

/// Streaming packet source over a pcap or pcapng file.
///
/// Iterating yields one [`DecodedPacket`] per decodable TCP packet, in
/// capture order, without materializing the capture. Packets that fail
/// header decoding are skipped; a pcap-level read failure ends iteration
/// and is reported by [`CaptureReader::take_error`].
pub struct CaptureReader {
    reader: Box<dyn PcapReaderIterator>,
    interfaces: Vec<Linktype>,
    legacy_linktype: Option<Linktype>,
    streams: StreamTable,
    packet_count: usize,
    error: Option<CaptureError>,
    done: bool,
}

impl CaptureReader {
    pub fn open(path: &Path) -> Result<Self, CaptureError> {
        let file = File::open(path).map_err(|source| CaptureError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let reader = create_reader(BUFFER_CAPACITY, file)
            .map_err(|e| CaptureError::Format(format!("{e:?}")))?;
        info!(path = ?path, "opened capture");

        Ok(Self {
            reader,
            interfaces: Vec::new(),
            legacy_linktype: None,
            streams: StreamTable::default(),
            packet_count: 0,
            error: None,
            done: false,
        })
    }

    /// TCP packets decoded so far.
    pub fn packet_count(&self) -> usize {
        self.packet_count
    }

    /// Distinct TCP streams seen so far.
    pub fn stream_count(&self) -> usize {
        self.streams.len()
    }

    /// A read failure that ended iteration early, if any. Check after the
    /// iterator is exhausted.
    pub fn take_error(&mut self) -> Option<CaptureError> {
        self.error.take()
    }
}

impl Iterator for CaptureReader {
    type Item = DecodedPacket;

    fn next(&mut self) -> Option<DecodedPacket> {
        while !self.done {
            match self.reader.next() {
                Ok((offset, block)) => {
                    let decoded = match block {
                        PcapBlockOwned::NG(Block::SectionHeader(_)) => {
                            debug!("section header; clearing interface descriptions");
                            self.interfaces.clear();
                            None
                        }
                        PcapBlockOwned::NG(Block::InterfaceDescription(idb)) => {
                            debug!(
                                if_id = self.interfaces.len(),
                                linktype = ?idb.linktype,
                                "registered interface"
                            );
                            self.interfaces.push(idb.linktype);
                            None
                        }
                        PcapBlockOwned::NG(Block::EnhancedPacket(ref epb)) => {
                            match self.interfaces.get(epb.if_id as usize) {
                                Some(&linktype) if linktype == Linktype::ETHERNET => {
                                    decode_frame(epb.packet_data(), &mut self.streams)
                                }
                                Some(_) => None,
                                None => {
                                    warn!(
                                        if_id = epb.if_id,
                                        "packet references unknown interface; skipping"
                                    );
                                    None
                                }
                            }
                        }
                        PcapBlockOwned::NG(_) => {
                            trace!("skipping non-packet block");
                            None
                        }
                        PcapBlockOwned::LegacyHeader(header) => {
                            debug!(linktype = ?header.network, "legacy pcap header");
                            self.legacy_linktype = Some(header.network);
                            None
                        }
                        PcapBlockOwned::Legacy(ref block) => {
                            if self.legacy_linktype == Some(Linktype::ETHERNET) {
                                decode_frame(block.data, &mut self.streams)
                            } else {
                                None
                            }
                        }
                    };
                    self.reader.consume(offset);
                    if decoded.is_some() {
                        self.packet_count += 1;
                        return decoded;
                    }
                }
                Err(PcapError::Eof) => {
                    self.done = true;
                }
                Err(PcapError::Incomplete(_)) => {
                    if let Err(e) = self.reader.refill() {
                        self.error = Some(CaptureError::Read(format!("{e:?}")));
                        self.done = true;
                    }
                }
                Err(e) => {
                    self.error = Some(CaptureError::Read(format!("{e:?}")));
                    self.done = true;
                }
            }
        }
        None
    }
}
