use crate::flow::FlowKey;
use std::collections::HashMap;
use tracing::trace;

/// Assigns capture-scoped TCP stream ids the way dissectors number
/// `tcp.stream`: each flow gets the next id the first time either of its
/// directions is seen, and keeps it for the rest of the capture.
#[derive(Default)]
pub struct StreamTable {
    ids: HashMap<FlowKey, u64>,
    next_id: u64,
}

impl StreamTable {
    pub fn id_for(&mut self, key: FlowKey) -> u64 {
        let next_id = &mut self.next_id;
        *self.ids.entry(key).or_insert_with(|| {
            let id = *next_id;
            *next_id += 1;
            trace!(stream = id, flow = %key, "new TCP stream");
            id
        })
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
