/// Sequence number attached to one issued read
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestSeq(u64);

/// Monotonic per-view-model request counter.
///
/// Every read takes a number from `issue`; when it completes, only the most
/// recently issued number may be applied. Older completions are stale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    pub fn issue(&mut self) -> RequestSeq {
        self.latest += 1;
        RequestSeq(self.latest)
    }

    pub fn is_latest(&self, seq: RequestSeq) -> bool {
        seq.0 == self.latest
    }

    /// Number of reads issued so far
    pub fn issued(&self) -> u64 {
        self.latest
    }
}
