use crate::sequence::{RequestSeq, RequestSequence};

/// Result of handing a completed read to a [`Snapshot`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadOutcome {
    /// The read was the latest issued and its payload is now held
    Applied,
    /// A newer read was issued since; the payload was discarded
    Stale,
}

/// Last confirmed server payload for one view model.
///
/// Holds nothing until the first successful read. Each completed read either
/// replaces the value wholesale or, if a newer read has been issued in the
/// meantime, is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot<T> {
    value: Option<T>,
    reads: RequestSequence,
}

impl<T> Default for Snapshot<T> {
    fn default() -> Self {
        Self {
            value: None,
            reads: RequestSequence::default(),
        }
    }
}

impl<T> Snapshot<T> {
    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Tag a new read. Any read issued before this one becomes stale.
    pub fn begin_read(&mut self) -> RequestSeq {
        self.reads.issue()
    }

    pub fn is_current(&self, seq: RequestSeq) -> bool {
        self.reads.is_latest(seq)
    }

    /// Apply a successful read.
    pub fn complete_read(&mut self, seq: RequestSeq, value: T) -> ReadOutcome {
        if !self.reads.is_latest(seq) {
            return ReadOutcome::Stale;
        }
        self.value = Some(value);
        ReadOutcome::Applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_until_first_read() {
        let snapshot: Snapshot<Vec<u32>> = Snapshot::default();
        assert!(snapshot.get().is_none());
    }

    #[test]
    fn test_replaces_wholesale() {
        let mut snapshot = Snapshot::default();
        let seq = snapshot.begin_read();
        assert_eq!(snapshot.complete_read(seq, vec![1, 2, 3]), ReadOutcome::Applied);

        let seq = snapshot.begin_read();
        assert_eq!(snapshot.complete_read(seq, vec![3]), ReadOutcome::Applied);
        assert_eq!(snapshot.get(), Some(&vec![3]));
    }

    #[test]
    fn test_out_of_order_completion_is_dropped() {
        let mut snapshot = Snapshot::default();
        let older = snapshot.begin_read();
        let newer = snapshot.begin_read();

        assert_eq!(snapshot.complete_read(newer, "new"), ReadOutcome::Applied);
        assert_eq!(snapshot.complete_read(older, "old"), ReadOutcome::Stale);
        assert_eq!(snapshot.get(), Some(&"new"));
    }

    #[test]
    fn test_failed_read_leaves_value() {
        let mut snapshot = Snapshot::default();
        let seq = snapshot.begin_read();
        snapshot.complete_read(seq, 10);

        // A read that never completes successfully does not touch the value
        let failed = snapshot.begin_read();
        assert!(snapshot.is_current(failed));
        assert_eq!(snapshot.get(), Some(&10));
    }
}
