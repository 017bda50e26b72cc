//! Bank packing with a hard capacity ceiling.
//!
//! Records are concatenated in level order with no separators beyond each
//! record's own length prefix. The bank is a fixed 16 KiB region in the
//! runtime's address space, so packing is greedy and order-preserving: the
//! first record that does not fit stops packing entirely. Later records are
//! never considered even if they would fit, because level order encodes the
//! intended play progression and a later level must never ship without all
//! earlier ones. Truncation is non-fatal; it is reported and the run
//! completes.

use crate::compress::CompressedRecord;

/// Bank capacity in bytes, fixed by the consuming runtime.
pub const BANK_CAPACITY: usize = 16384;

/// Result of packing records into the bank.
#[derive(Debug)]
pub struct PackedBank {
    /// The packed bank, at most the requested capacity.
    pub bytes: Vec<u8>,
    /// Total size (length prefix + payload) of each packed record, in
    /// order. Feeds the password index's offset arithmetic.
    pub record_sizes: Vec<usize>,
    /// Number of trailing input records that did not fit.
    pub dropped: usize,
}

impl PackedBank {
    /// Number of levels that made it into the bank.
    pub fn level_count(&self) -> usize {
        self.record_sizes.len()
    }

    /// Whether a trailing suffix of the input was dropped.
    pub fn truncated(&self) -> bool {
        self.dropped > 0
    }
}

/// Pack records into a bank of at most `capacity` bytes.
///
/// The accepted records are always a prefix of `records` in input order.
pub fn pack_bank(records: &[CompressedRecord], capacity: usize) -> PackedBank {
    let mut bytes = Vec::new();
    let mut record_sizes = Vec::with_capacity(records.len());

    for (ix, record) in records.iter().enumerate() {
        let total = record.total_len();
        if bytes.len() + total > capacity {
            let dropped = records.len() - ix;
            tracing::warn!(
                "bank full after {} levels ({} bytes), dropping {} remaining levels",
                ix,
                bytes.len(),
                dropped
            );
            return PackedBank {
                bytes,
                record_sizes,
                dropped,
            };
        }
        record.write_to(&mut bytes);
        record_sizes.push(total);
    }

    PackedBank {
        bytes,
        record_sizes,
        dropped: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(payload_len: usize) -> CompressedRecord {
        CompressedRecord::new(vec![0xAA; payload_len]).unwrap()
    }

    #[test]
    fn test_packs_all_records_when_under_capacity() {
        let records = [record(10), record(20), record(30)];
        let packed = pack_bank(&records, BANK_CAPACITY);

        assert_eq!(packed.record_sizes, vec![11, 21, 31]);
        assert_eq!(packed.bytes.len(), 63);
        assert_eq!(packed.level_count(), 3);
        assert!(!packed.truncated());

        // each record begins with its own length prefix
        assert_eq!(packed.bytes[0], 10);
        assert_eq!(packed.bytes[11], 20);
        assert_eq!(packed.bytes[32], 30);
    }

    #[test]
    fn test_truncation_stops_at_first_record_that_does_not_fit() {
        let records = [record(10), record(20), record(30)];
        // 11 fits; 11 + 21 = 32 > 25, so everything after the first is
        // dropped even though nothing individually exceeds the capacity
        let packed = pack_bank(&records, 25);

        assert_eq!(packed.record_sizes, vec![11]);
        assert_eq!(packed.bytes.len(), 11);
        assert_eq!(packed.dropped, 2);
        assert!(packed.truncated());
    }

    #[test]
    fn test_never_exceeds_capacity() {
        let records: Vec<CompressedRecord> = (0..100).map(|_| record(200)).collect();
        for capacity in [0, 1, 200, 201, 402, 16384] {
            let packed = pack_bank(&records, capacity);
            assert!(packed.bytes.len() <= capacity);
            assert_eq!(
                packed.bytes.len(),
                packed.record_sizes.iter().sum::<usize>()
            );
        }
    }

    #[test]
    fn test_accepted_records_are_a_prefix() {
        let records = [record(100), record(5), record(100), record(5)];
        let packed = pack_bank(&records, 110);
        // the small records later in the list must not slip in
        assert_eq!(packed.record_sizes, vec![101, 6]);
        assert_eq!(packed.dropped, 2);
    }

    #[test]
    fn test_empty_input() {
        let packed = pack_bank(&[], BANK_CAPACITY);
        assert!(packed.bytes.is_empty());
        assert_eq!(packed.level_count(), 0);
        assert!(!packed.truncated());
    }

    #[test]
    fn test_exact_fit_is_not_truncation() {
        let records = [record(10), record(12)];
        let packed = pack_bank(&records, 24);
        assert_eq!(packed.record_sizes, vec![11, 13]);
        assert!(!packed.truncated());
    }
}
