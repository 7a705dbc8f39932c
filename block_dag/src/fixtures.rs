use crate::record::{Finality, MessageType, Rank, RawBlockRecord};

pub fn block(hash: &str, validator: &str, rank: Rank) -> RawBlockRecord {
    RawBlockRecord {
        hash: hash.to_owned(),
        validator: validator.to_owned(),
        rank,
        ..RawBlockRecord::default()
    }
}

pub fn with_parents(mut record: RawBlockRecord, parents: &[&str]) -> RawBlockRecord {
    record.parent_hashes = parents.iter().copied().map(str::to_owned).collect();
    record
}

pub fn with_justifications(mut record: RawBlockRecord, justifications: &[&str]) -> RawBlockRecord {
    record.justification_hashes = justifications.iter().copied().map(str::to_owned).collect();
    record
}

pub fn finalized(mut record: RawBlockRecord) -> RawBlockRecord {
    record.finality = Finality::Finalized;
    record
}

pub fn ballot(mut record: RawBlockRecord) -> RawBlockRecord {
    record.message_type = MessageType::Ballot;
    record
}

// The three records used throughout the tests:
// `b` and `c` build on `a`, and `c` also justifies `b`.
pub fn three_records() -> Vec<RawBlockRecord> {
    vec![
        block("a", "v1", 0),
        with_parents(block("b", "v1", 1), &["a"]),
        with_justifications(with_parents(block("c", "v2", 1), &["a"]), &["b"]),
    ]
}

pub type ArbitraryRecord = (u8, u8, u8, Vec<u8>, Vec<u8>, bool, bool);

// Maps small integers to records so that `quickcheck` produces collisions in hashes, validators and
// ranks as well as references to hashes that are never present.
pub fn arbitrary_records(raw: Vec<ArbitraryRecord>) -> Vec<RawBlockRecord> {
    let hash = |byte: u8| format!("{:02x}", byte % 20);

    raw.into_iter()
        .map(
            |(own, validator, rank, parents, justifications, is_ballot, is_finalized)| {
                RawBlockRecord {
                    hash: format!("{:02x}", own % 16),
                    parent_hashes: parents.into_iter().map(hash).collect(),
                    justification_hashes: justifications.into_iter().map(hash).collect(),
                    validator: format!("v{}", validator % 4),
                    rank: (rank % 8).into(),
                    message_type: if is_ballot {
                        MessageType::Ballot
                    } else {
                        MessageType::Block
                    },
                    finality: if is_finalized {
                        Finality::Finalized
                    } else {
                        Finality::Undecided
                    },
                    key_block_hash: String::new(),
                }
            },
        )
        .collect()
}
