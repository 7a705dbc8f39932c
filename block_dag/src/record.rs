use std::sync::Arc;

use derive_more::Display;
use serde::{Deserialize, Serialize};

pub type Rank = u64;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug, Display, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MessageType {
    #[default]
    #[display("block")]
    Block,
    #[display("ballot")]
    Ballot,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug, Display, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Finality {
    #[default]
    #[display("undecided")]
    Undecided,
    #[display("finalized")]
    Finalized,
    #[display("orphaned")]
    Orphaned,
}

/// Read-only view of a block or ballot as needed to build a [`Graph`].
///
/// The first entry of [`BlockRecord::parent_hashes`] is the main parent.
/// Hashes are treated as opaque identifiers. They are never decoded or validated.
///
/// [`Graph`]: crate::Graph
pub trait BlockRecord {
    fn hash(&self) -> &str;

    fn parent_hashes(&self) -> &[String];

    fn justification_hashes(&self) -> &[String];

    fn validator(&self) -> &str;

    fn rank(&self) -> Rank;

    fn message_type(&self) -> MessageType;

    fn finality(&self) -> Finality;

    fn key_block_hash(&self) -> &str {
        ""
    }

    fn is_block(&self) -> bool {
        self.message_type() == MessageType::Block
    }

    fn is_ballot(&self) -> bool {
        !self.is_block()
    }

    fn is_finalized(&self) -> bool {
        self.finality() == Finality::Finalized
    }
}

macro_rules! delegate_block_record {
    ($($pointer:ty),* $(,)?) => {
        $(
            impl<T: BlockRecord + ?Sized> BlockRecord for $pointer {
                fn hash(&self) -> &str {
                    T::hash(self)
                }

                fn parent_hashes(&self) -> &[String] {
                    T::parent_hashes(self)
                }

                fn justification_hashes(&self) -> &[String] {
                    T::justification_hashes(self)
                }

                fn validator(&self) -> &str {
                    T::validator(self)
                }

                fn rank(&self) -> Rank {
                    T::rank(self)
                }

                fn message_type(&self) -> MessageType {
                    T::message_type(self)
                }

                fn finality(&self) -> Finality {
                    T::finality(self)
                }

                fn key_block_hash(&self) -> &str {
                    T::key_block_hash(self)
                }
            }
        )*
    };
}

delegate_block_record!(&T, Box<T>, Arc<T>);

/// Block summary in the shape served by the node API, with hashes already hex encoded.
#[derive(Clone, PartialEq, Eq, Hash, Default, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RawBlockRecord {
    pub hash: String,
    #[serde(default)]
    pub parent_hashes: Vec<String>,
    #[serde(default)]
    pub justification_hashes: Vec<String>,
    pub validator: String,
    pub rank: Rank,
    #[serde(default)]
    pub message_type: MessageType,
    #[serde(default)]
    pub finality: Finality,
    #[serde(default)]
    pub key_block_hash: String,
}

impl BlockRecord for RawBlockRecord {
    fn hash(&self) -> &str {
        &self.hash
    }

    fn parent_hashes(&self) -> &[String] {
        &self.parent_hashes
    }

    fn justification_hashes(&self) -> &[String] {
        &self.justification_hashes
    }

    fn validator(&self) -> &str {
        &self.validator
    }

    fn rank(&self) -> Rank {
        self.rank
    }

    fn message_type(&self) -> MessageType {
        self.message_type
    }

    fn finality(&self) -> Finality {
        self.finality
    }

    fn key_block_hash(&self) -> &str {
        &self.key_block_hash
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use serde_json::json;

    use super::*;

    #[test]
    fn raw_block_record_uses_defaults_for_optional_fields() -> Result<()> {
        let record = serde_json::from_value::<RawBlockRecord>(json!({
            "hash": "a1",
            "validator": "v1",
            "rank": 3,
        }))?;

        assert!(record.parent_hashes().is_empty());
        assert!(record.justification_hashes().is_empty());
        assert!(record.is_block());
        assert!(!record.is_finalized());
        assert_eq!(record.key_block_hash(), "");

        Ok(())
    }

    #[test]
    fn raw_block_record_parses_ballots_and_finality() -> Result<()> {
        let record = serde_json::from_value::<RawBlockRecord>(json!({
            "hash": "b2",
            "parent_hashes": ["a1", "a0"],
            "justification_hashes": ["c3"],
            "validator": "v2",
            "rank": 4,
            "message_type": "BALLOT",
            "finality": "FINALIZED",
            "key_block_hash": "k0",
        }))?;

        assert!(record.is_ballot());
        assert!(record.is_finalized());
        assert_eq!(record.parent_hashes()[0], "a1");
        assert_eq!(record.key_block_hash(), "k0");

        Ok(())
    }

    #[test]
    fn raw_block_record_rejects_unknown_fields() {
        let result = serde_json::from_value::<RawBlockRecord>(json!({
            "hash": "a1",
            "validator": "v1",
            "rank": 0,
            "slot": 7,
        }));

        assert!(result.is_err());
    }

    #[test]
    fn block_record_is_implemented_for_smart_pointers() {
        let record = Arc::new(RawBlockRecord {
            hash: "a1".to_owned(),
            validator: "v1".to_owned(),
            rank: 9,
            finality: Finality::Orphaned,
            ..RawBlockRecord::default()
        });

        let by_ref = &record;

        assert_eq!(BlockRecord::hash(by_ref), "a1");
        assert_eq!(BlockRecord::rank(&record), 9);
        assert_eq!(BlockRecord::finality(&Box::new(record.as_ref())), Finality::Orphaned);
    }
}
