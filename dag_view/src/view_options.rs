use block_dag::BlockRecord;

#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct ViewOptions {
    pub hide_ballots: bool,
    pub hide_labels: bool,
}

impl ViewOptions {
    pub fn visible_records<R: BlockRecord>(self, records: &[R]) -> impl Iterator<Item = &R> {
        records
            .iter()
            .filter(move |record| !self.hide_ballots || record.is_block())
    }
}

#[cfg(test)]
mod tests {
    use block_dag::{MessageType, RawBlockRecord};
    use test_case::test_case;

    use super::*;

    fn records() -> Vec<RawBlockRecord> {
        [
            ("a", MessageType::Block),
            ("b", MessageType::Ballot),
            ("c", MessageType::Block),
        ]
        .into_iter()
        .map(|(hash, message_type)| RawBlockRecord {
            hash: hash.to_owned(),
            validator: "v1".to_owned(),
            message_type,
            ..RawBlockRecord::default()
        })
        .collect()
    }

    #[test_case(false, &["a", "b", "c"]; "ballots shown")]
    #[test_case(true, &["a", "c"]; "ballots hidden")]
    fn visible_records_filters_ballots(hide_ballots: bool, expected: &[&str]) {
        let options = ViewOptions {
            hide_ballots,
            ..ViewOptions::default()
        };

        let records = records();
        let visible = options
            .visible_records(&records)
            .map(|record| record.hash.as_str())
            .collect::<Vec<_>>();

        assert_eq!(visible, expected);
    }
}
