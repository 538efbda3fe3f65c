use formsmith_types::FieldId;
use serde::{Deserialize, Serialize};

/// Source of fresh field identifiers for one session
pub trait IdGenerator {
    fn next_id(&mut self) -> FieldId;
}

/// Session counter: `field_1`, `field_2`, ...
///
/// Never hands out the same value twice, even after the field is removed.
#[derive(Debug, Default)]
pub struct SequentialIds {
    issued: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> FieldId {
        self.issued += 1;
        FieldId::new(format!("field_{}", self.issued))
    }
}

/// Random v4 uuids, hex encoded so the id stays a valid identifier
#[derive(Debug, Default)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&mut self) -> FieldId {
        FieldId::new(format!("field_{}", uuid::Uuid::new_v4().simple()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    #[default]
    Sequential,
    Random,
}

impl IdStrategy {
    pub fn generator(&self) -> Box<dyn IdGenerator> {
        match self {
            IdStrategy::Sequential => Box::new(SequentialIds::new()),
            IdStrategy::Random => Box::new(RandomIds),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sequential_ids() {
        let mut ids = SequentialIds::new();
        assert_eq!(ids.next_id().as_str(), "field_1");
        assert_eq!(ids.next_id().as_str(), "field_2");
    }

    #[test]
    fn test_random_ids_are_identifiers() {
        let mut ids = RandomIds;
        let mut seen = HashSet::new();
        for _ in 0..100 {
            let id = ids.next_id();
            assert!(id
                .as_str()
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_'));
            assert!(seen.insert(id));
        }
    }
}
