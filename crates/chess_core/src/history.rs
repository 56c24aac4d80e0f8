/// Fingerprints of every position reached in a game, oldest first.
///
/// The current position's fingerprint is the last entry, so a position seen
/// for the third time has `occurrences(fp) == 3`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PositionHistory {
    fingerprints: Vec<u64>,
}

impl PositionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// A history holding just the starting fingerprint.
    pub fn starting_at(fingerprint: u64) -> Self {
        PositionHistory {
            fingerprints: vec![fingerprint],
        }
    }

    pub fn push(&mut self, fingerprint: u64) {
        self.fingerprints.push(fingerprint);
    }

    pub fn pop(&mut self) -> Option<u64> {
        self.fingerprints.pop()
    }

    pub fn len(&self) -> usize {
        self.fingerprints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fingerprints.is_empty()
    }

    pub fn last(&self) -> Option<u64> {
        self.fingerprints.last().copied()
    }

    pub fn occurrences(&self, fingerprint: u64) -> usize {
        self.fingerprints
            .iter()
            .filter(|&&fp| fp == fingerprint)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_and_count() {
        let mut history = PositionHistory::starting_at(7);
        history.push(9);
        history.push(7);
        assert_eq!(history.len(), 3);
        assert_eq!(history.occurrences(7), 2);
        assert_eq!(history.occurrences(9), 1);
        assert_eq!(history.last(), Some(7));

        assert_eq!(history.pop(), Some(7));
        assert_eq!(history.occurrences(7), 1);
        assert_eq!(history.last(), Some(9));
    }

    #[test]
    fn test_empty() {
        let mut history = PositionHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.pop(), None);
        assert_eq!(history.occurrences(0), 0);
    }
}
