//! Ordered tag sequence matching
//!
//! Progress only ever grows by an exact next-tag match and is only cleared by
//! an explicit reset.

use serde::{Deserialize, Serialize};

/// Result of feeding one tag to the matcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceOutcome {
    /// Tag extended progress; `matched` is the new progress length
    Advanced { matched: usize },
    /// Tag completed the whole sequence
    Completed,
    /// Tag breaks the order (progress left untouched)
    Violation,
    /// Sequence tag seen before any progress, out of order
    Ignored,
}

/// Tracks the ordered list of tags matched so far
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SequenceMatcher {
    required: Vec<String>,
    progress: Vec<String>,
}

impl SequenceMatcher {
    pub fn new(required: Vec<String>) -> Self {
        let capacity = required.len();
        Self {
            required,
            progress: Vec::with_capacity(capacity),
        }
    }

    /// Classify `tag` against the next expected step and record a match
    pub fn observe(&mut self, tag: &str) -> SequenceOutcome {
        let expected = self.required.get(self.progress.len());

        if expected.is_some_and(|next| next == tag) {
            self.progress.push(tag.to_string());
            if self.is_complete() {
                return SequenceOutcome::Completed;
            }
            return SequenceOutcome::Advanced {
                matched: self.progress.len(),
            };
        }

        let in_sequence = self.required.iter().any(|t| t == tag);
        if !in_sequence || !self.progress.is_empty() {
            return SequenceOutcome::Violation;
        }

        SequenceOutcome::Ignored
    }

    pub fn clear(&mut self) {
        self.progress.clear();
    }

    pub fn is_complete(&self) -> bool {
        !self.required.is_empty() && self.progress.len() == self.required.len()
    }

    pub fn progress(&self) -> &[String] {
        &self.progress
    }

    pub fn required(&self) -> &[String] {
        &self.required
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.required.iter().any(|t| t == tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn abc() -> SequenceMatcher {
        SequenceMatcher::new(vec!["A".into(), "B".into(), "C".into()])
    }

    #[test]
    fn test_in_order_completes() {
        let mut m = abc();
        assert_eq!(m.observe("A"), SequenceOutcome::Advanced { matched: 1 });
        assert_eq!(m.observe("B"), SequenceOutcome::Advanced { matched: 2 });
        assert_eq!(m.observe("C"), SequenceOutcome::Completed);
        assert!(m.is_complete());
    }

    #[test]
    fn test_wrong_order_is_violation_and_keeps_progress() {
        let mut m = abc();
        m.observe("A");
        assert_eq!(m.observe("C"), SequenceOutcome::Violation);
        assert_eq!(m.progress(), ["A".to_string()]);
        assert_eq!(m.observe("B"), SequenceOutcome::Advanced { matched: 2 });
        assert!(!m.is_complete());
    }

    #[test]
    fn test_out_of_order_before_progress_is_ignored() {
        let mut m = abc();
        assert_eq!(m.observe("B"), SequenceOutcome::Ignored);
        assert!(m.progress().is_empty());
    }

    #[test]
    fn test_foreign_tag_is_violation() {
        let mut m = abc();
        assert_eq!(m.observe("D"), SequenceOutcome::Violation);
        m.observe("A");
        assert_eq!(m.observe("D"), SequenceOutcome::Violation);
        assert_eq!(m.progress().len(), 1);
    }

    #[test]
    fn test_single_step_sequence() {
        let mut m = SequenceMatcher::new(vec!["Only".into()]);
        assert_eq!(m.observe("Only"), SequenceOutcome::Completed);
    }

    #[test]
    fn test_clear_restarts() {
        let mut m = abc();
        m.observe("A");
        m.observe("B");
        m.clear();
        assert!(m.progress().is_empty());
        assert_eq!(m.observe("A"), SequenceOutcome::Advanced { matched: 1 });
    }

    #[test]
    fn test_repeated_tag_in_sequence() {
        let mut m = SequenceMatcher::new(vec!["A".into(), "A".into()]);
        assert_eq!(m.observe("A"), SequenceOutcome::Advanced { matched: 1 });
        assert_eq!(m.observe("A"), SequenceOutcome::Completed);
    }

    proptest! {
        #[test]
        fn progress_is_always_a_prefix(tags in proptest::collection::vec(0u8..5, 0..40)) {
            let mut m = abc();
            for t in tags {
                let tag = ["A", "B", "C", "D", "E"][t as usize];
                if m.is_complete() {
                    break;
                }
                m.observe(tag);
                prop_assert!(m.progress().len() <= m.required().len());
                prop_assert_eq!(m.progress(), &m.required()[..m.progress().len()]);
            }
        }
    }
}
