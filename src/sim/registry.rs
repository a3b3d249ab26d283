//! Resting positions and tag bindings recorded at scene start

use std::collections::{BTreeMap, HashMap};

use glam::Vec3;

use super::state::DecorationId;

/// Original resting position of every participating statue
#[derive(Debug, Clone, Default)]
pub struct StatuePositionRegistry {
    resting: BTreeMap<DecorationId, Vec3>,
}

impl StatuePositionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a resting position; returns false if `id` was already recorded
    pub fn record(&mut self, id: DecorationId, position: Vec3) -> bool {
        if self.resting.contains_key(&id) {
            return false;
        }
        self.resting.insert(id, position);
        true
    }

    pub fn resting_position(&self, id: DecorationId) -> Option<Vec3> {
        self.resting.get(&id).copied()
    }

    /// Iterate in id order
    pub fn iter(&self) -> impl Iterator<Item = (DecorationId, Vec3)> + '_ {
        self.resting.iter().map(|(id, pos)| (*id, *pos))
    }

    pub fn len(&self) -> usize {
        self.resting.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resting.is_empty()
    }
}

/// Fixed one-to-one mapping from collision tag to statue
#[derive(Debug, Clone, Default)]
pub struct TagBindings {
    by_tag: HashMap<String, DecorationId>,
}

impl TagBindings {
    /// Bind `tag`; returns false if the tag is already bound
    pub(crate) fn bind(&mut self, tag: &str, id: DecorationId) -> bool {
        if self.by_tag.contains_key(tag) {
            return false;
        }
        self.by_tag.insert(tag.to_string(), id);
        true
    }

    pub fn get(&self, tag: &str) -> Option<DecorationId> {
        self.by_tag.get(tag).copied()
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.by_tag.contains_key(tag)
    }

    pub fn len(&self) -> usize {
        self.by_tag.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_tag.is_empty()
    }
}

/// Output of a successful configuration check
#[derive(Debug, Clone, Default)]
pub struct SceneBindings {
    pub tags: TagBindings,
    pub registry: StatuePositionRegistry,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_records_once() {
        let mut reg = StatuePositionRegistry::new();
        assert!(reg.record(DecorationId(1), Vec3::ONE));
        assert!(!reg.record(DecorationId(1), Vec3::ZERO));
        assert_eq!(reg.resting_position(DecorationId(1)), Some(Vec3::ONE));
        assert_eq!(reg.resting_position(DecorationId(2)), None);
    }

    #[test]
    fn test_bindings_reject_duplicate_tag() {
        let mut tags = TagBindings::default();
        assert!(tags.bind("Fish", DecorationId(1)));
        assert!(!tags.bind("Fish", DecorationId(2)));
        assert_eq!(tags.get("Fish"), Some(DecorationId(1)));
        assert_eq!(tags.len(), 1);
    }
}
