use crate::set_membership::SetMembership;
use std::collections::HashMap;

/// Hash table from key to the index of its first occurrence.
#[derive(Debug, Clone, Default)]
pub struct HashIndex {
    index: HashMap<String, usize>,
}

impl HashIndex {
    pub fn new<K: AsRef<str>>(keys: &[K]) -> Self {
        let mut index = HashMap::with_capacity(keys.len());
        for (i, key) in keys.iter().enumerate() {
            index.entry(key.as_ref().to_owned()).or_insert(i);
        }
        Self { index }
    }

    pub fn search(&self, target: &str) -> Option<usize> {
        self.index.get(target).copied()
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

impl SetMembership<str> for HashIndex {
    fn contains(&self, item: &str) -> bool {
        self.index.contains_key(item)
    }
}
