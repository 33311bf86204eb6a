use crate::set_membership::SetMembership;

/// Scans the keys in insertion order.
#[derive(Debug, Clone)]
pub struct LinearScan {
    keys: Vec<String>,
}

impl LinearScan {
    pub fn new<K: AsRef<str>>(keys: &[K]) -> Self {
        Self {
            keys: keys.iter().map(|key| key.as_ref().to_owned()).collect(),
        }
    }

    /// Index of the first occurrence of `target`.
    pub fn search(&self, target: &str) -> Option<usize> {
        self.keys.iter().position(|key| key == target)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl SetMembership<str> for LinearScan {
    fn contains(&self, item: &str) -> bool {
        self.search(item).is_some()
    }
}
