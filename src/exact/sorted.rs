use crate::set_membership::SetMembership;

/// Binary search over a sorted copy of the keys.
#[derive(Debug, Clone)]
pub struct SortedArray {
    keys: Vec<String>,
}

impl SortedArray {
    pub fn new<K: AsRef<str>>(keys: &[K]) -> Self {
        let mut keys = keys
            .iter()
            .map(|key| key.as_ref().to_owned())
            .collect::<Vec<_>>();
        keys.sort_unstable();
        Self { keys }
    }

    /// Index of `target` in the sorted order. With duplicates, any of their
    /// indices may be returned.
    pub fn search(&self, target: &str) -> Option<usize> {
        self.keys
            .binary_search_by(|key| key.as_str().cmp(target))
            .ok()
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl SetMembership<str> for SortedArray {
    fn contains(&self, item: &str) -> bool {
        self.search(item).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_copy() {
        let sorted = SortedArray::new(&["cam", "ann", "bob"]);

        assert_eq!(sorted.keys(), ["ann", "bob", "cam"]);
    }

    #[test]
    fn test_search() {
        let sorted = SortedArray::new(&["cam", "ann", "bob"]);

        assert_eq!(sorted.search("ann"), Some(0));
        assert_eq!(sorted.search("bob"), Some(1));
        assert_eq!(sorted.search("cam"), Some(2));
        assert_eq!(sorted.search("aaa"), None);
        assert_eq!(sorted.search("zoe"), None);
    }

    #[test]
    fn test_empty() {
        let sorted = SortedArray::new::<String>(&[]);

        assert!(sorted.is_empty());
        assert_eq!(sorted.search(""), None);
    }
}
