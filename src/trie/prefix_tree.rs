use std::{collections::BTreeMap, str::Chars};

#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: BTreeMap<char, TrieNode>,
    /// Times the word spelled by the path to this node was inserted.
    count: usize,
}

impl TrieNode {
    fn is_prunable(&self) -> bool {
        self.count == 0 && self.children.is_empty()
    }

    fn collect(&self, buffer: &mut String, out: &mut Vec<String>) {
        if self.count > 0 {
            out.push(buffer.clone());
        }
        for (&c, child) in &self.children {
            buffer.push(c);
            child.collect(buffer, out);
            buffer.pop();
        }
    }

    /// Decrements the count of the word spelled by `rest` below this node and
    /// drops every node left without words.
    ///
    /// # Returns
    /// `None` if the word is absent, otherwise whether this node can be pruned
    fn remove(&mut self, mut rest: Chars<'_>) -> Option<bool> {
        match rest.next() {
            None => {
                if self.count == 0 {
                    return None;
                }
                self.count -= 1;
            }
            Some(c) => {
                let child = self.children.get_mut(&c)?;
                if child.remove(rest)? {
                    self.children.remove(&c);
                }
            }
        }
        Some(self.is_prunable())
    }
}

/// A trie counting how many times each word was inserted.
///
/// Every node other than the root lies on the path of at least one stored word:
/// deletion prunes the branches it empties.
///
/// # Examples
///
/// ```
/// use classics::trie::Trie;
///
/// let trie: Trie = ["help", "hello", "world"].into_iter().collect();
/// assert_eq!(trie.words_with_prefix("hel"), vec!["hello", "help"]);
/// assert!(!trie.search("hel"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Trie {
    root: TrieNode,
    len: usize,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    fn node(&self, prefix: &str) -> Option<&TrieNode> {
        prefix
            .chars()
            .try_fold(&self.root, |node, c| node.children.get(&c))
    }

    pub fn insert(&mut self, word: &str) {
        let mut node = &mut self.root;
        for c in word.chars() {
            node = node.children.entry(c).or_default();
        }
        if node.count == 0 {
            self.len += 1;
        }
        node.count += 1;
    }

    pub fn search(&self, word: &str) -> bool {
        self.count(word) > 0
    }

    /// Times `word` was inserted and not deleted since.
    pub fn count(&self, word: &str) -> usize {
        self.node(word).map_or(0, |node| node.count)
    }

    /// Whether any stored word begins with `prefix`.
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.node(prefix).is_some_and(|node| !node.is_prunable())
    }

    /// Distinct stored words beginning with `prefix`, in lexicographic order.
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        let mut out = Vec::new();
        if let Some(node) = self.node(prefix) {
            let mut buffer = prefix.to_string();
            node.collect(&mut buffer, &mut out);
        }
        out
    }

    pub fn words(&self) -> Vec<String> {
        self.words_with_prefix("")
    }

    /// Removes one occurrence of `word`.
    ///
    /// # Returns
    /// `false` if `word` was not stored
    pub fn delete(&mut self, word: &str) -> bool {
        let before = self.count(word);
        if before == 0 {
            return false;
        }
        // the root is never pruned
        let _ = self.root.remove(word.chars());
        if before == 1 {
            self.len -= 1;
        }
        true
    }

    /// Number of distinct stored words.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        *self = Trie::default();
    }
}

impl<'a> Extend<&'a str> for Trie {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word);
        }
    }
}

impl<'a> FromIterator<&'a str> for Trie {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Trie {
        ["hello", "help", "hell", "helicopter", "world"].into_iter().collect()
    }

    /// Nodes below the root, counted recursively.
    fn node_count(node: &TrieNode) -> usize {
        node.children.values().map(|child| 1 + node_count(child)).sum()
    }

    #[test]
    fn search_requires_whole_word() {
        let trie = sample();
        for word in ["hello", "help", "hell", "helicopter", "world"] {
            assert!(trie.search(word), "{word} missing");
        }
        assert!(!trie.search("helloo"));
        assert!(!trie.search("he"));
        assert_eq!(trie.len(), 5);
    }

    #[test]
    fn prefix_queries() {
        let trie = sample();
        assert!(trie.starts_with("hel"));
        assert!(trie.starts_with("wor"));
        assert!(!trie.starts_with("xyz"));
        assert_eq!(
            trie.words_with_prefix("hel"),
            vec!["helicopter", "hell", "hello", "help"]
        );
        assert!(trie.words_with_prefix("xyz").is_empty());
        assert_eq!(trie.words_with_prefix("world"), vec!["world"]);
    }

    #[test]
    fn empty_trie_has_no_prefixes() {
        let trie = Trie::new();
        assert!(!trie.starts_with(""));
        assert!(trie.words().is_empty());
        assert!(trie.is_empty());
    }

    #[test]
    fn delete_prunes_unused_branch() {
        let mut trie = sample();
        let nodes_before = node_count(&trie.root);

        assert!(trie.delete("help"));
        assert!(!trie.search("help"));
        assert!(trie.search("hell"));
        // only the trailing 'p' node is gone
        assert_eq!(node_count(&trie.root), nodes_before - 1);

        assert!(!trie.delete("help"));
        assert_eq!(trie.len(), 4);
    }

    #[test]
    fn delete_inner_word_keeps_longer_words() {
        let mut trie = sample();
        assert!(trie.delete("hell"));
        assert!(!trie.search("hell"));
        assert!(trie.search("hello"));
        assert!(trie.starts_with("hell"));
    }

    #[test]
    fn multiplicity_is_counted() {
        let mut trie = Trie::new();
        trie.insert("apple");
        trie.insert("apple");
        assert_eq!(trie.count("apple"), 2);
        assert_eq!(trie.len(), 1);

        assert!(trie.delete("apple"));
        assert!(trie.search("apple"));
        assert!(trie.delete("apple"));
        assert!(!trie.search("apple"));
        assert!(!trie.starts_with("a"));
        assert_eq!(node_count(&trie.root), 0);
    }

    #[test]
    fn empty_word_lives_at_root() {
        let mut trie = Trie::new();
        trie.insert("");
        assert!(trie.search(""));
        assert_eq!(trie.words(), vec![""]);
        assert!(trie.delete(""));
        assert!(trie.is_empty());
    }

    #[test]
    fn unicode_words() {
        let trie: Trie = ["über", "übel", "uber"].into_iter().collect();
        assert_eq!(trie.words_with_prefix("üb"), vec!["übel", "über"]);
    }

    #[test]
    fn clear_resets() {
        let mut trie = sample();
        trie.clear();
        assert!(trie.is_empty());
        assert!(!trie.search("hello"));
    }
}
