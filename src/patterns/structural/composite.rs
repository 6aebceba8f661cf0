//! Files and directories treated uniformly as [`Node`]s.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    File { name: String, size: u64 },
    Directory { name: String, children: Vec<Node> },
}

impl Node {
    pub fn file(name: impl Into<String>, size: u64) -> Self {
        Node::File {
            name: name.into(),
            size,
        }
    }

    pub fn directory(name: impl Into<String>) -> Self {
        Node::Directory {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Node::File { name, .. } | Node::Directory { name, .. } => name,
        }
    }

    /// Adds `child` to a directory.
    ///
    /// # Returns
    /// `false`, leaving `self` unchanged, if `self` is a file
    pub fn add(&mut self, child: Node) -> bool {
        match self {
            Node::File { .. } => false,
            Node::Directory { children, .. } => {
                children.push(child);
                true
            }
        }
    }

    /// Removes the first direct child called `name`.
    pub fn remove(&mut self, name: &str) -> Option<Node> {
        let Node::Directory { children, .. } = self else {
            return None;
        };
        let position = children.iter().position(|c| c.name() == name)?;
        Some(children.remove(position))
    }

    pub fn child(&self, index: usize) -> Option<&Node> {
        match self {
            Node::File { .. } => None,
            Node::Directory { children, .. } => children.get(index),
        }
    }

    /// Total size: a file's own, a directory's summed over its subtree.
    pub fn size(&self) -> u64 {
        match self {
            Node::File { size, .. } => *size,
            Node::Directory { children, .. } => children.iter().map(Node::size).sum(),
        }
    }

    pub fn file_count(&self) -> usize {
        match self {
            Node::File { .. } => 1,
            Node::Directory { children, .. } => children.iter().map(Node::file_count).sum(),
        }
    }

    /// Runs the operation over the whole subtree in preorder, one log line per node.
    pub fn operation(&self) -> Vec<String> {
        let mut log = Vec::new();
        self.operation_into(&mut log);
        log
    }

    fn operation_into(&self, log: &mut Vec<String>) {
        match self {
            Node::File { name, size } => log.push(format!("File: {name} ({size} bytes)")),
            Node::Directory { name, children } => {
                log.push(format!("Directory: {name}"));
                for child in children {
                    child.operation_into(log);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> Node {
        let mut src = Node::directory("src");
        src.add(Node::file("main.rs", 120));
        src.add(Node::file("lib.rs", 300));
        let mut root = Node::directory("project");
        root.add(src);
        root.add(Node::file("Cargo.toml", 80));
        root
    }

    #[test]
    fn sizes_roll_up() {
        let root = tree();
        assert_eq!(root.size(), 500);
        assert_eq!(root.file_count(), 3);
        assert_eq!(root.child(0).map(Node::size), Some(420));
    }

    #[test]
    fn operation_walks_preorder() {
        assert_eq!(
            tree().operation(),
            [
                "Directory: project",
                "Directory: src",
                "File: main.rs (120 bytes)",
                "File: lib.rs (300 bytes)",
                "File: Cargo.toml (80 bytes)",
            ]
        );
    }

    #[test]
    fn leaves_reject_children() {
        let mut file = Node::file("a", 1);
        assert!(!file.add(Node::file("b", 2)));
        assert_eq!(file.size(), 1);
        assert!(file.child(0).is_none());
        assert!(file.remove("b").is_none());
    }

    #[test]
    fn remove_by_name() {
        let mut root = tree();
        let removed = root.remove("src").unwrap();
        assert_eq!(removed.size(), 420);
        assert_eq!(root.size(), 80);
        assert!(root.remove("src").is_none());
    }
}
