use std::{collections::VecDeque, hash::Hash};

use hashbrown::{HashMap, HashSet};

/// Directed adjacency list answering reachability queries.
///
/// Edges are kept in insertion order, which fixes the traversal order of
/// both searches.
#[derive(Debug, Clone)]
pub struct AdjacencyList<V> {
    edges: HashMap<V, Vec<V>>,
}

impl<V: Hash + Eq + Clone> AdjacencyList<V> {
    pub fn new() -> Self {
        AdjacencyList {
            edges: HashMap::new(),
        }
    }

    pub fn add_edge(&mut self, from: V, to: V) {
        self.edges.entry(from).or_default().push(to);
    }

    fn successors(&self, vertex: &V) -> &[V] {
        self.edges.get(vertex).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Breadth-first reachability of `target` from `start`.
    pub fn bfs(&self, start: &V, target: &V) -> bool {
        let mut visited: HashSet<&V> = [start].into_iter().collect();
        let mut queue = VecDeque::from([start]);
        while let Some(vertex) = queue.pop_front() {
            if vertex == target {
                return true;
            }
            for next in self.successors(vertex) {
                if visited.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        false
    }

    /// Depth-first reachability of `target` from `start`, with an explicit stack.
    pub fn dfs(&self, start: &V, target: &V) -> bool {
        let mut visited = HashSet::new();
        let mut stack = vec![start];
        while let Some(vertex) = stack.pop() {
            if !visited.insert(vertex) {
                continue;
            }
            if vertex == target {
                return true;
            }
            stack.extend(self.successors(vertex).iter().rev());
        }
        false
    }

    /// Fewest-edges path from `start` to `target`, both ends included.
    pub fn shortest_path(&self, start: &V, target: &V) -> Option<Vec<V>> {
        let mut parents: HashMap<&V, &V> = HashMap::new();
        let mut visited: HashSet<&V> = [start].into_iter().collect();
        let mut queue = VecDeque::from([start]);

        while let Some(vertex) = queue.pop_front() {
            if vertex == target {
                let mut path = vec![vertex.clone()];
                let mut cursor = vertex;
                while let Some(&parent) = parents.get(cursor) {
                    path.push(parent.clone());
                    cursor = parent;
                }
                path.reverse();
                return Some(path);
            }
            for next in self.successors(vertex) {
                if visited.insert(next) {
                    parents.insert(next, vertex);
                    queue.push_back(next);
                }
            }
        }
        None
    }
}

impl<V: Hash + Eq + Clone> Default for AdjacencyList<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AdjacencyList<u32> {
        let mut graph = AdjacencyList::new();
        for (from, to) in [(0, 1), (0, 2), (1, 2), (2, 0), (2, 3), (3, 3)] {
            graph.add_edge(from, to);
        }
        graph
    }

    #[test]
    fn reachability_both_ways() {
        let graph = sample();
        assert!(graph.bfs(&2, &3));
        assert!(!graph.bfs(&3, &0));
        assert!(graph.dfs(&2, &3));
        assert!(!graph.dfs(&3, &0));
    }

    #[test]
    fn start_reaches_itself() {
        let graph = sample();
        assert!(graph.bfs(&7, &7));
        assert!(graph.dfs(&7, &7));
        assert!(!graph.bfs(&7, &0));
    }

    #[test]
    fn shortest_path_follows_fewest_edges() {
        let graph = sample();
        assert_eq!(graph.shortest_path(&1, &3), Some(vec![1, 2, 3]));
        assert_eq!(graph.shortest_path(&0, &0), Some(vec![0]));
        assert_eq!(graph.shortest_path(&3, &1), None);
    }

    #[test]
    fn long_chain_does_not_overflow_stack() {
        let mut graph = AdjacencyList::new();
        for i in 0..100_000u32 {
            graph.add_edge(i, i + 1);
        }
        assert!(graph.dfs(&0, &100_000));
        assert_eq!(graph.shortest_path(&99_998, &100_000).map(|p| p.len()), Some(3));
    }
}
