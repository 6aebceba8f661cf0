use std::collections::{BTreeMap, BTreeSet, VecDeque};

/// A weighted graph over ordered vertices.
///
/// # Invariants
/// - every vertex appearing as a neighbour is itself a key of `adjacency`
/// - in an undirected graph `adjacency[a][b]` exists iff `adjacency[b][a]` does,
///   with the same weight
///
/// Neighbours are visited in ascending vertex order, so every traversal is
/// deterministic.
///
/// # Examples
///
/// ```
/// use classics::graph::Graph;
///
/// let mut graph: Graph<u32> = Graph::undirected();
/// graph.add_edge(1, 2, 1);
/// graph.add_edge(2, 3, 1);
/// assert_eq!(graph.bfs(&1), vec![&1, &2, &3]);
/// assert!(graph.is_connected());
/// ```
#[derive(Debug, Clone)]
pub struct Graph<V, W = i64> {
    adjacency: BTreeMap<V, BTreeMap<V, W>>,
    directed: bool,
}

impl<V: Ord + Clone, W: Clone> Graph<V, W> {
    pub fn directed() -> Self {
        Graph {
            adjacency: BTreeMap::new(),
            directed: true,
        }
    }

    pub fn undirected() -> Self {
        Graph {
            adjacency: BTreeMap::new(),
            directed: false,
        }
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// # Returns
    /// `true` if the vertex was not present yet
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.adjacency.contains_key(&vertex) {
            return false;
        }
        self.adjacency.insert(vertex, BTreeMap::new());
        true
    }

    /// Adds (or reweights) the edge `from -> to`, creating missing endpoints.
    /// An undirected graph also gets the reverse edge.
    pub fn add_edge(&mut self, from: V, to: V, weight: W) {
        self.add_vertex(to.clone());
        if !self.directed {
            self.adjacency
                .entry(to.clone())
                .or_default()
                .insert(from.clone(), weight.clone());
        }
        self.adjacency.entry(from).or_default().insert(to, weight);
    }

    /// Removes `vertex` together with every edge touching it.
    pub fn remove_vertex(&mut self, vertex: &V) -> bool {
        if self.adjacency.remove(vertex).is_none() {
            return false;
        }
        for targets in self.adjacency.values_mut() {
            targets.remove(vertex);
        }
        true
    }

    pub fn remove_edge(&mut self, from: &V, to: &V) -> bool {
        let removed = self
            .adjacency
            .get_mut(from)
            .is_some_and(|targets| targets.remove(to).is_some());
        if removed && !self.directed {
            if let Some(targets) = self.adjacency.get_mut(to) {
                targets.remove(from);
            }
        }
        removed
    }

    pub fn has_edge(&self, from: &V, to: &V) -> bool {
        self.adjacency
            .get(from)
            .is_some_and(|targets| targets.contains_key(to))
    }

    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Outgoing neighbours of `vertex` with edge weights; empty for an unknown vertex.
    pub fn neighbors<'a>(&'a self, vertex: &V) -> impl Iterator<Item = (&'a V, &'a W)> + use<'a, V, W> {
        self.adjacency.get(vertex).into_iter().flatten()
    }

    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.adjacency.keys()
    }

    /// Every edge as `(from, to, weight)`. An undirected edge is listed once,
    /// with `from <= to`.
    pub fn edges(&self) -> Vec<(&V, &V, &W)> {
        self.adjacency
            .iter()
            .flat_map(|(from, targets)| targets.iter().map(move |(to, weight)| (from, to, weight)))
            .filter(|(from, to, _)| self.directed || from <= to)
            .collect()
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges().len()
    }

    /// Breadth-first order of the vertices reachable from `start`.
    pub fn bfs(&self, start: &V) -> Vec<&V> {
        let Some((start, _)) = self.adjacency.get_key_value(start) else {
            return Vec::new();
        };
        let mut visited = BTreeSet::from([start]);
        let mut queue = VecDeque::from([start]);
        let mut order = Vec::new();

        while let Some(vertex) = queue.pop_front() {
            order.push(vertex);
            for (neighbor, _) in self.neighbors(vertex) {
                if visited.insert(neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }
        order
    }

    /// Depth-first preorder of the vertices reachable from `start`, in the order a
    /// recursive walk over ascending neighbours would produce.
    pub fn dfs(&self, start: &V) -> Vec<&V> {
        let Some((start, _)) = self.adjacency.get_key_value(start) else {
            return Vec::new();
        };
        let mut visited = BTreeSet::new();
        let mut stack = vec![start];
        let mut order = Vec::new();

        while let Some(vertex) = stack.pop() {
            if !visited.insert(vertex) {
                continue;
            }
            order.push(vertex);
            // reversed so that the smallest neighbour is popped first
            if let Some(targets) = self.adjacency.get(vertex) {
                stack.extend(targets.keys().rev().filter(|n| !visited.contains(n)));
            }
        }
        order
    }

    /// Neighbour sets with edge direction ignored.
    fn undirected_view(&self) -> BTreeMap<&V, BTreeSet<&V>> {
        let mut view: BTreeMap<&V, BTreeSet<&V>> =
            self.adjacency.keys().map(|v| (v, BTreeSet::new())).collect();
        for (from, targets) in &self.adjacency {
            for to in targets.keys() {
                view.entry(from).or_default().insert(to);
                view.entry(to).or_default().insert(from);
            }
        }
        view
    }

    /// Groups of mutually reachable vertices, ignoring edge direction.
    ///
    /// Each component is sorted and components are ordered by their smallest vertex.
    pub fn connected_components(&self) -> Vec<Vec<&V>> {
        let view = self.undirected_view();
        let mut seen = BTreeSet::new();
        let mut components = Vec::new();

        for &root in view.keys() {
            if !seen.insert(root) {
                continue;
            }
            let mut component = Vec::new();
            let mut stack = vec![root];
            while let Some(vertex) = stack.pop() {
                component.push(vertex);
                for &neighbor in view.get(vertex).into_iter().flatten() {
                    if seen.insert(neighbor) {
                        stack.push(neighbor);
                    }
                }
            }
            component.sort();
            components.push(component);
        }
        components
    }

    /// Whether a single component holds every vertex; a directed graph is checked
    /// for weak connectivity. The empty graph is connected.
    pub fn is_connected(&self) -> bool {
        self.connected_components().len() <= 1
    }

    pub fn clear(&mut self) {
        self.adjacency.clear();
    }
}

impl<V: Ord + Clone, W: Clone> Default for Graph<V, W> {
    fn default() -> Self {
        Self::undirected()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 1 - 2 - 3
    // |  /    |
    // 4 ------+
    fn square_with_diagonal() -> Graph<u32> {
        let mut graph = Graph::undirected();
        for (a, b) in [(1, 2), (2, 3), (3, 4), (4, 1), (2, 4)] {
            graph.add_edge(a, b, 1);
        }
        graph
    }

    #[test]
    fn vertices_and_edges() {
        let graph = square_with_diagonal();
        assert_eq!(graph.vertices().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        assert_eq!(
            graph.edges(),
            vec![
                (&1, &2, &1),
                (&1, &4, &1),
                (&2, &3, &1),
                (&2, &4, &1),
                (&3, &4, &1)
            ]
        );
        assert_eq!(graph.edge_count(), 5);
        assert!(graph.has_edge(&1, &2));
        assert!(graph.has_edge(&2, &1));
        assert!(!graph.has_edge(&1, &3));
    }

    #[test]
    fn neighbors_are_ascending() {
        let graph = square_with_diagonal();
        let neighbors: Vec<_> = graph.neighbors(&2).map(|(v, _)| *v).collect();
        assert_eq!(neighbors, vec![1, 3, 4]);
        assert_eq!(graph.neighbors(&99).count(), 0);
    }

    #[test]
    fn traversal_orders() {
        let graph = square_with_diagonal();
        assert_eq!(graph.bfs(&1), vec![&1, &2, &4, &3]);
        assert_eq!(graph.dfs(&1), vec![&1, &2, &3, &4]);
        assert!(graph.bfs(&42).is_empty());
        assert!(graph.dfs(&42).is_empty());
    }

    #[test]
    fn dfs_matches_recursive_walk() {
        fn recursive<'a>(graph: &'a Graph<u32>, vertex: &'a u32, seen: &mut Vec<&'a u32>) {
            seen.push(vertex);
            for (neighbor, _) in graph.neighbors(vertex) {
                if !seen.contains(&neighbor) {
                    recursive(graph, neighbor, seen);
                }
            }
        }

        let mut graph = Graph::undirected();
        for (a, b) in [(0, 5), (0, 2), (2, 7), (5, 7), (7, 1), (1, 3), (3, 6), (6, 0), (4, 4)] {
            graph.add_edge(a, b, 0);
        }
        let mut expected = Vec::new();
        recursive(&graph, &0, &mut expected);
        assert_eq!(graph.dfs(&0), expected);
    }

    #[test]
    fn removing_edges_and_vertices() {
        let mut graph = square_with_diagonal();
        assert!(graph.remove_edge(&2, &4));
        assert!(!graph.has_edge(&4, &2));
        assert!(!graph.remove_edge(&2, &4));
        assert_eq!(graph.edge_count(), 4);

        assert!(graph.remove_vertex(&3));
        assert!(!graph.remove_vertex(&3));
        assert_eq!(graph.vertices().copied().collect::<Vec<_>>(), vec![1, 2, 4]);
        assert_eq!(graph.edges(), vec![(&1, &2, &1), (&1, &4, &1)]);
    }

    #[test]
    fn directed_edges_are_one_way() {
        let mut graph: Graph<&str, f64> = Graph::directed();
        graph.add_edge("a", "b", 2.5);
        graph.add_edge("b", "c", 1.0);
        assert!(graph.has_edge(&"a", &"b"));
        assert!(!graph.has_edge(&"b", &"a"));
        assert_eq!(graph.bfs(&"c"), vec![&"c"]);
        assert_eq!(graph.edge_count(), 2);
        // weakly connected
        assert!(graph.is_connected());
    }

    #[test]
    fn components_and_connectivity() {
        let mut graph: Graph<u32> = Graph::undirected();
        assert!(graph.is_connected());
        assert!(graph.connected_components().is_empty());

        graph.add_edge(1, 2, 1);
        graph.add_edge(5, 6, 1);
        graph.add_vertex(9);
        assert!(!graph.is_connected());
        assert_eq!(
            graph.connected_components(),
            vec![vec![&1, &2], vec![&5, &6], vec![&9]]
        );
    }

    #[test]
    fn undirected_self_loop_listed_once() {
        let mut graph: Graph<u32> = Graph::undirected();
        graph.add_edge(3, 3, 7);
        assert_eq!(graph.edges(), vec![(&3, &3, &7)]);
        assert_eq!(graph.vertex_count(), 1);
    }

    #[test]
    fn reweighting_replaces_weight() {
        let mut graph: Graph<u32> = Graph::undirected();
        graph.add_edge(1, 2, 5);
        graph.add_edge(2, 1, 9);
        assert_eq!(graph.edges(), vec![(&1, &2, &9)]);
    }

    #[test]
    fn clear_removes_everything() {
        let mut graph = square_with_diagonal();
        graph.clear();
        assert_eq!(graph.vertex_count(), 0);
        assert!(graph.edges().is_empty());
        assert!(graph.add_vertex(1));
    }
}
