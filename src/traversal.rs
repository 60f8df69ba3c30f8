//! A module for computing breadth-first reachability layers.

use std::collections::VecDeque;

use serde::Serialize;

/// The outcome of a breadth-first search from a root airport.
///
/// The root sits in layer 1, its direct neighbours in layer 2 and so on. Airports outside the
/// root's connected component are never reached.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Reachability<T> {
    root: T,
    /// Reached airports with their layer, in visiting order.
    layers: Vec<(T, usize)>,
    max_layer: usize,
    unreached: usize,
}

impl<T> Reachability<T> {
    pub fn root(&self) -> &T {
        &self.root
    }

    /// Returns the number of rounds needed to reach every airport in the root's component, i.e.
    /// its eccentricity plus one.
    pub fn max_layer(&self) -> usize {
        self.max_layer
    }

    /// Returns the layer an airport was reached in, `None` if it wasn't reached.
    pub fn layer_of(&self, airport: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.layers
            .iter()
            .find(|(a, _)| a == airport)
            .map(|(_, layer)| *layer)
    }

    /// Iterates over the reached airports and their layer, in visiting order.
    pub fn layers(&self) -> impl Iterator<Item = (&T, usize)> {
        self.layers.iter().map(|(airport, layer)| (airport, *layer))
    }

    /// Returns the number of airports reached, root included.
    pub fn reached(&self) -> usize {
        self.layers.len()
    }

    /// Returns the number of airports in the graph that weren't reached.
    pub fn unreached(&self) -> usize {
        self.unreached
    }

    /// Returns whether every airport in the graph was reached.
    pub fn is_complete(&self) -> bool {
        self.unreached == 0
    }
}

/// Walks the graph breadth-first from `root` and records the layer of every reached node.
///
/// The queue is consumed strictly in insertion order, which already yields non-decreasing layers,
/// so it never needs re-sorting. A node's layer is fixed when it is first discovered.
pub(crate) fn bfs_layers(adjacency: &[Vec<usize>], root: usize) -> (Vec<(usize, usize)>, usize) {
    let mut discovered = vec![false; adjacency.len()];
    let mut queue: VecDeque<(usize, usize)> = VecDeque::new();
    let mut visited = Vec::new();
    let mut max_layer = 1;

    discovered[root] = true;
    queue.push_back((root, 1));

    while let Some((v, layer)) = queue.pop_front() {
        visited.push((v, layer));

        for &w in &adjacency[v] {
            if discovered[w] {
                continue;
            }

            discovered[w] = true;
            queue.push_back((w, layer + 1));
            max_layer = max_layer.max(layer + 1);
        }
    }

    (visited, max_layer)
}

/// Resolves the indexed search results back to airports.
pub(crate) fn reachability<T: Clone>(
    nodes: &[T],
    root: usize,
    adjacency: &[Vec<usize>],
) -> Reachability<T> {
    let (visited, max_layer) = bfs_layers(adjacency, root);

    Reachability {
        root: nodes[root].clone(),
        unreached: nodes.len() - visited.len(),
        layers: visited
            .into_iter()
            .map(|(i, layer)| (nodes[i].clone(), layer))
            .collect(),
        max_layer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn isolated_root() {
        let adjacency = vec![vec![]];

        assert_eq!(bfs_layers(&adjacency, 0), (vec![(0, 1)], 1));
    }

    #[test]
    fn path() {
        // 0 - 1 - 2
        let adjacency = vec![vec![1], vec![0, 2], vec![1]];

        assert_eq!(bfs_layers(&adjacency, 0), (vec![(0, 1), (1, 2), (2, 3)], 3));
        assert_eq!(bfs_layers(&adjacency, 1), (vec![(1, 1), (0, 2), (2, 2)], 2));
    }

    #[test]
    fn layers_are_never_reassigned() {
        // A triangle: 1 and 2 are both direct neighbours of 0, the 1 - 2 route must not push 2
        // into a third layer.
        let adjacency = vec![vec![1, 2], vec![0, 2], vec![0, 1]];

        let (visited, max_layer) = bfs_layers(&adjacency, 0);

        assert_eq!(visited, vec![(0, 1), (1, 2), (2, 2)]);
        assert_eq!(max_layer, 2);
    }

    #[test]
    fn disconnected_nodes_are_skipped() {
        // 0 - 1, 2 - 3
        let adjacency = vec![vec![1], vec![0], vec![3], vec![2]];

        let reachability = reachability(&["a", "b", "c", "d"], 0, &adjacency);

        assert_eq!(reachability.max_layer(), 2);
        assert_eq!(reachability.reached(), 2);
        assert_eq!(reachability.unreached(), 2);
        assert!(!reachability.is_complete());
        assert_eq!(reachability.layer_of(&"b"), Some(2));
        assert_eq!(reachability.layer_of(&"c"), None);
    }
}
