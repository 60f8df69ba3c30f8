//! A module for computing shortest-path betweenness centrality.

use std::collections::VecDeque;

/// Accumulates the dependencies of every node on shortest paths starting at `source`.
///
/// This is Ulrik Brandes's "Algorithm 1: Betweenness centrality in unweighted graphs" from
/// A Faster Algorithm for Betweenness Centrality,
/// http://snap.stanford.edu/class/cs224w-readings/brandes01centrality.pdf
fn betweenness_for_node(source: usize, adjacency: &[Vec<usize>], betweenness: &mut [f64]) {
    let num_nodes = adjacency.len();

    // Number of shortest paths from the source to each node.
    let mut sigma: Vec<f64> = vec![0.0; num_nodes];
    let mut distance: Vec<Option<usize>> = vec![None; num_nodes];
    let mut predecessors: Vec<Vec<usize>> = vec![Vec::new(); num_nodes];
    let mut delta: Vec<f64> = vec![0.0; num_nodes];
    let mut queue: VecDeque<usize> = VecDeque::new();
    // Nodes in order of non-decreasing distance, popped farthest first.
    let mut stack: Vec<usize> = Vec::with_capacity(num_nodes);

    sigma[source] = 1.0;
    distance[source] = Some(0);
    queue.push_back(source);

    while let Some(v) = queue.pop_front() {
        stack.push(v);
        let next = distance[v].map(|d| d + 1);

        for &w in &adjacency[v] {
            if distance[w].is_none() {
                distance[w] = next;
                queue.push_back(w);
            }

            if distance[w] == next {
                sigma[w] += sigma[v];
                predecessors[w].push(v);
            }
        }
    }

    while let Some(w) = stack.pop() {
        for &v in &predecessors[w] {
            delta[v] += sigma[v] / sigma[w] * (1.0 + delta[w]);
        }

        if w != source {
            betweenness[w] += delta[w];
        }
    }
}

/// Computes the betweenness centrality of every node in an undirected graph given as adjacency
/// lists, indexed like the input.
///
/// Each unordered pair is visited from both ends, so raw sums are halved. When normalizing, scores
/// are instead divided by `(n - 1)(n - 2)`, which maps them onto `[0, 1]` for graphs of more than
/// two nodes; smaller graphs are left unscaled as every score is zero anyway.
pub(crate) fn compute_betweenness(adjacency: &[Vec<usize>], normalize: bool) -> Vec<f64> {
    let num_nodes = adjacency.len();
    let mut betweenness: Vec<f64> = vec![0.0; num_nodes];

    for source in 0..num_nodes {
        betweenness_for_node(source, adjacency, &mut betweenness);
    }

    let divisor = if normalize && num_nodes > 2 {
        ((num_nodes - 1) * (num_nodes - 2)) as f64
    } else {
        2.0
    };

    for score in &mut betweenness {
        *score /= divisor;
    }

    betweenness
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-9, "{actual:?} != {expected:?}");
        }
    }

    #[test]
    fn empty() {
        assert!(compute_betweenness(&[], true).is_empty());
    }

    #[test]
    fn line() {
        // 0 - 1 - 2 - 3
        let adjacency = vec![vec![1], vec![0, 2], vec![1, 3], vec![2]];

        assert_close(&compute_betweenness(&adjacency, false), &[0.0, 2.0, 2.0, 0.0]);
        assert_close(
            &compute_betweenness(&adjacency, true),
            &[0.0, 2.0 / 3.0, 2.0 / 3.0, 0.0],
        );
    }

    #[test]
    fn split_shortest_paths() {
        // A square: 0 - 1 - 2 - 3 - 0. Each node sits on one of the two shortest paths between
        // its neighbours.
        let adjacency = vec![vec![1, 3], vec![0, 2], vec![1, 3], vec![2, 0]];

        assert_close(&compute_betweenness(&adjacency, false), &[0.5, 0.5, 0.5, 0.5]);
    }

    #[test]
    fn star() {
        // Hub 0 with five leaves.
        let mut adjacency = vec![(1..=5).collect::<Vec<usize>>()];
        adjacency.extend((1..=5).map(|_| vec![0]));

        assert_close(
            &compute_betweenness(&adjacency, false),
            &[10.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        );
        assert_close(
            &compute_betweenness(&adjacency, true),
            &[1.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        );
    }

    #[test]
    fn disconnected() {
        // 0 - 1 - 2, 3 - 4
        let adjacency = vec![vec![1], vec![0, 2], vec![1], vec![4], vec![3]];

        assert_close(
            &compute_betweenness(&adjacency, false),
            &[0.0, 1.0, 0.0, 0.0, 0.0],
        );
    }
}
