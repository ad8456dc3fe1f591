use crate::AdjacencyList;
use hashbrown::HashSet;
use log::debug;
use std::collections::VecDeque;
use std::hash::Hash;

/// Visits every Node reachable from `start` in [breadth-first](https://en.wikipedia.org/wiki/Breadth-first_search)
/// order.
///
/// Shares the adjacency-list input convention of [`a_star_search`](crate::a_star_search),
/// minus the Edge weights: every Node maps to the list of its direct neighbors. Nodes the
/// Graph never mentions are still visited, they just have no neighbors of their own.
///
/// ## Examples
/// Basic usage:
/// ```
/// use graph_search::{breadth_first_search, AdjacencyList};
///
/// let graph: AdjacencyList<u32> = [
///     (1, vec![2, 3]),
///     (2, vec![1, 4]),
///     (3, vec![1, 4]),
///     (4, vec![2, 3]),
/// ]
/// .into_iter()
/// .collect();
///
/// assert_eq!(breadth_first_search(&graph, 1), vec![1, 2, 3, 4]);
/// ```
///
/// ## Returns
/// the visited Nodes in visitation order, starting with `start`. Every reachable Node
/// appears exactly once.
pub fn breadth_first_search<Id: Clone + Eq + Hash>(
    graph: &AdjacencyList<Id>,
    start: Id,
) -> Vec<Id> {
    let mut order = Vec::new();
    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();

    visited.insert(start.clone());
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if let Some(neighbors) = graph.get(&current) {
            for neighbor in neighbors {
                // mark on enqueue, so a Node never enters the queue twice
                if visited.insert(neighbor.clone()) {
                    queue.push_back(neighbor.clone());
                }
            }
        }
        order.push(current);
    }

    debug!("breadth_first_search: visited {} nodes", order.len());
    order
}

/// Visits every Node reachable from `start` in [depth-first](https://en.wikipedia.org/wiki/Depth-first_search)
/// preorder.
///
/// Neighbors are descended into in adjacency-list order, so the result is deterministic
/// for a given Graph. Like [`breadth_first_search`], Nodes missing from the map are
/// visitable leaves.
///
/// ## Examples
/// Basic usage:
/// ```
/// use graph_search::{depth_first_search, AdjacencyList};
///
/// let graph: AdjacencyList<u32> = [
///     (1, vec![2, 3]),
///     (2, vec![1, 4]),
///     (3, vec![1, 4]),
///     (4, vec![2, 3]),
/// ]
/// .into_iter()
/// .collect();
///
/// assert_eq!(depth_first_search(&graph, 1), vec![1, 2, 4, 3]);
/// ```
///
/// ## Returns
/// the visited Nodes in visitation order, starting with `start`. Every reachable Node
/// appears exactly once.
pub fn depth_first_search<Id: Clone + Eq + Hash>(graph: &AdjacencyList<Id>, start: Id) -> Vec<Id> {
    let mut order = Vec::new();
    let mut visited = HashSet::new();
    let mut stack = vec![start];

    // explicit stack instead of recursion; pushing neighbors in reverse and
    // re-checking `visited` at pop time reproduces the recursive preorder
    while let Some(current) = stack.pop() {
        if !visited.insert(current.clone()) {
            continue;
        }
        if let Some(neighbors) = graph.get(&current) {
            for neighbor in neighbors.iter().rev() {
                if !visited.contains(neighbor) {
                    stack.push(neighbor.clone());
                }
            }
        }
        order.push(current);
    }

    debug!("depth_first_search: visited {} nodes", order.len());
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diamond() -> AdjacencyList<u32> {
        // 1 -> {2, 3}, 2 -> 4, 3 -> 4
        [
            (1, vec![2, 3]),
            (2, vec![4]),
            (3, vec![4]),
            (4, vec![]),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn bfs_order() {
        assert_eq!(breadth_first_search(&diamond(), 1), vec![1, 2, 3, 4]);
    }

    #[test]
    fn dfs_order() {
        assert_eq!(depth_first_search(&diamond(), 1), vec![1, 2, 4, 3]);
    }

    #[test]
    fn bfs_isolated_start() {
        let graph = diamond();

        assert_eq!(breadth_first_search(&graph, 99), vec![99]);
    }

    #[test]
    fn dfs_isolated_start() {
        let graph = diamond();

        assert_eq!(depth_first_search(&graph, 99), vec![99]);
    }

    #[test]
    fn cycle_terminates() {
        let graph: AdjacencyList<u32> = [(1, vec![2]), (2, vec![3]), (3, vec![1])]
            .into_iter()
            .collect();

        assert_eq!(breadth_first_search(&graph, 1), vec![1, 2, 3]);
        assert_eq!(depth_first_search(&graph, 1), vec![1, 2, 3]);
    }

    #[test]
    fn dfs_goes_deep_first() {
        let graph: AdjacencyList<u32> = [
            (1, vec![2, 5]),
            (2, vec![3]),
            (3, vec![4]),
            (4, vec![]),
            (5, vec![6]),
            (6, vec![]),
        ]
        .into_iter()
        .collect();

        assert_eq!(depth_first_search(&graph, 1), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(breadth_first_search(&graph, 1), vec![1, 2, 5, 3, 6, 4]);
    }
}
