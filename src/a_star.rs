use crate::{Cost, Graph, PriorityQueue, SearchConfig};
use hashbrown::HashMap;
use log::{debug, trace};
use std::hash::Hash;

/// Searches a Graph using the [A* Algorithm](https://en.wikipedia.org/wiki/A*_search_algorithm).
///
/// The generic type parameter `Id` is supposed to uniquely identify a Node in the Graph.
/// This may be a number, string, a grid position, ... as long as it can be compared, hashed
/// and cloned. Note that it is advised to choose a cheap-to-clone representation for the Id,
/// since it will be cloned several times.
///
/// ## Examples
/// Basic usage:
/// ```
/// use graph_search::{a_star_search, Graph};
///
/// //       3       5       7
/// //   2 ----- 4 ----- 6 ----- 8
/// //  1|
/// //   1
/// //  2|   4       6
/// //   3 ----- 5 ----- 7
/// let graph: Graph<i32> = [
///     (1, vec![(2, 1), (3, 2)]),
///     (2, vec![(1, 1), (4, 3)]),
///     (3, vec![(1, 2), (5, 4)]),
///     (4, vec![(2, 3), (6, 5)]),
///     (5, vec![(3, 4), (7, 6)]),
///     (6, vec![(4, 5), (8, 7)]),
///     (7, vec![(5, 6)]),
///     (8, vec![(6, 7)]),
/// ]
/// .into_iter()
/// .collect();
///
/// let path = a_star_search(&graph, 1, 7, |node, goal| node.abs_diff(*goal) as usize);
///
/// assert_eq!(path, vec![1, 3, 5, 7]);
/// ```
///
/// If the Goal cannot be reached, the returned Path is empty:
/// ```
/// # use graph_search::{a_star_search, Graph};
/// # let graph: Graph<i32> = [
/// #     (1, vec![(2, 1), (3, 2)]),
/// #     (2, vec![(1, 1), (4, 3)]),
/// #     (3, vec![(1, 2), (5, 4)]),
/// #     (4, vec![(2, 3), (6, 5)]),
/// #     (5, vec![(3, 4), (7, 6)]),
/// #     (6, vec![(4, 5), (8, 7)]),
/// #     (7, vec![(5, 6)]),
/// #     (8, vec![(6, 7)]),
/// # ]
/// # .into_iter()
/// # .collect();
/// let path = a_star_search(&graph, 1, 9, |node, goal| node.abs_diff(*goal) as usize);
///
/// assert!(path.is_empty());
/// ```
///
/// ## Arguments
/// - `graph` - the adjacency map to search. Nodes missing from the map have no outgoing
///   Edges; a `start` or `goal` that the Graph never mentions simply leads to an empty Path
/// - `start` - the starting Node
/// - `goal` - the Goal that this function is supposed to search for
/// - `heuristic` - an estimate of the remaining Cost from a Node to the Goal. It must never
///   overestimate the true remaining Cost ("admissible"), or the returned Path may not be
///   the cheapest one. This is a caller contract and is not verified here
///
/// ## Returns
/// the sequence of Nodes from `start` to `goal` inclusive, or an empty `Vec` if the Goal is
/// unreachable. `start == goal` also returns an empty `Vec` ("already there"); callers that
/// need to tell the two apart compare `start` and `goal` themselves.
pub fn a_star_search<Id: Clone + Eq + Hash>(
    graph: &Graph<Id>,
    start: Id,
    goal: Id,
    heuristic: impl Fn(&Id, &Id) -> Cost,
) -> Vec<Id> {
    a_star_search_with_config(graph, start, goal, heuristic, SearchConfig::default())
}

/// Searches a Graph using the A* Algorithm, bounded by a [`SearchConfig`].
///
/// Behaves exactly like [`a_star_search`], except that the search gives up and returns an
/// empty Path once the configured expansion budget is spent. [`a_star_search`] is this
/// function with the default (unbounded) config.
///
/// ## Examples
/// Basic usage:
/// ```
/// use graph_search::{a_star_search_with_config, Graph, SearchConfig};
///
/// let graph: Graph<i32> = [
///     (1, vec![(2, 1), (3, 2)]),
///     (2, vec![(1, 1), (4, 3)]),
///     (3, vec![(1, 2), (5, 4)]),
///     (4, vec![(2, 3), (6, 5)]),
///     (5, vec![(3, 4), (7, 6)]),
///     (6, vec![(4, 5), (8, 7)]),
///     (7, vec![(5, 6)]),
///     (8, vec![(6, 7)]),
/// ]
/// .into_iter()
/// .collect();
///
/// let heuristic = |node: &i32, goal: &i32| node.abs_diff(*goal) as usize;
///
/// // one expansion is not enough to reach 7
/// let path = a_star_search_with_config(
///     &graph,
///     1,
///     7,
///     heuristic,
///     SearchConfig::with_max_expansions(1),
/// );
/// assert!(path.is_empty());
///
/// let path = a_star_search_with_config(&graph, 1, 7, heuristic, SearchConfig::UNBOUNDED);
/// assert_eq!(path, vec![1, 3, 5, 7]);
/// ```
pub fn a_star_search_with_config<Id: Clone + Eq + Hash>(
    graph: &Graph<Id>,
    start: Id,
    goal: Id,
    heuristic: impl Fn(&Id, &Id) -> Cost,
    config: SearchConfig,
) -> Vec<Id> {
    if start == goal {
        return Vec::new();
    }

    // All search state lives in this call; the Graph itself is never touched mutably.
    let mut g_score: HashMap<Id, Cost> = HashMap::new();
    let mut came_from: HashMap<Id, Id> = HashMap::new();
    let mut frontier = PriorityQueue::new();

    g_score.insert(start.clone(), 0);
    frontier.enqueue((start.clone(), 0), heuristic(&start, &start));

    let mut expanded: usize = 0;

    while let Ok(((current, cost_at_enqueue), _)) = frontier.dequeue() {
        if current == goal {
            let path = reconstruct_path(&came_from, current);
            debug!(
                "a_star_search: goal found, {} steps, {} nodes expanded",
                path.len(),
                expanded
            );
            return path;
        }

        // stale entry: this Node was relaxed again after it was enqueued, and
        // its fresher, cheaper entry has already been dequeued and expanded
        if cost_at_enqueue > g_score[&current] {
            continue;
        }

        if let Some(max) = config.max_expansions {
            if expanded >= max {
                debug!("a_star_search: expansion budget of {} exhausted", max);
                return Vec::new();
            }
        }
        expanded += 1;

        // Nodes the Graph never mentions have no outgoing Edges.
        let Some(edges) = graph.get(&current) else {
            continue;
        };
        trace!("expanding node #{} at g = {}", expanded, cost_at_enqueue);

        for (neighbor, edge_cost) in edges {
            // saturating: a Cost near the MAX sentinel must not wrap below real scores
            let tentative = cost_at_enqueue.saturating_add(*edge_cost);
            let previous = g_score.get(neighbor).copied().unwrap_or(Cost::MAX);
            if tentative >= previous {
                continue;
            }

            came_from.insert(neighbor.clone(), current.clone());
            g_score.insert(neighbor.clone(), tentative);
            let estimate = tentative.saturating_add(heuristic(neighbor, &goal));

            // every improvement gets its own frontier entry, so the minimum
            // estimate is always live; entries made stale by a later
            // improvement are skipped when they surface
            frontier.enqueue((neighbor.clone(), tentative), estimate);
        }
    }

    debug!(
        "a_star_search: frontier exhausted after {} expansions, goal unreachable",
        expanded
    );
    Vec::new()
}

fn reconstruct_path<Id: Clone + Eq + Hash>(came_from: &HashMap<Id, Id>, goal: Id) -> Vec<Id> {
    let mut path = vec![goal.clone()];
    let mut current = goal;

    while let Some(previous) = came_from.get(&current) {
        path.push(previous.clone());
        current = previous.clone();
    }
    path.reverse();
    path
}
