#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

//! A crate for searching Paths on generic Graphs.
//!
//! ## Introduction
//! This crate provides the classic Graph search primitives over an adjacency list supplied
//! wholesale by the caller: an [A* search](a_star_search) for the cheapest Path between two
//! Nodes, the [breadth-first](breadth_first_search) and [depth-first](depth_first_search)
//! visitation orders, and the binary min-heap [`PriorityQueue`] that backs the A* frontier.
//!
//! The Graph is never stored or mutated by this crate. The caller owns it in whatever form
//! they like and hands a borrowed [`Graph`] (a Map from Node to its outgoing Edges) to each
//! search call. A Node may be any cheap-to-clone type that can be compared and hashed: a
//! number, a `(x, y)` position, a string, ...
//!
//! All search state is local to a single call, so any number of searches may run over the
//! same Graph from different threads at once.
//!
//! ## Examples
//! Finding the cheapest Path with A*:
//! ```
//! use graph_search::{a_star_search, Graph};
//!
//! let graph: Graph<i32> = [
//!     (1, vec![(2, 1), (3, 2)]),
//!     (2, vec![(1, 1), (4, 3)]),
//!     (3, vec![(1, 2), (5, 4)]),
//!     (4, vec![(2, 3), (6, 5)]),
//!     (5, vec![(3, 4), (7, 6)]),
//!     (6, vec![(4, 5), (8, 7)]),
//!     (7, vec![(5, 6)]),
//!     (8, vec![(6, 7)]),
//! ]
//! .into_iter()
//! .collect();
//!
//! let path = a_star_search(&graph, 1, 7, |node, goal| node.abs_diff(*goal) as usize);
//!
//! assert_eq!(path, vec![1, 3, 5, 7]);
//! ```
//! The Heuristic is supplied by the caller and must never overestimate the true remaining
//! Cost, or the returned Path may not be the cheapest one. `|_, _| 0` is always admissible
//! and turns the search into plain Dijkstra.
//!
//! If the Goal cannot be reached, the returned Path is empty:
//! ```
//! # use graph_search::{a_star_search, Graph};
//! # let graph: Graph<i32> = [(1, vec![(2, 1)]), (2, vec![(1, 1)])].into_iter().collect();
//! let path = a_star_search(&graph, 1, 9, |node, goal| node.abs_diff(*goal) as usize);
//!
//! assert!(path.is_empty());
//! ```
//! Note that searching from a Node to itself also returns an empty Path ("already there"),
//! not a single-Node Path. Callers that need to tell the two cases apart compare `start`
//! and `goal` themselves.
//!
//! Visiting every reachable Node:
//! ```
//! use graph_search::{breadth_first_search, AdjacencyList};
//!
//! let graph: AdjacencyList<&str> = [
//!     ("a", vec!["b", "c"]),
//!     ("b", vec!["d"]),
//!     ("c", vec!["d"]),
//!     ("d", vec![]),
//! ]
//! .into_iter()
//! .collect();
//!
//! let order = breadth_first_search(&graph, "a");
//!
//! assert_eq!(order, vec!["a", "b", "c", "d"]);
//! ```
//!
//! ## Bounded searches
//! A* on an adversarial Graph can expand a very large number of Nodes before giving up.
//! [`a_star_search_with_config`] takes a [`SearchConfig`] with an optional expansion budget
//! for callers that need a hard upper bound:
//! ```
//! use graph_search::{a_star_search_with_config, Graph, SearchConfig};
//!
//! # let graph: Graph<i32> = [(1, vec![(2, 1)]), (2, vec![(1, 1)])].into_iter().collect();
//! let path = a_star_search_with_config(
//!     &graph,
//!     1,
//!     2,
//!     |_, _| 0,
//!     SearchConfig::with_max_expansions(10_000),
//! );
//! assert_eq!(path, vec![1, 2]);
//! ```

/// The Type used to measure the Cost of traversing an Edge.
///
/// Edge weights and Heuristic values are non-negative; `Cost::MAX` acts as the
/// "not yet reached" sentinel inside the search.
pub type Cost = usize;

/// A weighted directed Graph: every Node maps to its outgoing Edges as
/// `(neighbor, cost)` pairs.
///
/// The Graph is owned by the caller and only borrowed by the search functions.
/// A Node that does not appear as a key simply has no outgoing Edges.
pub type Graph<Id> = hashbrown::HashMap<Id, Vec<(Id, Cost)>>;

/// An unweighted adjacency list, the input convention shared by
/// [`breadth_first_search`] and [`depth_first_search`].
pub type AdjacencyList<Id> = hashbrown::HashMap<Id, Vec<Id>>;

mod a_star;
pub use a_star::{a_star_search, a_star_search_with_config};

mod config;
pub use config::SearchConfig;

mod queue;
pub use queue::{EmptyQueueError, PriorityQueue};

mod traversal;
pub use traversal::{breadth_first_search, depth_first_search};

/// The most common imports bundled together.
pub mod prelude {
    pub use crate::{
        a_star_search, a_star_search_with_config, breadth_first_search, depth_first_search,
        AdjacencyList, Cost, Graph, PriorityQueue, SearchConfig,
    };
}
