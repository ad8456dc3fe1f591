/// Options for bounding an [`a_star_search_with_config`](crate::a_star_search_with_config) call.
///
/// Default options:
/// ```
/// # use graph_search::SearchConfig;
/// assert_eq!(
///     SearchConfig {
///         max_expansions: None,
///     },
///     Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// The maximum number of Nodes the search may expand before giving up
    /// (defaults to `None`).
    ///
    /// `None`: the search runs until the Goal is found or the frontier is
    /// exhausted. On very large or adversarial Graphs that can take a long
    /// time, since the core has no timeout of its own.
    ///
    /// `Some(n)`: after `n` Nodes have been expanded the search stops and
    /// returns an empty Path, as if the Goal were unreachable.
    pub max_expansions: Option<usize>,
}

impl SearchConfig {
    /// A SearchConfig without any limits, same as `Default`.
    pub const UNBOUNDED: SearchConfig = SearchConfig {
        max_expansions: None,
    };

    /// Creates a SearchConfig that allows at most `max` Node expansions.
    ///
    /// ## Examples
    /// Basic usage:
    /// ```
    /// # use graph_search::SearchConfig;
    /// let config = SearchConfig::with_max_expansions(500);
    ///
    /// assert_eq!(config.max_expansions, Some(500));
    /// ```
    pub fn with_max_expansions(max: usize) -> SearchConfig {
        SearchConfig {
            max_expansions: Some(max),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> SearchConfig {
        SearchConfig::UNBOUNDED
    }
}
