//! Algorithm registry and uniform dispatch.
//!
//! The set of twelve algorithms is fixed and closed, so the registry is
//! a plain enum and a match, not a dynamic table. The only error the
//! engine raises is an unknown name; everything downstream of dispatch
//! is an ordinary trace.

use std::fmt;
use std::str::FromStr;

use stepviz_core::{AlgorithmInput, EngineConfig, EngineError, Trace};

use crate::{graph, searching, sorting, tree};

/// The closed set of supported algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmName {
    BubbleSort,
    SelectionSort,
    InsertionSort,
    MergeSort,
    QuickSort,
    LinearSearch,
    BinarySearch,
    BstInsertion,
    BstTraversal,
    BreadthFirstSearch,
    DepthFirstSearch,
    Dijkstra,
}

impl AlgorithmName {
    pub const ALL: [AlgorithmName; 12] = [
        AlgorithmName::BubbleSort,
        AlgorithmName::SelectionSort,
        AlgorithmName::InsertionSort,
        AlgorithmName::MergeSort,
        AlgorithmName::QuickSort,
        AlgorithmName::LinearSearch,
        AlgorithmName::BinarySearch,
        AlgorithmName::BstInsertion,
        AlgorithmName::BstTraversal,
        AlgorithmName::BreadthFirstSearch,
        AlgorithmName::DepthFirstSearch,
        AlgorithmName::Dijkstra,
    ];

    /// Canonical display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            AlgorithmName::BubbleSort => "Bubble Sort",
            AlgorithmName::SelectionSort => "Selection Sort",
            AlgorithmName::InsertionSort => "Insertion Sort",
            AlgorithmName::MergeSort => "Merge Sort",
            AlgorithmName::QuickSort => "Quick Sort",
            AlgorithmName::LinearSearch => "Linear Search",
            AlgorithmName::BinarySearch => "Binary Search",
            AlgorithmName::BstInsertion => "BST Insertion",
            AlgorithmName::BstTraversal => "BST Traversal",
            AlgorithmName::BreadthFirstSearch => "Breadth-First Search",
            AlgorithmName::DepthFirstSearch => "Depth-First Search",
            AlgorithmName::Dijkstra => "Dijkstra's Algorithm",
        }
    }
}

impl fmt::Display for AlgorithmName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlgorithmName {
    type Err = EngineError;

    /// Accepts the canonical display names plus kebab/snake-case
    /// aliases, case-insensitively: `"Bubble Sort"`, `"bubble-sort"`,
    /// and `"bubble_sort"` all name the same tracer.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .to_ascii_lowercase()
            .replace(['-', '_'], " ")
            .replace('\'', "");
        match normalized.split_whitespace().collect::<Vec<_>>().join(" ").as_str() {
            "bubble sort" => Ok(AlgorithmName::BubbleSort),
            "selection sort" => Ok(AlgorithmName::SelectionSort),
            "insertion sort" => Ok(AlgorithmName::InsertionSort),
            "merge sort" => Ok(AlgorithmName::MergeSort),
            "quick sort" => Ok(AlgorithmName::QuickSort),
            "linear search" => Ok(AlgorithmName::LinearSearch),
            "binary search" => Ok(AlgorithmName::BinarySearch),
            "bst insertion" => Ok(AlgorithmName::BstInsertion),
            "bst traversal" => Ok(AlgorithmName::BstTraversal),
            "breadth first search" | "bfs" => Ok(AlgorithmName::BreadthFirstSearch),
            "depth first search" | "dfs" => Ok(AlgorithmName::DepthFirstSearch),
            "dijkstras algorithm" | "dijkstra" => Ok(AlgorithmName::Dijkstra),
            _ => Err(EngineError::UnsupportedAlgorithm(s.to_string())),
        }
    }
}

/// The trace engine: resolves names, normalizes inputs, runs tracers.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Resolve `name` and compute the full trace for `input`.
    ///
    /// The only failure is an unknown name; every input shape produces
    /// some valid trace once dispatch succeeds.
    pub fn run(&self, name: &str, input: &AlgorithmInput) -> Result<Trace, EngineError> {
        let algorithm: AlgorithmName = name.parse()?;
        let trace = self.dispatch(algorithm, input);
        tracing::debug!(algorithm = %algorithm, steps = trace.len(), "computed trace");
        Ok(trace)
    }

    /// Invoke the tracer for an already-resolved algorithm.
    pub fn dispatch(&self, algorithm: AlgorithmName, input: &AlgorithmInput) -> Trace {
        match algorithm {
            AlgorithmName::BubbleSort => sorting::bubble::trace(&input.sequence()),
            AlgorithmName::SelectionSort => sorting::selection::trace(&input.sequence()),
            AlgorithmName::InsertionSort => sorting::insertion::trace(&input.sequence()),
            AlgorithmName::MergeSort => sorting::merge::trace(&input.sequence()),
            AlgorithmName::QuickSort => sorting::quick::trace(&input.sequence()),
            AlgorithmName::LinearSearch => {
                let (values, target) = input.search_parts();
                searching::linear::trace(&values, target)
            }
            AlgorithmName::BinarySearch => {
                let (values, target) = input.search_parts();
                searching::binary::trace(&values, target, self.config.binary_search_cap_multiplier)
            }
            AlgorithmName::BstInsertion => tree::insertion::trace(&input.sequence()),
            AlgorithmName::BstTraversal => tree::traversal::trace(&input.sequence()),
            AlgorithmName::BreadthFirstSearch => {
                let (adjacency, start) = input.unweighted_graph(self.config.graph_default_start);
                graph::bfs::trace(&adjacency, start)
            }
            AlgorithmName::DepthFirstSearch => {
                let (adjacency, start) = input.unweighted_graph(self.config.graph_default_start);
                graph::dfs::trace(&adjacency, start)
            }
            AlgorithmName::Dijkstra => {
                let (adjacency, start) = input.weighted_graph(self.config.graph_default_start);
                graph::dijkstra::trace(&adjacency, start)
            }
        }
    }
}

/// Run `name` over `input` with the default configuration.
pub fn run(name: &str, input: &AlgorithmInput) -> Result<Trace, EngineError> {
    Engine::new().run(name, input)
}
