//! The polymorphic algorithm input model.
//!
//! The transport collaborator hands the engine raw JSON in one of three
//! shapes: a plain value sequence, `{array, target?}`, or
//! `{graph, start?}`. The shapes are modeled as an untagged enum and
//! normalized per algorithm family before dispatch. Normalization never
//! fails: a foreign or incomplete shape degrades to a well-formed
//! default (empty sequence, empty mapping, synthesized path graph), so
//! a tracer always returns some valid trace.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::{NodeId, Value, Weight};

/// An adjacency mapping, weighted or not.
///
/// Unweighted neighbors keep the order the caller listed them in;
/// weighted neighbors iterate in ascending node order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AdjacencyInput {
    Unweighted(BTreeMap<NodeId, Vec<NodeId>>),
    Weighted(BTreeMap<NodeId, BTreeMap<NodeId, Weight>>),
}

impl<'de> Deserialize<'de> for AdjacencyInput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // JSON map keys are strings, and untagged buffering does not
        // preserve serde_json's string-to-integer key coercion, so the
        // keys are deserialized as strings and parsed here.
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Unweighted(BTreeMap<String, Vec<NodeId>>),
            Weighted(BTreeMap<String, BTreeMap<String, Weight>>),
        }

        fn parse_key<E: serde::de::Error>(key: &str) -> Result<NodeId, E> {
            key.parse()
                .map_err(|_| E::custom(format!("invalid node id key: {key}")))
        }

        match Repr::deserialize(deserializer)? {
            Repr::Unweighted(map) => map
                .into_iter()
                .map(|(node, neighbors)| Ok((parse_key(&node)?, neighbors)))
                .collect::<Result<_, D::Error>>()
                .map(AdjacencyInput::Unweighted),
            Repr::Weighted(map) => map
                .into_iter()
                .map(|(node, neighbors)| {
                    let neighbors = neighbors
                        .into_iter()
                        .map(|(nb, weight)| Ok((parse_key(&nb)?, weight)))
                        .collect::<Result<_, D::Error>>()?;
                    Ok((parse_key(&node)?, neighbors))
                })
                .collect::<Result<_, D::Error>>()
                .map(AdjacencyInput::Weighted),
        }
    }
}

impl Default for AdjacencyInput {
    fn default() -> Self {
        AdjacencyInput::Unweighted(BTreeMap::new())
    }
}

impl AdjacencyInput {
    /// View as an unweighted mapping, dropping weights if present.
    pub fn unweighted(&self) -> BTreeMap<NodeId, Vec<NodeId>> {
        match self {
            AdjacencyInput::Unweighted(map) => map.clone(),
            AdjacencyInput::Weighted(map) => map
                .iter()
                .map(|(&node, neighbors)| (node, neighbors.keys().copied().collect()))
                .collect(),
        }
    }

    /// View as a weighted mapping, giving unweighted edges weight 1.
    pub fn weighted(&self) -> BTreeMap<NodeId, BTreeMap<NodeId, Weight>> {
        match self {
            AdjacencyInput::Weighted(map) => map.clone(),
            AdjacencyInput::Unweighted(map) => map
                .iter()
                .map(|(&node, neighbors)| {
                    (node, neighbors.iter().map(|&nb| (nb, 1)).collect())
                })
                .collect(),
        }
    }
}

/// One tracer invocation's input, in any of the accepted shapes.
///
/// Variant order matters for untagged deserialization: an object with
/// an `array` field is a search input even if a graph shape would also
/// accept it, and a bare JSON array is always a value sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AlgorithmInput {
    Search {
        array: Vec<Value>,
        #[serde(default)]
        target: Option<Value>,
    },
    Graph {
        #[serde(default)]
        graph: AdjacencyInput,
        #[serde(default)]
        start: Option<NodeId>,
    },
    Values(Vec<Value>),
}

impl AlgorithmInput {
    /// The value sequence for sorting and tree tracers.
    pub fn sequence(&self) -> Vec<Value> {
        match self {
            AlgorithmInput::Values(values) => values.clone(),
            AlgorithmInput::Search { array, .. } => array.clone(),
            AlgorithmInput::Graph { .. } => Vec::new(),
        }
    }

    /// The sequence and optional explicit target for search tracers.
    pub fn search_parts(&self) -> (Vec<Value>, Option<Value>) {
        match self {
            AlgorithmInput::Search { array, target } => (array.clone(), *target),
            AlgorithmInput::Values(values) => (values.clone(), None),
            AlgorithmInput::Graph { .. } => (Vec::new(), None),
        }
    }

    /// Adjacency mapping and start node for BFS/DFS.
    ///
    /// Plain sequences synthesize a path graph (node `i` to `i + 1`)
    /// started at node 0.
    pub fn unweighted_graph(
        &self,
        default_start: NodeId,
    ) -> (BTreeMap<NodeId, Vec<NodeId>>, NodeId) {
        let (adjacency, explicit_start) = match self {
            AlgorithmInput::Graph { graph, start } => (graph.unweighted(), *start),
            AlgorithmInput::Values(values) => (path_graph(values.len()), None),
            AlgorithmInput::Search { array, .. } => (path_graph(array.len()), None),
        };
        let start = resolve_start(&adjacency, explicit_start, default_start);
        (adjacency, start)
    }

    /// Weighted adjacency mapping and start node for Dijkstra.
    pub fn weighted_graph(
        &self,
        default_start: NodeId,
    ) -> (BTreeMap<NodeId, BTreeMap<NodeId, Weight>>, NodeId) {
        let (adjacency, explicit_start) = match self {
            AlgorithmInput::Graph { graph, start } => (graph.weighted(), *start),
            AlgorithmInput::Values(values) => (weighted_path_graph(values.len()), None),
            AlgorithmInput::Search { array, .. } => (weighted_path_graph(array.len()), None),
        };
        let start = resolve_weighted_start(&adjacency, explicit_start, default_start);
        (adjacency, start)
    }
}

/// Simple path graph over `n` nodes: node `i` points to `i + 1`.
fn path_graph(n: usize) -> BTreeMap<NodeId, Vec<NodeId>> {
    (0..n)
        .map(|i| (i, if i + 1 < n { vec![i + 1] } else { Vec::new() }))
        .collect()
}

fn weighted_path_graph(n: usize) -> BTreeMap<NodeId, BTreeMap<NodeId, Weight>> {
    (0..n)
        .map(|i| {
            let mut neighbors = BTreeMap::new();
            if i + 1 < n {
                neighbors.insert(i + 1, 1);
            }
            (i, neighbors)
        })
        .collect()
}

fn resolve_start<V>(
    adjacency: &BTreeMap<NodeId, V>,
    explicit: Option<NodeId>,
    default: NodeId,
) -> NodeId {
    if let Some(start) = explicit {
        return start;
    }
    if adjacency.contains_key(&default) {
        return default;
    }
    adjacency.keys().next().copied().unwrap_or(default)
}

fn resolve_weighted_start(
    adjacency: &BTreeMap<NodeId, BTreeMap<NodeId, Weight>>,
    explicit: Option<NodeId>,
    default: NodeId,
) -> NodeId {
    resolve_start(adjacency, explicit, default)
}
