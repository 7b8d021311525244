//! Earliest-ancestor resolution over (parent, child) relationship pairs
//!
//! The ancestor graph reverses the semantic relation: each (parent, child)
//! pair becomes the edge child → parent, so walking out-edges moves toward
//! ancestors. The earliest ancestor of a node is the vertex reachable
//! through the greatest number of reversed-edge hops; ties are broken by the
//! smallest identifier.

use std::collections::HashSet;

use serde::Serialize;

use crate::error::Result;
use crate::graph::{DiGraph, FifoFrontier, Frontier, VertexId};

/// Ancestor query result
#[derive(Debug, Clone, Serialize)]
pub struct AncestorResult<V> {
    pub start: V,
    pub found: bool,
    pub ancestor: Option<V>,
}

impl<V: VertexId> AncestorResult<V> {
    pub fn new(start: V, ancestor: Option<V>) -> Self {
        Self {
            start,
            found: ancestor.is_some(),
            ancestor,
        }
    }
}

/// Build the reversed (child → parent) graph from relationship pairs.
///
/// Every identifier appearing in any pair is registered as a vertex;
/// registration is idempotent, so repeated identifiers keep their edges.
pub fn build_ancestor_graph<V: VertexId>(relationships: &[(V, V)]) -> Result<DiGraph<V>> {
    let mut graph = DiGraph::new();
    for &(parent, child) in relationships {
        graph.add_vertex(parent);
        graph.add_vertex(child);
        graph.add_edge(child, parent)?;
    }
    Ok(graph)
}

/// Find the most distant ancestor of `start` in the relationship pairs.
///
/// Breadth-first from `start` over the reversed graph, tracking the depth
/// that reached each vertex. Greater depth wins; at equal depth the smaller
/// identifier wins, so the result is the smallest identifier among the
/// vertices at maximum depth. A `start` that appears in no pair, or one with
/// no ancestors at all, resolves to `None`.
#[tracing::instrument(skip(relationships), fields(start = %start, pairs = relationships.len()))]
pub fn earliest_ancestor<V: VertexId>(relationships: &[(V, V)], start: V) -> Result<Option<V>> {
    let graph = build_ancestor_graph(relationships)?;
    if !graph.contains(start) {
        return Ok(None);
    }

    let mut frontier = FifoFrontier::new();
    frontier.push((start, 0u32));
    let mut visited: HashSet<V> = HashSet::new();
    let mut best: Option<(u32, V)> = None;

    while let Some((vertex, depth)) = frontier.pop() {
        if !visited.insert(vertex) {
            continue;
        }
        if depth > 0 {
            best = match best {
                Some((best_depth, best_id))
                    if depth < best_depth || (depth == best_depth && best_id < vertex) =>
                {
                    Some((best_depth, best_id))
                }
                _ => Some((depth, vertex)),
            };
        }
        for &parent in graph.get_neighbors(vertex)? {
            frontier.push((parent, depth + 1));
        }
    }

    Ok(best.map(|(_, id)| id))
}
