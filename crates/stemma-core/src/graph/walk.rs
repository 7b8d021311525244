//! Full-graph walks
//!
//! Each walk yields every vertex reachable from the start exactly once.
//! Breadth-first order is non-decreasing distance from the start;
//! depth-first order explores the last-pushed neighbor first. Neighbors are
//! pushed unconditionally and the visited check happens when a vertex leaves
//! the frontier, so a vertex may sit in the frontier more than once but is
//! emitted at most once.

use std::collections::HashSet;

use crate::error::{Result, StemmaError};
use crate::graph::digraph::{DiGraph, VertexId};
use crate::graph::frontier::{FifoFrontier, Frontier, LifoFrontier};

/// Lazy walk over the vertices reachable from a start vertex.
///
/// The frontier type selects the visit order; the walk is non-restartable.
pub struct Walk<'g, V: VertexId, F: Frontier<V>> {
    graph: &'g DiGraph<V>,
    frontier: F,
    visited: HashSet<V>,
}

/// Breadth-first walk (FIFO frontier)
pub type BreadthFirstWalk<'g, V> = Walk<'g, V, FifoFrontier<V>>;

/// Depth-first walk (LIFO frontier)
pub type DepthFirstWalk<'g, V> = Walk<'g, V, LifoFrontier<V>>;

impl<'g, V: VertexId, F: Frontier<V> + Default> Walk<'g, V, F> {
    fn seeded(graph: &'g DiGraph<V>, start: V) -> Result<Self> {
        if !graph.contains(start) {
            return Err(StemmaError::missing_vertex(start));
        }
        let mut frontier = F::default();
        frontier.push(start);
        Ok(Self {
            graph,
            frontier,
            visited: HashSet::new(),
        })
    }
}

impl<V: VertexId, F: Frontier<V>> Iterator for Walk<'_, V, F> {
    type Item = V;

    fn next(&mut self) -> Option<V> {
        while let Some(vertex) = self.frontier.pop() {
            if !self.visited.insert(vertex) {
                continue;
            }
            if let Some(neighbors) = self.graph.out_set(vertex) {
                for &neighbor in neighbors {
                    self.frontier.push(neighbor);
                }
            }
            return Some(vertex);
        }
        None
    }
}

impl<V: VertexId> DiGraph<V> {
    /// Walk every reachable vertex in breadth-first order.
    pub fn breadth_first_walk(&self, start: V) -> Result<BreadthFirstWalk<'_, V>> {
        Walk::seeded(self, start)
    }

    /// Walk every reachable vertex in depth-first order.
    pub fn depth_first_walk(&self, start: V) -> Result<DepthFirstWalk<'_, V>> {
        Walk::seeded(self, start)
    }

    /// Depth-first walk expressed recursively, threading one shared visited
    /// set through the calls. Neighbors recurse in enumeration (ascending)
    /// order, so the emitted order differs from the iterative variant while
    /// covering the same reachable set.
    #[tracing::instrument(skip(self), fields(start = %start))]
    pub fn depth_first_walk_recursive(&self, start: V) -> Result<Vec<V>> {
        if !self.contains(start) {
            return Err(StemmaError::missing_vertex(start));
        }
        let mut visited = HashSet::new();
        let mut order = Vec::new();
        self.visit_recursive(start, &mut visited, &mut order);
        Ok(order)
    }

    fn visit_recursive(&self, vertex: V, visited: &mut HashSet<V>, order: &mut Vec<V>) {
        visited.insert(vertex);
        order.push(vertex);
        if let Some(neighbors) = self.out_set(vertex) {
            for &neighbor in neighbors {
                if !visited.contains(&neighbor) {
                    self.visit_recursive(neighbor, visited, order);
                }
            }
        }
    }
}
