//! Point-to-point path search
//!
//! Searches keep whole paths in the frontier rather than bare vertices.
//! Paths are immutable once pushed; extending one copies it first, because
//! several frontier branches may share a prefix. Exhausting the frontier
//! without reaching the destination is a normal outcome (`Ok(None)`), not an
//! error.

use std::collections::HashSet;

use crate::error::{Result, StemmaError};
use crate::graph::digraph::{DiGraph, VertexId};
use crate::graph::frontier::{FifoFrontier, Frontier, LifoFrontier};

impl<V: VertexId> DiGraph<V> {
    /// Find a path from `from` to `to` with the minimum number of edges.
    ///
    /// Breadth-first over paths: the first path that reaches the
    /// destination is hop-count minimal.
    #[tracing::instrument(skip(self), fields(from = %from, to = %to))]
    pub fn breadth_first_search(&self, from: V, to: V) -> Result<Option<Vec<V>>> {
        self.frontier_search(from, to, FifoFrontier::new())
    }

    /// Find some path from `from` to `to`, not necessarily the shortest.
    #[tracing::instrument(skip(self), fields(from = %from, to = %to))]
    pub fn depth_first_search(&self, from: V, to: V) -> Result<Option<Vec<V>>> {
        self.frontier_search(from, to, LifoFrontier::new())
    }

    /// Depth-first search expressed recursively, threading a shared visited
    /// set and an accumulated path; the first path that reaches the
    /// destination propagates back up unchanged.
    #[tracing::instrument(skip(self), fields(from = %from, to = %to))]
    pub fn depth_first_search_recursive(&self, from: V, to: V) -> Result<Option<Vec<V>>> {
        if !self.contains(from) {
            return Err(StemmaError::missing_vertex(from));
        }
        let mut visited = HashSet::new();
        self.search_recursive(from, to, &mut visited, Vec::new())
    }

    fn frontier_search<F: Frontier<Vec<V>>>(
        &self,
        from: V,
        to: V,
        mut frontier: F,
    ) -> Result<Option<Vec<V>>> {
        if !self.contains(from) {
            return Err(StemmaError::missing_vertex(from));
        }
        frontier.push(vec![from]);
        let mut visited: HashSet<V> = HashSet::new();

        while let Some(path) = frontier.pop() {
            let Some(&vertex) = path.last() else {
                continue;
            };
            if !visited.insert(vertex) {
                continue;
            }
            if vertex == to {
                return Ok(Some(path));
            }
            for &neighbor in self.get_neighbors(vertex)? {
                let mut extended = path.clone();
                extended.push(neighbor);
                frontier.push(extended);
            }
        }

        Ok(None)
    }

    fn search_recursive(
        &self,
        vertex: V,
        to: V,
        visited: &mut HashSet<V>,
        path: Vec<V>,
    ) -> Result<Option<Vec<V>>> {
        visited.insert(vertex);
        let mut path = path;
        path.push(vertex);
        if vertex == to {
            return Ok(Some(path));
        }
        for &neighbor in self.get_neighbors(vertex)? {
            if visited.contains(&neighbor) {
                continue;
            }
            if let Some(found) = self.search_recursive(neighbor, to, visited, path.clone())? {
                return Ok(Some(found));
            }
        }
        Ok(None)
    }
}
