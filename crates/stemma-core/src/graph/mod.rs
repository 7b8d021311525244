//! Graph storage and traversal operations
//!
//! Provides the directed graph and the algorithms that run over it:
//! - Full-graph breadth-first and depth-first walks
//! - Point-to-point path search (hop-count shortest via BFS)
//! - Frontier trait with the FIFO/LIFO collections driving iteration

pub mod digraph;
pub mod frontier;
pub mod search;
pub mod types;
pub mod walk;

pub use digraph::{DiGraph, VertexId};
pub use frontier::{FifoFrontier, Frontier, LifoFrontier};
pub use types::{PathResult, Traversal, WalkResult, ORDER_BREADTH, ORDER_DEPTH};
pub use walk::{BreadthFirstWalk, DepthFirstWalk};
