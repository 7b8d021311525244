use serde::Serialize;

pub const ORDER_BREADTH: &str = "breadth";
pub const ORDER_DEPTH: &str = "depth";

/// Visit order for walks and searches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Traversal {
    #[default]
    /// FIFO frontier: visit in non-decreasing distance from the start
    Breadth,
    /// LIFO frontier: explore the most recently discovered branch first
    Depth,
}

impl Traversal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Traversal::Breadth => ORDER_BREADTH,
            Traversal::Depth => ORDER_DEPTH,
        }
    }
}

impl std::str::FromStr for Traversal {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "breadth" | "bfs" => Ok(Traversal::Breadth),
            "depth" | "dfs" => Ok(Traversal::Depth),
            other => Err(format!(
                "unknown order '{}' (expected: breadth, depth)",
                other
            )),
        }
    }
}

/// Full-graph walk result
#[derive(Debug, Clone, Serialize)]
pub struct WalkResult<V> {
    pub start: V,
    pub order: String,
    pub recursive: bool,
    pub visited: Vec<V>,
}

impl<V> WalkResult<V> {
    pub fn new(start: V, order: Traversal, recursive: bool, visited: Vec<V>) -> Self {
        Self {
            start,
            order: order.as_str().to_string(),
            recursive,
            visited,
        }
    }
}

/// Point-to-point search result
#[derive(Debug, Clone, Serialize)]
pub struct PathResult<V> {
    pub from: V,
    pub to: V,
    pub order: String,
    pub found: bool,
    pub path: Vec<V>,
    /// Edge count of the path (0 when not found)
    pub path_length: usize,
}

impl<V> PathResult<V> {
    pub fn from_search(from: V, to: V, order: Traversal, path: Option<Vec<V>>) -> Self {
        let (found, path) = match path {
            Some(path) => (true, path),
            None => (false, Vec::new()),
        };
        Self {
            from,
            to,
            order: order.as_str().to_string(),
            found,
            path_length: path.len().saturating_sub(1),
            path,
        }
    }
}
