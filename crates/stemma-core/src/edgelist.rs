//! Plain-text graph and relationship-pair input
//!
//! Line-oriented format: `U V` adds the directed edge U→V, registering both
//! endpoints; a lone `U` registers an isolated vertex. `#` starts a comment
//! and blank lines are ignored. Pair files use the same syntax but require
//! exactly two fields per record, read as (parent, child).

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{Result, StemmaError};
use crate::graph::DiGraph;

/// Parse a graph from edge-list text.
pub fn parse_graph(input: &str) -> Result<DiGraph<u64>> {
    let mut graph = DiGraph::new();
    for (from, to) in records(input)? {
        graph.add_vertex(from);
        if let Some(to) = to {
            graph.add_vertex(to);
            graph.add_edge(from, to)?;
        }
    }
    Ok(graph)
}

/// Parse (parent, child) relationship pairs from edge-list text.
pub fn parse_pairs(input: &str) -> Result<Vec<(u64, u64)>> {
    let mut pairs = Vec::new();
    for (line_no, record) in numbered_records(input) {
        let (parent, child) = parse_record(line_no, record)?;
        let Some(child) = child else {
            return Err(StemmaError::invalid_edge_list(
                line_no,
                "expected a (parent, child) pair",
            ));
        };
        pairs.push((parent, child));
    }
    Ok(pairs)
}

/// Load a graph from an edge-list file.
pub fn load_graph(path: &Path) -> Result<DiGraph<u64>> {
    parse_graph(&read_input(path)?)
}

/// Load relationship pairs from an edge-list file.
pub fn load_pairs(path: &Path) -> Result<Vec<(u64, u64)>> {
    parse_pairs(&read_input(path)?)
}

fn read_input(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|err| {
        if err.kind() == ErrorKind::NotFound {
            StemmaError::InputNotFound {
                path: path.to_path_buf(),
            }
        } else {
            StemmaError::Io(err)
        }
    })
}

fn records(input: &str) -> Result<Vec<(u64, Option<u64>)>> {
    numbered_records(input)
        .map(|(line_no, record)| parse_record(line_no, record))
        .collect()
}

/// Yield (1-based line number, record text) for non-empty lines with
/// comments stripped.
fn numbered_records(input: &str) -> impl Iterator<Item = (usize, &str)> {
    input.lines().enumerate().filter_map(|(idx, raw)| {
        let record = raw.split('#').next().unwrap_or("").trim();
        if record.is_empty() {
            None
        } else {
            Some((idx + 1, record))
        }
    })
}

fn parse_record(line_no: usize, record: &str) -> Result<(u64, Option<u64>)> {
    let mut fields = record.split_whitespace();
    let first = parse_id(line_no, fields.next().unwrap_or(""))?;
    let second = match fields.next() {
        Some(field) => Some(parse_id(line_no, field)?),
        None => None,
    };
    if let Some(extra) = fields.next() {
        return Err(StemmaError::invalid_edge_list(
            line_no,
            format!("unexpected field '{}'", extra),
        ));
    }
    Ok((first, second))
}

fn parse_id(line_no: usize, field: &str) -> Result<u64> {
    field.parse().map_err(|_| {
        StemmaError::invalid_edge_list(line_no, format!("invalid vertex id '{}'", field))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_graph_basic() {
        let graph = parse_graph("1 2\n2 3\n").unwrap();
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert!(graph.get_neighbors(1).unwrap().contains(&2));
    }

    #[test]
    fn test_parse_graph_comments_and_blanks() {
        let input = "# demo graph\n\n1 2  # edge\n3\n";
        let graph = parse_graph(input).unwrap();
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.get_neighbors(3).unwrap().is_empty());
    }

    #[test]
    fn test_parse_graph_invalid_id() {
        let err = parse_graph("1 2\nx 3\n").unwrap_err();
        assert!(err.to_string().contains("line 2"));
        assert!(err.to_string().contains("invalid vertex id 'x'"));
    }

    #[test]
    fn test_parse_graph_extra_field() {
        let err = parse_graph("1 2 3\n").unwrap_err();
        assert!(err.to_string().contains("unexpected field '3'"));
    }

    #[test]
    fn test_parse_pairs() {
        let pairs = parse_pairs("1 3\n2 3\n10 1\n").unwrap();
        assert_eq!(pairs, vec![(1, 3), (2, 3), (10, 1)]);
    }

    #[test]
    fn test_parse_pairs_rejects_lone_vertex() {
        let err = parse_pairs("1 3\n7\n").unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_load_graph_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.txt");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "1 2").unwrap();
        writeln!(file, "2 3").unwrap();

        let graph = load_graph(&path).unwrap();
        assert_eq!(graph.vertex_count(), 3);
    }

    #[test]
    fn test_load_graph_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_graph(&dir.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, StemmaError::InputNotFound { .. }));
    }
}
