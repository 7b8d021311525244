use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

pub fn stemma() -> Command {
    cargo_bin_cmd!("stemma")
}

/// The 7-vertex reference graph:
/// 1:{2}, 2:{3,4}, 3:{5}, 4:{6,7}, 5:{3}, 6:{3}, 7:{1,6}
#[allow(dead_code)]
pub const DEMO_GRAPH: &str = "\
# demo graph
5 3
6 3
7 1
4 7
1 2
7 6
2 4
3 5
2 3
4 6
";

/// The 11-node ancestry fixture, one (parent, child) pair per line.
#[allow(dead_code)]
pub const ANCESTOR_PAIRS: &str = "\
1 3
2 3
3 6
5 6
5 7
4 5
4 8
8 9
11 8
10 1
";

#[allow(dead_code)]
pub fn write_fixture(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("failed to write fixture");
    path
}
