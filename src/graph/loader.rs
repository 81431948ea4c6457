//! Reads the plain-text graph description used by the `graph_tester` binary.
//!
//! The first line holds the number `N` of adjacency lines that follow. Each
//! adjacency line is `source dest1 weight1 dest2 weight2 ...`, whitespace
//! separated. A trailing destination without a weight is ignored.

use std::fs;
use std::path::Path;
use log::debug;

use crate::graph::Multigraph;
use crate::{Error, Result};

/// One `(source, destination, weight)` edge description
pub type Triple = (String, String, f64);

/// Parses a graph description into edge triples, in file order
pub fn parse_triples(input: &str) -> Result<Vec<Triple>> {
    let mut lines = input.lines().enumerate();

    let (_, header) = lines.next().ok_or_else(|| Error::Parse {
        line: 1,
        message: "missing vertex line count".to_string(),
    })?;
    let count: usize = header.trim().parse().map_err(|_| Error::Parse {
        line: 1,
        message: format!("invalid vertex line count {:?}", header.trim()),
    })?;

    let mut triples = Vec::new();
    for expected in 0..count {
        let (index, line) = lines.next().ok_or_else(|| Error::Parse {
            line: expected + 2,
            message: format!("expected {} adjacency lines, found {}", count, expected),
        })?;

        let mut tokens = line.split_whitespace();
        let Some(source) = tokens.next() else {
            continue;
        };

        let rest: Vec<&str> = tokens.collect();
        for pair in rest.chunks_exact(2) {
            let weight: f64 = pair[1].parse().map_err(|_| Error::Parse {
                line: index + 1,
                message: format!("invalid weight {:?} for edge {} -> {}", pair[1], source, pair[0]),
            })?;
            triples.push((source.to_string(), pair[0].to_string(), weight));
        }
    }

    Ok(triples)
}

/// Parses a graph description and builds the multigraph it describes
pub fn parse_graph(input: &str) -> Result<Multigraph<f64>> {
    let triples = parse_triples(input)?;
    Ok(Multigraph::from_triples(triples))
}

/// Reads and parses a graph description file
pub fn load_graph(path: impl AsRef<Path>) -> Result<Multigraph<f64>> {
    let path = path.as_ref();
    debug!("Reading graph from {}", path.display());
    let contents = fs::read_to_string(path)?;
    parse_graph(&contents)
}
