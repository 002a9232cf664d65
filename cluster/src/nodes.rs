use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use anyhow::{bail, Context, Result};

/// The cluster's node addresses, one per line. The first line is the
/// scheduler, the remaining lines are workers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeList {
    nodes: Vec<String>,
}

impl NodeList {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to read node list at: {:?}", path))?;

        Self::from_reader(file)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let mut nodes = Vec::new();

        for line in BufReader::new(reader).lines() {
            let line = line.context("Failed to read node list line")?;
            let line = line.trim();
            if !line.is_empty() {
                nodes.push(line.to_string());
            }
        }

        if nodes.is_empty() {
            bail!("Node list is empty");
        }

        Ok(Self { nodes })
    }

    pub fn scheduler(&self) -> &str {
        &self.nodes[0]
    }

    pub fn workers(&self) -> &[String] {
        &self.nodes[1..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_line_is_the_scheduler() {
        let nodes = NodeList::from_reader("10.0.0.1\n10.0.0.2\n10.0.0.3\n".as_bytes()).unwrap();

        assert_eq!(nodes.scheduler(), "10.0.0.1");
        assert_eq!(nodes.workers(), ["10.0.0.2", "10.0.0.3"]);
    }

    #[test]
    fn test_blank_lines_and_whitespace_are_ignored() {
        let nodes = NodeList::from_reader("  10.0.0.1 \n\n10.0.0.2\n\n".as_bytes()).unwrap();

        assert_eq!(nodes.scheduler(), "10.0.0.1");
        assert_eq!(nodes.workers(), ["10.0.0.2"]);
    }

    #[test]
    fn test_empty_list_is_an_error() {
        assert!(NodeList::from_reader("\n\n".as_bytes()).is_err());
    }
}
