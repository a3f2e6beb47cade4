use std::collections::HashMap;

use crate::{Error, Result};

/// Bijection between vertex indices and human readable checkpoint names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckpointLabels {
    labels: Vec<String>,
    index: HashMap<String, usize>,
}

impl CheckpointLabels {
    /// Builds the lookup from an ordered list; position `i` names vertex `i`
    pub fn new<I, S>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut lookup = CheckpointLabels::default();
        for label in labels {
            let label = label.into();
            if lookup.index.contains_key(&label) {
                return Err(Error::DuplicateCheckpoint(label));
            }
            lookup.push(label);
        }
        Ok(lookup)
    }

    /// Adds a label if it is not known yet and returns its index either way
    pub fn intern(&mut self, label: &str) -> usize {
        match self.index.get(label) {
            Some(&index) => index,
            None => self.push(label.to_string()),
        }
    }

    fn push(&mut self, label: String) -> usize {
        let index = self.labels.len();
        self.index.insert(label.clone(), index);
        self.labels.push(label);
        index
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Name of a vertex
    pub fn label(&self, vertex: usize) -> Result<&str> {
        self.labels
            .get(vertex)
            .map(String::as_str)
            .ok_or(Error::InvalidVertex(vertex))
    }

    /// Vertex of a name
    pub fn index_of(&self, label: &str) -> Result<usize> {
        self.index
            .get(label)
            .copied()
            .ok_or_else(|| Error::UnknownCheckpoint(label.to_string()))
    }

    /// Resolves a sequence of names, failing on the first unknown one
    pub fn resolve_all<S: AsRef<str>>(&self, labels: &[S]) -> Result<Vec<usize>> {
        labels
            .iter()
            .map(|label| self.index_of(label.as_ref()))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.labels.iter().map(String::as_str)
    }
}

/// Splits a `"SOURCE-DESTINATION"` request into its two checkpoint names
pub fn parse_route_request(input: &str) -> Result<(&str, &str)> {
    let input = input.trim();
    match input.split_once('-') {
        Some((source, destination)) if !source.is_empty() && !destination.is_empty() => {
            Ok((source, destination))
        }
        _ => Err(Error::InvalidWaypoints(format!(
            "expected SOURCE-DESTINATION, got {:?}",
            input
        ))),
    }
}
