#![allow(dead_code)]

use waveplan::tasks::TaskGraph;

/// Builder for one input record line, to simplify test setup.
///
/// Renders to the `key="value"` line grammar the loader consumes, so tests
/// exercise the real parser instead of constructing graphs by hand.
pub struct RecordBuilder {
    id: String,
    predecessors: Vec<String>,
    attributes: Vec<(String, String)>,
}

impl RecordBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            predecessors: Vec::new(),
            attributes: Vec::new(),
        }
    }

    pub fn predecessor(mut self, id: &str) -> Self {
        self.predecessors.push(id.to_string());
        self
    }

    pub fn predecessors(mut self, ids: &[&str]) -> Self {
        self.predecessors
            .extend(ids.iter().map(|s| s.to_string()));
        self
    }

    pub fn attr(mut self, key: &str, value: &str) -> Self {
        self.attributes.push((key.to_string(), value.to_string()));
        self
    }

    pub fn build(self) -> String {
        let mut line = format!(
            "id=\"{}\" predecessors=\"{}\"",
            self.id,
            self.predecessors.join(",")
        );
        for (key, value) in &self.attributes {
            line.push_str(&format!(" {key}=\"{value}\""));
        }
        line
    }
}

/// Parse record lines into a linked graph, panicking on invalid input.
pub fn graph_from_records(lines: &[String]) -> TaskGraph {
    let text = lines.join("\n");
    let mut graph = waveplan::tasks::parse_records(&text).expect("records should parse");
    graph
        .link_successors()
        .expect("predecessor references should resolve");
    graph
}
