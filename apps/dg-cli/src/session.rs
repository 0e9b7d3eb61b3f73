//! Executes parsed scripts against a single graph.

use std::collections::HashMap;
use std::io::Write;

use dg_graph::{Graph, Node};
use tracing::{debug, warn};

use crate::error::{CliError, CliResult};
use crate::script::{Command, Line};

/// Outcome of a non-strict run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub executed: usize,
    pub failed: usize,
}

/// A graph plus the names the script bound to its nodes.
#[derive(Debug, Default)]
pub struct Session {
    graph: Graph,
    names: HashMap<String, Node>,
    labels: HashMap<Node, String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Run every line in order.
    ///
    /// Graph errors are reported to `out` and counted; with `strict` the first
    /// one aborts the run instead. Name errors always abort.
    pub fn run(
        &mut self,
        lines: &[Line],
        strict: bool,
        out: &mut impl Write,
    ) -> CliResult<Summary> {
        let mut summary = Summary::default();
        for line in lines {
            match self.execute(line, out) {
                Ok(()) => summary.executed += 1,
                Err(err @ CliError::Graph { .. }) if !strict => {
                    warn!(line = line.number, error = %err, "command failed");
                    writeln!(out, "error: {err}")?;
                    summary.failed += 1;
                }
                Err(err) => return Err(err),
            }
        }
        Ok(summary)
    }

    /// Execute a single line.
    pub fn execute(&mut self, line: &Line, out: &mut impl Write) -> CliResult<()> {
        debug!(line = line.number, command = ?line.command, "executing");
        let graph_err = |source| CliError::Graph {
            line: line.number,
            source,
        };

        match &line.command {
            Command::Node(name) => {
                // A name whose node was removed may be bound again.
                if self
                    .names
                    .get(name)
                    .is_some_and(|node| self.graph.contains(*node))
                {
                    return Err(CliError::DuplicateName {
                        line: line.number,
                        name: name.clone(),
                    });
                }
                let node = self.graph.new_node();
                self.names.insert(name.clone(), node);
                self.labels.insert(node, name.clone());
            }
            Command::Connect(a, b) => {
                let (a, b) = (self.lookup(line, a)?, self.lookup(line, b)?);
                self.graph.connect(a, b).map_err(graph_err)?;
            }
            Command::Disconnect(a, b) => {
                let (a, b) = (self.lookup(line, a)?, self.lookup(line, b)?);
                self.graph.disconnect(a, b).map_err(graph_err)?;
            }
            Command::Remove(name) => {
                let node = self.lookup(line, name)?;
                self.graph.remove(node).map_err(graph_err)?;
            }
            Command::Nodes => {
                let names: Vec<&str> =
                    self.graph.nodes().iter().map(|n| self.label(*n)).collect();
                writeln!(out, "nodes: {}", names.join(" "))?;
            }
            Command::Edges => {
                let edges: Vec<String> = self
                    .graph
                    .edges()
                    .iter()
                    .map(|e| {
                        format!("{}->{}", self.label(e.origin), self.label(e.destination))
                    })
                    .collect();
                writeln!(out, "edges: {}", edges.join(" "))?;
            }
        }
        Ok(())
    }

    fn lookup(&self, line: &Line, name: &str) -> CliResult<Node> {
        self.names
            .get(name)
            .copied()
            .ok_or_else(|| CliError::UnknownName {
                line: line.number,
                name: name.to_string(),
            })
    }

    fn label(&self, node: Node) -> &str {
        self.labels.get(&node).map_or("?", String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::parse;
    use dg_graph::GraphError;

    fn run_script(source: &str, strict: bool) -> (CliResult<Summary>, String) {
        let lines = parse(source).unwrap();
        let mut session = Session::new();
        let mut out = Vec::<u8>::new();
        let result = session.run(&lines, strict, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn prints_nodes_and_edges() {
        let script = "\
node n1
node n2
node n3
connect n1 n2
connect n3 n3
connect n1 n3
connect n3 n2
disconnect n3 n2
nodes
edges
";
        let (result, out) = run_script(script, true);
        assert_eq!(
            result.unwrap(),
            Summary {
                executed: 10,
                failed: 0
            }
        );
        assert_eq!(out, "nodes: n1 n2 n3\nedges: n1->n2 n3->n3 n1->n3\n");
    }

    #[test]
    fn remove_cascades() {
        let script = "node a\nnode b\nconnect a b\nconnect b a\nremove a\nnodes\nedges\n";
        let (result, out) = run_script(script, true);
        assert!(result.is_ok());
        assert_eq!(out, "nodes: b\nedges: \n");
    }

    #[test]
    fn lenient_run_reports_and_continues() {
        let script = "node a\nnode b\nconnect a b\nconnect a b\nremove b\nremove b\nnodes\n";
        let (result, out) = run_script(script, false);
        assert_eq!(
            result.unwrap(),
            Summary {
                executed: 5,
                failed: 2
            }
        );
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("error: Line 4: Edge "));
        assert!(lines[1].starts_with("error: Line 6: Node "));
        assert_eq!(lines[2], "nodes: a");
    }

    #[test]
    fn strict_run_stops_at_first_failure() {
        let script = "node a\nnode b\ndisconnect a b\nnodes\n";
        let (result, out) = run_script(script, true);
        match result {
            Err(CliError::Graph {
                line: 3,
                source: GraphError::EdgeNotFound { .. },
            }) => {}
            other => panic!("unexpected {other:?}"),
        }
        assert!(out.is_empty());
    }

    #[test]
    fn name_errors_always_abort() {
        let (result, _) = run_script("node a\nconnect a b\n", false);
        assert!(matches!(
            result,
            Err(CliError::UnknownName { line: 2, ref name }) if name == "b"
        ));

        let (result, _) = run_script("node a\nnode a\n", false);
        assert!(matches!(result, Err(CliError::DuplicateName { line: 2, .. })));
    }

    #[test]
    fn removed_names_can_be_rebound() {
        let script = "node a\nnode b\nconnect a b\nremove a\nnode a\nconnect b a\nnodes\nedges\n";
        let (result, out) = run_script(script, true);
        assert_eq!(
            result.unwrap(),
            Summary {
                executed: 8,
                failed: 0
            }
        );
        assert_eq!(out, "nodes: b a\nedges: b->a\n");
    }

    #[test]
    fn session_exposes_graph() {
        let lines = parse("node a\nnode b\nconnect a b\n").unwrap();
        let mut session = Session::new();
        session.run(&lines, true, &mut Vec::<u8>::new()).unwrap();
        assert_eq!(session.graph().node_count(), 2);
        assert_eq!(session.graph().edge_count(), 1);
    }
}
