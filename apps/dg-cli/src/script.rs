//! Line-oriented graph edit scripts.
//!
//! One command per line, whitespace separated. `#` starts a comment.
//! Names stay bound to their node after `remove`; `node` may rebind a name
//! only once its node is gone.
//!
//! ```text
//! node a
//! node b
//! connect a b
//! edges
//! ```

use crate::error::{CliError, CliResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create a node and bind it to a name.
    Node(String),
    Connect(String, String),
    Disconnect(String, String),
    Remove(String),
    /// Print live nodes.
    Nodes,
    /// Print live edges.
    Edges,
}

/// A parsed command with its 1-based source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub number: usize,
    pub command: Command,
}

/// Parse a whole script, stopping at the first malformed line.
pub fn parse(source: &str) -> CliResult<Vec<Line>> {
    let mut lines = Vec::new();
    for (idx, raw) in source.lines().enumerate() {
        let number = idx + 1;
        let text = raw.split('#').next().unwrap_or("").trim();
        if text.is_empty() {
            continue;
        }
        let command = parse_command(text).map_err(|message| CliError::Parse {
            line: number,
            message,
        })?;
        lines.push(Line { number, command });
    }
    Ok(lines)
}

fn parse_command(text: &str) -> Result<Command, String> {
    let words: Vec<&str> = text.split_whitespace().collect();
    let (keyword, args) = words
        .split_first()
        .ok_or_else(|| "empty command".to_string())?;

    let command = match (*keyword, args) {
        ("node", [name]) => Command::Node(name.to_string()),
        ("connect", [a, b]) => Command::Connect(a.to_string(), b.to_string()),
        ("disconnect", [a, b]) => Command::Disconnect(a.to_string(), b.to_string()),
        ("remove", [name]) => Command::Remove(name.to_string()),
        ("nodes", []) => Command::Nodes,
        ("edges", []) => Command::Edges,
        ("node" | "remove", _) => return Err(format!("'{keyword}' takes one node name")),
        ("connect" | "disconnect", _) => {
            return Err(format!("'{keyword}' takes an origin and a destination"));
        }
        ("nodes" | "edges", _) => return Err(format!("'{keyword}' takes no arguments")),
        _ => return Err(format!("unknown command '{keyword}'")),
    };
    Ok(command)
}
