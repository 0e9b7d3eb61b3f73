use std::io;
use std::path::PathBuf;

use dg_graph::GraphError;
use thiserror::Error;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Line {line}: unknown node name '{name}'")]
    UnknownName { line: usize, name: String },

    #[error("Line {line}: node name '{name}' is already bound")]
    DuplicateName { line: usize, name: String },

    #[error("Line {line}: {source}")]
    Graph {
        line: usize,
        #[source]
        source: GraphError,
    },

    #[error("{failed} command(s) failed")]
    CommandsFailed { failed: usize },

    #[error("Output error: {0}")]
    Output(#[from] io::Error),
}
