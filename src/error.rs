use std::{io::Error, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PasteError {
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: Error,
    },

    #[error("cannot read {} after line {line}: {source}", .path.display())]
    Read {
        path: PathBuf,
        line: usize,
        #[source]
        source: Error,
    },

    /// the last entry of the chain is the file whose inclusion closed the cycle
    #[error("include cycle detected: {}", display_chain(.chain))]
    IncludeCycle { chain: Vec<PathBuf> },

    #[error("including {} would exceed the maximum include depth of {depth}", .path.display())]
    MaxIncludeDepth { path: PathBuf, depth: usize },

    #[error("cannot write output: {0}")]
    Write(#[source] Error),
}

pub type Result<T> = std::result::Result<T, PasteError>;

fn display_chain(chain: &[PathBuf]) -> String {
    chain
        .iter()
        .map(|path| path.display().to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}
