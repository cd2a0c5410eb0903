use std::path::PathBuf;

use clap::Parser;

use crate::preproc::{
    directive::QuoteMode,
    preprocessor::{ExpandOptions, MAX_INCLUDE_DEPTH},
};

/// Inline every local `#include "file"` directive of a root file, recursively,
/// and print the flattened result to stdout.
#[derive(Debug, Clone, Parser)]
#[command(name = "pasteinc", version)]
pub struct Cli {
    /// root file to expand
    pub root: PathBuf,

    /// only treat `#include "name"` as a directive when the closing quote is present
    #[arg(long)]
    pub strict: bool,

    /// maximum include nesting depth
    #[arg(long, value_name = "N", default_value_t = MAX_INCLUDE_DEPTH)]
    pub max_depth: usize,
}

impl Cli {
    pub fn options(&self) -> ExpandOptions {
        ExpandOptions {
            quote_mode: if self.strict {
                QuoteMode::Strict
            } else {
                QuoteMode::Lenient
            },
            max_depth: self.max_depth,
            ..ExpandOptions::default()
        }
    }
}
