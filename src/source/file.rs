use std::{
    fmt::Debug,
    fs::File,
    io::Error,
    path::{Path, PathBuf},
};

use crate::read::LineReader;

/// An opened text source and the path it was opened under. The underlying
/// handle is released when the `SourceFile` is dropped.
pub struct SourceFile<'read> {
    path: PathBuf,
    lines: LineReader<'read>,
}

impl Debug for SourceFile<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("path", &self.path)
            .field("line_no", &self.lines.line_no())
            .finish()
    }
}

pub const PATH_INLINE: &str = "<inline>";

impl<'read> SourceFile<'read> {
    fn new(path: PathBuf, lines: LineReader<'read>) -> Self {
        Self { path, lines }
    }

    pub fn path(&self) -> &Path {
        self.path.as_path()
    }

    pub fn line_no(&self) -> usize {
        self.lines.line_no()
    }

    pub fn inline(input: &'read str) -> Self {
        Self::new(
            PathBuf::from(PATH_INLINE),
            LineReader::new(Box::new(input.as_bytes())),
        )
    }

    pub fn next_line(&mut self) -> Result<Option<String>, Error> {
        self.lines.read()
    }
}

impl SourceFile<'static> {
    pub fn open(path: &Path) -> Result<Self, Error> {
        let file = File::open(path)?;
        Ok(Self::new(path.to_path_buf(), LineReader::new(Box::new(file))))
    }
}
