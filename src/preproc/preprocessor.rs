use std::{
    io::Write,
    iter,
    path::{Path, PathBuf},
    rc::Rc,
};

use log::{debug, trace, warn};

use crate::{
    error::{PasteError, Result},
    source::file::SourceFile,
};

use super::{
    directive::{PPLine, QuoteMode},
    file::FileManager,
    ppinclude::PPInclude,
};

pub const MAX_INCLUDE_DEPTH: usize = 1024;

#[derive(Debug, Clone)]
pub struct ExpandOptions {
    pub quote_mode: QuoteMode,
    /// deepest include nesting allowed; the root file sits at depth 0
    pub max_depth: usize,
    /// directory include names are resolved against, empty for the working directory
    pub base_dir: PathBuf,
}

impl Default for ExpandOptions {
    fn default() -> Self {
        Self {
            quote_mode: QuoteMode::default(),
            max_depth: MAX_INCLUDE_DEPTH,
            base_dir: PathBuf::new(),
        }
    }
}

pub struct Preprocessor {
    files: Rc<FileManager>,
    quote_mode: QuoteMode,
    max_depth: usize,
}

impl Preprocessor {
    pub fn new(opts: ExpandOptions) -> Self {
        Self {
            files: Rc::new(FileManager::new(opts.base_dir)),
            quote_mode: opts.quote_mode,
            max_depth: opts.max_depth,
        }
    }

    /// entry point for expansion. the root file is opened immediately, so a
    /// missing root fails here before any line is produced.
    pub fn expand<P: AsRef<Path>>(&self, path: P) -> Result<Expansion<'static>> {
        let path = self.files.resolve(path);
        let source = self.files.open(&path)?;
        debug!(
            "expanding {} (base {:?})",
            path.display(),
            self.files.base()
        );
        Ok(self.expand_source(source))
    }

    /// expand an already opened source, e.g. one built with [`SourceFile::inline`]
    pub fn expand_source<'a>(&self, source: SourceFile<'a>) -> Expansion<'a> {
        let id = FileManager::identity(source.path());
        Expansion {
            files: self.files.clone(),
            quote_mode: self.quote_mode,
            max_depth: self.max_depth,
            stack: vec![Frame { source, id }],
            done: false,
        }
    }

    /// Writes every expanded line to `out` as soon as it is produced, each
    /// followed by a newline. Returns the number of lines written. Lines written
    /// before an error stay written.
    pub fn expand_to<P: AsRef<Path>, W: Write>(&self, path: P, out: &mut W) -> Result<usize> {
        let mut count = 0;
        for line in self.expand(path)? {
            writeln!(out, "{}", line?).map_err(PasteError::Write)?;
            count += 1;
        }
        Ok(count)
    }
}

struct Frame<'a> {
    source: SourceFile<'a>,
    id: PathBuf,
}

/// Lazy depth-first expansion of one root file. Each frame on the stack is a
/// file whose lines are partly consumed; the top frame is the one being read.
/// After the first error the iterator is exhausted.
pub struct Expansion<'a> {
    files: Rc<FileManager>,
    quote_mode: QuoteMode,
    max_depth: usize,
    stack: Vec<Frame<'a>>,
    done: bool,
}

impl<'a> Expansion<'a> {
    /// number of files currently open, the root included
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    fn advance(&mut self) -> Result<Option<String>> {
        loop {
            let Some(frame) = self.stack.last_mut() else {
                return Ok(None);
            };
            let line = frame.source.next_line().map_err(|source| PasteError::Read {
                path: frame.source.path().to_path_buf(),
                line: frame.source.line_no(),
                source,
            })?;
            match line {
                None => {
                    if let Some(done) = self.stack.pop() {
                        debug!("finished {}", done.source.path().display());
                    }
                }
                Some(line) => match PPLine::classify(&line, self.quote_mode) {
                    PPLine::Text(text) => return Ok(Some(text)),
                    PPLine::Include(inc) => self.include(&inc)?,
                },
            }
        }
    }

    fn include(&mut self, inc: &PPInclude) -> Result<()> {
        let path = self.files.resolve_include(inc);
        if let Some(top) = self.stack.last() {
            trace!(
                "{}:{}: include {:?}",
                top.source.path().display(),
                top.source.line_no(),
                inc.name()
            );
            if !inc.is_closed() {
                warn!(
                    "{}:{}: include name has no closing quote, using {:?}",
                    top.source.path().display(),
                    top.source.line_no(),
                    inc.name()
                );
            }
        }

        let id = FileManager::identity(&path);
        if let Some(start) = self.stack.iter().position(|frame| frame.id == id) {
            let chain = self.stack[start..]
                .iter()
                .map(|frame| frame.source.path().to_path_buf())
                .chain(iter::once(path))
                .collect();
            return Err(PasteError::IncludeCycle { chain });
        }
        if self.stack.len() > self.max_depth {
            return Err(PasteError::MaxIncludeDepth {
                path,
                depth: self.max_depth,
            });
        }

        let source = self.files.open(&path)?;
        debug!("entering {} at depth {}", path.display(), self.stack.len());
        self.stack.push(Frame { source, id });
        Ok(())
    }
}

impl<'a> Iterator for Expansion<'a> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.advance() {
            Ok(Some(line)) => Some(Ok(line)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                self.stack.clear();
                Some(Err(err))
            }
        }
    }
}
