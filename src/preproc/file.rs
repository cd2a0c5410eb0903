use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    error::{PasteError, Result},
    source::file::SourceFile,
};

use super::ppinclude::PPInclude;

/// Resolves and opens files named on the command line or by include
/// directives. All names are taken relative to `base`; an empty base means the
/// current working directory.
#[derive(Debug, Clone, Default)]
pub struct FileManager {
    base: PathBuf,
}

impl FileManager {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &Path {
        self.base.as_path()
    }

    pub fn resolve<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        self.base.join(path)
    }

    pub fn resolve_include(&self, inc: &PPInclude) -> PathBuf {
        self.resolve(inc.name())
    }

    pub fn open(&self, path: &Path) -> Result<SourceFile<'static>> {
        SourceFile::open(path).map_err(|source| PasteError::Open {
            path: path.to_path_buf(),
            source,
        })
    }

    /// key under which a file is tracked while it is being expanded
    pub fn identity(path: &Path) -> PathBuf {
        fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
    }
}
