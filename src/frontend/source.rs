use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Debug)]
pub enum FileName {
    Real(PathBuf),
    Stdin,
}

impl From<PathBuf> for FileName {
    fn from(path: PathBuf) -> Self {
        FileName::Real(path)
    }
}

/// A build file together with its full text.
#[derive(Debug)]
pub struct SourceFile {
    pub name: FileName,
    pub content: String,
    path: Arc<Path>,
}

impl SourceFile {
    pub fn new(name: FileName, mut content: String) -> SourceFile {
        if content.starts_with('\u{FEFF}') {
            // Skip BOM
            content.remove(0);
        }
        let path: Arc<Path> = match &name {
            FileName::Real(path) => Arc::from(path.as_path()),
            FileName::Stdin => Arc::from(Path::new("<stdin>")),
        };
        SourceFile {
            name,
            content,
            path,
        }
    }

    /// The path stamped into every location of this file.
    pub fn path(&self) -> Arc<Path> {
        self.path.clone()
    }

    /// Returns the 1-based line, or an empty string if it is out of range.
    pub fn line(&self, line_number: u32) -> &str {
        if line_number == 0 {
            return "";
        }
        self.content
            .split('\n')
            .nth(line_number as usize - 1)
            .map(|line| line.trim_end_matches('\r'))
            .unwrap_or("")
    }
}
