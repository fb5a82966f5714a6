//! The file explorer facade: list a tree of matching paths under a fixed
//! root and resolve selections back to absolute paths.

use std::env;
use std::path::{Component, Path, PathBuf};

use anyhow::Result;

use crate::app::{scan, tree};
use crate::domain::errors::ExplorerError;
use crate::domain::model::{FileCount, Resolved, TreeNode};

/// Default inclusion pattern: everything with an extension, recursively.
pub const DEFAULT_GLOB: &str = "**/*.*";

/// Immutable explorer configuration, fixed at construction.
///
/// All operations are stateless given this configuration; nothing persists
/// between a listing and a later resolution, and all filesystem access is
/// read-only.
#[derive(Debug, Clone)]
pub struct FileExplorer {
    root: PathBuf,
    glob: String,
    ignore_glob: Option<String>,
    file_count: FileCount,
}

impl FileExplorer {
    /// Create an explorer rooted at `root`. A relative root is resolved
    /// against the current working directory and normalized.
    pub fn new(root: impl AsRef<Path>) -> Result<Self, ExplorerError> {
        Ok(Self {
            root: absolutize(root.as_ref())?,
            glob: DEFAULT_GLOB.to_owned(),
            ignore_glob: None,
            file_count: FileCount::default(),
        })
    }

    pub fn with_glob(mut self, glob: impl Into<String>) -> Self {
        self.glob = glob.into();
        self
    }

    pub fn with_ignore_glob(mut self, ignore_glob: Option<String>) -> Self {
        self.ignore_glob = ignore_glob;
        self
    }

    pub fn with_file_count(mut self, file_count: FileCount) -> Self {
        self.file_count = file_count;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Enumerate paths matching the inclusion glob, drop those matching the
    /// exclusion glob, and fold the remainder into a tree. A path matching
    /// both globs is always excluded.
    pub fn list_tree(&self) -> Result<Vec<TreeNode>> {
        let include = scan::build_matcher(&self.glob)?;
        let mut files = scan::enumerate(&self.root, &include)?;

        if let Some(ignore_glob) = &self.ignore_glob {
            let ignore = scan::build_matcher(ignore_glob)?;
            files.retain(|path| !ignore.is_match(path.as_str()));
        }

        Ok(tree::build(files))
    }

    /// Resolve user selections (ordered segment lists) to absolute paths.
    ///
    /// In single mode exactly one selection is accepted and a single path is
    /// returned; in multiple (or directory) mode every selection resolves.
    /// Any selection escaping the root fails the whole call; no partial
    /// result is returned.
    pub fn resolve_selection(&self, selections: &[Vec<String>]) -> Result<Resolved, ExplorerError> {
        match self.file_count {
            FileCount::Single => {
                if selections.len() > 1 {
                    return Err(ExplorerError::TooManySelected {
                        selected: selections.len(),
                    });
                }
                let segments = selections.first().ok_or(ExplorerError::EmptySelection)?;
                Ok(Resolved::Single(self.safe_join(segments)?))
            }
            FileCount::Multiple | FileCount::Directory => {
                let mut paths = Vec::with_capacity(selections.len());
                for segments in selections {
                    paths.push(self.safe_join(segments)?);
                }
                Ok(Resolved::Multiple(paths))
            }
        }
    }

    /// Convert paths back to root-relative segment lists for display. Paths
    /// outside the root are passed through split as-is; callers may hand us
    /// already-relative paths.
    pub fn to_display_segments(&self, paths: &[String]) -> Vec<Vec<String>> {
        paths.iter().map(|path| self.to_segments(path)).collect()
    }

    fn to_segments(&self, path: &str) -> Vec<String> {
        let stripped = Path::new(path)
            .strip_prefix(&self.root)
            .map(|rel| rel.display().to_string())
            .unwrap_or_else(|_| path.to_owned());
        stripped
            .split(std::path::MAIN_SEPARATOR)
            .map(str::to_owned)
            .collect()
    }

    /// Join the root with `segments` and normalize. Fails atomically when
    /// the normalized result is not component-wise contained in the root, so
    /// a sibling such as `/root-evil` never passes for `/root`.
    pub fn safe_join(&self, segments: &[String]) -> Result<PathBuf, ExplorerError> {
        let mut combined = self.root.clone();
        for segment in segments {
            combined.push(segment);
        }
        let absolute = normalize(&combined);
        if !absolute.starts_with(&self.root) {
            tracing::warn!(path = %absolute.display(), "rejected selection outside root");
            return Err(ExplorerError::OutsideRoot { path: absolute });
        }
        Ok(absolute)
    }
}

fn absolutize(path: &Path) -> Result<PathBuf, ExplorerError> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()?.join(path)
    };
    Ok(normalize(&absolute))
}

/// Lexical normalization: resolve `.` and `..` and drop redundant
/// separators without touching the filesystem. `..` at the root is
/// absorbed, matching how absolute paths normalize.
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
