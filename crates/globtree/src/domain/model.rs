//! Domain models for tree nodes, selection modes, and resolved selections.

use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::errors::ExplorerError;

/// Node kind, serialized as `"file"` or `"folder"` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    File,
    Folder,
}

/// One node of the listed tree.
///
/// The serialized field names (`path`, `type`, `children`) are part of the
/// external contract; `children` is `null` for files and a (possibly empty)
/// array for folders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    pub path: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub children: Option<Vec<TreeNode>>,
}

impl TreeNode {
    pub fn file(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: NodeKind::File,
            children: None,
        }
    }

    pub fn folder(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: NodeKind::Folder,
            children: Some(Vec::new()),
        }
    }
}

/// Selection mode, fixed at construction.
///
/// `Directory` is accepted for compatibility with existing callers and
/// resolves like `Multiple`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileCount {
    Single,
    #[default]
    Multiple,
    Directory,
}

impl FromStr for FileCount {
    type Err = ExplorerError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "single" => Ok(Self::Single),
            "multiple" => Ok(Self::Multiple),
            "directory" => Ok(Self::Directory),
            other => Err(ExplorerError::InvalidFileCount(other.to_owned())),
        }
    }
}

/// Result of resolving a selection, shaped by [`FileCount`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    Single(PathBuf),
    Multiple(Vec<PathBuf>),
}

impl Resolved {
    /// Flatten into the resolved paths regardless of mode.
    pub fn into_paths(self) -> Vec<PathBuf> {
        match self {
            Self::Single(path) => vec![path],
            Self::Multiple(paths) => paths,
        }
    }
}
