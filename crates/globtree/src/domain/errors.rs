//! Domain-specific errors.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExplorerError {
    #[error("invalid value for file_count: {0:?} (choose one of: single, multiple, directory)")]
    InvalidFileCount(String),
    #[error("expected only one selection, but {selected} were selected")]
    TooManySelected { selected: usize },
    #[error("expected one selection, but none was supplied")]
    EmptySelection,
    #[error("attempted to navigate outside of root directory: {}", path.display())]
    OutsideRoot { path: PathBuf },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
