//! Filesystem enumeration for glob patterns.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;

use crate::app::pattern;

/// Compile a (possibly brace-alternated) glob pattern into a matcher over
/// root-relative paths.
pub fn build_matcher(raw: &str) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for expanded in pattern::expand(raw) {
        let glob = GlobBuilder::new(&expanded)
            .literal_separator(true)
            .build()
            .with_context(|| format!("invalid glob pattern: {expanded:?}"))?;
        builder.add(glob);
    }
    builder.build().context("failed to build glob matcher")
}

/// Walk `root` and collect the relative paths matching `matcher`, normalized
/// to `/` separators. Entries that fail to read are logged and skipped; a
/// missing or unreadable root is an error.
pub fn enumerate(root: &Path, matcher: &GlobSet) -> Result<Vec<String>> {
    fs::metadata(root).with_context(|| format!("cannot access root: {}", root.display()))?;

    let mut walker = WalkBuilder::new(root);
    // This core carries its own exclusion mechanism; the walker must not
    // filter anything on its own.
    walker
        .ignore(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .hidden(false);

    let mut matched = Vec::new();
    for entry in walker.build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!(error = %err, "walk error");
                continue;
            }
        };
        if entry.depth() == 0 {
            continue;
        }
        let rel = entry.path().strip_prefix(root).unwrap_or(entry.path());
        let rel = to_wire_path(rel);
        if matcher.is_match(&rel) {
            matched.push(rel);
        }
    }

    tracing::debug!(count = matched.len(), root = %root.display(), "enumerated matches");
    Ok(matched)
}

fn to_wire_path(path: &Path) -> String {
    let display = path.display().to_string();
    if std::path::MAIN_SEPARATOR == '/' {
        display
    } else {
        display.replace(std::path::MAIN_SEPARATOR, "/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn matches_recursive_globs() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let root = temp.path();

        fs::create_dir_all(root.join("src/app"))?;
        fs::write(root.join("src/lib.rs"), b"")?;
        fs::write(root.join("src/app/mod.rs"), b"")?;
        fs::write(root.join("notes.txt"), b"")?;

        let matcher = build_matcher("**/*.rs")?;
        let mut paths = enumerate(root, &matcher)?;
        paths.sort();

        assert_eq!(paths, vec!["src/app/mod.rs", "src/lib.rs"]);
        Ok(())
    }

    #[test]
    fn brace_groups_match_either_alternative() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let root = temp.path();

        fs::write(root.join("a.py"), b"")?;
        fs::write(root.join("b.js"), b"")?;
        fs::write(root.join("c.rs"), b"")?;

        let matcher = build_matcher("**/*.{py,js}")?;
        let mut paths = enumerate(root, &matcher)?;
        paths.sort();

        assert_eq!(paths, vec!["a.py", "b.js"]);
        Ok(())
    }

    #[test]
    fn star_does_not_cross_separators() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let root = temp.path();

        fs::create_dir_all(root.join("deep"))?;
        fs::write(root.join("top.txt"), b"")?;
        fs::write(root.join("deep/nested.txt"), b"")?;

        let matcher = build_matcher("*.txt")?;
        let paths = enumerate(root, &matcher)?;

        assert_eq!(paths, vec!["top.txt"]);
        Ok(())
    }

    #[test]
    fn hidden_files_are_enumerated() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let root = temp.path();

        fs::write(root.join(".hidden.txt"), b"")?;

        let matcher = build_matcher("*.txt")?;
        let paths = enumerate(root, &matcher)?;

        assert_eq!(paths, vec![".hidden.txt"]);
        Ok(())
    }

    #[test]
    fn missing_root_is_an_error() -> Result<()> {
        let matcher = build_matcher("*")?;
        let result = enumerate(Path::new("/definitely/not/a/real/dir"), &matcher);
        assert!(result.is_err());
        Ok(())
    }

    #[test]
    fn invalid_pattern_is_reported() {
        assert!(build_matcher("a[").is_err());
    }
}
