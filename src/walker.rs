use std::path::Path;

use globset::{Glob, GlobBuilder, GlobMatcher};
use tracing::{debug, trace};

use crate::{
    error::Result,
    page_path::{PAGE_EXTENSION, PAGES_ROOT},
};

/// Discovers page files below a root directory.
#[derive(Debug, Clone)]
pub struct PageWalker {
    /// Matches top-level directories worth descending into (`pages*`).
    roots: GlobMatcher,
    /// Matches page files by their root-relative path.
    pages: GlobMatcher,
}

impl PageWalker {
    pub fn new() -> Result<Self> {
        Self::with_pattern(&format!("{PAGES_ROOT}*/**/*{PAGE_EXTENSION}"))
    }

    /// Build a walker for a custom root-relative glob.
    ///
    /// `*` never crosses a `/`; use `**` for that. The first segment of the
    /// pattern decides which top-level directories are entered at all.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let pages = GlobBuilder::new(pattern)
            .literal_separator(true)
            .build()?
            .compile_matcher();
        let first = pattern.split('/').next().unwrap_or(pattern);
        let roots = Glob::new(first)?.compile_matcher();
        Ok(Self { roots, pages })
    }

    /// Recursively walk `root` and return every matching page path.
    ///
    /// Paths are relative to `root`, joined with `/`, and sorted. Hidden
    /// files and directories (names starting with `.`) are skipped, and
    /// symlinked directories are not followed.
    pub fn discover(&self, root: &Path) -> Result<Vec<String>> {
        let mut results = Vec::new();
        let mut prefix = Vec::new();
        self.walk_dir(root, &mut prefix, &mut results)?;
        results.sort();
        debug!(
            root = %root.display(),
            files = results.len(),
            "discovered pages"
        );
        Ok(results)
    }

    fn walk_dir(
        &self,
        current: &Path,
        prefix: &mut Vec<String>,
        results: &mut Vec<String>,
    ) -> Result<()> {
        for entry in std::fs::read_dir(current)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();

            // Skip hidden files and directories.
            if name.starts_with('.') {
                continue;
            }

            let file_type = entry.file_type()?;
            let path = entry.path();

            if file_type.is_dir() {
                if prefix.is_empty() && !self.roots.is_match(&name) {
                    trace!(dir = %name, "skipping top-level directory");
                    continue;
                }
                prefix.push(name);
                self.walk_dir(&path, prefix, results)?;
                prefix.pop();
            } else if file_type.is_file()
                || (file_type.is_symlink() && path.is_file())
            {
                let relative = join_relative(prefix, &name);
                if self.pages.is_match(&relative) {
                    results.push(relative);
                }
            }
        }

        Ok(())
    }
}

fn join_relative(prefix: &[String], name: &str) -> String {
    let mut relative = prefix.join("/");
    if !relative.is_empty() {
        relative.push('/');
    }
    relative.push_str(name);
    relative
}

/// Discover page files below `root` with the default `pages*/**/*.md`
/// pattern.
pub fn discover_pages(root: &Path) -> Result<Vec<String>> {
    PageWalker::new()?.discover(root)
}
