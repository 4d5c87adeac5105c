use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    page_path::{self, PageVariant},
};

/// One realized (platform, language) combination of a page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Target {
    pub os: String,
    pub language: String,
}

/// All known variants of a single page.
///
/// The lists are duplicate-free and keep first-seen order. That order depends
/// on how files were partitioned across workers and is not meaningful.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecord {
    pub name: String,
    pub platform: Vec<String>,
    pub language: Vec<String>,
    pub targets: Vec<Target>,
}

impl PageRecord {
    fn new(variant: PageVariant) -> Self {
        let target = Target {
            os: variant.platform.clone(),
            language: variant.language.clone(),
        };
        Self {
            name: variant.name,
            platform: vec![variant.platform],
            language: vec![variant.language],
            targets: vec![target],
        }
    }

    pub(crate) fn add_platform(&mut self, platform: &str) {
        push_unique(&mut self.platform, platform);
    }

    pub(crate) fn add_language(&mut self, language: &str) {
        push_unique(&mut self.language, language);
    }

    /// Record a target, registering its platform and language as well.
    pub(crate) fn add_target(&mut self, target: &Target) {
        self.add_platform(&target.os);
        self.add_language(&target.language);
        if !self.targets.contains(target) {
            self.targets.push(target.clone());
        }
    }

    /// Set semantics: list order is ignored.
    pub fn same_variants(&self, other: &PageRecord) -> bool {
        fn same<T: PartialEq>(a: &[T], b: &[T]) -> bool {
            a.len() == b.len() && a.iter().all(|x| b.contains(x))
        }
        self.name == other.name
            && same(&self.platform, &other.platform)
            && same(&self.language, &other.language)
            && same(&self.targets, &other.targets)
    }
}

fn push_unique(values: &mut Vec<String>, value: &str) {
    if !values.iter().any(|v| v == value) {
        values.push(value.to_string());
    }
}

/// Mapping from page name to its aggregated record.
#[derive(Debug, Clone, Default)]
pub struct PageIndex {
    pub(crate) pages: HashMap<String, PageRecord>,
}

impl PageIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index covering exactly `paths`.
    ///
    /// Stops at the first path that fails to parse.
    pub fn from_paths<S: AsRef<str>>(paths: &[S]) -> Result<Self> {
        let mut index = Self::new();
        for path in paths {
            index.insert(page_path::parse(path.as_ref())?);
        }
        Ok(index)
    }

    /// Add one variant, creating the page record on first sighting.
    pub fn insert(&mut self, variant: PageVariant) {
        match self.pages.get_mut(&variant.name) {
            Some(record) => record.add_target(&Target {
                os: variant.platform,
                language: variant.language,
            }),
            None => {
                self.pages
                    .insert(variant.name.clone(), PageRecord::new(variant));
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&PageRecord> {
        self.pages.get(name)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Number of distinct (page, platform, language) variants.
    pub fn variant_count(&self) -> usize {
        self.pages.values().map(|r| r.targets.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(os: &str, language: &str) -> Target {
        Target {
            os: os.to_string(),
            language: language.to_string(),
        }
    }

    #[test]
    fn same_page_on_two_platforms() {
        let index =
            PageIndex::from_paths(&["pages/linux/ls.md", "pages/osx/ls.md"])
                .unwrap();

        assert_eq!(index.len(), 1);
        let ls = index.get("ls").unwrap();
        assert_eq!(ls.platform, vec!["linux", "osx"]);
        assert_eq!(ls.language, vec!["en"]);
        assert_eq!(
            ls.targets,
            vec![target("linux", "en"), target("osx", "en")]
        );
    }

    #[test]
    fn same_page_in_two_languages() {
        let index = PageIndex::from_paths(&[
            "pages.fr/linux/ls.md",
            "pages/linux/ls.md",
        ])
        .unwrap();

        let ls = index.get("ls").unwrap();
        assert_eq!(ls.platform, vec!["linux"]);
        assert_eq!(ls.language, vec!["fr", "en"]);
        assert_eq!(
            ls.targets,
            vec![target("linux", "fr"), target("linux", "en")]
        );
    }

    #[test]
    fn targets_are_not_the_cross_product() {
        let index = PageIndex::from_paths(&[
            "pages/linux/tar.md",
            "pages.de/osx/tar.md",
        ])
        .unwrap();

        let tar = index.get("tar").unwrap();
        assert_eq!(tar.platform.len(), 2);
        assert_eq!(tar.language.len(), 2);
        assert_eq!(tar.targets.len(), 2);
        assert!(!tar.targets.contains(&target("osx", "en")));
    }

    #[test]
    fn repeated_paths_do_not_duplicate() {
        let index = PageIndex::from_paths(&[
            "pages/linux/ls.md",
            "pages/linux/ls.md",
            "pages/linux/cp.md",
        ])
        .unwrap();

        assert_eq!(index.len(), 2);
        assert_eq!(index.variant_count(), 2);
        let ls = index.get("ls").unwrap();
        assert_eq!(ls.platform.len(), 1);
        assert_eq!(ls.language.len(), 1);
        assert_eq!(ls.targets.len(), 1);
    }

    #[test]
    fn input_order_does_not_change_contents() {
        let paths = [
            "pages/linux/ls.md",
            "pages.fr/osx/ls.md",
            "pages/common/git.md",
            "pages.ja/common/git.md",
        ];
        let mut reversed = paths;
        reversed.reverse();

        let a = PageIndex::from_paths(&paths).unwrap();
        let b = PageIndex::from_paths(&reversed).unwrap();

        assert_eq!(a.len(), b.len());
        for (name, record) in &a.pages {
            assert!(record.same_variants(b.get(name).unwrap()));
        }
    }

    #[test]
    fn empty_input_builds_empty_index() {
        let index = PageIndex::from_paths::<&str>(&[]).unwrap();
        assert!(index.is_empty());
    }

    #[test]
    fn malformed_path_aborts_the_fold() {
        let err = PageIndex::from_paths(&["pages/linux/ls.md", "pages/ls.md"])
            .unwrap_err();
        assert!(matches!(err, crate::Error::MalformedPath { .. }));
    }
}
