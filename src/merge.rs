use tracing::debug;

use crate::index::{PageIndex, PageRecord};

impl PageIndex {
    /// Union `other` into `self`, page by page.
    ///
    /// Pages only present in `other` are moved over as-is. For pages present
    /// in both, every target of `other` is added along with the platforms
    /// and languages it carries.
    pub fn merge(&mut self, other: PageIndex) {
        for (name, incoming) in other.pages {
            match self.pages.get_mut(&name) {
                Some(existing) => {
                    for platform in &incoming.platform {
                        existing.add_platform(platform);
                    }
                    for language in &incoming.language {
                        existing.add_language(language);
                    }
                    for target in &incoming.targets {
                        existing.add_target(target);
                    }
                }
                None => {
                    self.pages.insert(name, incoming);
                }
            }
        }
    }

    /// Consume the index and return its records ordered by page name.
    ///
    /// Only the page order is deterministic; the attribute lists inside each
    /// record keep whatever order they were accumulated in.
    pub fn into_sorted(self) -> Vec<PageRecord> {
        let mut records: Vec<PageRecord> = self.pages.into_values().collect();
        records.sort_unstable_by(|a, b| a.name.cmp(&b.name));
        records
    }
}

/// Fold partial indexes into a single global index.
///
/// The result's set contents do not depend on the order of `partials`.
pub fn merge_all<I>(partials: I) -> PageIndex
where
    I: IntoIterator<Item = PageIndex>,
{
    partials.into_iter().fold(PageIndex::new(), |mut acc, partial| {
        debug!(pages = partial.len(), "merging partial index");
        acc.merge(partial);
        acc
    })
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::partition::partition;

    const PLATFORMS: &[&str] = &["common", "linux", "osx", "windows"];
    const ROOTS: &[&str] = &["pages", "pages.fr", "pages.de", "pages.ja"];
    const NAMES: &[&str] = &["ls", "cp", "git", "tar", "docker", "7z"];

    fn assert_same(a: &PageIndex, b: &PageIndex) {
        assert_eq!(a.len(), b.len());
        for (name, record) in &a.pages {
            let other = b.get(name).unwrap_or_else(|| panic!("missing {name}"));
            assert!(
                record.same_variants(other),
                "{record:?} != {other:?}"
            );
        }
    }

    #[test]
    fn disjoint_pages_are_kept() {
        let a = PageIndex::from_paths(&["pages/linux/ls.md"]).unwrap();
        let b = PageIndex::from_paths(&["pages/linux/cp.md"]).unwrap();

        let merged = merge_all([a, b]);
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn overlapping_pages_are_unioned() {
        let a = PageIndex::from_paths(&["pages.fr/linux/ls.md"]).unwrap();
        let b = PageIndex::from_paths(&[
            "pages/linux/ls.md",
            "pages.fr/linux/ls.md",
        ])
        .unwrap();

        let merged = merge_all([a, b]);
        let ls = merged.get("ls").unwrap();
        assert_eq!(ls.platform, vec!["linux"]);
        assert_eq!(ls.language.len(), 2);
        assert!(ls.language.contains(&"fr".to_string()));
        assert!(ls.language.contains(&"en".to_string()));
        assert_eq!(ls.targets.len(), 2);
    }

    #[test]
    fn merging_empty_partials_is_empty() {
        let merged = merge_all(vec![PageIndex::new(), PageIndex::new()]);
        assert!(merged.is_empty());
        assert!(merge_all(Vec::<PageIndex>::new()).into_sorted().is_empty());
    }

    #[test]
    fn sorted_output_is_strictly_ascending() {
        let index = PageIndex::from_paths(&[
            "pages/linux/tar.md",
            "pages/common/7z.md",
            "pages/osx/ls.md",
            "pages/common/Git.md",
            "pages/common/git.md",
        ])
        .unwrap();

        let names: Vec<_> =
            index.into_sorted().into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["7z", "Git", "git", "ls", "tar"]);
    }

    fn arb_paths() -> impl Strategy<Value = Vec<String>> {
        let path = (
            prop::sample::select(ROOTS),
            prop::sample::select(PLATFORMS),
            prop::sample::select(NAMES),
        )
            .prop_map(|(root, platform, name)| {
                format!("{root}/{platform}/{name}.md")
            });
        prop::collection::vec(path, 0..64)
    }

    proptest! {
        #[test]
        fn any_partition_and_merge_order_matches_single_pass(
            paths in arb_paths(),
            threads in 1usize..9,
            reverse in any::<bool>(),
        ) {
            let single = PageIndex::from_paths(&paths).unwrap();

            let mut partials: Vec<PageIndex> = partition(&paths, threads)
                .into_iter()
                .map(|chunk| PageIndex::from_paths(chunk).unwrap())
                .collect();
            if reverse {
                partials.reverse();
            }
            let merged = merge_all(partials);

            assert_same(&single, &merged);
        }

        #[test]
        fn merged_records_have_no_duplicates(
            paths in arb_paths(),
            threads in 1usize..9,
        ) {
            let partials: Vec<PageIndex> = partition(&paths, threads)
                .into_iter()
                .map(|chunk| PageIndex::from_paths(chunk).unwrap())
                .collect();

            for record in merge_all(partials).into_sorted() {
                for (i, target) in record.targets.iter().enumerate() {
                    prop_assert!(!record.targets[i + 1..].contains(target));
                    prop_assert!(record.platform.contains(&target.os));
                    prop_assert!(record.language.contains(&target.language));
                }
                for (i, p) in record.platform.iter().enumerate() {
                    prop_assert!(!record.platform[i + 1..].contains(p));
                }
                for (i, l) in record.language.iter().enumerate() {
                    prop_assert!(!record.language[i + 1..].contains(l));
                }
            }
        }
    }
}
