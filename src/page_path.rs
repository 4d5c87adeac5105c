use crate::error::{Error, Result};

/// Top-level directory holding the default-language pages.
pub const PAGES_ROOT: &str = "pages";

/// Language assigned to pages found directly under [`PAGES_ROOT`].
pub const DEFAULT_LANGUAGE: &str = "en";

/// File extension every page carries.
pub const PAGE_EXTENSION: &str = ".md";

/// The (platform, page, language) triple encoded in one page file path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageVariant {
    pub platform: String,
    pub name: String,
    pub language: String,
}

/// Parse a `/`-separated relative path such as `pages.fr/linux/ls.md`.
///
/// The path must have exactly three non-empty segments: the language
/// directory (`pages` or `pages.<lang>`), the platform directory, and the
/// page file ending in `.md`. Anything else is [`Error::MalformedPath`].
///
/// ```
/// use pageindex::page_path::parse;
///
/// let variant = parse("pages.fr/linux/ls.md").unwrap();
/// assert_eq!(variant.platform, "linux");
/// assert_eq!(variant.name, "ls");
/// assert_eq!(variant.language, "fr");
/// ```
pub fn parse(path: &str) -> Result<PageVariant> {
    let malformed = |reason| Error::MalformedPath {
        path: path.to_string(),
        reason,
    };

    let segments: Vec<&str> = path.split('/').collect();
    let [root, platform, file] = segments.as_slice() else {
        return Err(malformed(if segments.len() < 3 {
            "expected <pages dir>/<platform>/<page>.md, found too few segments"
        } else {
            "expected <pages dir>/<platform>/<page>.md, found nested segments"
        }));
    };

    if root.is_empty() || platform.is_empty() || file.is_empty() {
        return Err(malformed("empty path segment"));
    }

    let name = file
        .strip_suffix(PAGE_EXTENSION)
        .filter(|stem| !stem.is_empty())
        .ok_or_else(|| malformed("page file must be a non-empty <name>.md"))?;

    let language = parse_language(root)
        .ok_or_else(|| malformed("empty language qualifier"))?;

    Ok(PageVariant {
        platform: platform.to_string(),
        name: name.to_string(),
        language: language.to_string(),
    })
}

fn parse_language(root: &str) -> Option<&str> {
    if root == PAGES_ROOT {
        return Some(DEFAULT_LANGUAGE);
    }

    match root
        .strip_prefix(PAGES_ROOT)
        .and_then(|rest| rest.strip_prefix('.'))
    {
        Some("") => None,
        Some(language) => Some(language),
        None => Some(root),
    }
}
