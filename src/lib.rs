//! pageindex - build a JSON index of documentation pages and their variants.
//!
//! Pages live in a tree shaped like `pages[.<lang>]/<platform>/<page>.md`.
//! pageindex discovers every page file, derives a (platform, page, language)
//! triple from each path, and aggregates them into one record per page
//! listing every platform, language, and realized (platform, language)
//! target. Files are indexed on parallel worker threads and the partial
//! indexes are merged into a single document sorted by page name.
//!
//! # Quick start
//!
//! ```
//! use pageindex::pipeline::{self, BuildOptions};
//!
//! let files = [
//!     "pages/linux/ls.md",
//!     "pages/osx/ls.md",
//!     "pages.fr/linux/ls.md",
//! ];
//! let records = pipeline::build_index(&files, &BuildOptions::default())?;
//!
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].name, "ls");
//! assert_eq!(records[0].targets.len(), 3);
//! # Ok::<(), pageindex::Error>(())
//! ```

pub mod coordinator;
pub mod emit;
pub mod error;
pub mod index;
pub mod merge;
pub mod page_path;
pub mod partition;
pub mod pipeline;
pub mod walker;

pub use emit::{IndexDocument, OutputFormat};
pub use error::{Error, Result};
pub use index::{PageIndex, PageRecord, Target};
pub use page_path::PageVariant;
pub use pipeline::BuildOptions;
