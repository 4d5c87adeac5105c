use std::{io::Write, path::Path, time::Instant};

use tracing::info;

use crate::{
    coordinator,
    emit::{self, OutputFormat},
    error::{Error, Result},
    index::PageRecord,
    merge,
    partition,
    walker,
};

/// Settings for one index build.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildOptions {
    /// Worker count; `None` uses [`partition::default_thread_budget`].
    pub threads: Option<usize>,
    pub format: OutputFormat,
}

impl BuildOptions {
    fn thread_budget(&self) -> Result<usize> {
        match self.threads {
            Some(0) => Err(Error::Config(
                "thread count must be at least 1".to_string(),
            )),
            Some(n) => Ok(n),
            None => Ok(partition::default_thread_budget()),
        }
    }
}

/// Partition `files`, index the chunks concurrently, merge the partial
/// indexes, and return the records sorted by page name.
///
/// Nothing is returned unless every worker succeeds.
pub fn build_index<S>(
    files: &[S],
    options: &BuildOptions,
) -> Result<Vec<PageRecord>>
where
    S: AsRef<str> + Sync,
{
    let threads = options.thread_budget()?;
    let chunks = partition::partition(files, threads);
    let partials = coordinator::run_workers(&chunks)?;
    let index = merge::merge_all(partials);

    info!(
        files = files.len(),
        pages = index.len(),
        variants = index.variant_count(),
        threads,
        "built page index"
    );

    Ok(index.into_sorted())
}

/// Discover pages below `root`, build the index, and write it to `out`.
///
/// On error nothing is written.
pub fn run<W: Write>(
    root: &Path,
    options: &BuildOptions,
    out: W,
) -> Result<()> {
    let started = Instant::now();

    let files = walker::discover_pages(root)?;
    let records = build_index(&files, options)?;
    emit::write_index(out, records, options.format)?;

    info!(elapsed_ms = started.elapsed().as_millis() as u64, "done");
    Ok(())
}
