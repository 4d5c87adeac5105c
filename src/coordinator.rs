use std::{
    any::Any,
    panic::{self, AssertUnwindSafe},
};

use rayon::prelude::*;
use tracing::{debug, error};

use crate::{
    error::{Error, Result},
    index::PageIndex,
};

/// Index every chunk on its own worker thread and collect the partial
/// indexes.
///
/// Waits for all workers. If any of them fails, the first failure (by
/// worker number) is returned and every partial index is dropped.
pub fn run_workers<S>(chunks: &[&[S]]) -> Result<Vec<PageIndex>>
where
    S: AsRef<str> + Sync,
{
    run_workers_with(chunks, |chunk| PageIndex::from_paths(chunk))
}

/// Like [`run_workers`], with a custom per-chunk job.
pub fn run_workers_with<T, F>(
    chunks: &[&[T]],
    job: F,
) -> Result<Vec<PageIndex>>
where
    T: Sync,
    F: Fn(&[T]) -> Result<PageIndex> + Sync,
{
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(chunks.len().max(1))
        .thread_name(|i| format!("pageindex-worker-{i}"))
        .build()?;

    let outcomes: Vec<Result<PageIndex>> = pool.install(|| {
        chunks
            .par_iter()
            .enumerate()
            .map(|(worker, &chunk)| run_one(worker, chunk, &job))
            .collect()
    });

    outcomes.into_iter().collect()
}

fn run_one<T, F>(worker: usize, chunk: &[T], job: &F) -> Result<PageIndex>
where
    F: Fn(&[T]) -> Result<PageIndex>,
{
    debug!(worker, files = chunk.len(), "worker started");

    match panic::catch_unwind(AssertUnwindSafe(|| job(chunk))) {
        Ok(Ok(index)) => {
            debug!(worker, pages = index.len(), "worker finished");
            Ok(index)
        }
        Ok(Err(source)) => {
            error!(worker, %source, "worker failed");
            Err(Error::Worker {
                worker,
                source: Box::new(source),
            })
        }
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            error!(worker, %message, "worker panicked");
            Err(Error::WorkerPanicked { worker, message })
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
