/// Thread budget for `available` execution units: half of them, at least one.
///
/// Discovery and output stay on the main thread, so the other half is left
/// for the rest of the system.
pub fn thread_budget(available: usize) -> usize {
    (available / 2).max(1)
}

/// Thread budget for the current machine.
pub fn default_thread_budget() -> usize {
    thread_budget(num_cpus::get())
}

/// Split `files` into exactly `threads` contiguous chunks of
/// `ceil(n / threads)` items.
///
/// Trailing chunks may be shorter or empty, so every worker always gets a
/// chunk even when there are fewer files than threads. A budget of zero is
/// treated as one.
pub fn partition<T>(files: &[T], threads: usize) -> Vec<&[T]> {
    let threads = threads.max(1);
    let chunk_size = files.len().div_ceil(threads);

    (0..threads)
        .map(|i| {
            let start = (i * chunk_size).min(files.len());
            let end = (start + chunk_size).min(files.len());
            &files[start..end]
        })
        .collect()
}
