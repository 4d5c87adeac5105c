pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid glob pattern: {0}")]
    Glob(#[from] globset::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("could not start worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("malformed page path '{path}': {reason}")]
    MalformedPath { path: String, reason: &'static str },

    #[error("worker {worker} failed: {source}")]
    Worker {
        worker: usize,
        #[source]
        source: Box<Error>,
    },

    #[error("worker {worker} panicked: {message}")]
    WorkerPanicked { worker: usize, message: String },
}
