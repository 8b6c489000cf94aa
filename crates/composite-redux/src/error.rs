use thiserror::Error;

/// Errors raised while setting up a store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to spawn store worker thread: {0}")]
    Spawn(#[from] std::io::Error),
}
