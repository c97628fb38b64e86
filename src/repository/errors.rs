use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found")]
    NotFound,

    #[error("Storage lock poisoned")]
    LockPoisoned,
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl<T> From<std::sync::PoisonError<T>> for RepositoryError {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        RepositoryError::LockPoisoned
    }
}
