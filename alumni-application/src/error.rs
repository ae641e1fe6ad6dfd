use alumni_core::{repositories::Error as RepoError, usecases::Error as ParameterError};
use thiserror::Error;

pub use alumni_core::repositories;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> AppError {
        AppError::Business(BError::Repo(err))
    }
}

impl From<ParameterError> for AppError {
    fn from(err: ParameterError) -> AppError {
        AppError::Business(err.into())
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Business(#[from] BError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum BError {
    #[error(transparent)]
    Parameter(ParameterError),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

// Repository errors are always reported as such,
// no matter in which layer they occurred.
impl From<ParameterError> for BError {
    fn from(err: ParameterError) -> Self {
        match err {
            ParameterError::Repo(err) => Self::Repo(err),
            err => Self::Parameter(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unwrap_repository_errors_of_use_cases() {
        let err = AppError::from(ParameterError::Repo(RepoError::NotFound));
        assert!(matches!(
            err,
            AppError::Business(BError::Repo(RepoError::NotFound))
        ));
        let err = AppError::from(ParameterError::Forbidden);
        assert!(matches!(
            err,
            AppError::Business(BError::Parameter(ParameterError::Forbidden))
        ));
    }
}
