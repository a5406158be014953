use thiserror::Error;

pub type RepositoryResult<T> = Result<T, RepositoryError>;

#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error(transparent)]
    Database(#[from] surrealdb::Error),
    #[error("Malformed record: {0}")]
    MalformedRecord(String),
    #[error("Statement returned no record: {0}")]
    EmptyResult(&'static str),
}
