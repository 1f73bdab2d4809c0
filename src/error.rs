use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("film with id = {0} does not exist")]
    FilmNotFound(i64),

    #[error("user with id = {0} does not exist")]
    UserNotFound(i64),

    #[error("genre with id = {0} does not exist")]
    GenreNotFound(i64),

    #[error("rating with id = {0} does not exist")]
    RatingNotFound(i64),

    #[error("constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("malformed stored date: {0}")]
    MalformedDate(#[from] jiff::Error),

    #[error(transparent)]
    Database(#[from] DbErr),
}

impl StoreError {
    pub(crate) fn from_write(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(msg))
            | Some(SqlErr::UniqueConstraintViolation(msg)) => Self::ConstraintViolation(msg),
            _ => Self::Database(err),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
