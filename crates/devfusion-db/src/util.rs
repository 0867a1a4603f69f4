use sea_orm::{DbErr, SqlErr, TransactionError};
use std::error::Error;

pub trait FlattenTransactionResultExt<T> {
    fn flatten_res(self) -> T;
}

pub trait InspectTransactionError<E> {
    #[must_use]
    fn inspect_transaction_err<F: FnOnce(&E)>(self, f: F) -> Self;
}

impl<T, E> FlattenTransactionResultExt<Result<T, E>> for Result<T, TransactionError<E>>
where
    E: From<DbErr> + Error,
{
    fn flatten_res(self) -> Result<T, E> {
        self.map_err(|err| match err {
            TransactionError::Connection(err) => E::from(err),
            TransactionError::Transaction(err) => err,
        })
    }
}

impl<T, E: Error> InspectTransactionError<E> for Result<T, TransactionError<E>> {
    fn inspect_transaction_err<F: FnOnce(&E)>(self, f: F) -> Self {
        if let Err(TransactionError::Transaction(err)) = &self {
            f(err);
        }
        self
    }
}

pub trait UniqueViolation {
    /// Detail of the violated unique constraint, if that is what failed
    fn unique_violation(&self) -> Option<String>;
}

impl UniqueViolation for DbErr {
    fn unique_violation(&self) -> Option<String> {
        match self.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => Some(detail),
            _ => None,
        }
    }
}
