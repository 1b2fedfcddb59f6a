use std::fmt;

use async_graphql::{Error, ErrorExtensions};
use repositories::RepositoryError;

/// Errors a resolver can report. Each one is sent to the client with a
/// `code` extension next to its message.
#[derive(Debug)]
pub enum GraphqlError {
    NotFound { entity: &'static str },
    BadUserInput { message: String },
    /// Store failures. The underlying error is logged, never sent.
    Database,
}

impl GraphqlError {
    pub fn code(&self) -> &'static str {
        match self {
            GraphqlError::NotFound { .. } => "NOT_FOUND",
            GraphqlError::BadUserInput { .. } => "BAD_USER_INPUT",
            GraphqlError::Database => "DATABASE_ERROR",
        }
    }
}

impl From<RepositoryError> for GraphqlError {
    fn from(e: RepositoryError) -> Self {
        match e {
            RepositoryError::NotFound { entity, .. } => GraphqlError::NotFound { entity },
            RepositoryError::Database(e) => {
                tracing::error!(error = %e, "database error");
                GraphqlError::Database
            }
        }
    }
}

impl fmt::Display for GraphqlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphqlError::NotFound { entity } => write!(f, "{} not found", entity),
            GraphqlError::BadUserInput { message } => f.write_str(message),
            GraphqlError::Database => f.write_str("Database error"),
        }
    }
}

impl ErrorExtensions for GraphqlError {
    fn extend(&self) -> Error {
        let code = self.code();
        Error::new(self.to_string()).extend_with(|_, e| e.set("code", code))
    }
}

pub(crate) fn to_graphql_error(e: RepositoryError) -> Error {
    GraphqlError::from(e).extend()
}
