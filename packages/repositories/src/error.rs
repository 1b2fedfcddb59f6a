use std::fmt;

use sea_orm::DbErr;

#[derive(Debug)]
pub enum RepositoryError {
    NotFound { entity: &'static str, id: i32 },
    Database(DbErr),
}

impl From<DbErr> for RepositoryError {
    fn from(e: DbErr) -> Self {
        RepositoryError::Database(e)
    }
}

impl fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepositoryError::NotFound { entity, .. } => write!(f, "{} not found", entity),
            RepositoryError::Database(e) => write!(f, "Database error: {}", e),
        }
    }
}

impl std::error::Error for RepositoryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RepositoryError::Database(e) => Some(e),
            RepositoryError::NotFound { .. } => None,
        }
    }
}
