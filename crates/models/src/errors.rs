use thiserror::Error;

use crate::catalog::CatalogError;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("database error: {0}")]
    Db(String),
}
