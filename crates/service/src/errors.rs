use models::catalog::CatalogError;
use models::errors::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    /// Errors caused by the request itself rather than by storage.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Model(ModelError::Validation(_) | ModelError::Catalog(_)))
    }
}

impl From<CatalogError> for ServiceError {
    fn from(e: CatalogError) -> Self { Self::Model(ModelError::Catalog(e)) }
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self {
        match e {
            sea_orm::DbErr::RecordNotFound(what) => Self::NotFound(what),
            sea_orm::DbErr::RecordNotUpdated => Self::not_found("service_record"),
            other => Self::Db(other.to_string()),
        }
    }
}
