use async_trait::async_trait;
use models::catalog::WashService;
use models::service_record::Model;
use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;
use crate::records::domain::RecordChanges;

/// Storage for service records. Implementations own `id` and `created_at`:
/// both are assigned on insert and never changed afterwards.
#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// Consistent snapshot of every stored record.
    async fn list_all(&self) -> Result<Vec<Model>, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<Model>, ServiceError>;
    async fn insert(&self, record: ValidatedRecord) -> Result<Model, ServiceError>;
    async fn update(&self, id: i32, changes: &RecordChanges) -> Result<Model, ServiceError>;
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
}

/// Creation input that already passed field and catalog validation.
#[derive(Debug, Clone)]
pub struct ValidatedRecord {
    pub plate: String,
    pub model: String,
    pub client_type: String,
    pub service: WashService,
    pub price: Decimal,
    pub paid: bool,
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmRecordRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmRecordRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl RecordRepository for SeaOrmRecordRepository {
    async fn list_all(&self) -> Result<Vec<Model>, ServiceError> {
        crate::db::record_service::list_records(&self.db).await
    }

    async fn get(&self, id: i32) -> Result<Option<Model>, ServiceError> {
        crate::db::record_service::get_record(&self.db, id).await
    }

    async fn insert(&self, r: ValidatedRecord) -> Result<Model, ServiceError> {
        crate::db::record_service::create_record(&self.db, &r.plate, &r.model, &r.client_type, r.service, r.price, r.paid).await
    }

    async fn update(&self, id: i32, changes: &RecordChanges) -> Result<Model, ServiceError> {
        crate::db::record_service::update_record(&self.db, id, changes).await
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        crate::db::record_service::delete_record(&self.db, id).await
    }
}
