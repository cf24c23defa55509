use models::catalog::WashService;
use models::service_record::{self, Entity as ServiceRecordEntity};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use crate::errors::ServiceError;
use crate::records::domain::RecordChanges;

/// Every record, newest first.
pub async fn list_records(db: &DatabaseConnection) -> Result<Vec<service_record::Model>, ServiceError> {
    let rows = ServiceRecordEntity::find()
        .order_by_desc(service_record::Column::CreatedAt)
        .order_by_desc(service_record::Column::Id)
        .all(db)
        .await?;
    Ok(rows)
}

/// Insert a record whose service and price were already validated.
pub async fn create_record(
    db: &DatabaseConnection,
    plate: &str,
    model: &str,
    client_type: &str,
    service: WashService,
    price: rust_decimal::Decimal,
    paid: bool,
) -> Result<service_record::Model, ServiceError> {
    let created = service_record::create(db, plate, model, client_type, service, price, paid).await?;
    Ok(created)
}

pub async fn get_record(db: &DatabaseConnection, id: i32) -> Result<Option<service_record::Model>, ServiceError> {
    let found = ServiceRecordEntity::find_by_id(id).one(db).await?;
    Ok(found)
}

/// Apply the present fields of `changes`; `id` and `created_at` are never written.
pub async fn update_record(
    db: &DatabaseConnection,
    id: i32,
    changes: &RecordChanges,
) -> Result<service_record::Model, ServiceError> {
    let current = ServiceRecordEntity::find_by_id(id).one(db).await?;
    let Some(existing) = current else { return Err(ServiceError::not_found("service_record")); };
    if changes.is_empty() {
        return Ok(existing);
    }
    let mut am: service_record::ActiveModel = existing.into();
    if let Some(p) = &changes.plate { am.plate = Set(p.clone()); }
    if let Some(m) = &changes.model { am.model = Set(m.clone()); }
    if let Some(c) = &changes.client_type { am.client_type = Set(c.clone()); }
    if let Some(s) = &changes.service { am.service = Set(s.clone()); }
    if let Some(v) = changes.price { am.price = Set(v); }
    if let Some(b) = changes.paid { am.paid = Set(b); }
    if let Some(b) = changes.active { am.active = Set(b); }
    let updated = am.update(db).await?;
    Ok(updated)
}

/// Delete a record; returns true if a row was removed.
pub async fn delete_record(db: &DatabaseConnection, id: i32) -> Result<bool, ServiceError> {
    let res = ServiceRecordEntity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}
