//! Process-local record store for running without Postgres.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use models::service_record::Model;
use tokio::sync::RwLock;

use crate::errors::ServiceError;
use crate::records::domain::RecordChanges;
use crate::records::repository::{RecordRepository, ValidatedRecord};

#[derive(Default)]
struct Table {
    next_id: i32,
    rows: BTreeMap<i32, Model>,
}

#[derive(Default)]
pub struct InMemoryRecordRepository {
    table: RwLock<Table>,
}

impl InMemoryRecordRepository {
    pub fn new() -> Self { Self::default() }
}

#[async_trait]
impl RecordRepository for InMemoryRecordRepository {
    async fn list_all(&self) -> Result<Vec<Model>, ServiceError> {
        let table = self.table.read().await;
        Ok(table.rows.values().rev().cloned().collect())
    }

    async fn get(&self, id: i32) -> Result<Option<Model>, ServiceError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn insert(&self, r: ValidatedRecord) -> Result<Model, ServiceError> {
        let mut table = self.table.write().await;
        table.next_id += 1;
        let model = Model {
            id: table.next_id,
            plate: r.plate,
            model: r.model,
            client_type: r.client_type,
            service: r.service.identifier().to_string(),
            price: r.price,
            paid: r.paid,
            active: true,
            created_at: Utc::now().into(),
        };
        table.rows.insert(model.id, model.clone());
        Ok(model)
    }

    async fn update(&self, id: i32, changes: &RecordChanges) -> Result<Model, ServiceError> {
        let mut table = self.table.write().await;
        let row = table.rows.get_mut(&id).ok_or_else(|| ServiceError::not_found("service_record"))?;
        changes.apply_to(row);
        Ok(row.clone())
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(self.table.write().await.rows.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::catalog::WashService;
    use rust_decimal::Decimal;

    fn validated(plate: &str) -> ValidatedRecord {
        ValidatedRecord {
            plate: plate.into(),
            model: "Palio".into(),
            client_type: "RUA".into(),
            service: WashService::SimpleWithUnderbody,
            price: Decimal::from(100),
            paid: false,
        }
    }

    #[tokio::test]
    async fn ids_are_sequential_and_never_reused() {
        let repo = InMemoryRecordRepository::new();
        let a = repo.insert(validated("AAA1111")).await.unwrap();
        let b = repo.insert(validated("BBB2222")).await.unwrap();
        assert_eq!((a.id, b.id), (1, 2));
        assert!(repo.delete(b.id).await.unwrap());
        let c = repo.insert(validated("CCC3333")).await.unwrap();
        assert_eq!(c.id, 3);
        assert!(c.active);
        assert_eq!(c.service, "LAVAGEM_SIMPLES_POR_BAIXO");
    }

    #[tokio::test]
    async fn update_keeps_id_and_timestamp() {
        let repo = InMemoryRecordRepository::new();
        let a = repo.insert(validated("AAA1111")).await.unwrap();
        let changes = RecordChanges { model: Some("Strada".into()), active: Some(false), ..Default::default() };
        let u = repo.update(a.id, &changes).await.unwrap();
        assert_eq!(u.id, a.id);
        assert_eq!(u.created_at, a.created_at);
        assert_eq!(u.model, "Strada");
        assert!(!u.active);
        assert_eq!(repo.get(a.id).await.unwrap(), Some(u));
    }

    #[tokio::test]
    async fn list_all_returns_newest_id_first() {
        let repo = InMemoryRecordRepository::new();
        for plate in ["AAA1111", "BBB2222", "CCC3333"] {
            repo.insert(validated(plate)).await.unwrap();
        }
        let ids: Vec<i32> = repo.list_all().await.unwrap().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[tokio::test]
    async fn missing_rows_report_not_found() {
        let repo = InMemoryRecordRepository::new();
        assert!(repo.get(9).await.unwrap().is_none());
        assert!(!repo.delete(9).await.unwrap());
        let res = repo.update(9, &RecordChanges::default()).await;
        assert!(matches!(res, Err(ServiceError::NotFound(_))));
    }
}
