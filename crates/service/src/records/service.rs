use std::sync::Arc;

use models::catalog::{self, CatalogEntry};
use models::service_record::{self, Model};
use tracing::{info, instrument, warn};

use crate::errors::ServiceError;
use crate::records::criteria::RecordCriteria;
use crate::records::domain::{NewRecord, RecordChanges};
use crate::records::filter::filter_records;
use crate::records::repository::{RecordRepository, ValidatedRecord};

/// Application service encapsulating service-record business rules.
/// Validation happens here; the repository only stores.
pub struct RecordService<R: RecordRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: RecordRepository + ?Sized> RecordService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub fn catalog(&self) -> Vec<CatalogEntry> { catalog::catalog_entries() }

    /// Check the (service, price) pair, then the fields, then persist.
    #[instrument(skip(self, input), fields(service = %input.service, client_type = %input.client_type))]
    pub async fn create(&self, input: NewRecord) -> Result<Model, ServiceError> {
        let (service, price) = catalog::validate_quote(&input.service, input.price).map_err(|e| {
            warn!(error = %e, "record_rejected_by_catalog");
            e
        })?;
        service_record::validate_plate(&input.plate)?;
        service_record::validate_model(&input.model)?;
        service_record::validate_client_type(&input.client_type)?;

        let created = self
            .repo
            .insert(ValidatedRecord {
                plate: input.plate,
                model: input.model,
                client_type: input.client_type,
                service,
                price,
                paid: input.paid,
            })
            .await?;
        info!(id = created.id, "record_created");
        Ok(created)
    }

    /// Full snapshot from storage, then filtered and ordered newest first.
    pub async fn list(&self, criteria: &RecordCriteria) -> Result<Vec<Model>, ServiceError> {
        let all = self.repo.list_all().await?;
        Ok(filter_records(&all, criteria))
    }

    pub async fn get(&self, id: i32) -> Result<Model, ServiceError> {
        self.repo.get(id).await?.ok_or_else(|| ServiceError::not_found("service_record"))
    }

    /// Partial update. When the change touches service or price, the merged
    /// pair must still match the catalog; other edits are not re-checked.
    #[instrument(skip(self, changes))]
    pub async fn update(&self, id: i32, changes: RecordChanges) -> Result<Model, ServiceError> {
        if let Some(p) = &changes.plate { service_record::validate_plate(p)?; }
        if let Some(m) = &changes.model { service_record::validate_model(m)?; }
        if let Some(c) = &changes.client_type { service_record::validate_client_type(c)?; }

        if changes.touches_pricing() {
            let current = self.get(id).await?;
            let service = changes.service.as_deref().unwrap_or(&current.service);
            let price = changes.price.unwrap_or(current.price);
            catalog::validate_service_and_price(service, price)?;
        }

        let updated = self.repo.update(id, &changes).await?;
        info!(id = updated.id, active = updated.active, paid = updated.paid, "record_updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        if self.repo.delete(id).await? {
            info!(id, "record_deleted");
            Ok(())
        } else {
            Err(ServiceError::not_found("service_record"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::catalog::CatalogError;
    use models::errors::ModelError;
    use rust_decimal::Decimal;

    use crate::records::memory::InMemoryRecordRepository;

    fn svc() -> RecordService<dyn RecordRepository> {
        let repo: Arc<dyn RecordRepository> = Arc::new(InMemoryRecordRepository::new());
        RecordService::new(repo)
    }

    fn new_record(service: &str, price: i64, client_type: &str, paid: bool) -> NewRecord {
        NewRecord {
            plate: "ABC1D23".into(),
            model: "Fiat Uno".into(),
            client_type: client_type.into(),
            service: service.into(),
            price: Some(Decimal::from(price)),
            paid,
        }
    }

    #[tokio::test]
    async fn create_accepts_catalog_price_and_starts_active() {
        let s = svc();
        let rec = s.create(new_record("LAVAGEM_SIMPLES_CERA", 55, "RUA", false)).await.unwrap();
        assert_eq!(rec.service, "LAVAGEM_SIMPLES_CERA");
        assert_eq!(rec.price, Decimal::from(55));
        assert!(rec.active);
        assert_eq!(s.get(rec.id).await.unwrap(), rec);
    }

    #[tokio::test]
    async fn create_rejects_price_mismatch_and_stores_nothing() {
        let s = svc();
        let err = s.create(new_record("LAVAGEM_SIMPLES_CERA", 50, "RUA", false)).await.unwrap_err();
        match err {
            ServiceError::Model(ModelError::Catalog(CatalogError::PriceMismatch { expected, .. })) => {
                assert_eq!(expected, Decimal::from(55))
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert!(s.list(&RecordCriteria::default()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_rejects_unknown_service() {
        let s = svc();
        let err = s.create(new_record("LAVAGEM_DE_PRATA", 50, "RUA", false)).await.unwrap_err();
        assert!(matches!(err, ServiceError::Model(ModelError::Catalog(CatalogError::InvalidService(_)))));
        assert!(err.is_client_error());
    }

    #[tokio::test]
    async fn create_without_price_is_a_catalog_rejection() {
        let s = svc();
        let mut input = new_record("LAVAGEM_SIMPLES_POR_BAIXO", 0, "RUA", false);
        input.price = None;
        let err = s.create(input).await.unwrap_err();
        match err {
            ServiceError::Model(ModelError::Catalog(CatalogError::PriceMismatch { expected, .. })) => {
                assert_eq!(expected, Decimal::from(100))
            }
            other => panic!("unexpected error {other:?}"),
        }

        let mut input = new_record("LAVAGEM_DE_PRATA", 0, "RUA", false);
        input.price = None;
        input.plate = String::new();
        let err = s.create(input).await.unwrap_err();
        assert!(matches!(err, ServiceError::Model(ModelError::Catalog(CatalogError::InvalidService(_)))));
    }

    #[tokio::test]
    async fn create_rejects_bad_plate() {
        let s = svc();
        let mut input = new_record("LAVAGEM_SIMPLES", 50, "RUA", false);
        input.plate = "ABCDEFG".into();
        let err = s.create(input).await.unwrap_err();
        assert!(matches!(err, ServiceError::Model(ModelError::Validation(_))));
    }

    #[tokio::test]
    async fn list_applies_criteria_over_stored_records() {
        let s = svc();
        s.create(new_record("LAVAGEM_SIMPLES", 50, "EMPRESA", true)).await.unwrap();
        s.create(new_record("LAVAGEM_SIMPLES", 50, "RUA", true)).await.unwrap();
        let third = s.create(new_record("LAVAGEM_COMPLETA_MOTOR", 150, "EMPRESA", false)).await.unwrap();
        s.update(third.id, RecordChanges { active: Some(false), ..Default::default() }).await.unwrap();

        let all = s.list(&RecordCriteria::default()).await.unwrap();
        assert_eq!(all.len(), 3);
        assert!(all.windows(2).all(|w| w[0].created_at >= w[1].created_at));

        let c = RecordCriteria::default().client_type(Some("EMPRESA")).paid(Some("pagos"));
        let paid_corporate = s.list(&c).await.unwrap();
        assert_eq!(paid_corporate.len(), 1);
        assert!(paid_corporate.iter().all(|r| r.paid && r.client_type == "EMPRESA"));

        let inactive = s.list(&RecordCriteria::default().status(Some("inativos"))).await.unwrap();
        assert_eq!(inactive.iter().map(|r| r.id).collect::<Vec<_>>(), vec![third.id]);
    }

    #[tokio::test]
    async fn update_revalidates_service_and_price_together() {
        let s = svc();
        let rec = s.create(new_record("LAVAGEM_SIMPLES", 50, "RUA", false)).await.unwrap();

        // new service without its price: stored price 50 no longer matches
        let err = s
            .update(rec.id, RecordChanges { service: Some("LAVAGEM_COMPLETA_MOTOR".into()), ..Default::default() })
            .await
            .unwrap_err();
        assert!(err.is_client_error());

        let ok = s
            .update(
                rec.id,
                RecordChanges {
                    service: Some("LAVAGEM_COMPLETA_MOTOR".into()),
                    price: Some(Decimal::from(150)),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(ok.service, "LAVAGEM_COMPLETA_MOTOR");
        assert_eq!(ok.price, Decimal::from(150));

        let err = s
            .update(rec.id, RecordChanges { price: Some(Decimal::from(10)), ..Default::default() })
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Model(ModelError::Catalog(CatalogError::PriceMismatch { .. }))));
    }

    #[tokio::test]
    async fn toggling_flags_skips_catalog_check() {
        let s = svc();
        let rec = s.create(new_record("LAVAGEM_SIMPLES", 50, "RUA", false)).await.unwrap();
        let u = s
            .update(rec.id, RecordChanges { paid: Some(true), active: Some(false), ..Default::default() })
            .await
            .unwrap();
        assert!(u.paid);
        assert!(!u.active);
        assert_eq!(u.created_at, rec.created_at);
    }

    #[tokio::test]
    async fn missing_records_are_not_found() {
        let s = svc();
        assert!(matches!(s.get(42).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(s.delete(42).await, Err(ServiceError::NotFound(_))));
        let res = s.update(42, RecordChanges { price: Some(Decimal::from(50)), ..Default::default() }).await;
        assert!(matches!(res, Err(ServiceError::NotFound(_))));
        let res = s.update(42, RecordChanges { paid: Some(true), ..Default::default() }).await;
        assert!(matches!(res, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn delete_removes_the_record() {
        let s = svc();
        let rec = s.create(new_record("LAVAGEM_SIMPLES", 50, "RUA", false)).await.unwrap();
        s.delete(rec.id).await.unwrap();
        assert!(matches!(s.get(rec.id).await, Err(ServiceError::NotFound(_))));
    }

    #[test]
    fn catalog_lists_four_services() {
        assert_eq!(svc().catalog().len(), 4);
    }
}
