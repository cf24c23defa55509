use anyhow::Result;
use migration::{Migrator, MigratorTrait};
use rust_decimal::Decimal;
use sea_orm::{DatabaseConnection, EntityTrait};

use crate::{catalog::WashService, db::connect, errors::ModelError, service_record};

async fn setup_test_db() -> Option<DatabaseConnection> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return None;
    }
    let db = match connect().await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("skip: cannot connect to db: {}", e);
            return None;
        }
    };
    if let Err(e) = Migrator::up(&db, None).await {
        eprintln!("skip: migrate up failed: {}", e);
        return None;
    }
    Some(db)
}

#[tokio::test]
async fn test_create_stamps_id_timestamp_and_active() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()); };

    let before = chrono::Utc::now();
    let rec = service_record::create(&db, "ABC1D23", "Fiat Uno", "RUA", WashService::SimpleWithWax, Decimal::from(55), false).await?;
    assert!(rec.id > 0);
    assert!(rec.active);
    assert!(rec.created_at.with_timezone(&chrono::Utc) >= before - chrono::Duration::seconds(5));

    let found = service_record::Entity::find_by_id(rec.id).one(&db).await?;
    let found = found.expect("record persisted");
    assert_eq!(found.service, "LAVAGEM_SIMPLES_CERA");
    assert_eq!(found.price, Decimal::from(55));
    assert_eq!(found.client_type, "RUA");

    service_record::Entity::delete_by_id(rec.id).exec(&db).await?;
    Ok(())
}

#[tokio::test]
async fn test_create_rejects_bad_plate_before_touching_db() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()); };

    let res = service_record::create(&db, "ABC123", "Gol", "EMPRESA", WashService::Simple, Decimal::from(50), true).await;
    assert!(matches!(res, Err(ModelError::Validation(_))));
    Ok(())
}
