use chrono::{DateTime, FixedOffset, Offset, TimeZone, Utc};
use rust_decimal::Decimal;
use sea_orm::{entity::prelude::*, ActiveModelTrait, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use crate::{catalog::WashService, errors};

/// Civil offset of the business (São Paulo, no DST): UTC-03:00.
pub const BUSINESS_UTC_OFFSET_SECS: i32 = -3 * 3600;

pub const PLATE_LEN: usize = 7;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "service_record")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[serde(rename = "placa")]
    pub plate: String,
    #[serde(rename = "modelo")]
    pub model: String,
    #[serde(rename = "tipoCliente")]
    pub client_type: String,
    #[serde(rename = "descricao")]
    pub service: String,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    #[serde(rename = "valor")]
    pub price: Decimal,
    #[serde(rename = "pago")]
    pub paid: bool,
    #[serde(rename = "ativo")]
    pub active: bool,
    #[serde(rename = "dataHora")]
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Same record with `created_at` expressed in the business offset.
    pub fn in_business_time(mut self) -> Self {
        self.created_at = to_business_time(self.created_at);
        self
    }
}

pub fn business_offset() -> FixedOffset {
    FixedOffset::east_opt(BUSINESS_UTC_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}

pub fn to_business_time<Tz: TimeZone>(at: DateTime<Tz>) -> DateTime<FixedOffset> {
    at.with_timezone(&business_offset())
}

/// Plates are exactly 7 ASCII letters/digits with at least one of each.
pub fn validate_plate(plate: &str) -> Result<(), errors::ModelError> {
    if plate.chars().count() != PLATE_LEN {
        return Err(errors::ModelError::Validation(format!("plate must have exactly {PLATE_LEN} characters")));
    }
    if !plate.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(errors::ModelError::Validation("plate must contain only letters and digits".into()));
    }
    let has_letter = plate.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = plate.chars().any(|c| c.is_ascii_digit());
    if !(has_letter && has_digit) {
        return Err(errors::ModelError::Validation("plate must contain letters and digits".into()));
    }
    Ok(())
}

pub fn validate_model(model: &str) -> Result<(), errors::ModelError> {
    if model.trim().is_empty() {
        return Err(errors::ModelError::Validation("vehicle model is required".into()));
    }
    Ok(())
}

pub fn validate_client_type(client_type: &str) -> Result<(), errors::ModelError> {
    if client_type.trim().is_empty() {
        return Err(errors::ModelError::Validation("client type is required".into()));
    }
    Ok(())
}

/// Insert a record already checked against the catalog. `id` and
/// `created_at` are assigned here and never taken from callers.
pub async fn create(
    db: &DatabaseConnection,
    plate: &str,
    model: &str,
    client_type: &str,
    service: WashService,
    price: Decimal,
    paid: bool,
) -> Result<Model, errors::ModelError> {
    validate_plate(plate)?;
    validate_model(model)?;
    validate_client_type(client_type)?;

    let am = ActiveModel {
        plate: Set(plate.to_string()),
        model: Set(model.to_string()),
        client_type: Set(client_type.to_string()),
        service: Set(service.identifier().to_string()),
        price: Set(price),
        paid: Set(paid),
        active: Set(true),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plate_accepts_mixed_alphanumerics() {
        assert!(validate_plate("ABC1D23").is_ok());
        assert!(validate_plate("abc1234").is_ok());
        assert!(validate_plate("1A23456").is_ok());
    }

    #[test]
    fn plate_rejects_wrong_length_or_alphabet() {
        assert!(validate_plate("ABC123").is_err());
        assert!(validate_plate("ABC12345").is_err());
        assert!(validate_plate("ABC-123").is_err());
        assert!(validate_plate("ABCDEFG").is_err());
        assert!(validate_plate("1234567").is_err());
        assert!(validate_plate("ÁBC1234").is_err());
    }

    #[test]
    fn blank_model_and_client_type_are_rejected() {
        assert!(validate_model("  ").is_err());
        assert!(validate_model("Fiat Uno").is_ok());
        assert!(validate_client_type("").is_err());
        assert!(validate_client_type("EMPRESA").is_ok());
    }

    #[test]
    fn business_time_keeps_the_instant() {
        let utc = Utc.with_ymd_and_hms(2024, 1, 10, 2, 30, 0).unwrap();
        let local = to_business_time(utc);
        assert_eq!(local, utc);
        assert_eq!(local.offset().local_minus_utc(), BUSINESS_UTC_OFFSET_SECS);
        assert_eq!(local.to_rfc3339(), "2024-01-09T23:30:00-03:00");
    }
}
