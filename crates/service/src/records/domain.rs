use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// Creation input as sent by the UI. `id`, `active` and the timestamp are
/// not accepted here; storage assigns them.
///
/// Missing text fields read as empty and are rejected by validation. A
/// missing, `null` or non-numeric `valor` reads as `None` and is rejected by
/// the catalog check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRecord {
    #[serde(rename = "placa", default)]
    pub plate: String,
    #[serde(rename = "modelo", default)]
    pub model: String,
    #[serde(rename = "tipoCliente", default)]
    pub client_type: String,
    #[serde(rename = "descricao", default)]
    pub service: String,
    #[serde(rename = "valor", default, deserialize_with = "lenient_price")]
    pub price: Option<Decimal>,
    #[serde(rename = "pago", default)]
    pub paid: bool,
}

fn lenient_price<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Decimal>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    #[allow(dead_code)]
    enum Raw {
        Price(Decimal),
        Other(serde::de::IgnoredAny),
    }
    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Price(p)) => Some(p),
        Some(Raw::Other(_)) | None => None,
    })
}

/// Partial update; absent fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordChanges {
    #[serde(rename = "placa", default)]
    pub plate: Option<String>,
    #[serde(rename = "modelo", default)]
    pub model: Option<String>,
    #[serde(rename = "tipoCliente", default)]
    pub client_type: Option<String>,
    #[serde(rename = "descricao", default)]
    pub service: Option<String>,
    #[serde(rename = "valor", default)]
    pub price: Option<Decimal>,
    #[serde(rename = "pago", default)]
    pub paid: Option<bool>,
    #[serde(rename = "ativo", default)]
    pub active: Option<bool>,
}

impl RecordChanges {
    pub fn is_empty(&self) -> bool {
        self.plate.is_none()
            && self.model.is_none()
            && self.client_type.is_none()
            && !self.touches_pricing()
            && self.paid.is_none()
            && self.active.is_none()
    }

    pub fn touches_pricing(&self) -> bool {
        self.service.is_some() || self.price.is_some()
    }

    /// Write the present fields onto `record`.
    pub fn apply_to(&self, record: &mut models::service_record::Model) {
        if let Some(p) = &self.plate { record.plate = p.clone(); }
        if let Some(m) = &self.model { record.model = m.clone(); }
        if let Some(c) = &self.client_type { record.client_type = c.clone(); }
        if let Some(s) = &self.service { record.service = s.clone(); }
        if let Some(v) = self.price { record.price = v; }
        if let Some(b) = self.paid { record.paid = b; }
        if let Some(b) = self.active { record.active = b; }
    }
}
