//! Fixed catalog of wash services and their mandatory prices.
//!
//! The catalog is closed: every record must name one of these services and
//! carry exactly its price at creation time. Clients send both values and the
//! server re-derives the price, so a tampered client cannot post an arbitrary
//! amount for a known service.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("invalid service: {0}")]
    InvalidService(String),
    #[error("incorrect price for service {service}; the correct price is R$ {expected}")]
    PriceMismatch { service: WashService, expected: Decimal },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WashService {
    Simple,
    SimpleWithWax,
    SimpleWithUnderbody,
    FullWithEngine,
}

impl WashService {
    pub const ALL: [WashService; 4] = [
        WashService::Simple,
        WashService::SimpleWithWax,
        WashService::SimpleWithUnderbody,
        WashService::FullWithEngine,
    ];

    /// Identifier stored in records and exchanged with the UI.
    pub fn identifier(self) -> &'static str {
        match self {
            WashService::Simple => "LAVAGEM_SIMPLES",
            WashService::SimpleWithWax => "LAVAGEM_SIMPLES_CERA",
            WashService::SimpleWithUnderbody => "LAVAGEM_SIMPLES_POR_BAIXO",
            WashService::FullWithEngine => "LAVAGEM_COMPLETA_MOTOR",
        }
    }

    pub fn price(self) -> Decimal {
        match self {
            WashService::Simple => Decimal::from(50),
            WashService::SimpleWithWax => Decimal::from(55),
            WashService::SimpleWithUnderbody => Decimal::from(100),
            WashService::FullWithEngine => Decimal::from(150),
        }
    }
}

impl fmt::Display for WashService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for WashService {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WashService::ALL
            .into_iter()
            .find(|svc| svc.identifier() == s)
            .ok_or_else(|| CatalogError::InvalidService(s.to_string()))
    }
}

/// One catalog line as rendered to clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogEntry {
    #[serde(rename = "descricao")]
    pub identifier: &'static str,
    #[serde(rename = "valor")]
    pub price: Decimal,
}

pub fn catalog_entries() -> Vec<CatalogEntry> {
    WashService::ALL
        .into_iter()
        .map(|svc| CatalogEntry { identifier: svc.identifier(), price: svc.price() })
        .collect()
}

/// Accept `service` only if it is in the catalog and `price` equals its
/// catalog price. Comparison is by value, so `55` and `55.00` match.
pub fn validate_service_and_price(service: &str, price: Decimal) -> Result<(WashService, Decimal), CatalogError> {
    let svc: WashService = service.parse()?;
    let expected = svc.price();
    if price != expected {
        return Err(CatalogError::PriceMismatch { service: svc, expected });
    }
    Ok((svc, expected))
}

/// Same check for a quote whose price may be absent or unreadable. An unknown
/// service is reported first; a missing price never matches.
pub fn validate_quote(service: &str, price: Option<Decimal>) -> Result<(WashService, Decimal), CatalogError> {
    match price {
        Some(price) => validate_service_and_price(service, price),
        None => {
            let svc: WashService = service.parse()?;
            Err(CatalogError::PriceMismatch { service: svc, expected: svc.price() })
        }
    }
}
