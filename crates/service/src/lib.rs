//! Service layer for car-wash service records.
//! - Catalog validation on create (and on updates touching service/price).
//! - Record filtering over a fetched snapshot, newest first.
//! - Storage behind `RecordRepository` (SeaORM or in-memory).

pub mod errors;
pub mod db;
pub mod records;
#[cfg(test)]
pub mod test_support;
