//! Service records: domain inputs, list criteria, filtering, storage and the
//! application service tying them together.

pub mod domain;
pub mod criteria;
pub mod filter;
pub mod repository;
pub mod memory;
pub mod service;

pub use criteria::{ActiveState, PaidState, RecordCriteria};
pub use domain::{NewRecord, RecordChanges};
pub use filter::filter_records;
pub use repository::{RecordRepository, SeaOrmRecordRepository, ValidatedRecord};
pub use memory::InMemoryRecordRepository;
pub use service::RecordService;
