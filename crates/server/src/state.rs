use std::sync::Arc;

use service::records::{RecordRepository, RecordService};

/// Shared handler state; cheap to clone per request.
#[derive(Clone)]
pub struct ServerState {
    pub records: Arc<RecordService<dyn RecordRepository>>,
}

impl ServerState {
    pub fn new(repo: Arc<dyn RecordRepository>) -> Self {
        Self { records: Arc::new(RecordService::new(repo)) }
    }
}
