use crate::modules::customer_records::adapters::outbound::record_store::RecordStore;
use crate::modules::customer_records::adapters::outbound::record_table::{
    RecordTable, RecordTableError,
};
use crate::modules::customer_records::core::change_request::ChangeRequest;
use crate::modules::customer_records::core::process_result::{ProcessResult, ProcessStatus};
use crate::shared::infrastructure::metrics::Metrics;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

pub struct DeleteRecordHandler<TTable>
where
    TTable: RecordTable + 'static,
{
    store: Arc<RecordStore<TTable>>,
    metrics: Arc<Metrics>,
}

enum Deletion {
    Deleted,
    NotFound,
}

impl<TTable> DeleteRecordHandler<TTable>
where
    TTable: RecordTable + 'static,
{
    pub fn new(store: Arc<RecordStore<TTable>>, metrics: Arc<Metrics>) -> Self {
        Self { store, metrics }
    }

    /// Delete the addressed record if it exists. Store failures are recovered here and
    /// counted as event errors on top of the store's own error count.
    pub async fn handle(&self, request: &ChangeRequest) -> ProcessResult {
        debug!(id = %request.id, "Handling DELETE operation");

        match self.delete_existing(request).await {
            Ok(Deletion::Deleted) => {
                info!(id = %request.id, "Successfully deleted data");
                ProcessResult::for_request(request, ProcessStatus::Success, "Data deleted successfully")
            }
            Ok(Deletion::NotFound) => {
                warn!(
                    id = %request.id,
                    timestamp = %request.timestamp,
                    "Item not found for deletion"
                );
                ProcessResult::for_request(
                    request,
                    ProcessStatus::Warning,
                    "Item not found for deletion",
                )
            }
            Err(failure) => {
                error!(id = %request.id, error = %failure, "Error deleting data");
                self.metrics.record_event_error();
                ProcessResult::for_request(
                    request,
                    ProcessStatus::Error,
                    format!("Error deleting data: {failure}"),
                )
            }
        }
    }

    async fn delete_existing(&self, request: &ChangeRequest) -> Result<Deletion, RecordTableError> {
        if self.store.get(&request.id, &request.timestamp).await?.is_none() {
            return Ok(Deletion::NotFound);
        }
        self.store.delete(&request.id, &request.timestamp).await?;
        Ok(Deletion::Deleted)
    }
}
