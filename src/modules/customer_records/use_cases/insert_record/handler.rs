use crate::modules::customer_records::adapters::outbound::record_store::RecordStore;
use crate::modules::customer_records::adapters::outbound::record_table::RecordTable;
use crate::modules::customer_records::core::change_request::ChangeRequest;
use crate::modules::customer_records::core::process_result::{ProcessResult, ProcessStatus};
use crate::modules::customer_records::core::record::Record;
use crate::modules::customer_records::use_cases::errors::ApplicationError;
use crate::shared::infrastructure::metrics::Metrics;
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, error, info};

pub struct InsertRecordHandler<TTable>
where
    TTable: RecordTable + 'static,
{
    store: Arc<RecordStore<TTable>>,
    metrics: Arc<Metrics>,
}

impl<TTable> InsertRecordHandler<TTable>
where
    TTable: RecordTable + 'static,
{
    pub fn new(store: Arc<RecordStore<TTable>>, metrics: Arc<Metrics>) -> Self {
        Self { store, metrics }
    }

    /// Persist the request as a record. A store failure is counted as an event error
    /// here and then propagates to the caller.
    pub async fn handle(&self, request: &ChangeRequest) -> Result<ProcessResult, ApplicationError> {
        debug!(id = %request.id, "Handling INSERT operation");

        let saved = self
            .store
            .put(to_record(request))
            .await
            .inspect_err(|failure| {
                error!(id = %request.id, error = %failure, "Error inserting data");
                self.metrics.record_event_error();
            })?;
        info!(id = %request.id, "Successfully inserted data");

        Ok(ProcessResult {
            id: saved.customer_id,
            operation: saved.operation,
            status: ProcessStatus::Success,
            processed_at: saved.processed_at,
            message: "Data inserted successfully".into(),
        })
    }
}

fn to_record(request: &ChangeRequest) -> Record {
    Record {
        customer_id: request.id.clone(),
        record_id: request.timestamp.clone(),
        operation: request.operation.clone(),
        name: request.name.clone(),
        email: request.email.clone(),
        address: request.address.clone(),
        phone: request.phone.clone(),
        expiry_time: None,
        processed_at: Utc::now(),
    }
}
