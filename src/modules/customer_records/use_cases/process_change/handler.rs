// Change dispatcher: the single entry point for every change request.
//
// Responsibilities
// - Count the request, resolve its operation once, route it to the insert or delete handler.
// - Time the whole call against the processing timer.
// - Turn any failure a handler hands back into an ERROR result. Nothing escapes this boundary.

use crate::modules::customer_records::adapters::outbound::record_table::RecordTable;
use crate::modules::customer_records::core::change_request::ChangeRequest;
use crate::modules::customer_records::core::operation::Operation;
use crate::modules::customer_records::core::process_result::{ProcessResult, ProcessStatus};
use crate::modules::customer_records::use_cases::delete_record::handler::DeleteRecordHandler;
use crate::modules::customer_records::use_cases::errors::ApplicationError;
use crate::modules::customer_records::use_cases::insert_record::handler::InsertRecordHandler;
use crate::shared::infrastructure::metrics::Metrics;
use std::sync::Arc;
use std::time::Instant;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

pub struct ChangeDispatcher<TTable>
where
    TTable: RecordTable + 'static,
{
    insert_handler: Arc<InsertRecordHandler<TTable>>,
    delete_handler: Arc<DeleteRecordHandler<TTable>>,
    metrics: Arc<Metrics>,
}

impl<TTable> Clone for ChangeDispatcher<TTable>
where
    TTable: RecordTable + 'static,
{
    fn clone(&self) -> Self {
        Self {
            insert_handler: self.insert_handler.clone(),
            delete_handler: self.delete_handler.clone(),
            metrics: self.metrics.clone(),
        }
    }
}

impl<TTable> ChangeDispatcher<TTable>
where
    TTable: RecordTable + 'static,
{
    pub fn new(
        insert_handler: Arc<InsertRecordHandler<TTable>>,
        delete_handler: Arc<DeleteRecordHandler<TTable>>,
        metrics: Arc<Metrics>,
    ) -> Self {
        Self {
            insert_handler,
            delete_handler,
            metrics,
        }
    }

    /// Process the request on the caller's task.
    pub async fn process(&self, request: ChangeRequest) -> ProcessResult {
        info!(id = %request.id, operation = %request.operation, "Processing change request");
        self.metrics.record_event_received();
        let started = Instant::now();

        let result = match self.route(&request).await {
            Ok(result) => result,
            Err(failure) => {
                error!(id = %request.id, error = %failure, "Error processing change request");
                self.metrics.record_event_error();
                ProcessResult::for_request(&request, ProcessStatus::Error, format!("Error: {failure}"))
            }
        };

        self.metrics.record_processing_time(started.elapsed());
        result
    }

    /// Process the request on a worker task. Dropping the handle does not stop the work.
    pub fn process_async(&self, request: ChangeRequest) -> JoinHandle<ProcessResult> {
        let dispatcher = self.clone();
        tokio::spawn(async move { dispatcher.process(request).await })
    }

    async fn route(&self, request: &ChangeRequest) -> Result<ProcessResult, ApplicationError> {
        match Operation::parse(&request.operation) {
            Operation::Insert => self.insert_handler.handle(request).await,
            Operation::Delete => Ok(self.delete_handler.handle(request).await),
            Operation::Unknown(operation) => {
                warn!(id = %request.id, operation = %operation, "Unknown operation");
                self.metrics.record_event_error();
                Ok(ProcessResult::for_request(
                    request,
                    ProcessStatus::Error,
                    "Unknown operation",
                ))
            }
        }
    }
}
