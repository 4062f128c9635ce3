use async_graphql::{Context, Enum, InputObject, Object, Result as GqlResult, SimpleObject};
use chrono::{DateTime, Utc};

use crate::modules::customer_records::core::change_request::ChangeRequest;
use crate::modules::customer_records::core::process_result::{ProcessResult, ProcessStatus};
use crate::shared::infrastructure::metrics::MetricsSnapshot;
use crate::shell::state::AppState;

#[derive(InputObject)]
pub struct ChangeRequestInput {
    pub id: String,
    pub timestamp: String,
    pub operation: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
}

impl From<ChangeRequestInput> for ChangeRequest {
    fn from(input: ChangeRequestInput) -> Self {
        Self {
            id: input.id,
            timestamp: input.timestamp,
            operation: input.operation,
            name: input.name,
            email: input.email,
            address: input.address,
            phone: input.phone,
        }
    }
}

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
pub enum GqlProcessStatus {
    Success,
    Warning,
    Error,
}

impl From<ProcessStatus> for GqlProcessStatus {
    fn from(status: ProcessStatus) -> Self {
        match status {
            ProcessStatus::Success => GqlProcessStatus::Success,
            ProcessStatus::Warning => GqlProcessStatus::Warning,
            ProcessStatus::Error => GqlProcessStatus::Error,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlProcessResult {
    pub id: String,
    pub operation: String,
    pub status: GqlProcessStatus,
    pub processed_at: DateTime<Utc>,
    pub message: String,
}

impl From<ProcessResult> for GqlProcessResult {
    fn from(r: ProcessResult) -> Self {
        Self {
            id: r.id,
            operation: r.operation,
            status: r.status.into(),
            processed_at: r.processed_at,
            message: r.message,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlMetrics {
    pub inserts: u64,
    pub deletes: u64,
    pub store_errors: u64,
    pub events_received: u64,
    pub event_errors: u64,
    pub processing_count: u64,
    pub average_processing_ns: u64,
    pub items_count: u64,
}

impl From<MetricsSnapshot> for GqlMetrics {
    fn from(s: MetricsSnapshot) -> Self {
        Self {
            inserts: s.inserts,
            deletes: s.deletes,
            store_errors: s.store_errors,
            events_received: s.events_received,
            event_errors: s.event_errors,
            processing_count: s.processing_count,
            average_processing_ns: s.average_processing_ns(),
            items_count: s.items_count,
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn health(&self) -> &'static str {
        "Service is healthy"
    }

    async fn metrics(&self, context: &Context<'_>) -> GqlMetrics {
        let state = context.data_unchecked::<AppState>();
        state.metrics.snapshot().into()
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn process_change(
        &self,
        context: &Context<'_>,
        input: ChangeRequestInput,
    ) -> GqlResult<GqlProcessResult> {
        let state = context.data_unchecked::<AppState>();
        let result = state.dispatcher.process(input.into()).await;
        Ok(result.into())
    }
}
