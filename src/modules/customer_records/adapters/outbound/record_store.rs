// Record store over a RecordTable.
//
// Responsibilities
// - Default the TTL on records that arrive without one, and stamp the write time.
// - Count every successful insert/delete and every failed put/delete/get.
// - Return table failures unchanged; nothing is retried here.

use crate::modules::customer_records::adapters::outbound::record_table::{
    RecordTable, RecordTableError,
};
use crate::modules::customer_records::core::record::Record;
use crate::shared::infrastructure::metrics::Metrics;
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_RECORD_TTL: Duration = Duration::from_secs(7 * 24 * 60 * 60);

pub struct RecordStore<TTable>
where
    TTable: RecordTable + 'static,
{
    table: Arc<TTable>,
    metrics: Arc<Metrics>,
    ttl: Duration,
}

impl<TTable> RecordStore<TTable>
where
    TTable: RecordTable + 'static,
{
    pub fn new(table: Arc<TTable>, metrics: Arc<Metrics>) -> Self {
        Self {
            table,
            metrics,
            ttl: DEFAULT_RECORD_TTL,
        }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Write the record and return it as stored, with its final TTL and write time.
    pub async fn put(&self, mut record: Record) -> Result<Record, RecordTableError> {
        let now = Utc::now();
        if record.expiry_time.is_none() {
            let ttl_secs = i64::try_from(self.ttl.as_secs()).unwrap_or(i64::MAX);
            record.expiry_time = Some(now.timestamp().saturating_add(ttl_secs));
        }
        record.processed_at = now;

        self.table
            .put_item(record.clone())
            .await
            .inspect_err(|_| self.metrics.record_store_error())?;
        self.metrics.record_insert();
        Ok(record)
    }

    pub async fn delete(&self, customer_id: &str, record_id: &str) -> Result<(), RecordTableError> {
        self.table
            .delete_item(customer_id, record_id)
            .await
            .inspect_err(|_| self.metrics.record_store_error())?;
        self.metrics.record_delete();
        Ok(())
    }

    pub async fn get(
        &self,
        customer_id: &str,
        record_id: &str,
    ) -> Result<Option<Record>, RecordTableError> {
        self.table
            .get_item(customer_id, record_id)
            .await
            .inspect_err(|_| self.metrics.record_store_error())
    }

    /// Total number of records in the table. Failures here are not operation errors.
    pub async fn count(&self) -> Result<u64, RecordTableError> {
        self.table.item_count().await
    }
}
