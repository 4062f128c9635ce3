// In memory implementation of the RecordTable port.
//
// Purpose
// - Support handler tests and local development without a database.
//
// Responsibilities
// - Store records in a map keyed by (customer_id, record_id); a put replaces the whole row.
// - Simulate backend outages for failure-path tests.

use crate::modules::customer_records::adapters::outbound::record_table::{
    RecordTable, RecordTableError,
};
use crate::modules::customer_records::core::record::{Record, RecordKey};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryRecordTable {
    rows: RwLock<HashMap<RecordKey, Record>>,
    calls: AtomicU64,
    failures_remaining: AtomicU64,
    is_offline: bool,
    is_read_only: bool,
}

impl InMemoryRecordTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every operation fails while offline.
    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Writes fail while read-only; reads and counts still succeed.
    pub fn toggle_read_only(&mut self) {
        self.is_read_only = !self.is_read_only;
    }

    /// The next `count` port calls fail, then the table serves normally again.
    pub fn fail_next(&mut self, count: u64) {
        *self.failures_remaining.get_mut() = count;
    }

    /// Number of port calls served so far, failed ones included.
    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::Relaxed)
    }

    fn check_online(&self) -> Result<(), RecordTableError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        if self.is_offline {
            return Err(RecordTableError::Unavailable("Record table offline".into()));
        }
        if self
            .failures_remaining
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |left| left.checked_sub(1))
            .is_ok()
        {
            return Err(RecordTableError::Unavailable("Record table timed out".into()));
        }
        Ok(())
    }

    fn check_writable(&self) -> Result<(), RecordTableError> {
        self.check_online()?;
        if self.is_read_only {
            return Err(RecordTableError::Backend("Record table is read-only".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl RecordTable for InMemoryRecordTable {
    async fn put_item(&self, record: Record) -> Result<(), RecordTableError> {
        self.check_writable()?;
        self.rows.write().await.insert(record.key(), record);
        Ok(())
    }

    async fn delete_item(
        &self,
        customer_id: &str,
        record_id: &str,
    ) -> Result<(), RecordTableError> {
        self.check_writable()?;
        self.rows
            .write()
            .await
            .remove(&(customer_id.to_string(), record_id.to_string()));
        Ok(())
    }

    async fn get_item(
        &self,
        customer_id: &str,
        record_id: &str,
    ) -> Result<Option<Record>, RecordTableError> {
        self.check_online()?;
        Ok(self
            .rows
            .read()
            .await
            .get(&(customer_id.to_string(), record_id.to_string()))
            .cloned())
    }

    async fn item_count(&self) -> Result<u64, RecordTableError> {
        self.check_online()?;
        Ok(self.rows.read().await.len() as u64)
    }
}
