// Port for the durable keyed table that holds customer records.
//
// Purpose
// - Describe the raw storage capabilities the record store needs, without implementing them.
//
// Boundaries
// - No TTL policy, timestamps or metrics here; the record store layers those on top.
// - A missing key on `get_item` is `Ok(None)`, never an error.

use crate::modules::customer_records::core::record::Record;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecordTableError {
    #[error("record table unavailable: {0}")]
    Unavailable(String),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait RecordTable: Send + Sync {
    async fn put_item(&self, record: Record) -> Result<(), RecordTableError>;
    async fn delete_item(&self, customer_id: &str, record_id: &str)
    -> Result<(), RecordTableError>;
    async fn get_item(
        &self,
        customer_id: &str,
        record_id: &str,
    ) -> Result<Option<Record>, RecordTableError>;
    async fn item_count(&self) -> Result<u64, RecordTableError>;
}
