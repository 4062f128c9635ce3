// Persisted customer record, addressed by (customer_id, record_id).
//
// Purpose
// - Represent exactly what is written to the record table.
//
// Notes
// - `customer_id` is the partition key and `record_id` the sort key.
// - `expiry_time` is an epoch-seconds TTL. The record store fills it in at write time when absent.
// - `processed_at` is overwritten by the record store on every write.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type RecordKey = (String, String);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub customer_id: String,
    pub record_id: String,
    pub operation: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub expiry_time: Option<i64>,
    pub processed_at: DateTime<Utc>,
}

impl Record {
    pub fn key(&self) -> RecordKey {
        (self.customer_id.clone(), self.record_id.clone())
    }
}
