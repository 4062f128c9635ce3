use crate::modules::customer_records::core::record::Record;
use chrono::Utc;

/// Canonical record for tests, without a TTL so the store's default applies.
pub fn make_record(customer_id: &str, record_id: &str) -> Record {
    Record {
        customer_id: customer_id.to_string(),
        record_id: record_id.to_string(),
        operation: "INSERT".to_string(),
        name: Some("Alice Example".to_string()),
        email: Some("alice@example.com".to_string()),
        address: Some("1 Main St, Springfield".to_string()),
        phone: Some("555-0100".to_string()),
        expiry_time: None,
        processed_at: Utc::now(),
    }
}
