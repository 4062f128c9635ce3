use crate::modules::customer_records::adapters::outbound::record_table::RecordTableError;
use thiserror::Error;

/// Failure a handler hands back to the dispatcher instead of recovering from it.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Store(#[from] RecordTableError),
}
