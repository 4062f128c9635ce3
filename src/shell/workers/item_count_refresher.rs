// Background worker that keeps the record count gauge current.
//
// Purpose
// - Refresh occupancy independently of request traffic.
//
// Responsibilities
// - Each cycle: query the record count, set the gauge, then sleep the interval.
// - A failed cycle is logged and the loop carries on; one cycle never affects the next.

use crate::modules::customer_records::adapters::outbound::record_store::RecordStore;
use crate::modules::customer_records::adapters::outbound::record_table::{
    RecordTable, RecordTableError,
};
use crate::shared::infrastructure::metrics::Metrics;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

pub const DEFAULT_ITEM_COUNT_REFRESH_INTERVAL: Duration = Duration::from_secs(30);

pub struct ItemCountRefresher<TTable>
where
    TTable: RecordTable + 'static,
{
    table_name: String,
    store: Arc<RecordStore<TTable>>,
    metrics: Arc<Metrics>,
    interval: Duration,
}

impl<TTable> ItemCountRefresher<TTable>
where
    TTable: RecordTable + 'static,
{
    pub fn new(
        table_name: impl Into<String>,
        store: Arc<RecordStore<TTable>>,
        metrics: Arc<Metrics>,
    ) -> Self {
        Self {
            table_name: table_name.into(),
            store,
            metrics,
            interval: DEFAULT_ITEM_COUNT_REFRESH_INTERVAL,
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub async fn refresh_once(&self) -> Result<u64, RecordTableError> {
        let count = self.store.count().await?;
        self.metrics.set_items_count(count);
        Ok(count)
    }

    /// Start the refresh loop. It runs for the lifetime of the runtime.
    pub fn spawn(self) -> JoinHandle<()> {
        info!(
            table = %self.table_name,
            interval_secs = self.interval.as_secs(),
            "Starting item count refresher"
        );
        tokio::spawn(async move {
            loop {
                match self.refresh_once().await {
                    Ok(count) => debug!(table = %self.table_name, count, "Item count refreshed"),
                    Err(error) => {
                        warn!(table = %self.table_name, error = %error, "Failed to update item count")
                    }
                }
                tokio::time::sleep(self.interval).await;
            }
        })
    }
}
