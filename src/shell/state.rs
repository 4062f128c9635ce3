use crate::config::Config;
use crate::modules::customer_records::adapters::outbound::record_store::RecordStore;
use crate::modules::customer_records::adapters::outbound::record_table_in_memory::InMemoryRecordTable;
use crate::modules::customer_records::use_cases::delete_record::handler::DeleteRecordHandler;
use crate::modules::customer_records::use_cases::insert_record::handler::InsertRecordHandler;
use crate::modules::customer_records::use_cases::process_change::handler::ChangeDispatcher;
use crate::shared::infrastructure::metrics::Metrics;
use crate::shell::workers::item_count_refresher::ItemCountRefresher;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<ChangeDispatcher<InMemoryRecordTable>>,
    pub metrics: Arc<Metrics>,
}

impl AppState {
    pub fn in_memory(config: &Config) -> (Self, ItemCountRefresher<InMemoryRecordTable>) {
        Self::from_table(config, InMemoryRecordTable::new())
    }

    pub fn from_table(
        config: &Config,
        table: InMemoryRecordTable,
    ) -> (Self, ItemCountRefresher<InMemoryRecordTable>) {
        let metrics = Arc::new(Metrics::new());
        let store = Arc::new(
            RecordStore::new(Arc::new(table), metrics.clone()).with_ttl(config.record_ttl),
        );

        let insert_handler = Arc::new(InsertRecordHandler::new(store.clone(), metrics.clone()));
        let delete_handler = Arc::new(DeleteRecordHandler::new(store.clone(), metrics.clone()));
        let dispatcher = Arc::new(ChangeDispatcher::new(
            insert_handler,
            delete_handler,
            metrics.clone(),
        ));

        let refresher = ItemCountRefresher::new(config.table_name.clone(), store, metrics.clone())
            .with_interval(config.item_count_refresh_interval);

        (
            Self {
                dispatcher,
                metrics,
            },
            refresher,
        )
    }
}
