use crate::modules::customer_records::adapters::outbound::record_store::RecordStore;
use crate::modules::customer_records::adapters::outbound::record_table::RecordTable;
use crate::modules::customer_records::adapters::outbound::record_table_in_memory::InMemoryRecordTable;
use crate::modules::customer_records::core::process_result::ProcessStatus;
use crate::modules::customer_records::use_cases::delete_record::handler::DeleteRecordHandler;
use crate::modules::customer_records::use_cases::insert_record::handler::InsertRecordHandler;
use crate::modules::customer_records::use_cases::process_change::handler::ChangeDispatcher;
use crate::shared::infrastructure::metrics::Metrics;
use crate::tests::fixtures::requests::change_request::ChangeRequestBuilder;
use chrono::Utc;
use rstest::{fixture, rstest};
use std::sync::Arc;

type BeforeEachReturn = (
    ChangeDispatcher<InMemoryRecordTable>,
    Arc<InMemoryRecordTable>,
    Arc<Metrics>,
);

fn wire(table: InMemoryRecordTable) -> BeforeEachReturn {
    let table = Arc::new(table);
    let metrics = Arc::new(Metrics::new());
    let store = Arc::new(RecordStore::new(table.clone(), metrics.clone()));
    let dispatcher = ChangeDispatcher::new(
        Arc::new(InsertRecordHandler::new(store.clone(), metrics.clone())),
        Arc::new(DeleteRecordHandler::new(store, metrics.clone())),
        metrics.clone(),
    );
    (dispatcher, table, metrics)
}

#[fixture]
fn before_each() -> BeforeEachReturn {
    wire(InMemoryRecordTable::new())
}

#[rstest]
#[tokio::test]
async fn it_should_insert_a_customer_and_store_it_under_id_and_timestamp(
    before_each: BeforeEachReturn,
) {
    let (dispatcher, table, metrics) = before_each;
    let issued_at = Utc::now();

    let result = dispatcher
        .process(
            ChangeRequestBuilder::new()
                .id("cust-1")
                .timestamp("t-1")
                .operation("INSERT")
                .name("Alice")
                .build(),
        )
        .await;

    assert_eq!(result.id, "cust-1");
    assert_eq!(result.operation, "INSERT");
    assert_eq!(result.status, ProcessStatus::Success);

    let stored = table.get_item("cust-1", "t-1").await.unwrap().unwrap();
    assert_eq!(stored.name.as_deref(), Some("Alice"));
    assert!(stored.processed_at >= issued_at);
    let expected_expiry = issued_at.timestamp() + 7 * 86_400;
    let expiry = stored.expiry_time.unwrap();
    assert!((expected_expiry..=expected_expiry + 5).contains(&expiry));

    let snapshot = metrics.snapshot();
    assert_eq!(snapshot.inserts, 1);
    assert_eq!(snapshot.events_received, 1);
    assert_eq!(snapshot.processing_count, 1);
}

#[rstest]
#[tokio::test]
async fn it_should_warn_when_deleting_a_missing_customer(before_each: BeforeEachReturn) {
    let (dispatcher, _, metrics) = before_each;

    let result = dispatcher
        .process(
            ChangeRequestBuilder::new()
                .id("cust-2")
                .timestamp("t-2")
                .operation("DELETE")
                .build(),
        )
        .await;

    assert_eq!(result.status, ProcessStatus::Warning);
    assert_eq!(result.message, "Item not found for deletion");
    let snapshot = metrics.snapshot();
    assert_eq!(snapshot.deletes, 0);
    assert_eq!(snapshot.event_errors, 0);
    assert_eq!(snapshot.store_errors, 0);
}

#[rstest]
#[tokio::test]
async fn it_should_delete_a_previously_inserted_customer(before_each: BeforeEachReturn) {
    let (dispatcher, table, metrics) = before_each;
    let request = ChangeRequestBuilder::new().id("cust-3").timestamp("t-3");

    dispatcher
        .process(request.clone().operation("INSERT").build())
        .await;
    let result = dispatcher.process(request.operation("DELETE").build()).await;

    assert_eq!(result.status, ProcessStatus::Success);
    assert_eq!(result.message, "Data deleted successfully");
    assert!(table.get_item("cust-3", "t-3").await.unwrap().is_none());
    assert_eq!(metrics.snapshot().deletes, 1);
}

#[rstest]
#[tokio::test]
async fn it_should_reject_an_unknown_operation_without_touching_the_store(
    before_each: BeforeEachReturn,
) {
    let (dispatcher, table, metrics) = before_each;

    let result = dispatcher
        .process(ChangeRequestBuilder::new().operation("ROTATE").build())
        .await;

    assert_eq!(result.status, ProcessStatus::Error);
    assert_eq!(result.message, "Unknown operation");
    assert_eq!(table.calls(), 0);
    let snapshot = metrics.snapshot();
    assert_eq!(snapshot.event_errors, 1);
    assert_eq!(snapshot.inserts, 0);
    assert_eq!(snapshot.deletes, 0);
}

#[rstest]
#[tokio::test]
async fn it_should_report_a_store_failure_as_an_error_result() {
    let mut table = InMemoryRecordTable::new();
    table.toggle_read_only();
    let (dispatcher, _, metrics) = wire(table);

    let result = dispatcher
        .process(ChangeRequestBuilder::new().operation("INSERT").build())
        .await;

    assert_eq!(result.status, ProcessStatus::Error);
    assert_eq!(result.message, "Error: backend error: Record table is read-only");
    let snapshot = metrics.snapshot();
    assert_eq!(snapshot.inserts, 0);
    assert!(snapshot.store_errors >= 1);
    assert_eq!(snapshot.event_errors, 2);
}

#[rstest]
#[tokio::test]
async fn it_should_overwrite_a_record_inserted_twice(before_each: BeforeEachReturn) {
    let (dispatcher, table, _) = before_each;
    let request = ChangeRequestBuilder::new().id("cust-4").timestamp("t-4");

    dispatcher
        .process(request.clone().operation("INSERT").name("First").build())
        .await;
    dispatcher
        .process(request.operation("insert").name("Second").phone("555-0199").build())
        .await;

    let stored = table.get_item("cust-4", "t-4").await.unwrap().unwrap();
    assert_eq!(stored.name.as_deref(), Some("Second"));
    assert_eq!(stored.phone.as_deref(), Some("555-0199"));
    assert_eq!(stored.operation, "insert");
    assert_eq!(table.item_count().await.unwrap(), 1);
}
