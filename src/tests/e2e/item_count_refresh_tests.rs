use crate::config::Config;
use crate::shell::state::AppState;
use crate::tests::fixtures::requests::change_request::ChangeRequestBuilder;
use rstest::rstest;
use std::time::Duration;

#[rstest]
#[tokio::test(start_paused = true)]
async fn it_should_track_inserts_and_deletes_on_the_next_refresh() {
    let config = Config {
        item_count_refresh_interval: Duration::from_secs(30),
        ..Config::default()
    };
    let (state, refresher) = AppState::in_memory(&config);
    let handle = refresher.spawn();

    tokio::time::sleep(Duration::from_secs(1)).await;
    assert_eq!(state.metrics.snapshot().items_count, 0);

    for i in 0..3 {
        state
            .dispatcher
            .process(
                ChangeRequestBuilder::new()
                    .id(format!("cust-{i}"))
                    .operation("INSERT")
                    .build(),
            )
            .await;
    }
    assert_eq!(state.metrics.snapshot().items_count, 0);

    tokio::time::sleep(Duration::from_secs(30)).await;
    assert_eq!(state.metrics.snapshot().items_count, 3);

    state
        .dispatcher
        .process(
            ChangeRequestBuilder::new()
                .id("cust-0")
                .operation("DELETE")
                .build(),
        )
        .await;

    tokio::time::sleep(Duration::from_secs(30)).await;
    assert_eq!(state.metrics.snapshot().items_count, 2);
    assert!(!handle.is_finished());
    handle.abort();
}
