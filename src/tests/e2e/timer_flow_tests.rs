use crate::modules::traces::adapters::outbound::trace_store::TraceStore;
use crate::modules::traces::use_cases::accumulate_time::command::AccumulateTime;
use crate::modules::traces::use_cases::create_trace::command::{CreateTrace, CreateTraceInput};
use crate::shared::application::errors::ApplicationError;
use crate::tests::fixtures::state::TestApp;
use crate::tests::fixtures::users::alice_identity;

fn add(time: &str) -> AccumulateTime {
    AccumulateTime::from_input("te-flow", Some(time), None, 1_700_000_500_000).unwrap()
}

#[tokio::test]
async fn accumulates_time_from_creation_until_a_full_day() {
    let test_app = TestApp::new();
    let alice = alice_identity();
    let command = CreateTrace::from_input(
        "te-flow",
        alice.user_id.clone(),
        CreateTraceInput {
            name: Some("Long day".into()),
            trace_time: Some("01:00:00".into()),
            ..Default::default()
        },
        1_700_000_000_000,
    )
    .unwrap();
    test_app.state.create_handler.handle(command).await.unwrap();

    let handler = &test_app.state.accumulate_handler;
    assert_eq!(
        handler.handle(&alice, add("00:30:15")).await.unwrap().to_string(),
        "01:30:15"
    );
    assert_eq!(
        handler.handle(&alice, add("22:29:44")).await.unwrap().to_string(),
        "23:59:59"
    );

    let overflow = handler.handle(&alice, add("00:00:01")).await;
    assert!(matches!(overflow, Err(ApplicationError::Domain(_))));

    let stored = test_app.traces.get("te-flow").await.unwrap();
    assert_eq!(stored.elapsed.to_string(), "23:59:59");
    assert_eq!(stored.version, 2);
    assert_eq!(stored.updated_at, 1_700_000_500_000);
}
