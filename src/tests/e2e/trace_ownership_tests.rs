use crate::modules::traces::use_cases::create_trace::command::{CreateTrace, CreateTraceInput};
use crate::shared::application::errors::ApplicationError;
use crate::shared::core::identity::Identity;
use crate::tests::fixtures::state::TestApp;
use crate::tests::fixtures::users::{alice_identity, bob_identity};

async fn create(test_app: &TestApp, identity: &Identity, trace_id: &str, created_at: i64) {
    let command = CreateTrace::from_input(
        trace_id,
        identity.user_id.clone(),
        CreateTraceInput {
            name: Some(format!("trace {trace_id}")),
            ..Default::default()
        },
        created_at,
    )
    .unwrap();
    test_app.state.create_handler.handle(command).await.unwrap();
}

#[tokio::test]
async fn lists_traces_of_the_caller_only() {
    let test_app = TestApp::new();
    let alice = alice_identity();
    let bob = bob_identity();

    create(&test_app, &alice, "te-a2", 2_000).await;
    create(&test_app, &bob, "te-b1", 1_500).await;
    create(&test_app, &alice, "te-a1", 1_000).await;

    let alice_traces = test_app.state.list_handler.list(&alice).await.unwrap();
    let bob_traces = test_app.state.list_handler.list(&bob).await.unwrap();

    assert_eq!(alice_traces.len(), 2);
    assert!(alice_traces.iter().all(|trace| trace.owner_id == alice.user_id));
    assert_eq!(alice_traces[0].trace_id, "te-a1");
    assert_eq!(bob_traces.len(), 1);
    assert_eq!(bob_traces[0].trace_id, "te-b1");
}

#[tokio::test]
async fn deleted_traces_are_gone_for_every_operation() {
    let test_app = TestApp::new();
    let alice = alice_identity();
    create(&test_app, &alice, "te-a1", 1_000).await;

    test_app
        .state
        .delete_handler
        .handle(&alice, "te-a1")
        .await
        .unwrap();

    assert!(matches!(
        test_app.state.list_handler.get(&alice, "te-a1").await,
        Err(ApplicationError::NotFound(_))
    ));
    assert!(matches!(
        test_app.state.delete_handler.handle(&alice, "te-a1").await,
        Err(ApplicationError::NotFound(_))
    ));
    assert!(test_app.state.list_handler.list(&alice).await.unwrap().is_empty());
}

#[tokio::test]
async fn other_users_cannot_delete_a_trace() {
    let test_app = TestApp::new();
    create(&test_app, &alice_identity(), "te-a1", 1_000).await;

    let result = test_app
        .state
        .delete_handler
        .handle(&bob_identity(), "te-a1")
        .await;

    assert!(matches!(result, Err(ApplicationError::NotFound(_))));
    assert_eq!(
        test_app
            .state
            .list_handler
            .get(&alice_identity(), "te-a1")
            .await
            .unwrap()
            .trace_id,
        "te-a1"
    );
}
