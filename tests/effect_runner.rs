mod common;

use std::time::Duration;
use steamsum::app::{Action, App, Effect, RequestState};
use steamsum::event::{AppEvent, EventHandler};
use steamsum::runtime::EffectRunner;
use steamsum::{ApiClient, AppId};
use tokio::time::timeout;

const DEBOUNCE: Duration = Duration::from_millis(60);

async fn setup() -> (common::Seen, EffectRunner, EventHandler) {
    let seen = common::Seen::default();
    let base = common::serve(common::fake_backend(seen.clone())).await;
    let client = ApiClient::new(&base, Duration::from_secs(5)).unwrap();
    let handler = EventHandler::new();
    let runner = EffectRunner::new(client, handler.tx.clone(), DEBOUNCE);
    (seen, runner, handler)
}

async fn next_event(handler: &mut EventHandler) -> AppEvent {
    timeout(Duration::from_secs(5), handler.rx.recv())
        .await
        .expect("event within timeout")
        .expect("channel open")
}

#[tokio::test]
async fn rapid_typing_fetches_only_the_settled_text() {
    let (seen, mut runner, mut handler) = setup().await;
    let mut app = App::new(2);

    for c in "hades".chars() {
        let effects = app.dispatch(Action::Insert(c));
        let _ = runner.execute_all(effects);
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    match next_event(&mut handler).await {
        AppEvent::Suggestions { generation, result } => {
            assert_eq!(generation, app.search.generation());
            app.on_suggestions(generation, result);
        }
        other => panic!("unexpected event {:?}", other),
    }

    assert_eq!(*seen.lock().unwrap(), vec!["hades"]);
    let names: Vec<&str> = app.search.suggestions().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Hades", "Hades II"]);
    assert!(app.search.dropdown_visible());
}

#[tokio::test]
async fn short_query_cancels_the_pending_fetch() {
    let (seen, mut runner, mut handler) = setup().await;
    let mut app = App::new(2);

    for action in [Action::Insert('h'), Action::Insert('a'), Action::Backspace] {
        let _ = runner.execute_all(app.dispatch(action));
    }

    tokio::time::sleep(DEBOUNCE * 3).await;
    assert!(handler.rx.try_recv().is_err());
    assert!(seen.lock().unwrap().is_empty());
}

#[tokio::test]
async fn select_and_submit_round_trip() {
    let (_seen, mut runner, mut handler) = setup().await;
    let mut app = App::new(2);

    for c in "portal".chars() {
        let _ = runner.execute_all(app.dispatch(Action::Insert(c)));
    }
    if let AppEvent::Suggestions { generation, result } = next_event(&mut handler).await {
        app.on_suggestions(generation, result);
    }

    let _ = runner.execute_all(app.dispatch(Action::Confirm));
    assert_eq!(app.search.query(), "Portal 2");

    let effects = app.dispatch(Action::Confirm);
    assert!(matches!(effects.as_slice(), [Effect::Summarize { .. }]));
    let _ = runner.execute_all(effects);
    assert!(app.is_loading());

    match next_event(&mut handler).await {
        AppEvent::Summary { seq, result } => app.on_summary(seq, *result),
        other => panic!("unexpected event {:?}", other),
    }

    match app.request() {
        RequestState::Ready(result) => {
            assert_eq!(result.app_id, AppId::from("620"));
            assert_eq!(result.summary.criticized, vec!["Short length"]);
        }
        other => panic!("expected a result, got {:?}", other),
    }
}

#[tokio::test]
async fn quit_stops_execution() {
    let (_seen, mut runner, _handler) = setup().await;
    let flow = runner.execute_all(vec![Effect::Quit, Effect::CancelSuggestions]);
    assert!(flow.is_break());
}
